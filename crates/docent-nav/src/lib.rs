//! # docent-nav
//!
//! Size-bounded navigation trees over the reflection graph.
//!
//! Given the node a page is being rendered for, [`build_toc`] produces a
//! tree of [`NavigationItem`] entries rooted at the nearest enclosing
//! module, expanding re-exports the same way the graph's own
//! `resolved_children` does and collapsing oversized containers down to the
//! branch that leads to the current page.
//!
//! Rendering the tree (links, templating, HTML) is the consumer's concern.

pub mod item;
pub mod toc;

pub use item::NavigationItem;
pub use toc::build_toc;
