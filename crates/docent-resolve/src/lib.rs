//! # docent-resolve
//!
//! Export resolution pass over the reflection graph.
//!
//! Ordinary conversion (out of scope here) fills a
//! [`Project`](docent_graph::Project) with declarations and registers their
//! front-end symbols. This crate then applies the module's export constructs:
//!
//! - **Assignment exports** (`export = expr`) flag an existing subtree as the
//!   module's public surface.
//! - **Named exports** (`export { ... }`) synthesize re-exported property
//!   declarations through an injected [`DeclarationFactory`].
//! - **Wildcard exports** (`export * from "path"`) record the resolved target
//!   path on the enclosing container for lazy read-time expansion.
//!
//! The pass must complete for every source file before anything calls
//! `resolved_children`; afterwards the graph is read-only.

pub mod error;
pub mod export;
pub mod factory;
pub mod frontend;

pub use error::{ResolveError, Result};
pub use export::{ExportNode, ExportResolver, NamedBinding};
pub use factory::{BasicDeclarationFactory, DeclarationFactory};
pub use frontend::{DeclarationRef, ExpressionRef, FileId, Frontend, TypeInfo};
