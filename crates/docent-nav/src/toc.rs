//! Table-of-contents construction for a rendered page.
//!
//! The tree is rooted at the nearest enclosing module (or the project root)
//! and would grow without bound on very large containers, so containers past
//! a fixed size expand only the single branch leading to the current page.

use docent_graph::{NodeId, Project, ReflectionKind, Result};

use crate::item::NavigationItem;

/// Containers with more resolved children than this collapse to the single
/// branch leading to the current page.
///
/// The value bounds navigation size for machine-generated modules with
/// hundreds of members while leaving hand-written modules fully expanded.
const COLLAPSE_CHILD_LIMIT: usize = 40;

/// Builds the navigation tree for the page rendering `current`.
///
/// The returned item is an untitled root whose children are the entries of
/// the nearest enclosing module (or the project root when `current` sits at
/// the top level). Entries on the ancestor chain of `current` are marked
/// `is_in_path`, and the entry of `current` itself `is_current`.
pub fn build_toc(project: &Project, current: NodeId) -> Result<NavigationItem> {
    // Ancestor chain from the module boundary (exclusive) down to the
    // current page.
    let mut trail: Vec<NodeId> = Vec::new();
    let mut model = current;
    loop {
        let node = project.node(model)?;
        if node.kind == ReflectionKind::Project || node.kind.is_module() {
            break;
        }
        trail.insert(0, model);
        match node.parent {
            Some(parent) => model = parent,
            // Detached subtree: the page is its own boundary.
            None => break,
        }
    }

    let mut root = NavigationItem::root();
    build_entries(project, model, &trail, &mut root)?;
    Ok(root)
}

fn build_entries(
    project: &Project,
    model: NodeId,
    trail: &[NodeId],
    parent: &mut NavigationItem,
) -> Result<()> {
    let children = project.resolved_children(model)?;

    // Position after the model on the trail. A model outside the trail
    // expands toward the first trail element.
    let next_on_trail = trail
        .iter()
        .position(|&id| id == model)
        .map_or(0, |index| index + 1);

    if next_on_trail < trail.len() && children.len() > COLLAPSE_CHILD_LIMIT {
        // Too many siblings to materialize: emit only the branch that leads
        // onward to the current page.
        let next = trail[next_on_trail];
        let mut item = NavigationItem::for_node(project.node(next)?);
        item.is_in_path = true;
        item.is_current = false;
        build_entries(project, next, trail, &mut item)?;
        parent.children.push(item);
        return Ok(());
    }

    for child in children {
        // Modules get their own top-level navigation.
        if child.kind.is_module() {
            continue;
        }

        let mut item = NavigationItem::for_node(&child);
        if trail.contains(&child.id) {
            item.is_in_path = true;
            item.is_current = trail.last() == Some(&child.id);
            build_entries(project, child.id, trail, &mut item)?;
        }
        parent.children.push(item);
    }
    Ok(())
}
