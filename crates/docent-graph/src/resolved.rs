//! Read-time expansion of wildcard re-exports.
//!
//! A container's wildcard imports are recorded as plain path strings during
//! export resolution. Expansion resolves them lazily: the exported children
//! of every target module are merged behind the container's direct children,
//! transitively, as if they had been declared locally. The graph itself is
//! never mutated; callers receive fresh clones per query.

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::error::{GraphError, Result};
use crate::kind::ReflectionKind;
use crate::node::{Node, NodeId};
use crate::project::Project;

impl Project {
    /// Direct children of a node merged with the exported children of every
    /// module it wildcard-imports, transitively.
    ///
    /// Direct children come first in declared order, then re-exports in
    /// wildcard-import order. Each re-exported entry is a shallow copy with
    /// `is_exported` and `is_export_assignment` forced true, so downstream
    /// consumers treat re-exports uniformly as public assignment-style
    /// exports.
    ///
    /// Nothing is memoized: every call re-walks direct children and wildcard
    /// targets, so repeated queries are idempotent but not free.
    ///
    /// Fails with [`GraphError::ReExportNotFound`] when a wildcard path does
    /// not name a container among the root's direct children, and with
    /// [`GraphError::CircularReExport`] when modules wildcard-import each
    /// other.
    pub fn resolved_children(&self, id: NodeId) -> Result<Vec<Node>> {
        let mut in_progress = HashSet::default();
        self.resolved_children_guarded(id, &mut in_progress)
    }

    fn resolved_children_guarded(
        &self,
        id: NodeId,
        in_progress: &mut HashSet<NodeId>,
    ) -> Result<Vec<Node>> {
        let node = self.node(id)?;
        if !in_progress.insert(id) {
            return Err(GraphError::CircularReExport {
                module: node.original_name.clone(),
            });
        }

        let mut children: Vec<Node> = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            children.push(self.node(child)?.clone());
        }

        if !node.wildcard_imports.is_empty() {
            // Wildcard targets are addressed by original name among the
            // direct children of the project root.
            let root = self.root_of(id)?;
            let namespace = self.root_namespace(root)?;

            for path in &node.wildcard_imports {
                let target = namespace.get(path.as_str()).copied().ok_or_else(|| {
                    GraphError::ReExportNotFound { path: path.clone() }
                })?;

                let expanded = self.resolved_children_guarded(target, in_progress)?;
                children.extend(
                    expanded
                        .into_iter()
                        .filter(|child| child.flags.is_exported)
                        .map(|mut copy| {
                            copy.mark_exported();
                            copy.mark_export_assignment();
                            copy
                        }),
                );
            }
        }

        in_progress.remove(&id);
        Ok(children)
    }

    /// Map from `original_name` to container id over the root's direct
    /// children. This is the namespace wildcard paths resolve against.
    fn root_namespace(&self, root: NodeId) -> Result<HashMap<&str, NodeId>> {
        let root_node = self.node(root)?;
        let mut namespace = HashMap::default();
        for &child in &root_node.children {
            let child_node = self.node(child)?;
            if child_node.is_container() {
                namespace.insert(child_node.original_name.as_str(), child);
            }
        }
        Ok(namespace)
    }

    /// Resolved children restricted to a single kind.
    pub fn children_of_kind(&self, id: NodeId, kind: ReflectionKind) -> Result<Vec<Node>> {
        Ok(self
            .resolved_children(id)?
            .into_iter()
            .filter(|child| child.kind == kind)
            .collect())
    }

    /// Invokes `visitor` once per resolved child, in resolved order.
    ///
    /// This is the child-category visit; signatures and type parameters are
    /// not children and are not visited here.
    pub fn traverse_children<F>(&self, id: NodeId, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Node),
    {
        for child in self.resolved_children(id)? {
            visitor(&child);
        }
        Ok(())
    }
}
