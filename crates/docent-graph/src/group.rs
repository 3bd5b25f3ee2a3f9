//! Display grouping of container children by kind.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kind::ReflectionKind;
use crate::node::NodeId;
use crate::project::Project;

/// Resolved children of one kind, bucketed for display.
///
/// Groups are a rendering convenience; the owning container's child list
/// remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionGroup {
    /// Human-readable plural title, e.g. "Functions".
    pub title: String,
    /// Kind shared by every member of the group.
    pub kind: ReflectionKind,
    /// Member ids in resolved-children order.
    pub children: Vec<NodeId>,
}

impl Project {
    /// Buckets a container's resolved children by kind and stores the result
    /// on the container.
    ///
    /// Buckets appear in first-seen order so group order tracks declaration
    /// order rather than kind ordinals.
    pub fn build_groups(&mut self, container: NodeId) -> Result<()> {
        let mut buckets: IndexMap<ReflectionKind, Vec<NodeId>> = IndexMap::new();
        for child in self.resolved_children(container)? {
            buckets.entry(child.kind).or_default().push(child.id);
        }

        let groups = buckets
            .into_iter()
            .map(|(kind, children)| ReflectionGroup {
                title: kind.group_title().to_string(),
                kind,
                children,
            })
            .collect();

        self.node_mut(container)?.groups = Some(groups);
        Ok(())
    }
}
