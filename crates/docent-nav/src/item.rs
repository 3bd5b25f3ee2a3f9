use serde::{Deserialize, Serialize};

use docent_graph::{Node, NodeId};

/// One entry of a rendered navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Display title, taken from the node's display name.
    pub title: String,
    /// Node the entry links to. `None` only for the synthetic root item.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<NodeId>,
    /// The entry lies on the path from the tree root to the current page.
    pub is_in_path: bool,
    /// The entry is the current page itself.
    pub is_current: bool,
    /// Child entries, in resolved-children order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
    /// Untitled root placeholder the builder fills in.
    pub fn root() -> Self {
        Self {
            title: String::new(),
            target: None,
            is_in_path: false,
            is_current: false,
            children: Vec::new(),
        }
    }

    /// Entry linking to a node.
    pub fn for_node(node: &Node) -> Self {
        Self {
            title: node.name.clone(),
            target: Some(node.id),
            is_in_path: false,
            is_current: false,
            children: Vec::new(),
        }
    }
}
