use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::kind::ReflectionKind;
use crate::node::{Node, NodeId, SymbolId};

/// The root of a reflection graph and sole owner of its nodes.
///
/// All nodes live in one arena indexed by [`NodeId`]; every other reference
/// in the system is a non-owning id lookup. The arena is append-only for the
/// lifetime of a conversion pass, so ids handed out stay valid until the
/// whole project is dropped.
///
/// Mutation happens through `&mut Project` during conversion and export
/// resolution. After that the project is read-only and can be shared freely;
/// there is no interior mutability anywhere in the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    nodes: Vec<Node>,
    root: NodeId,
    /// Front-end symbol identity to node identity.
    symbol_registry: HashMap<SymbolId, NodeId>,
}

impl Project {
    /// Creates a project whose root node carries the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let root = NodeId::from_index(0);
        Self {
            nodes: vec![Node::new(root, name, ReflectionKind::Project)],
            root,
            symbol_registry: HashMap::default(),
        }
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrows a node by id.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.index())
            .ok_or(GraphError::NodeNotFound { id })
    }

    /// Mutably borrows a node by id.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or(GraphError::NodeNotFound { id })
    }

    /// Number of nodes the arena owns, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true when the arena holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Iterates over every node the arena owns.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Appends a new node owned by `parent`.
    ///
    /// The child is added at the end of the parent's child list; insertion
    /// order is what output order is derived from.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: ReflectionKind,
    ) -> Result<NodeId> {
        // Resolve the parent first so a bad id never allocates.
        self.node(parent)?;

        let id = NodeId::from_index(self.nodes.len());
        let mut node = Node::new(id, name, kind);
        node.parent = Some(parent);
        self.nodes.push(node);

        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Records the front-end symbol a node was converted from.
    ///
    /// Later registrations for the same symbol win, matching converter
    /// behavior where merged declarations re-register.
    pub fn register_symbol(&mut self, symbol: SymbolId, node: NodeId) {
        self.symbol_registry.insert(symbol, node);
    }

    /// Node previously registered for a front-end symbol.
    pub fn node_for_symbol(&self, symbol: SymbolId) -> Option<NodeId> {
        self.symbol_registry.get(&symbol).copied()
    }

    /// Walks parent references upward until a node with no parent remains.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId> {
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            current = self.node(parent)?;
        }
        Ok(current.id)
    }
}
