use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flags::ReflectionFlags;
use crate::group::ReflectionGroup;
use crate::kind::ReflectionKind;

/// Identity of a node within a [`Project`](crate::Project) arena.
///
/// Ids are unique and stable for the lifetime of one conversion pass. They
/// are plain indices; holding one never keeps the node alive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Arena index backing this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Front-end symbol identity, opaque to the graph.
///
/// The registry on [`Project`](crate::Project) maps these back to nodes so
/// the export resolver can find the reflection a declaration produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u64);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sym:{}", self.0)
    }
}

/// Reference to a resolved type attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Display name of the type.
    pub name: String,
    /// Symbol backing the type, when the front end reported one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub symbol: Option<SymbolId>,
}

impl TypeRef {
    /// Creates a type reference with no backing symbol.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: None,
        }
    }
}

/// One entry in the reflection graph: a declaration or container.
///
/// Every node owns an ordered child list; container kinds additionally
/// record wildcard imports and display groups, declaration kinds a resolved
/// type. Clones are shallow field-for-field copies, which is exactly what
/// read-time re-export expansion hands out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Display name, possibly decorated by the converter.
    pub name: String,
    /// Name exactly as declared in source. Wildcard re-export targets are
    /// addressed by this field.
    pub original_name: String,
    pub kind: ReflectionKind,
    pub flags: ReflectionFlags,
    /// Owning parent. Navigational only; ownership lives in the arena.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent: Option<NodeId>,
    /// Owned children in insertion order. Order determines output order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<NodeId>,
    /// Absolute paths of modules whose exports this container re-exports.
    ///
    /// Recorded by the export resolver, resolved lazily at read time.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub wildcard_imports: Vec<String>,
    /// Children bucketed by kind for display. Never authoritative.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub groups: Option<Vec<ReflectionGroup>>,
    /// Resolved type for typed declarations.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub type_ref: Option<TypeRef>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>, kind: ReflectionKind) -> Self {
        let name = name.into();
        Self {
            id,
            original_name: name.clone(),
            name,
            kind,
            flags: ReflectionFlags::default(),
            parent: None,
            children: Vec::new(),
            wildcard_imports: Vec::new(),
            groups: None,
            type_ref: None,
        }
    }

    /// Returns true when the node may record wildcard imports.
    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Marks the node as externally visible.
    pub fn mark_exported(&mut self) {
        self.flags.is_exported = true;
    }

    /// Marks the node as an assignment-style export.
    pub fn mark_export_assignment(&mut self) {
        self.flags.is_export_assignment = true;
    }

    /// Records a wildcard re-export target by absolute path.
    ///
    /// The path is resolved against the project root's namespace at read
    /// time, not here.
    pub fn add_wildcard_import(&mut self, path: impl Into<String>) {
        self.wildcard_imports.push(path.into());
    }
}
