use serde::{Deserialize, Serialize};

/// Independent boolean attributes attached to every node.
///
/// Flags are only written during export resolution; read-time expansion
/// clones nodes and forces flags on the clones, never on the originals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionFlags {
    /// The node is part of its module's public surface.
    pub is_exported: bool,
    /// The node is (or is treated as) an assignment-style export
    /// (`export = ...`), which makes the whole subtree public.
    pub is_export_assignment: bool,
}
