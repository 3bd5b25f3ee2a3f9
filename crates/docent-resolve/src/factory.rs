//! Declaration synthesis injected into the export resolver.

use docent_graph::{NodeId, Project, ReflectionKind, Result};

/// Builds ordinary declaration nodes on behalf of the resolver.
///
/// Declaration construction belongs to the conversion subsystem; the
/// resolver only needs this one capability when it synthesizes re-exported
/// bindings, so the dependency is injected instead of reaching back into
/// conversion.
pub trait DeclarationFactory {
    /// Creates a declaration of `kind` named `name`, owned by `scope`.
    fn create_declaration(
        &mut self,
        project: &mut Project,
        scope: NodeId,
        kind: ReflectionKind,
        name: &str,
    ) -> Result<NodeId>;
}

/// Factory that appends plain declarations directly to the arena.
///
/// Sufficient whenever no converter-side bookkeeping (comments, sources,
/// signatures) needs to ride along with the synthesized node.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicDeclarationFactory;

impl DeclarationFactory for BasicDeclarationFactory {
    fn create_declaration(
        &mut self,
        project: &mut Project,
        scope: NodeId,
        kind: ReflectionKind,
        name: &str,
    ) -> Result<NodeId> {
        project.add_child(scope, name, kind)
    }
}
