//! Export construct resolution.
//!
//! The front end emits three export shapes; all visibility decisions in the
//! graph flow through them. Assignment exports publish an existing subtree,
//! named exports synthesize re-exported property declarations, and wildcard
//! exports record a pending cross-module reference that read-time expansion
//! resolves later.

use docent_graph::{NodeId, Project, ReflectionKind, TypeRef};

use crate::error::{ResolveError, Result};
use crate::factory::DeclarationFactory;
use crate::frontend::{ExpressionRef, FileId, Frontend};

/// One export construct emitted by the front end.
///
/// The set is closed and matched exactly once at [`ExportResolver::resolve_export`]
/// entry.
#[derive(Debug, Clone)]
pub enum ExportNode {
    /// `export = expression` — at most one per module, publishing the whole
    /// module surface reachable from the expression's type.
    Assignment {
        /// The assigned expression.
        expression: ExpressionRef,
    },
    /// `export { ... }` with explicit bindings.
    Named {
        /// Exported bindings in declaration order.
        bindings: Vec<NamedBinding>,
    },
    /// `export * from "specifier"`.
    Wildcard {
        /// Module specifier text as written.
        specifier: String,
        /// File containing the construct.
        file: FileId,
        /// Whether the construct's syntactic parent is the compilation unit
        /// itself. Anything else is malformed input.
        at_source_file_top_level: bool,
    },
}

/// One binding of an `export { ... }` clause.
#[derive(Debug, Clone)]
pub struct NamedBinding {
    /// Exported name.
    pub name: String,
    /// Expression position of the binding, typed by the front end.
    pub expression: ExpressionRef,
}

impl NamedBinding {
    /// Creates a binding.
    pub fn new(name: impl Into<String>, expression: ExpressionRef) -> Self {
        Self {
            name: name.into(),
            expression,
        }
    }
}

/// Applies export constructs to a reflection graph.
///
/// Runs as a single pass after ordinary conversion has populated the graph
/// and registered front-end symbols, and before anything reads visibility
/// flags. Mutation is limited to flags and synthesized declarations.
pub struct ExportResolver<'f, F, D> {
    frontend: &'f F,
    factory: D,
}

impl<'f, F: Frontend, D: DeclarationFactory> ExportResolver<'f, F, D> {
    /// Creates a resolver over the given front end and declaration factory.
    pub fn new(frontend: &'f F, factory: D) -> Self {
        Self { frontend, factory }
    }

    /// Resolves one export construct against `scope`.
    ///
    /// Returns the scope unchanged, the conventional result for threading
    /// traversal context through converter dispatch.
    pub fn resolve_export(
        &mut self,
        project: &mut Project,
        scope: NodeId,
        export: &ExportNode,
    ) -> Result<NodeId> {
        match export {
            ExportNode::Assignment { expression } => {
                self.resolve_assignment(project, scope, *expression)
            }
            ExportNode::Named { bindings } => self.resolve_named(project, scope, bindings),
            ExportNode::Wildcard {
                specifier,
                file,
                at_source_file_top_level,
            } => self.resolve_wildcard(project, scope, specifier, *file, *at_source_file_top_level),
        }
    }

    /// `export = expression`: publish every declaration site of the
    /// expression's type symbol, subtree included.
    fn resolve_assignment(
        &mut self,
        project: &mut Project,
        scope: NodeId,
        expression: ExpressionRef,
    ) -> Result<NodeId> {
        let Some(info) = self.frontend.type_of(expression) else {
            tracing::debug!("assignment export expression has no resolvable type");
            return Ok(scope);
        };
        let Some(symbol) = info.symbol else {
            tracing::debug!(ty = %info.name, "assignment export type has no symbol");
            return Ok(scope);
        };

        for declaration in self.frontend.declarations_of(symbol) {
            let Some(declaration_symbol) = self.frontend.symbol_of(declaration) else {
                continue;
            };
            let Some(node) = project.node_for_symbol(declaration_symbol) else {
                tracing::debug!(symbol = %declaration_symbol, "no reflection registered for symbol");
                continue;
            };

            project.node_mut(node)?.mark_export_assignment();
            mark_exported(project, node)?;
        }

        Ok(scope)
    }

    /// `export { ... }`: synthesize a property declaration per resolvable
    /// binding on the exporting container.
    fn resolve_named(
        &mut self,
        project: &mut Project,
        scope: NodeId,
        bindings: &[NamedBinding],
    ) -> Result<NodeId> {
        for binding in bindings {
            let Some(info) = self.frontend.type_of(binding.expression) else {
                tracing::debug!(binding = %binding.name, "named export binding has no resolvable type");
                continue;
            };

            let declaration = self.factory.create_declaration(
                project,
                scope,
                ReflectionKind::Property,
                &binding.name,
            )?;
            project.node_mut(declaration)?.type_ref = Some(TypeRef {
                name: info.name,
                symbol: info.symbol,
            });
            mark_exported(project, declaration)?;
        }

        Ok(scope)
    }

    /// `export * from "specifier"`: record the resolved path for read-time
    /// expansion.
    fn resolve_wildcard(
        &mut self,
        project: &mut Project,
        scope: NodeId,
        specifier: &str,
        file: FileId,
        at_source_file_top_level: bool,
    ) -> Result<NodeId> {
        if !at_source_file_top_level {
            return Err(ResolveError::WildcardOutsideSourceFile {
                specifier: specifier.to_string(),
            });
        }

        let path = self
            .frontend
            .resolved_module_path(file, specifier)
            .ok_or_else(|| ResolveError::UnresolvedModulePath {
                specifier: specifier.to_string(),
            })?;

        let scope_node = project.node_mut(scope)?;
        if scope_node.is_container() {
            tracing::debug!(%path, "recording wildcard re-export");
            scope_node.add_wildcard_import(path);
        }

        Ok(scope)
    }
}

/// Sets the exported flag on `node` and every node it transitively owns.
///
/// Explicit depth-first walk over the owned child lists; visit order does
/// not matter, only that every descendant is reached exactly once.
fn mark_exported(project: &mut Project, node: NodeId) -> Result<()> {
    let mut pending = vec![node];
    while let Some(current) = pending.pop() {
        let current_node = project.node_mut(current)?;
        current_node.mark_exported();
        pending.extend(current_node.children.iter().copied());
    }
    Ok(())
}
