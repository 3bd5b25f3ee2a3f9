use thiserror::Error;

use docent_graph::GraphError;

/// Result type alias for export resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Error variants for the export resolution pass.
///
/// Only malformed or unresolvable compilation units are fatal; exports whose
/// types or symbols simply cannot be resolved are handled as silent no-ops
/// at the call sites.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// `export *` may only appear directly inside a compilation unit.
    #[error("wildcard export of '{specifier}' is not at the top level of a source file")]
    WildcardOutsideSourceFile {
        /// Module specifier as written in source.
        specifier: String,
    },

    /// The front end has no resolved path for a wildcard module specifier.
    #[error("could not resolve module path for '{specifier}'")]
    UnresolvedModulePath {
        /// Module specifier as written in source.
        specifier: String,
    },

    /// Underlying graph failure.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
