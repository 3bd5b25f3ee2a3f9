use thiserror::Error;

use crate::node::NodeId;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error variants for reflection-graph construction and queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A node id did not resolve within the project's arena.
    #[error("node {id} not found in project arena")]
    NodeNotFound {
        /// The id that failed to resolve.
        id: NodeId,
    },

    /// A wildcard import named a module that is not a direct child of the
    /// project root.
    #[error("re-exported module not found: '{path}'")]
    ReExportNotFound {
        /// Absolute path recorded by the wildcard import.
        path: String,
    },

    /// Wildcard re-exports form a cycle.
    #[error("circular re-export through module '{module}'")]
    CircularReExport {
        /// Name of the module revisited while its own expansion was still
        /// in progress.
        module: String,
    },
}
