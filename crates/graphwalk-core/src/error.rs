//! Error types for graphwalk-core.

use thiserror::Error;

/// Graph error types.
///
/// Every failure is a distinct variant so callers can branch on the kind
/// (for example to retry a rejected cyclic insertion with a different edge)
/// instead of matching on message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A directed insertion would make the graph cyclic.
    ///
    /// The graph is left untouched when this is returned.
    #[error("Loop in DAG: adding edge {from} -> {to} would create a cycle")]
    LoopInDag {
        /// Source node of the rejected edge.
        from: String,
        /// Target node of the rejected edge.
        to: String,
    },

    /// Queried node is not part of the graph.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Both endpoints exist but no route connects them.
    #[error("No path from {from} to {to}")]
    NoPath {
        /// Start of the query.
        from: String,
        /// Unreachable end of the query.
        to: String,
    },

    /// Topological ordering requested on a graph that contains a cycle.
    #[error("Graph contains a cycle, no topological order exists")]
    CycleDetected,

    /// Tied shortest-path enumeration produced more paths than allowed.
    #[error("Shortest path enumeration exceeded the limit of {0} paths")]
    PathLimitExceeded(usize),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if this error rejected a cycle-creating insertion.
    #[must_use]
    pub fn is_loop_in_dag(&self) -> bool {
        matches!(self, Self::LoopInDag { .. })
    }

    /// Returns true if this error names an unknown node.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_))
    }

    /// Returns true if this error reports an unreachable target.
    #[must_use]
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath { .. })
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LoopInDag {
            from: "2".to_string(),
            to: "5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Loop in DAG: adding edge 2 -> 5 would create a cycle"
        );

        let err = Error::NodeNotFound("z".to_string());
        assert_eq!(err.to_string(), "Node not found: z");
    }

    #[test]
    fn test_error_kind_helpers() {
        let loop_err = Error::LoopInDag {
            from: "a".to_string(),
            to: "a".to_string(),
        };
        assert!(loop_err.is_loop_in_dag());
        assert!(!loop_err.is_not_found());

        let no_path = Error::NoPath {
            from: "a".to_string(),
            to: "b".to_string(),
        };
        assert!(no_path.is_no_path());
        assert!(!no_path.is_loop_in_dag());

        assert!(Error::NodeNotFound("x".to_string()).is_not_found());
        assert!(!Error::CycleDetected.is_no_path());
    }
}
