//! Graph creation error types.

use std::fmt;
use std::io;

use thiserror::Error;

/// One node's materialization failure.
#[derive(Debug)]
pub struct NodeFailure {
    /// Note filename the failing task owned.
    pub name: String,
    /// Handle acquisition or rendering error, unchanged.
    pub error: anyhow::Error,
}

impl fmt::Display for NodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.name, self.error)
    }
}

/// Error during graph creation.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Target notes already exist in the vault. Nothing was written.
    #[error("notes already exist in {vault}: {}", .filenames.join(", "))]
    Conflicts {
        filenames: Vec<String>,
        vault: String,
    },

    /// The vault could not be read during the conflict pre-pass.
    /// Distinct from a genuine conflict; nothing was written.
    #[error("vault access failed while checking `{name}`")]
    Store {
        name: String,
        #[source]
        source: io::Error,
    },

    /// One or more materialization tasks failed. Other notes may already
    /// have been written; there is no rollback.
    #[error("failed to write {} note(s): {}", .failures.len(), list_failures(.failures))]
    Materialize { failures: Vec<NodeFailure> },
}

impl GraphError {
    /// Whether the run is known to have written nothing.
    ///
    /// Lets callers pick between a clean retry (safe) and manual cleanup
    /// of a partially written vault.
    pub fn nothing_written(&self) -> bool {
        !matches!(self, GraphError::Materialize { .. })
    }
}

fn list_failures(failures: &[NodeFailure]) -> String {
    failures
        .iter()
        .map(NodeFailure::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicts_message_lists_all_names() {
        let err = GraphError::Conflicts {
            filenames: vec!["a-b.md".to_string(), "c-d.md".to_string()],
            vault: "/vault".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("a-b.md"));
        assert!(msg.contains("c-d.md"));
        assert!(msg.contains("/vault"));
    }

    #[test]
    fn test_nothing_written_discriminator() {
        let conflicts = GraphError::Conflicts {
            filenames: vec![],
            vault: String::new(),
        };
        let store = GraphError::Store {
            name: "x.md".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let materialize = GraphError::Materialize {
            failures: vec![NodeFailure {
                name: "x.md".to_string(),
                error: anyhow::anyhow!("render failed"),
            }],
        };

        assert!(conflicts.nothing_written());
        assert!(store.nothing_written());
        assert!(!materialize.nothing_written());
    }
}
