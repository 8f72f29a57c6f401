// Domain Error Types

use thiserror::Error;

/// Errors raised while parsing or ordering job definitions.
///
/// Messages are the user-facing output of the sorter: `process_jobs`
/// returns them verbatim in place of the sorted job string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Job {name} can not have DependencyChar on itself")]
    SelfDependency { name: String },

    #[error("Jobs can't have circular dependencies")]
    CircularDependency,

    #[error("Malformed job definition '{line}': expected '<name> => [dependency]', found {fragments} fragments")]
    MalformedInput { line: String, fragments: usize },

    #[error("Invalid visit state transition for job '{name}': {from} -> {to}")]
    InvalidStateTransition {
        name: String,
        from: String,
        to: String,
    },
}

pub type Result<T> = std::result::Result<T, JobError>;
