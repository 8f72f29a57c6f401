// Job Domain Model

use serde::{Deserialize, Serialize};

use crate::domain::error::{JobError, Result};

/// Job name (unique within one invocation, may be empty for blank lines)
pub type JobName = String;

/// A single parsed job definition: a name and at most one dependency.
///
/// Deserialization goes through `JobRecord::new`, so decoded records obey the
/// same rules as parsed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawJobRecord")]
pub struct JobRecord {
    pub name: JobName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<JobName>,
}

/// Unchecked wire form of `JobRecord`
#[derive(Deserialize)]
struct RawJobRecord {
    name: JobName,
    #[serde(default)]
    dependency: Option<JobName>,
}

impl TryFrom<RawJobRecord> for JobRecord {
    type Error = JobError;

    fn try_from(raw: RawJobRecord) -> Result<Self> {
        JobRecord::new(raw.name, raw.dependency)
    }
}

impl JobRecord {
    /// Create a job record, rejecting a dependency on itself
    pub fn new(name: impl Into<JobName>, dependency: Option<JobName>) -> Result<Self> {
        let name = name.into();
        // An empty dependency fragment ("a => ") means no dependency
        let dependency = dependency.filter(|dep| !dep.is_empty());

        if let Some(dep) = &dependency {
            if !name.is_empty() && *dep == name {
                return Err(JobError::SelfDependency { name });
            }
        }

        Ok(Self { name, dependency })
    }

    /// Create a job with no dependency
    pub fn independent(name: impl Into<JobName>) -> Self {
        Self {
            name: name.into(),
            dependency: None,
        }
    }

    /// Sentinel record produced for blank input lines
    pub fn blank() -> Self {
        Self::independent(String::new())
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }

    pub fn dependency(&self) -> Option<&str> {
        self.dependency.as_deref()
    }
}

/// Traversal state of a job name during sorting.
///
/// A name with no recorded state is unvisited. The only legal transitions
/// are `unvisited -> InProgress -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// On the current traversal path, not yet emitted
    InProgress,
    /// Emitted to the output sequence
    Done,
}

impl std::fmt::Display for VisitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisitState::InProgress => write!(f, "IN_PROGRESS"),
            VisitState::Done => write!(f, "DONE"),
        }
    }
}

impl VisitState {
    /// Transition to Done (only valid from InProgress)
    pub fn complete(self, name: &str) -> Result<Self> {
        if self != VisitState::InProgress {
            return Err(JobError::InvalidStateTransition {
                name: name.to_string(),
                from: self.to_string(),
                to: VisitState::Done.to_string(),
            });
        }
        Ok(VisitState::Done)
    }
}
