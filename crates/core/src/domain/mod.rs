// Domain Layer - Pure job model and errors

pub mod error;
pub mod job;

// Re-exports
pub use error::JobError;
pub use job::{JobName, JobRecord, VisitState};
