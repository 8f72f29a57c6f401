// Port Layer - Interfaces for external collaborators

pub mod job_source;

// Re-exports
pub use job_source::{JobSource, ReaderJobSource};
