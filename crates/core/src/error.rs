// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Job(#[from] crate::domain::JobError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobError;

    #[test]
    fn test_job_error_message_passes_through() {
        let err: AppError = JobError::CircularDependency.into();
        assert_eq!(err.to_string(), "Jobs can't have circular dependencies");
    }

    #[test]
    fn test_io_error_is_prefixed() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert_eq!(err.to_string(), "IO error: boom");
    }
}
