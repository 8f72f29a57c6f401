// Job Sort Core - Domain Logic & Ports
// NO console or filesystem dependencies: input arrives through the JobSource port

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{parse_jobs, process_jobs, process_source, sort_job_lines};
pub use domain::{JobError, JobRecord};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
