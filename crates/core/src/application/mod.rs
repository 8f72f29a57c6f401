// Application Layer - Parse, order and format job definitions

pub mod constants;
pub mod formatter;
pub mod parser;
pub mod process;
pub mod sorter;

// Re-exports
pub use formatter::format_jobs;
pub use parser::{parse_jobs, parse_line};
pub use process::{process_jobs, process_source, sort_job_lines};
pub use sorter::sort_jobs;
