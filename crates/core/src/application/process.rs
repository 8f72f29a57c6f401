// Process Jobs Use Case

use crate::application::{format_jobs, parse_jobs, sort_jobs};
use crate::domain::error::Result as JobResult;
use crate::domain::JobRecord;
use crate::error::Result;
use crate::port::JobSource;
use tracing::{info, warn};

/// Parse and order job lines, keeping the structured error
pub fn sort_job_lines<S: AsRef<str>>(lines: &[S]) -> JobResult<Vec<JobRecord>> {
    let jobs = parse_jobs(lines)?;
    sort_jobs(&jobs)
}

/// Sort job lines and render the result as text
///
/// Never fails: a parse or ordering error is returned as its message in
/// place of the job string.
///
/// # Example
/// ```
/// assert_eq!(jobsort::process_jobs(&["a => ", "b => c", "c => "]), "acb");
/// assert_eq!(
///     jobsort::process_jobs(&["c => c"]),
///     "Job c can not have DependencyChar on itself"
/// );
/// ```
pub fn process_jobs<S: AsRef<str>>(lines: &[S]) -> String {
    match sort_job_lines(lines) {
        Ok(sorted) => {
            info!(lines = lines.len(), jobs = sorted.len(), "Jobs sorted");
            format_jobs(&sorted)
        }
        Err(e) => {
            warn!(error = %e, "Job sort failed");
            e.to_string()
        }
    }
}

/// Read every line from `source` and process them
///
/// Only I/O failures of the source are returned as `Err`.
pub fn process_source(source: &mut dyn JobSource) -> Result<String> {
    let lines = source.read_lines()?;
    Ok(process_jobs(&lines))
}
