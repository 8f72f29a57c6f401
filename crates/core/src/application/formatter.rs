// Output formatting

use crate::domain::JobRecord;

/// Concatenate job names in order, without separators
///
/// Blank sentinel records contribute nothing.
pub fn format_jobs(jobs: &[JobRecord]) -> String {
    jobs.iter().map(|job| job.name.as_str()).collect()
}
