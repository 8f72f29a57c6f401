// Job line parser

use crate::application::constants::JOB_SEPARATOR;
use crate::domain::error::{JobError, Result};
use crate::domain::JobRecord;
use tracing::debug;

/// Parse one raw job line into a `JobRecord`
///
/// Grammar: `<name> "=>" [<dependency>]`, whitespace around tokens ignored.
///
/// - blank line -> empty sentinel record
/// - `"a"` or `"a =>"` -> job `a` without dependency
/// - `"b => c"` -> job `b` depending on `c`
/// - `"c => c"` -> `JobError::SelfDependency`
/// - more fragments (`"a => b => c"`) or none (`"=>"`) -> `JobError::MalformedInput`
pub fn parse_line(line: &str) -> Result<JobRecord> {
    if line.trim().is_empty() {
        return Ok(JobRecord::blank());
    }

    // Empty fragments are dropped before trimming, so " => b" keeps its blank name
    let fragments: Vec<&str> = line
        .split(JOB_SEPARATOR)
        .filter(|fragment| !fragment.is_empty())
        .map(str::trim)
        .collect();

    let record = match fragments.as_slice() {
        [name] => JobRecord::independent(*name),
        [name, dependency] => JobRecord::new(*name, Some((*dependency).to_string()))?,
        _ => {
            return Err(JobError::MalformedInput {
                line: line.to_string(),
                fragments: fragments.len(),
            })
        }
    };

    debug!(job = %record.name, dependency = ?record.dependency, "Parsed job line");
    Ok(record)
}

/// Parse every line in order, stopping at the first error
pub fn parse_jobs<S: AsRef<str>>(lines: &[S]) -> Result<Vec<JobRecord>> {
    lines.iter().map(|line| parse_line(line.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_sentinel() {
        assert_eq!(parse_line("").unwrap(), JobRecord::blank());
        assert_eq!(parse_line("   \t").unwrap(), JobRecord::blank());
    }

    #[test]
    fn test_job_without_dependency() {
        assert_eq!(parse_line("a =>").unwrap(), JobRecord::independent("a"));
        assert_eq!(parse_line("a => ").unwrap(), JobRecord::independent("a"));
        assert_eq!(parse_line("  a  ").unwrap(), JobRecord::independent("a"));
    }

    #[test]
    fn test_job_with_dependency() {
        let job = parse_line(" b =>   c ").unwrap();
        assert_eq!(job.name, "b");
        assert_eq!(job.dependency(), Some("c"));

        let job = parse_line("b=>c").unwrap();
        assert_eq!(job.dependency(), Some("c"));
    }

    #[test]
    fn test_multi_character_names() {
        let job = parse_line("build => fetch-sources").unwrap();
        assert_eq!(job.name, "build");
        assert_eq!(job.dependency(), Some("fetch-sources"));
    }

    #[test]
    fn test_self_dependency() {
        let err = parse_line("c => c").unwrap_err();
        assert_eq!(err.to_string(), "Job c can not have DependencyChar on itself");
    }

    #[test]
    fn test_too_many_fragments() {
        let err = parse_line("a => b => c").unwrap_err();
        assert_eq!(
            err,
            JobError::MalformedInput {
                line: "a => b => c".to_string(),
                fragments: 3,
            }
        );
    }

    #[test]
    fn test_blank_name_keeps_dependency() {
        let job = parse_line(" => b").unwrap();
        assert!(job.is_blank());
        assert_eq!(job.dependency(), Some("b"));
    }

    #[test]
    fn test_whitespace_around_separator_is_blank() {
        // Both fragments trim to empty: no name, no dependency, not a self-dependency
        assert_eq!(parse_line("  =>  ").unwrap(), JobRecord::blank());
    }

    #[test]
    fn test_separator_only_is_malformed() {
        let err = parse_line("=>").unwrap_err();
        assert!(matches!(err, JobError::MalformedInput { fragments: 0, .. }));
    }

    #[test]
    fn test_parse_jobs_stops_at_first_error() {
        let err = parse_jobs(&["a =>", "b => b", "c => c"]).unwrap_err();
        assert_eq!(err, JobError::SelfDependency { name: "b".into() });
    }
}
