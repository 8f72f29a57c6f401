//! Result rendering for the jobsort binary

use anyhow::Result;
use clap::ValueEnum;
use jobsort::application::format_jobs;
use jobsort::{JobError, JobRecord};
use serde_json::json;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Concatenated job names ("afcbde")
    Text,
    /// Ordered array of job records
    Json,
    /// Position / job / dependency table
    Table,
}

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "#")]
    position: usize,
    job: String,
    dependency: String,
}

/// Render a successful sort
///
/// Blank records are dropped from the JSON and table views; the text view
/// already renders them as nothing.
pub fn render_sorted(format: OutputFormat, sorted: &[JobRecord]) -> Result<String> {
    let visible = sorted.iter().filter(|job| !job.is_blank());

    let output = match format {
        OutputFormat::Text => format_jobs(sorted),
        OutputFormat::Json => serde_json::to_string_pretty(&visible.collect::<Vec<_>>())?,
        OutputFormat::Table => {
            let rows: Vec<JobRow> = visible
                .enumerate()
                .map(|(i, job)| JobRow {
                    position: i + 1,
                    job: job.name.clone(),
                    dependency: job.dependency().unwrap_or("-").to_string(),
                })
                .collect();
            Table::new(rows).to_string()
        }
    };

    Ok(output)
}

/// Render a sort failure (message only, JSON-wrapped for `--format json`)
pub fn render_error(format: OutputFormat, error: &JobError) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({ "error": error.to_string() }))?,
        OutputFormat::Text | OutputFormat::Table => error.to_string(),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted() -> Vec<JobRecord> {
        jobsort::sort_job_lines(&["a => ", "b => c", "c => "]).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(render_sorted(OutputFormat::Text, &sorted()).unwrap(), "acb");
    }

    #[test]
    fn test_json_output() {
        let output = render_sorted(OutputFormat::Json, &sorted()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!([
                { "name": "a" },
                { "name": "c" },
                { "name": "b", "dependency": "c" }
            ])
        );
    }

    #[test]
    fn test_table_output() {
        let output = render_sorted(OutputFormat::Table, &sorted()).unwrap();
        assert!(output.contains("dependency"));

        let has_row = output.lines().any(|line| {
            let cells: Vec<&str> = line.split('|').map(str::trim).filter(|c| !c.is_empty()).collect();
            cells == ["3", "b", "c"]
        });
        assert!(has_row, "missing row for b in:\n{}", output);
    }

    #[test]
    fn test_blank_records_hidden_in_json() {
        let output = render_sorted(OutputFormat::Json, &[JobRecord::blank()]).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_error_output() {
        let err = JobError::CircularDependency;
        assert_eq!(
            render_error(OutputFormat::Text, &err).unwrap(),
            "Jobs can't have circular dependencies"
        );

        let value: serde_json::Value =
            serde_json::from_str(&render_error(OutputFormat::Json, &err).unwrap()).unwrap();
        assert_eq!(value["error"], "Jobs can't have circular dependencies");
    }
}
