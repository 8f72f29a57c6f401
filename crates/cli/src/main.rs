//! Job Sort CLI - reads "a => b" job lines and prints them in dependency order

mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use jobsort::application::constants::EXIT_SENTINEL;
use jobsort::port::{JobSource, ReaderJobSource};
use logging::LogFormat;
use render::OutputFormat;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

const INPUT_PROMPT: &str = "Input your jobs line by line in this format \"a => b\"";
const PROCESSING_BANNER: &str = "Processing jobs, and the output is:";
const EXIT_PROMPT: &str = "Press Enter to exit";

#[derive(Parser, Debug)]
#[command(name = "jobsort")]
#[command(about = "Order jobs so each runs after the job it depends on", long_about = None)]
#[command(version)]
struct Cli {
    /// Read job lines from a file instead of standard input
    #[arg(short, long, env = "JOBSORT_INPUT")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, env = "JOBSORT_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not wait for Enter before exiting
    #[arg(long)]
    no_wait: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log format (logs are written to stderr)
    #[arg(long, env = "JOBSORT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

impl Cli {
    /// Prompts and the final pause only make sense for a person at a terminal
    fn interactive(&self) -> bool {
        self.input.is_none() && io::stdin().is_terminal()
    }
}

fn read_job_lines(cli: &Cli) -> Result<Vec<String>> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open job file {}", path.display()))?;
            ReaderJobSource::new(BufReader::new(file))
                .read_lines()
                .with_context(|| format!("Failed to read job file {}", path.display()))
        }
        None => {
            if cli.interactive() {
                println!(
                    "{} (type {} to finish and process the jobs):",
                    INPUT_PROMPT, EXIT_SENTINEL
                );
            }
            ReaderJobSource::new(io::stdin().lock())
                .read_lines()
                .context("Failed to read jobs from stdin")
        }
    }
}

fn wait_for_enter() -> Result<()> {
    print!("{}", EXIT_PROMPT);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_format)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    info!("jobsort v{} starting", jobsort::VERSION);
    debug!(?cli, "Configuration loaded");

    let lines = read_job_lines(&cli)?;
    info!(lines = lines.len(), "Job lines collected");

    if cli.interactive() {
        println!("{}", PROCESSING_BANNER.cyan().bold());
    }

    let status = match jobsort::sort_job_lines(&lines) {
        Ok(sorted) => {
            println!("{}", render::render_sorted(cli.format, &sorted)?);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = render::render_error(cli.format, &e)?;
            match cli.format {
                OutputFormat::Json => println!("{}", message),
                OutputFormat::Text | OutputFormat::Table => println!("{}", message.red()),
            }
            ExitCode::FAILURE
        }
    };

    if cli.interactive() && !cli.no_wait {
        wait_for_enter()?;
    }

    Ok(status)
}
