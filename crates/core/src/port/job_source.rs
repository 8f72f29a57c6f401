// Job Source Port (console, files, tests)

use crate::application::constants::EXIT_SENTINEL;
use std::io::BufRead;
use tracing::debug;

/// Supplies the raw job lines for one sort invocation
#[cfg_attr(test, mockall::automock)]
pub trait JobSource {
    /// Read all job lines, in order
    fn read_lines(&mut self) -> std::io::Result<Vec<String>>;
}

/// Line reader over any `BufRead` (stdin, files)
///
/// Reads until a line equal to `EXIT` (case-insensitive) or end of input.
/// The sentinel line itself is not returned.
pub struct ReaderJobSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderJobSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> JobSource for ReaderJobSource<R> {
    fn read_lines(&mut self) -> std::io::Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut buf = String::new();

        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                debug!(lines = lines.len(), "End of input reached");
                break;
            }

            let line = buf.trim_end_matches(['\r', '\n']);
            if line.eq_ignore_ascii_case(EXIT_SENTINEL) {
                debug!(lines = lines.len(), "Exit sentinel received");
                break;
            }
            lines.push(line.to_string());
        }

        Ok(lines)
    }
}
