//! Output destinations for report lines
//!
//! - Console: passing reports to stdout, failures to stderr
//! - Buffer: captured in memory, for embedding and tests
//!
//! Uses enum dispatch; a sink is always owned by the run context and written
//! under its lock.

use std::io::{self, Write};

/// Which console stream a line belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// One rendered line of a report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLine {
    pub stream: Stream,
    pub text: String,
}

impl ReportLine {
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stdout,
            text: text.into(),
        }
    }

    pub fn stderr(text: impl Into<String>) -> Self {
        Self {
            stream: Stream::Stderr,
            text: text.into(),
        }
    }
}

/// Where report lines end up
#[derive(Debug, Default)]
pub enum OutputSink {
    #[default]
    Console,
    Buffer(Vec<ReportLine>),
}

impl OutputSink {
    pub fn buffer() -> Self {
        OutputSink::Buffer(Vec::new())
    }

    /// Write a block of lines back to back
    pub fn write_block(&mut self, lines: &[ReportLine]) -> io::Result<()> {
        match self {
            OutputSink::Console => {
                let mut stdout = io::stdout().lock();
                let mut stderr = io::stderr().lock();
                for line in lines {
                    match line.stream {
                        Stream::Stdout => writeln!(stdout, "{}", line.text)?,
                        Stream::Stderr => writeln!(stderr, "{}", line.text)?,
                    }
                }
                stdout.flush()?;
                stderr.flush()
            }
            OutputSink::Buffer(captured) => {
                captured.extend_from_slice(lines);
                Ok(())
            }
        }
    }

    /// Lines captured so far (always empty for the console)
    pub fn captured(&self) -> &[ReportLine] {
        match self {
            OutputSink::Console => &[],
            OutputSink::Buffer(captured) => captured,
        }
    }

    /// Drain captured lines
    pub fn take_captured(&mut self) -> Vec<ReportLine> {
        match self {
            OutputSink::Console => Vec::new(),
            OutputSink::Buffer(captured) => std::mem::take(captured),
        }
    }
}
