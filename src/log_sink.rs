//! Append-only text log file.
//!
//! Each entry is a blank line, a `Log Entry :` header with the local time and
//! date, the message, and a dashed separator. Files are created on first use
//! and never truncated.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};

pub const ENTRY_SEPARATOR: &str = "-------------------------------";

/// Render one log entry stamped with `timestamp`.
pub fn format_entry<Tz>(message: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "\nLog Entry : {} {}\n  :\n  :{}\n{}\n",
        timestamp.format("%-I:%M:%S %p"),
        timestamp.format("%A, %B %-d, %Y"),
        message,
        ENTRY_SEPARATOR
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry stamped with the current local time.
    pub fn append(&self, message: &str) -> io::Result<()> {
        self.append_at(message, &Local::now())
    }

    /// Append one entry with an explicit timestamp.
    ///
    /// The file is created if it doesn't exist; the entry is written in a
    /// single call.
    pub fn append_at<Tz>(&self, message: &str, timestamp: &DateTime<Tz>) -> io::Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_entry(message, timestamp).as_bytes())
    }

    /// Read the whole log, line by line.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        let file = File::open(&self.path)?;
        BufReader::new(file).lines().collect()
    }
}

/// Append `message` to the log at `path`, creating the file if needed.
pub fn write_log(path: impl AsRef<Path>, message: &str) -> io::Result<()> {
    LogSink::new(path.as_ref()).append(message)
}

/// Print the log at `path` to stdout.
pub fn show_log(path: impl AsRef<Path>) -> io::Result<()> {
    for line in LogSink::new(path.as_ref()).read_lines()? {
        println!("{}", line);
    }
    Ok(())
}
