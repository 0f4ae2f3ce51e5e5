// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-run extraction logging.
//!
//! A [`RunLogger`] is constructed for one extraction run and owns the log
//! file handle for that run. Every line is mirrored to the console and to a
//! timestamped log file next to the extracted frames. Dropping or calling
//! [`RunLogger::finish`] flushes and closes the file.

use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Log line timestamp format.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log file name timestamp format.
const FILENAME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Logging context for one extraction run.
pub struct RunLogger {
    file: BufWriter<File>,
    path: PathBuf,
}

impl RunLogger {
    /// Create `extraction_log_<YYYYMMDD_HHMMSS>.log` inside `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created.
    pub fn create(output_dir: &Path) -> std::io::Result<Self> {
        let filename = format!(
            "extraction_log_{}.log",
            Local::now().format(FILENAME_FORMAT)
        );
        let path = output_dir.join(filename);
        let file = BufWriter::new(File::create(&path)?);
        Ok(Self { file, path })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Log an INFO line.
    pub fn info(&mut self, message: &str) {
        self.write_line("INFO", message);
    }

    /// Log an ERROR line.
    pub fn error(&mut self, message: &str) {
        self.write_line("ERROR", message);
    }

    fn write_line(&mut self, level: &str, message: &str) {
        let line = format!(
            "{} - {} - {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            message
        );
        println!("{line}");
        let _ = writeln!(self.file, "{line}");
    }

    /// Flush and close the log, returning its path.
    ///
    /// # Errors
    ///
    /// Returns an error if buffered log lines cannot be written out.
    pub fn finish(mut self) -> std::io::Result<PathBuf> {
        self.file.flush()?;
        Ok(self.path)
    }
}
