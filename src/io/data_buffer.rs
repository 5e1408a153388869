//! Buffered column writer for time-series data.
//!
//! A [`DataBufferWriter`] accumulates rows of named columns in memory and
//! appends them to a delimited text file on [`flush`](DataBufferWriter::flush).
//! The target directory is created on demand. Typical use is recording
//! probe signals over the course of a simulation without paying a file
//! write per step.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GridBoxError;

/// Buffered writer of delimited text columns.
#[derive(Debug)]
pub struct DataBufferWriter {
    path: PathBuf,
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
    delimiter: char,
    header_written: bool,
}

impl DataBufferWriter {
    /// Creates a writer targeting `<directory>/<file_name>`, creating the
    /// directory if needed. The header line is written on the first flush.
    pub fn create(
        directory: impl AsRef<Path>,
        file_name: &str,
        columns: Vec<String>,
    ) -> Result<Self, GridBoxError> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory)?;
        let path = directory.join(file_name);
        log::debug!("data buffer targeting {}", path.display());
        Ok(Self {
            path,
            columns,
            rows: Vec::new(),
            delimiter: '\t',
            header_written: false,
        })
    }

    /// Uses `delimiter` instead of the default tab.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows currently buffered in memory.
    pub fn buffered_rows(&self) -> usize {
        self.rows.len()
    }

    /// Target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Buffers one row; the value count must match the column count.
    pub fn push_row(&mut self, row: &[f64]) -> Result<(), GridBoxError> {
        if row.len() != self.columns.len() {
            return Err(GridBoxError::DataLengthMismatch {
                name: self.path.display().to_string(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row.to_vec());
        Ok(())
    }

    /// Appends all buffered rows to the target file and clears the buffer.
    /// The header line is emitted before the first data row ever written.
    pub fn flush(&mut self) -> Result<(), GridBoxError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if !self.header_written {
            let mut header = String::from("#");
            for name in &self.columns {
                header.push(self.delimiter);
                header.push_str(name);
            }
            writeln!(file, "{header}")?;
            self.header_written = true;
        }
        let flushed = self.rows.len();
        for row in self.rows.drain(..) {
            let mut line = String::new();
            for (idx, value) in row.iter().enumerate() {
                if idx > 0 {
                    line.push(self.delimiter);
                }
                line.push_str(&value.to_string());
            }
            writeln!(file, "{line}")?;
        }
        log::trace!("flushed {flushed} rows to {}", self.path.display());
        Ok(())
    }
}
