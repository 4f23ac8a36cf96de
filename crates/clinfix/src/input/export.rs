//! Export datasets as delimited text.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ClinfixError, Result};

use super::source::Dataset;

impl Dataset {
    /// Write the dataset as CSV: header row, UTF-8, no index column.
    ///
    /// Absent cells are written as empty fields.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for row in &self.rows {
            csv_writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        csv_writer.flush().map_err(|e| {
            ClinfixError::Export(format!("Failed to flush CSV for '{}': {}", self.name, e))
        })?;
        Ok(())
    }

    /// Render the dataset as a CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ClinfixError::Export(e.to_string()))
    }

    /// Save the dataset as a CSV file, creating parent directories if needed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use clinfix::Dataset;
    /// # fn example(cleaned: &Dataset) -> clinfix::Result<()> {
    /// cleaned.save_csv("out/cleaned_AE.csv")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_err = |e| ClinfixError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = File::create(path).map_err(io_err)?;
        self.write_csv(BufWriter::new(file))
    }
}
