//! Per-temperature result rows and their CSV file.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};

use crate::error::{IsingError, IsingResult};
use crate::simulation::RunSummary;

pub const HEADER: [&str; 3] = ["Beta", "Average Energy", "Average Magnetization"];

/// One CSV row: beta, energy per site and |m| per site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRecord {
    pub beta: f64,
    pub energy: f64,
    pub magnetization: f64,
}

impl From<&RunSummary> for ResultRecord {
    fn from(s: &RunSummary) -> Self {
        Self {
            beta: s.beta,
            energy: s.energy,
            magnetization: s.abs_magnetization,
        }
    }
}

pub struct ResultWriter {
    wtr: Writer<File>,
    path: PathBuf,
}

impl ResultWriter {
    /// Create the CSV file and write the header row.
    pub fn create(path: impl AsRef<Path>) -> IsingResult<Self> {
        let path = path.as_ref().to_path_buf();
        let wtr = WriterBuilder::new()
            .from_path(&path)
            .map_err(|source| IsingError::Csv { path: path.clone(), source })?;
        let mut out = Self { wtr, path };
        out.write_fields(HEADER.map(String::from))?;
        Ok(out)
    }

    pub fn write(&mut self, record: &ResultRecord) -> IsingResult<()> {
        self.write_fields([
            record.beta.to_string(),
            record.energy.to_string(),
            record.magnetization.to_string(),
        ])
    }

    fn write_fields(&mut self, fields: [String; 3]) -> IsingResult<()> {
        self.wtr
            .write_record(&fields)
            .map_err(|source| IsingError::Csv { path: self.path.clone(), source })
    }

    pub fn finish(mut self) -> IsingResult<()> {
        self.wtr.flush().map_err(|e| IsingError::io(&self.path, e))
    }
}
