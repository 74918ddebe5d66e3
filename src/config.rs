//! Configuration for route table analysis runs.
//!
//! The tool takes no command-line flags: inputs are discovered in, and
//! outputs written to, the working directory. The configuration struct
//! exists so library callers and tests can point a run at other
//! directories.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, Result};

/// Directories used by an analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for route-information workbooks
    pub input_dir: PathBuf,

    /// Directory the analysis workbooks are written to
    pub output_dir: PathBuf,
}

impl Config {
    /// Create a configuration with explicit input and output directories
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Create a configuration reading from and writing to one directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            input_dir: dir.clone(),
            output_dir: dir,
        }
    }

    /// Validate that the configured directories exist
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Input directory does not exist: {}",
                self.input_dir.display()
            )));
        }
        if !self.output_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Output directory does not exist: {}",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::in_dir(PathBuf::from("."))
    }
}
