//! Route-Information Table Analyzer
//!
//! A Rust library for extracting track-section and switch (turnout) data from
//! railway interlocking route-information spreadsheets (进路信息表).
//!
//! This library provides tools for:
//! - Locating the header row dynamically in unstructured spreadsheet grids
//! - Resolving the required switch / track-section / route-type columns by name
//! - Decomposing free-text track and switch cells into structured entries
//! - Matching switches to track sections by shared numeric identifiers
//! - Reversing switch combinations for departure-type routes
//! - Flagging main-line sections by cross-referencing main-line route records
//! - Writing one analysis workbook per processed input file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analyzer;
        pub mod mainline;
        pub mod route_parser;
        pub mod workbook;
    }
}

// Re-export commonly used types
pub use app::models::{ResultRecord, RouteRecord, Sheet, TrackEntry};
pub use config::Config;

/// Result type alias for route table analysis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for route table analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Workbook could not be opened or its first sheet could not be read
    #[error("Failed to read workbook '{file}': {source}")]
    WorkbookRead {
        file: String,
        #[source]
        source: calamine::Error,
    },

    /// Output workbook could not be written
    #[error("Failed to write workbook '{file}': {source}")]
    WorkbookWrite {
        file: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// No row in the sheet matched the header keyword set
    #[error("No header row found in '{file}'")]
    HeaderNotFound { file: String },

    /// A required logical column is absent from the resolved header
    #[error("Missing required column '{column}' in '{file}'")]
    MissingColumn { file: String, column: String },

    /// Invalid file discovery pattern
    #[error("Invalid file pattern: {message}")]
    Pattern { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a workbook read error with file context
    pub fn workbook_read(file: impl Into<String>, source: calamine::Error) -> Self {
        Self::WorkbookRead {
            file: file.into(),
            source,
        }
    }

    /// Create a workbook write error with file context
    pub fn workbook_write(file: impl Into<String>, source: rust_xlsxwriter::XlsxError) -> Self {
        Self::WorkbookWrite {
            file: file.into(),
            source,
        }
    }

    /// Create a header-not-found error for a file
    pub fn header_not_found(file: impl Into<String>) -> Self {
        Self::HeaderNotFound { file: file.into() }
    }

    /// Create a missing-column error for a file
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::Pattern {
            message: error.to_string(),
        }
    }
}
