//! Bigfoot Sightings Library
//!
//! A Rust library that loads geotagged Bigfoot sighting reports from the
//! BFRO report locations extract and answers free-text title filters with
//! four chart-ready aggregate views.
//!
//! This library provides tools for:
//! - Loading and validating sighting records from CSV, dropping malformed rows
//! - Deriving years and weekdays from the fixed UTC timestamp format
//! - Case-insensitive title filtering behind a bounded LRU query cache
//! - Aggregating filtered sightings by class, year, weekday and location
//! - Rendering the aggregates as chart figure specifications

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregators;
        pub mod figures;
        pub mod filter_engine;
        pub mod query_engine;
        pub mod sighting_loader;
        pub mod temporal;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Sighting, Weekday};
pub use app::services::query_engine::{AggregateBundle, QueryEngine};
pub use config::EngineConfig;

/// Result type alias for the sightings engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading and querying sightings
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Source data could not be loaded at all
    #[error("Failed to load sightings from '{path}': {message}")]
    Load { path: String, message: String },

    /// A single source row could not be turned into a sighting
    #[error("Malformed row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    /// Timestamp does not match the fixed UTC format
    #[error("Malformed timestamp '{value}'")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

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

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a fatal load error
    pub fn load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(row: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            message: message.into(),
        }
    }

    /// Create a malformed timestamp error
    pub fn malformed_timestamp(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::MalformedTimestamp {
            value: value.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether startup must abort on this error
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::MalformedRow { .. } | Self::MalformedTimestamp { .. }
        )
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

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
