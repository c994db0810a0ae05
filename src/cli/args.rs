//! Command-line argument definitions for the sightings explorer
//!
//! Defines the CLI using the clap derive API. Global flags override the
//! layered configuration; subcommands choose what to do with the engine.

use crate::config::EngineConfig;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Bigfoot sightings explorer
///
/// Loads the BFRO report locations extract once and answers free-text
/// title filters with map, yearly, weekday and classification views.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bigfoot-sightings",
    version,
    about = "Filter and aggregate geotagged Bigfoot sighting reports",
    long_about = "Loads the BFRO report locations extract, keeps sightings between the configured \
                  years, and answers case-insensitive title filters with four aggregate views: \
                  locations by class, yearly counts by class, a day-of-week histogram and a \
                  classification histogram."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct GlobalArgs {
    /// Path to the sightings CSV
    ///
    /// Overrides `BIGFOOT_DATA_PATH` and the config file.
    #[arg(
        long = "data",
        value_name = "PATH",
        global = true,
        help = "Path to the sightings CSV"
    )]
    pub data_path: Option<PathBuf>,

    /// JSON configuration file, applied before environment and flags
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "JSON configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of distinct filters kept in the query cache (0 disables it)
    #[arg(
        long = "cache-capacity",
        value_name = "N",
        global = true,
        help = "Query cache capacity (0 disables caching)"
    )]
    pub cache_capacity: Option<usize>,

    /// Seconds a cached filter result stays valid (0 keeps it until evicted)
    #[arg(
        long = "cache-ttl",
        value_name = "SECONDS",
        global = true,
        help = "Query cache entry lifetime in seconds"
    )]
    pub cache_ttl_secs: Option<u64>,

    /// Earliest retained year
    #[arg(long = "min-year", value_name = "YEAR", global = true)]
    pub min_year: Option<i32>,

    /// Latest retained year
    #[arg(long = "max-year", value_name = "YEAR", global = true)]
    pub max_year: Option<i32>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Show a spinner while loading the CSV
    #[arg(long = "progress", global = true, help = "Show load progress")]
    pub progress: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run one filter and print its aggregate views
    Query(QueryArgs),
    /// Read filters from stdin, one per line, and summarize each
    Interactive(InteractiveArgs),
    /// Load the data and report load statistics
    Stats(StatsArgs),
}

/// Arguments for the query command
#[derive(Debug, Clone, ClapArgs)]
pub struct QueryArgs {
    /// Case-insensitive title substring; empty matches everything
    #[arg(value_name = "FILTER", default_value = "")]
    pub filter: String,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "summary")]
    pub format: QueryFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,
}

/// Arguments for the interactive command
#[derive(Debug, Clone, ClapArgs)]
pub struct InteractiveArgs {
    /// Emit one JSON bundle per line instead of a text summary
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the stats command
#[derive(Debug, Clone, ClapArgs)]
pub struct StatsArgs {
    /// Output format for the load report
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: StatsFormat,
}

/// Output formats for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryFormat {
    /// Colored text summary
    Summary,
    /// The aggregate bundle as JSON
    Json,
    /// The four chart figure specifications as JSON
    Figures,
}

/// Output formats for load statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    /// Human-readable report
    Human,
    /// JSON for scripting
    Json,
}

impl GlobalArgs {
    /// Log level implied by the flags, `None` to defer to configuration
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            Some("error")
        } else {
            match self.verbose {
                0 => None,
                1 => Some("info"),
                2 => Some("debug"),
                _ => Some("trace"),
            }
        }
    }

    /// Overlay explicit flags onto a configuration
    pub fn apply_overrides(&self, config: &mut EngineConfig) {
        if let Some(path) = &self.data_path {
            config.data_path = path.clone();
        }
        if let Some(capacity) = self.cache_capacity {
            config.cache_capacity = capacity;
        }
        if let Some(ttl) = self.cache_ttl_secs {
            config.cache_ttl_secs = ttl;
        }
        if let Some(min_year) = self.min_year {
            config.min_year = min_year;
        }
        if let Some(max_year) = self.max_year {
            config.max_year = max_year;
        }
        if let Some(level) = self.get_log_level() {
            config.log_level = level.to_string();
        }
    }

    /// Spinner only when asked for and not in quiet mode
    pub fn show_progress(&self) -> bool {
        self.progress && !self.quiet
    }
}
