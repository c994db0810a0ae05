//! Sighting source loading
//!
//! Reads the whole CSV source once, validating each row and keeping only
//! sightings whose year lies inside the configured range.

use super::SightingStore;
use super::parser::{ColumnMapping, parse_sighting_record};
use super::stats::LoadStats;
use crate::app::services::temporal::year_in_range;
use crate::config::EngineConfig;
use crate::constants::{MAX_SIGHTING_YEAR, MIN_SIGHTING_YEAR, PROGRESS_UPDATE_INTERVAL};
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Options controlling which rows are retained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Earliest retained year (inclusive)
    pub min_year: i32,

    /// Latest retained year (inclusive)
    pub max_year: i32,

    /// Whether to display a spinner while loading
    pub show_progress: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            min_year: MIN_SIGHTING_YEAR,
            max_year: MAX_SIGHTING_YEAR,
            show_progress: false,
        }
    }
}

impl From<&EngineConfig> for LoadOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            min_year: config.min_year,
            max_year: config.max_year,
            show_progress: false,
        }
    }
}

impl LoadOptions {
    /// Enable or disable the loading spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl SightingStore {
    /// Load sightings from a CSV file
    ///
    /// # Errors
    /// * Returns `Error::Load` if the file does not exist or has no usable header
    /// * Returns `Error::Io` if the file cannot be opened or read
    ///
    /// Malformed rows are never errors; they are counted in [`LoadStats`].
    pub fn load_from_path(path: &Path, options: &LoadOptions) -> Result<(Self, LoadStats)> {
        info!("Loading sightings from {}", path.display());

        if !path.exists() {
            return Err(Error::load(
                path.display().to_string(),
                "file does not exist",
            ));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;

        Self::load_from_reader(&path.display().to_string(), file, options)
    }

    /// Load sightings from any CSV byte source
    pub fn load_from_reader<R: Read>(
        source: &str,
        reader: R,
        options: &LoadOptions,
    ) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let mut stats = LoadStats::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::load(source, format!("unreadable header: {}", e)))?
            .clone();
        let mapping = ColumnMapping::from_headers(&headers)
            .map_err(|e| Error::load(source, e.to_string()))?;

        debug!("Column mapping for {}: {:?}", source, mapping);

        let progress_bar = options.show_progress.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Loading sightings...");
            pb
        });

        let mut sightings = Vec::new();

        for (index, result) in csv_reader.records().enumerate() {
            let row = index + 1;
            stats.rows_read += 1;

            if let Some(pb) = &progress_bar {
                if row % PROGRESS_UPDATE_INTERVAL == 0 {
                    pb.set_message(format!("Loaded {} rows", row));
                }
                pb.tick();
            }

            let parsed = match result {
                Ok(record) => parse_sighting_record(&record, &mapping, row),
                Err(e) if e.is_io_error() => {
                    return Err(Error::csv_parsing(
                        source,
                        format!("read failed at row {}", row),
                        Some(e),
                    ));
                }
                Err(e) => Err(Error::malformed_row(row, e.to_string())),
            };

            match parsed {
                Ok(sighting) => {
                    let year = sighting.year();
                    if year_in_range(year, options.min_year, options.max_year) {
                        sightings.push(sighting);
                    } else {
                        debug!("Dropping row {}: year {} out of range", row, year);
                        stats.out_of_range += 1;
                    }
                }
                Err(e) if !e.is_fatal() => {
                    warn!("Skipping malformed row in {}: {}", source, e);
                    stats.record_error(e.to_string());
                }
                Err(e) => return Err(e),
            }
        }

        stats.sightings_loaded = sightings.len();
        stats.load_duration = start_time.elapsed();

        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!("Loaded {} sightings", stats.sightings_loaded));
        }

        info!("Sightings loaded from {}: {}", source, stats.summary());

        Ok((Self::new(source, sightings), stats))
    }
}
