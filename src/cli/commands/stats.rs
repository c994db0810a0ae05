//! Load statistics command

use super::shared::initialize;
use crate::QueryEngine;
use crate::app::services::sighting_loader::LoadStats;
use crate::cli::args::{GlobalArgs, StatsArgs, StatsFormat};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt::Write as _;

/// Load report printed by `stats`
#[derive(Debug, Serialize)]
pub struct StatsReport<'a> {
    pub source: &'a str,
    pub load: &'a LoadStats,
    pub classifications: Vec<&'a str>,
    pub year_span: Option<(i32, i32)>,
}

impl<'a> StatsReport<'a> {
    pub fn new(engine: &'a QueryEngine, load: &'a LoadStats) -> Self {
        let store = engine.store();
        Self {
            source: store.source(),
            load,
            classifications: store.classifications(),
            year_span: store.year_span(),
        }
    }

    /// Human-readable rendering
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", "Load Summary".bright_green().bold());
        let _ = writeln!(out, "  Source:       {}", self.source);
        let _ = writeln!(
            out,
            "  Rows read:    {}",
            self.load.rows_read.to_string().bright_white().bold()
        );
        let _ = writeln!(
            out,
            "  Loaded:       {} ({:.1}%)",
            self.load.sightings_loaded.to_string().bright_white().bold(),
            self.load.retention_rate()
        );
        let malformed = self.load.malformed_rows.to_string();
        let _ = writeln!(
            out,
            "  Malformed:    {}",
            if self.load.has_errors() {
                malformed.bright_red().bold()
            } else {
                malformed.normal()
            }
        );
        let _ = writeln!(out, "  Out of range: {}", self.load.out_of_range);
        let _ = writeln!(
            out,
            "  Load time:    {:.2}s",
            self.load.load_duration.as_secs_f64()
        );

        if let Some((first, last)) = self.year_span {
            let _ = writeln!(out, "  Years:        {}-{}", first, last);
        }
        if !self.classifications.is_empty() {
            let _ = writeln!(out, "  Classes:      {}", self.classifications.join(", "));
        }

        for error in &self.load.errors {
            let _ = writeln!(out, "  {} {}", "dropped:".yellow(), error);
        }

        out
    }
}

/// Load the configured source and print its statistics
pub fn run_stats(global: &GlobalArgs, args: &StatsArgs) -> Result<()> {
    let (engine, load) = initialize(global)?;
    let report = StatsReport::new(&engine, &load);

    match args.format {
        StatsFormat::Human => print!("{}", report.to_text()),
        StatsFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize load report")?
        ),
    }
    Ok(())
}
