//! Shared components for CLI commands
//!
//! Logging setup, configuration layering, engine construction and the text
//! summary used by both `query` and `interactive`.

use crate::cli::args::GlobalArgs;
use crate::config::EngineConfig;
use crate::{AggregateBundle, QueryEngine};
use crate::app::services::sighting_loader::LoadStats;
use anyhow::{Context, Result};
use colored::*;
use std::fmt::Write as _;
use tracing::{debug, warn};

/// Set up structured logging on stderr
///
/// `RUST_LOG` wins over the configured level when set.
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bigfoot_sightings={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Resolve configuration: defaults, then config file, then environment, then flags
pub fn load_configuration<F>(global: &GlobalArgs, lookup: F) -> Result<EngineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &global.config_file {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    config
        .apply_env(lookup)
        .context("Invalid environment configuration")?;
    global.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    Ok(config)
}

/// Resolve configuration, start logging, and load the engine
///
/// A `.env` file in the working directory or any parent fills in variables
/// the process environment does not already set.
pub fn initialize(global: &GlobalArgs) -> Result<(QueryEngine, LoadStats)> {
    let dotenv_path = dotenvy::dotenv().ok();
    let config = load_configuration(global, |key| std::env::var(key).ok())?;
    setup_logging(&config.log_level, global.quiet);

    if let Some(path) = &dotenv_path {
        debug!("Loaded environment from {}", path.display());
    }

    let (engine, stats) = QueryEngine::load(&config, global.show_progress()).with_context(|| {
        format!(
            "Failed to load sightings from {}",
            config.data_path.display()
        )
    })?;

    if stats.has_errors() {
        warn!("{} malformed rows were dropped", stats.malformed_rows);
    }
    if engine.store().is_empty() {
        warn!("No sightings survived loading; every query will be empty");
    }

    Ok((engine, stats))
}

/// Earliest and latest year present in a bundle
pub fn bundle_year_span(bundle: &AggregateBundle) -> Option<(i32, i32)> {
    let years = bundle
        .year_series
        .values()
        .flat_map(|series| series.iter().map(|point| point.year));

    years.fold(None, |span, year| match span {
        None => Some((year, year)),
        Some((first, last)) => Some((first.min(year), last.max(year))),
    })
}

/// Multi-line colored summary of one query's views
pub fn format_summary(filter_text: &str, bundle: &AggregateBundle) -> String {
    let mut out = String::new();
    let total = bundle.sighting_count();

    let _ = writeln!(
        out,
        "{} {:?}: {} sightings",
        "Query".bright_green().bold(),
        filter_text,
        total.to_string().bright_white().bold()
    );

    if bundle.is_empty() {
        let _ = writeln!(out, "  {}", "No matching sightings".yellow());
        return out;
    }

    let _ = writeln!(out, "  {}", "Classes:".cyan());
    for (class, count) in bundle.class_hist.iter() {
        let _ = writeln!(out, "    {:<12} {}", class, count);
    }

    if let Some((first, last)) = bundle_year_span(bundle) {
        let _ = writeln!(out, "  {} {}-{}", "Years:".cyan(), first, last);
    }

    let weekdays: Vec<String> = bundle
        .weekday_hist
        .iter()
        .map(|(day, count)| format!("{} {}", day.label(), count))
        .collect();
    let _ = writeln!(out, "  {} {}", "Weekdays:".cyan(), weekdays.join("  "));

    let markers: usize = bundle.geo.values().map(Vec::len).sum();
    let _ = writeln!(out, "  {} {}", "Map markers:".cyan(), markers);

    out
}
