//! Single-filter query command

use super::shared::{format_summary, initialize};
use crate::app::services::figures::FigureSet;
use crate::cli::args::{GlobalArgs, QueryArgs, QueryFormat};
use crate::QueryEngine;
use anyhow::{Context, Result};

/// Run one filter and print the chosen rendering to stdout
pub fn run_query(global: &GlobalArgs, args: &QueryArgs) -> Result<()> {
    let (engine, _stats) = initialize(global)?;
    let output = render_query(&engine, &args.filter, args.format, args.pretty)?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Render a query in the requested format
pub fn render_query(
    engine: &QueryEngine,
    filter_text: &str,
    format: QueryFormat,
    pretty: bool,
) -> Result<String> {
    let bundle = engine.query_views(filter_text);

    match format {
        QueryFormat::Summary => Ok(format_summary(filter_text, &bundle)),
        QueryFormat::Json => to_json(&bundle, pretty),
        QueryFormat::Figures => to_json(&FigureSet::render(&bundle, engine.map_token()), pretty),
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize query result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sighting;
    use crate::app::services::filter_engine::QueryCache;
    use crate::app::services::sighting_loader::SightingStore;

    fn engine() -> QueryEngine {
        QueryEngine::new(
            SightingStore::from_sightings(vec![
                Sighting::new("Heard growling", "Class A", 47.5, -121.9, "2001-06-15T21:30:00Z")
                    .unwrap(),
            ]),
            QueryCache::new(4, None),
        )
        .with_map_token(Some("pk.cli".to_string()))
    }

    #[test]
    fn test_render_json() {
        let output = render_query(&engine(), "HEARD", QueryFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["class_hist"]["Class A"], 1);
        assert_eq!(value["weekday_hist"]["Fri"], 1);
    }

    #[test]
    fn test_render_figures_carries_token() {
        let output = render_query(&engine(), "", QueryFormat::Figures, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["map"]["layout"]["mapbox"]["accesstoken"], "pk.cli");
        assert_eq!(value["class"]["data"][0]["type"], "pie");
    }

    #[test]
    fn test_render_summary() {
        let output = render_query(&engine(), "growl", QueryFormat::Summary, false).unwrap();

        assert!(output.contains("Class A"));
    }
}
