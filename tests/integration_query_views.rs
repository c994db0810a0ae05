//! End-to-end tests: CSV on disk → loaded engine → aggregate views
//!
//! Each test writes a small BFRO-style extract into a temporary directory,
//! loads it through the configured engine and checks the four views.

use bigfoot_sightings::app::services::aggregators::YearCount;
use bigfoot_sightings::app::services::figures::FigureSet;
use bigfoot_sightings::{EngineConfig, Error, QueryEngine, Weekday};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const HEADER: &str = "title,classification,latitude,longitude,timestamp";

fn write_csv(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("bfro_report_locations.csv");
    let mut content = format!("{}\n", HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

fn load_engine(rows: &[&str], cache_capacity: usize) -> (TempDir, QueryEngine) {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig {
        data_path: write_csv(&dir, rows),
        cache_capacity,
        ..Default::default()
    };
    let (engine, _stats) = QueryEngine::load(&config, false).unwrap();
    (dir, engine)
}

const SCENARIO: &[&str] = &[
    "Heard growling,A,47.5,-121.9,2001-06-15T21:30:00Z",
    "Saw tracks,A,45.1,-122.6,2015-03-01T10:00:00Z",
    "Heard howling at night,B,44.0,-120.5,2015-08-22T02:15:00Z",
];

#[test]
fn test_heard_scenario_from_disk() {
    let (_dir, engine) = load_engine(SCENARIO, 8);

    let bundle = engine.query_views("heard");

    assert_eq!(
        bundle.year_series.get("A").unwrap(),
        &vec![YearCount { year: 2001, count: 1 }]
    );
    assert_eq!(
        bundle.year_series.get("B").unwrap(),
        &vec![YearCount { year: 2015, count: 1 }]
    );
    assert_eq!(bundle.class_hist.get("A"), Some(&1));
    assert_eq!(bundle.class_hist.get("B"), Some(&1));
    assert_eq!(bundle.weekday_hist.total(), 2);
    assert_eq!(bundle.geo.get("A").unwrap().len(), 1);
    assert_eq!(bundle.geo.get("B").unwrap()[0].latitude, 44.0);
}

#[test]
fn test_no_match_from_disk() {
    let (_dir, engine) = load_engine(SCENARIO, 8);

    let bundle = engine.query_views("zzz-no-match");

    assert!(bundle.geo.is_empty());
    assert!(bundle.year_series.is_empty());
    assert!(bundle.class_hist.is_empty());
    assert_eq!(bundle.weekday_hist.len(), 7);
    assert_eq!(bundle.weekday_hist.total(), 0);
}

#[test]
fn test_year_boundaries() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig {
        data_path: write_csv(
            &dir,
            &[
                "Too early,A,40.0,-100.0,1899-12-31T23:59:59Z",
                "First kept,A,40.0,-100.0,1900-01-01T00:00:00Z",
                "Last kept,B,40.0,-100.0,2017-12-31T23:59:59Z",
                "Too late,B,40.0,-100.0,2018-01-01T00:00:00Z",
            ],
        ),
        ..Default::default()
    };

    let (engine, stats) = QueryEngine::load(&config, false).unwrap();

    assert_eq!(stats.rows_read, 4);
    assert_eq!(stats.sightings_loaded, 2);
    assert_eq!(stats.out_of_range, 2);
    assert_eq!(engine.store().year_span(), Some((1900, 2017)));
    assert!(engine.query_views("too").is_empty());
    assert_eq!(engine.query_views("kept").sighting_count(), 2);
}

#[test]
fn test_malformed_rows_dropped() {
    let (_dir, engine) = load_engine(
        &[
            "Heard growling,A,47.5,-121.9,2001-06-15T21:30:00Z",
            "Bad latitude,A,north,-121.9,2001-06-15T21:30:00Z",
            "Bad timestamp,B,44.0,-120.5,15/08/2015",
            "Missing field,B,44.0",
        ],
        8,
    );

    assert_eq!(engine.store().len(), 1);
    assert_eq!(engine.query_views("").sighting_count(), 1);
}

#[test]
fn test_missing_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig {
        data_path: dir.path().join("absent.csv"),
        ..Default::default()
    };

    let err = QueryEngine::load(&config, false).unwrap_err();

    assert!(matches!(err, Error::Load { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_timestamp.csv");
    fs::write(&path, "title,classification,latitude,longitude\nA,B,1.0,2.0\n").unwrap();
    let config = EngineConfig {
        data_path: path,
        ..Default::default()
    };

    assert!(QueryEngine::load(&config, false).is_err());
}

#[test]
fn test_view_properties_hold_for_every_query() {
    let (_dir, engine) = load_engine(SCENARIO, 8);

    for query in ["", "heard", "HEARD", "tracks", "night", "zzz", " "] {
        let subset = engine.filter(query);
        let bundle = engine.query_views(query);

        assert_eq!(bundle.weekday_hist.len(), 7);
        assert_eq!(bundle.weekday_hist.total(), subset.len(), "weekday sum for {:?}", query);
        assert_eq!(bundle.class_hist.total(), subset.len(), "class sum for {:?}", query);

        for (_, series) in bundle.year_series.iter() {
            assert!(series.windows(2).all(|pair| pair[0].year < pair[1].year));
        }
        for sighting in subset.iter() {
            assert!(sighting.title.to_lowercase().contains(&query.to_lowercase()));
        }
    }

    assert_eq!(engine.filter("").len(), engine.store().len());
    assert_eq!(engine.query_views("heard"), engine.query_views("HeArD"));
}

#[test]
fn test_cached_and_uncached_engines_agree() {
    let (_dir_a, cached) = load_engine(SCENARIO, 8);
    let (_dir_b, uncached) = load_engine(SCENARIO, 0);

    for query in ["", "heard", "saw", "zzz", "heard"] {
        assert_eq!(cached.query_views(query), uncached.query_views(query));
    }
    assert_eq!(cached.cache_stats().hits, 1);
    assert_eq!(uncached.cache_stats().entries, 0);
}

#[test]
fn test_concurrent_queries() {
    let (_dir, engine) = load_engine(SCENARIO, 4);
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let query = if i % 2 == 0 { "heard" } else { "saw" };
                engine.query_views(query)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let bundle = handle.join().unwrap();
        let expected = if i % 2 == 0 { 2 } else { 1 };
        assert_eq!(bundle.sighting_count(), expected);
    }
}

#[test]
fn test_weekday_of_known_dates() {
    let (_dir, engine) = load_engine(SCENARIO, 8);

    let bundle = engine.query_views("");

    assert_eq!(bundle.weekday_hist.get(Weekday::Fri), 1);
    assert_eq!(bundle.weekday_hist.get(Weekday::Sun), 1);
    assert_eq!(bundle.weekday_hist.get(Weekday::Sat), 1);
}

#[test]
fn test_figures_from_loaded_engine() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig {
        data_path: write_csv(&dir, SCENARIO),
        map_token: Some("pk.integration".to_string()),
        ..Default::default()
    };
    let (engine, _stats) = QueryEngine::load(&config, false).unwrap();

    let figures = FigureSet::render(&engine.query_views(""), engine.map_token());

    assert_eq!(figures.map["layout"]["mapbox"]["accesstoken"], "pk.integration");
    assert_eq!(figures.map["data"].as_array().unwrap().len(), 2);
    assert_eq!(figures.weekday["data"][0]["y"].as_array().unwrap().len(), 7);
}
