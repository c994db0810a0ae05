//! Shared test utilities and fixtures for sighting loader tests

use std::fs;
use std::path::{Path, PathBuf};


/// Header line of the BFRO report locations extract
pub const HEADER: &str = "title,classification,latitude,longitude,timestamp";

/// Three valid sightings used across loader tests
pub const SCENARIO_ROWS: &[&str] = &[
    "Heard growling,Class A,47.5,-121.9,2001-06-15T21:30:00Z",
    "Saw tracks,Class A,45.1,-122.6,2015-03-01T10:00:00Z",
    "Heard howling at night,Class B,44.0,-120.5,2015-08-22T02:15:00Z",
];

/// Build CSV content from a header and data rows
pub fn csv_content(header: &str, rows: &[&str]) -> String {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Write a CSV file with the standard header
pub fn write_test_csv(dir: &Path, filename: &str, rows: &[&str]) -> std::io::Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, csv_content(HEADER, rows))?;
    Ok(file_path)
}
