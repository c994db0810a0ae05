//! Row parsing for sighting CSV sources
//!
//! Maps header names to column positions and turns individual CSV records
//! into validated [`Sighting`] values.

use crate::app::models::Sighting;
use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;

/// Positions of the required columns within a CSV record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub title: usize,
    pub classification: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub timestamp: usize,
}

impl ColumnMapping {
    /// Build a mapping from the header record
    ///
    /// Header names are matched after trimming; extra columns are ignored.
    /// A missing required column makes the whole source unusable.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    Error::configuration(format!("required column '{}' not found", name))
                })
        };

        Ok(Self {
            title: position(columns::TITLE)?,
            classification: position(columns::CLASSIFICATION)?,
            latitude: position(columns::LATITUDE)?,
            longitude: position(columns::LONGITUDE)?,
            timestamp: position(columns::TIMESTAMP)?,
        })
    }
}

/// Parse one data record into a sighting
///
/// `row` is the 1-based data row number used in error messages. Every
/// failure is reported as [`Error::MalformedRow`].
pub fn parse_sighting_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    row: usize,
) -> Result<Sighting> {
    let title = get_field(record, mapping.title, columns::TITLE, row)?;
    let classification = get_field(record, mapping.classification, columns::CLASSIFICATION, row)?;
    let latitude = parse_coordinate(record, mapping.latitude, columns::LATITUDE, row)?;
    let longitude = parse_coordinate(record, mapping.longitude, columns::LONGITUDE, row)?;
    let timestamp = get_field(record, mapping.timestamp, columns::TIMESTAMP, row)?.trim();

    Sighting::new(title, classification.trim(), latitude, longitude, timestamp)
        .map_err(|e| Error::malformed_row(row, e.to_string()))
}

/// Get a raw field value from a record
fn get_field<'a>(
    record: &'a StringRecord,
    index: usize,
    field_name: &str,
    row: usize,
) -> Result<&'a str> {
    record
        .get(index)
        .ok_or_else(|| Error::malformed_row(row, format!("no value for column '{}'", field_name)))
}

/// Parse a latitude or longitude field
fn parse_coordinate(
    record: &StringRecord,
    index: usize,
    field_name: &str,
    row: usize,
) -> Result<f64> {
    let value = get_field(record, index, field_name, row)?.trim();
    value.parse::<f64>().map_err(|e| {
        Error::malformed_row(
            row,
            format!("invalid {} '{}' ({})", field_name, value, e),
        )
    })
}
