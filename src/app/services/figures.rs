//! Chart figure specifications
//!
//! Renders an [`AggregateBundle`] into plotly-style figure objects
//! (`{"data": [...traces], "layout": {...}}`) ready to hand to a browser
//! charting library. Rendering is presentation only; no counting happens here.

use crate::app::services::query_engine::AggregateBundle;
use crate::constants::charts;
use serde::Serialize;
use serde_json::{Value, json};

/// The four dashboard figures for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureSet {
    pub map: Value,
    pub year: Value,
    pub weekday: Value,
    pub class: Value,
}

impl FigureSet {
    /// Render all four figures from one bundle
    pub fn render(bundle: &AggregateBundle, map_token: Option<&str>) -> Self {
        Self {
            map: map_figure(bundle, map_token),
            year: year_figure(bundle),
            weekday: weekday_figure(bundle),
            class: class_figure(bundle),
        }
    }
}

/// One `scattermapbox` trace per class, centered on the continental US
///
/// The token is embedded verbatim; `null` when none is configured.
pub fn map_figure(bundle: &AggregateBundle, map_token: Option<&str>) -> Value {
    let data: Vec<Value> = bundle
        .geo
        .iter()
        .map(|(class, points)| {
            json!({
                "type": "scattermapbox",
                "name": class,
                "mode": "markers",
                "lat": points.iter().map(|p| p.latitude).collect::<Vec<_>>(),
                "lon": points.iter().map(|p| p.longitude).collect::<Vec<_>>(),
                "text": points.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
                "marker": {
                    "size": charts::MAP_MARKER_SIZE,
                    "opacity": charts::MAP_MARKER_OPACITY,
                },
            })
        })
        .collect();

    json!({
        "data": data,
        "layout": {
            "autosize": true,
            "hovermode": "closest",
            "mapbox": {
                "accesstoken": map_token,
                "bearing": charts::MAP_BEARING,
                "center": {
                    "lat": charts::MAP_CENTER_LAT,
                    "lon": charts::MAP_CENTER_LON,
                },
                "pitch": charts::MAP_PITCH,
                "zoom": charts::MAP_ZOOM,
                "style": charts::MAP_STYLE,
            },
        },
    })
}

/// One `lines+markers` series per class
pub fn year_figure(bundle: &AggregateBundle) -> Value {
    let data: Vec<Value> = bundle
        .year_series
        .iter()
        .map(|(class, series)| {
            json!({
                "type": "scatter",
                "name": class,
                "mode": "lines+markers",
                "x": series.iter().map(|point| point.year).collect::<Vec<_>>(),
                "y": series.iter().map(|point| point.count).collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "data": data,
        "layout": {
            "title": charts::YEAR_TITLE,
            "showlegend": false,
        },
    })
}

/// Single bar trace over `Sun..Sat`
pub fn weekday_figure(bundle: &AggregateBundle) -> Value {
    let (labels, counts): (Vec<&str>, Vec<usize>) = bundle
        .weekday_hist
        .iter()
        .map(|(day, count)| (day.label(), count))
        .unzip();

    json!({
        "data": [{
            "type": "bar",
            "x": labels,
            "y": counts,
        }],
        "layout": {
            "title": charts::WEEKDAY_TITLE,
        },
    })
}

/// Donut chart of class counts
pub fn class_figure(bundle: &AggregateBundle) -> Value {
    let (labels, values): (Vec<&str>, Vec<usize>) = bundle
        .class_hist
        .iter()
        .map(|(class, count)| (class, *count))
        .unzip();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "hole": charts::CLASS_PIE_HOLE,
        }],
        "layout": {
            "title": charts::CLASS_TITLE,
        },
    })
}
