//! Chart Figures Module
//! Pure view handlers turning a selected region into chart descriptors.

use crate::charts::color_scale::ColorScale;
use crate::charts::geo;
use crate::data::{AggregatedTable, DataProcessor, ProcessorError, RawTable};
use serde::Serialize;
use tracing::warn;

/// Cumulative cases over time for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineFigure {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub trace_name: &'static str,
    pub x: Vec<String>,
    pub y: Vec<i64>,
}

/// Day-over-day deltas for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFigure {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub trace_name: &'static str,
    pub x: Vec<String>,
    pub y: Vec<i64>,
}

/// The single shaded region of the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLocation {
    pub region: String,
    pub iso_alpha3: Option<&'static str>,
    pub value: i64,
    /// `(lat, long)` used to place the region on the map.
    pub centroid: Option<(f64, f64)>,
    pub color: [u8; 3],
}

/// Single-region choropleth. `location` is `None` when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethFigure {
    pub title: String,
    pub color_column: String,
    pub color_scale: ColorScale,
    pub color_range: (i64, i64),
    pub location: Option<MapLocation>,
}

impl ChoroplethFigure {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
    }
}

/// First difference of a cumulative series; the first delta is 0.
pub fn daily_deltas(values: &[i64]) -> Vec<i64> {
    let mut deltas = Vec::with_capacity(values.len());
    if values.is_empty() {
        return deltas;
    }
    deltas.push(0);
    deltas.extend(values.windows(2).map(|w| w[1] - w[0]));
    deltas
}

/// Builds the three chart descriptors.
pub struct FigureBuilder;

impl FigureBuilder {
    pub fn line(table: &AggregatedTable, region: &str) -> Result<LineFigure, ProcessorError> {
        let y = table.series(region)?;
        Ok(LineFigure {
            title: format!("Confirmed COVID-19 Cases in {}", region),
            x_title: "Date",
            y_title: "Confirmed Cases",
            trace_name: "Confirmed Cases",
            x: table.date_columns().to_vec(),
            y,
        })
    }

    pub fn bar(table: &AggregatedTable, region: &str) -> Result<BarFigure, ProcessorError> {
        let series = table.series(region)?;
        Ok(BarFigure {
            title: format!("Daily New COVID-19 Cases in {}", region),
            x_title: "Date",
            y_title: "Daily New Cases",
            trace_name: "Daily New Cases",
            x: table.date_columns().to_vec(),
            y: daily_deltas(&series),
        })
    }

    /// Re-aggregates the raw rows so the map does not depend on the ranked table.
    pub fn map(raw: &RawTable, region: &str) -> Result<ChoroplethFigure, ProcessorError> {
        let color_scale = ColorScale::Viridis;
        let summary = DataProcessor::summarize_region(raw, region)?;

        let (location, color_range) = match summary {
            Some(summary) => {
                let iso_alpha3 = geo::country_code(&summary.region);
                if iso_alpha3.is_none() {
                    warn!(region = %summary.region, "no country code for region");
                }

                let value = summary.latest_total;
                let range = (value.min(0), value);
                let color = color_scale.color_for(value as f64, range.0 as f64, range.1 as f64);

                let location = MapLocation {
                    region: summary.region,
                    iso_alpha3,
                    value,
                    centroid: summary.centroid,
                    color,
                };
                (Some(location), range)
            }
            None => (None, (0, 0)),
        };

        Ok(ChoroplethFigure {
            title: format!("Total Confirmed COVID-19 Cases in {}", region),
            color_column: raw.latest_date_column().to_string(),
            color_scale,
            color_range,
            location,
        })
    }
}
