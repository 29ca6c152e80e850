//! Dashboard state
//! Tables built once at startup, the current selection, and the views derived from it.

use crate::charts::{BarFigure, ChoroplethFigure, FigureBuilder, LineFigure};
use crate::data::{AggregatedTable, DataProcessor, ProcessorError, RankedRegions, RawTable};
use serde::Serialize;
use tracing::{debug, info};

/// Immutable tables shared by every view handler.
#[derive(Debug)]
pub struct Dashboard {
    raw: RawTable,
    aggregated: AggregatedTable,
    ranked: RankedRegions,
}

impl Dashboard {
    /// Aggregate and rank `raw`, keeping the top `top_n` regions selectable.
    pub fn new(raw: RawTable, top_n: usize) -> Result<Self, ProcessorError> {
        let aggregated = DataProcessor::aggregate_by_region(&raw)?;
        let ranked = DataProcessor::rank_regions(&aggregated, top_n)?;

        info!(
            regions = aggregated.region_count(),
            selectable = ranked.len(),
            top = ranked.top().unwrap_or_default(),
            "dashboard ready"
        );

        Ok(Self {
            raw,
            aggregated,
            ranked,
        })
    }

    pub fn raw(&self) -> &RawTable {
        &self.raw
    }

    pub fn aggregated(&self) -> &AggregatedTable {
        &self.aggregated
    }

    pub fn ranked(&self) -> &RankedRegions {
        &self.ranked
    }

    /// Selection starting at the top-ranked region.
    pub fn initial_selection(&self) -> Selection {
        Selection::initial(&self.ranked)
    }
}

/// The single selected region.
///
/// Only identifiers from `RankedRegions` are accepted, so every selection is a
/// row of the aggregated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    region: String,
}

impl Selection {
    pub fn initial(ranked: &RankedRegions) -> Self {
        Self {
            region: ranked.top().unwrap_or_default().to_string(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Switch to `region`. Returns `true` when the selection changed.
    pub fn set(&mut self, ranked: &RankedRegions, region: &str) -> Result<bool, ProcessorError> {
        if !ranked.contains(region) {
            return Err(ProcessorError::UnknownRegion(region.to_string()));
        }
        if self.region == region {
            return Ok(false);
        }
        self.region = region.to_string();
        Ok(true)
    }
}

/// The three chart descriptors for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSet {
    pub line: LineFigure,
    pub bar: BarFigure,
    pub map: ChoroplethFigure,
}

impl ViewSet {
    /// Recompute every view from scratch for `selection`.
    pub fn compute(dashboard: &Dashboard, selection: &Selection) -> Result<Self, ProcessorError> {
        let region = selection.region();
        debug!(region, "recomputing views");

        let line = FigureBuilder::line(dashboard.aggregated(), region)?;
        let bar = FigureBuilder::bar(dashboard.aggregated(), region)?;
        let map = FigureBuilder::map(dashboard.raw(), region)?;

        Ok(Self { line, bar, map })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;

    fn dashboard() -> Dashboard {
        let csv = "\
Province/State,Country/Region,Lat,Long,3/1/20,3/2/20
,Brazil,-14.2,-51.9,2,6
,India,20.6,78.9,1,8
,Chile,-35.7,-71.5,0,1
";
        let raw = DataLoader::parse_csv(csv.as_bytes().to_vec()).unwrap();
        Dashboard::new(raw, 5).unwrap()
    }

    #[test]
    fn initial_selection_is_top_region() {
        let dashboard = dashboard();
        assert_eq!(dashboard.initial_selection().region(), "India");
    }

    #[test]
    fn selection_rejects_unranked_region() {
        let dashboard = dashboard();
        let mut selection = dashboard.initial_selection();
        let err = selection.set(dashboard.ranked(), "Peru").unwrap_err();
        assert!(matches!(err, ProcessorError::UnknownRegion(_)));
        assert_eq!(selection.region(), "India");
    }

    #[test]
    fn selection_reports_changes() {
        let dashboard = dashboard();
        let mut selection = dashboard.initial_selection();
        assert!(!selection.set(dashboard.ranked(), "India").unwrap());
        assert!(selection.set(dashboard.ranked(), "Chile").unwrap());
        assert_eq!(selection.region(), "Chile");
    }

    #[test]
    fn views_follow_selection() {
        let dashboard = dashboard();
        let mut selection = dashboard.initial_selection();
        selection.set(dashboard.ranked(), "Brazil").unwrap();

        let views = ViewSet::compute(&dashboard, &selection).unwrap();
        assert_eq!(views.line.y, vec![2, 6]);
        assert_eq!(views.bar.y, vec![0, 4]);
        assert_eq!(views.map.location.as_ref().unwrap().value, 6);
    }

    #[test]
    fn views_serialize_to_json() {
        let dashboard = dashboard();
        let views = ViewSet::compute(&dashboard, &dashboard.initial_selection()).unwrap();
        let json = views.to_json().unwrap();
        assert!(json.contains("\"Confirmed COVID-19 Cases in India\""));
        assert!(json.contains("\"Viridis\""));
    }
}
