//! Data Processor Module
//! Groups sub-region rows by region, ranks regions and extracts per-region series.

use crate::data::loader::{RawTable, LAT_COLUMN, LONG_COLUMN, REGION_COLUMN, SUB_REGION_COLUMN};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

/// Columns removed before summing. Absent ones are skipped.
pub const DROP_COLUMNS: [&str; 3] = [SUB_REGION_COLUMN, LAT_COLUMN, LONG_COLUMN];

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
    #[error("Dataset contains no regions")]
    NoRegions,
    #[error("Aggregated table has no date columns to rank by")]
    NoDateColumns,
}

/// One row per region, one column per date, cells summed over sub-regions.
#[derive(Debug, Clone)]
pub struct AggregatedTable {
    df: DataFrame,
    date_columns: Vec<String>,
}

impl AggregatedTable {
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn date_columns(&self) -> &[String] {
        &self.date_columns
    }

    pub fn region_count(&self) -> usize {
        self.df.height()
    }

    /// Region identifiers in row order.
    pub fn regions(&self) -> Result<Vec<String>, ProcessorError> {
        region_names(&self.df)
    }

    /// Cumulative values for `region` in date-column order.
    pub fn series(&self, region: &str) -> Result<Vec<i64>, ProcessorError> {
        let row = self
            .df
            .clone()
            .lazy()
            .filter(col(REGION_COLUMN).eq(lit(region)))
            .collect()?;

        if row.height() == 0 {
            return Err(ProcessorError::UnknownRegion(region.to_string()));
        }

        self.date_columns
            .iter()
            .map(|name| {
                let value = row
                    .column(name)?
                    .as_materialized_series()
                    .i64()?
                    .get(0)
                    .unwrap_or(0);
                Ok(value)
            })
            .collect()
    }
}

/// Regions ordered by their latest total, truncated to the selectable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRegions {
    regions: Vec<String>,
}

impl RankedRegions {
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn top(&self) -> Option<&str> {
        self.regions.first().map(String::as_str)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Raw rows of one region collapsed into the values the map needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    pub region: String,
    pub latest_column: String,
    pub latest_total: i64,
    /// Mean `(lat, long)` of the sub-regions, when coordinates exist.
    pub centroid: Option<(f64, f64)>,
    pub row_count: usize,
}

/// Handles grouping and ranking of the raw table.
pub struct DataProcessor;

impl DataProcessor {
    /// Group rows by region and sum every date column.
    ///
    /// Output rows are ordered by region key; date columns keep source order.
    pub fn aggregate_by_region(raw: &RawTable) -> Result<AggregatedTable, ProcessorError> {
        let df = Self::drop_columns_lenient(raw.dataframe(), &DROP_COLUMNS);

        let sums: Vec<Expr> = raw
            .date_columns()
            .iter()
            .map(|name| col(name.as_str()).cast(DataType::Int64).sum())
            .collect();

        let grouped = df
            .lazy()
            .group_by([col(REGION_COLUMN)])
            .agg(sums)
            .sort([REGION_COLUMN], SortMultipleOptions::default())
            .collect()?;

        // group_by does not guarantee column order
        let mut ordered = vec![REGION_COLUMN.to_string()];
        ordered.extend(raw.date_columns().iter().cloned());
        let grouped = grouped.select(ordered)?;

        info!(
            raw_rows = raw.row_count(),
            regions = grouped.height(),
            "aggregated by region"
        );

        Ok(AggregatedTable {
            df: grouped,
            date_columns: raw.date_columns().to_vec(),
        })
    }

    /// Drop the named columns that exist; missing names are ignored.
    pub fn drop_columns_lenient(df: &DataFrame, names: &[&str]) -> DataFrame {
        let present: Vec<PlSmallStr> = df
            .get_column_names()
            .into_iter()
            .filter(|c| names.contains(&c.as_str()))
            .cloned()
            .collect();
        df.drop_many(present)
    }

    /// Stable descending sort on the latest date, keeping the first `top_n`.
    pub fn rank_regions(
        table: &AggregatedTable,
        top_n: usize,
    ) -> Result<RankedRegions, ProcessorError> {
        let latest = table
            .date_columns()
            .last()
            .ok_or(ProcessorError::NoDateColumns)?;

        let sorted = table.dataframe().sort(
            [latest.as_str()],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )?;

        let mut regions = region_names(&sorted)?;
        regions.truncate(top_n);

        if regions.is_empty() {
            return Err(ProcessorError::NoRegions);
        }

        debug!(?regions, column = %latest, "ranked regions");
        Ok(RankedRegions { regions })
    }

    /// Re-aggregate the raw rows of one region, or `None` when it has no rows.
    pub fn summarize_region(
        raw: &RawTable,
        region: &str,
    ) -> Result<Option<RegionSummary>, ProcessorError> {
        let rows = raw
            .dataframe()
            .clone()
            .lazy()
            .filter(col(REGION_COLUMN).eq(lit(region)))
            .collect()?;

        if rows.height() == 0 {
            return Ok(None);
        }

        let latest_column = raw.latest_date_column().to_string();
        let latest_total = rows
            .column(&latest_column)?
            .as_materialized_series()
            .i64()?
            .sum()
            .unwrap_or(0);

        let centroid = match (
            Self::column_mean(&rows, LAT_COLUMN),
            Self::column_mean(&rows, LONG_COLUMN),
        ) {
            (Some(lat), Some(long)) => Some((lat, long)),
            _ => None,
        };

        Ok(Some(RegionSummary {
            region: region.to_string(),
            latest_column,
            latest_total,
            centroid,
            row_count: rows.height(),
        }))
    }

    fn column_mean(df: &DataFrame, name: &str) -> Option<f64> {
        df.column(name)
            .ok()
            .and_then(|c| c.as_materialized_series().mean())
            .filter(|v| v.is_finite())
    }
}

fn region_names(df: &DataFrame) -> Result<Vec<String>, ProcessorError> {
    let names = df
        .column(REGION_COLUMN)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();
    Ok(names)
}
