//! CSV Data Loader Module
//! Fetches the time-series CSV over HTTP and parses it into a `RawTable` using Polars.

use chrono::NaiveDate;
use polars::prelude::*;
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Region key every row is grouped by.
pub const REGION_COLUMN: &str = "Country/Region";
/// Sub-region key, dropped before aggregation.
pub const SUB_REGION_COLUMN: &str = "Province/State";
pub const LAT_COLUMN: &str = "Lat";
pub const LONG_COLUMN: &str = "Long";

/// Non-date columns the loader accepts besides the region key.
const KNOWN_COLUMNS: [&str; 3] = [SUB_REGION_COLUMN, LAT_COLUMN, LONG_COLUMN];

/// Header format of the date columns, e.g. `1/22/20`.
const DATE_HEADER_FORMAT: &str = "%m/%d/%y";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Unsupported schema: {0}")]
    UnsupportedSchema(String),
    #[error("No data rows in dataset")]
    Empty,
}

/// The dataset as fetched: one row per sub-region, one column per date.
///
/// Immutable once loaded. Date columns are always `Int64`.
#[derive(Debug, Clone)]
pub struct RawTable {
    df: DataFrame,
    date_columns: Vec<String>,
    dates: Vec<NaiveDate>,
}

impl RawTable {
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Date column names in source order.
    pub fn date_columns(&self) -> &[String] {
        &self.date_columns
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn latest_date_column(&self) -> &str {
        // validated non-empty at load time
        &self.date_columns[self.date_columns.len() - 1]
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }
}

/// Handles fetching and parsing of the source CSV.
pub struct DataLoader;

impl DataLoader {
    /// Fetch the CSV from `url` with a single blocking GET and parse it.
    pub fn fetch(url: &str) -> Result<RawTable, LoaderError> {
        info!(url, "fetching dataset");
        let response = reqwest::blocking::get(url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes()?;
        debug!(bytes = body.len(), "dataset downloaded");
        Self::parse_csv(body.to_vec())
    }

    /// Parse CSV bytes into a validated `RawTable`.
    ///
    /// Region keys are read as text and counts as integers; a cell that does
    /// not parse as an integer fails the load.
    pub fn parse_csv(bytes: Vec<u8>) -> Result<RawTable, LoaderError> {
        let columns = Self::read_header(&bytes)?;
        let (date_columns, dates) = Self::validate_schema(&columns)?;
        let schema = Self::column_schema(&columns, &date_columns);

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_schema_overwrite(Some(Arc::new(schema)))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        if df.height() == 0 {
            return Err(LoaderError::Empty);
        }

        for name in &date_columns {
            let dtype = df.column(name)?.dtype();
            if !dtype.is_integer() {
                return Err(LoaderError::UnsupportedSchema(format!(
                    "date column '{}' holds {} values, expected integer counts",
                    name, dtype
                )));
            }
        }

        let missing_regions = df.column(REGION_COLUMN)?.null_count();
        if missing_regions > 0 {
            return Err(LoaderError::UnsupportedSchema(format!(
                "{} rows without a '{}' value",
                missing_regions, REGION_COLUMN
            )));
        }

        let casts: Vec<Expr> = date_columns
            .iter()
            .map(|c| col(c.as_str()).strict_cast(DataType::Int64))
            .collect();
        let df = df.lazy().with_columns(casts).collect()?;

        info!(
            rows = df.height(),
            dates = date_columns.len(),
            first = %dates[0],
            last = %dates[dates.len() - 1],
            "dataset parsed"
        );

        Ok(RawTable {
            df,
            date_columns,
            dates,
        })
    }

    /// Column names from the first line only.
    fn read_header(bytes: &[u8]) -> Result<Vec<String>, LoaderError> {
        let end = bytes
            .iter()
            .position(|b| *b == b'\n')
            .map_or(bytes.len(), |i| i + 1);

        let header = CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(Cursor::new(bytes[..end].to_vec()))
            .finish()?;

        Ok(header
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect())
    }

    /// Fixed dtypes for every known column, so inference never guesses them.
    fn column_schema(columns: &[String], date_columns: &[String]) -> Schema {
        let mut schema = Schema::with_capacity(columns.len());
        for name in columns {
            let dtype = match name.as_str() {
                REGION_COLUMN | SUB_REGION_COLUMN => DataType::String,
                LAT_COLUMN | LONG_COLUMN => DataType::Float64,
                _ if date_columns.contains(name) => DataType::Int64,
                _ => continue,
            };
            schema.with_column(name.as_str().into(), dtype);
        }
        schema
    }

    /// Split the header into date columns, rejecting anything unexpected.
    fn validate_schema(columns: &[String]) -> Result<(Vec<String>, Vec<NaiveDate>), LoaderError> {
        if !columns.iter().any(|c| c == REGION_COLUMN) {
            return Err(LoaderError::UnsupportedSchema(format!(
                "missing required column '{}'",
                REGION_COLUMN
            )));
        }

        let mut date_columns = Vec::new();
        let mut dates: Vec<NaiveDate> = Vec::new();

        for name in columns {
            if name == REGION_COLUMN || KNOWN_COLUMNS.contains(&name.as_str()) {
                continue;
            }

            let date = Self::parse_date_header(name).ok_or_else(|| {
                LoaderError::UnsupportedSchema(format!("unexpected column '{}'", name))
            })?;

            if let Some(prev) = dates.last() {
                if date <= *prev {
                    return Err(LoaderError::UnsupportedSchema(format!(
                        "date column '{}' is out of order",
                        name
                    )));
                }
            }

            date_columns.push(name.clone());
            dates.push(date);
        }

        if date_columns.is_empty() {
            return Err(LoaderError::UnsupportedSchema(
                "no date columns".to_string(),
            ));
        }

        Ok((date_columns, dates))
    }

    /// Parse a `M/D/YY` column header.
    pub fn parse_date_header(name: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(name.trim(), DATE_HEADER_FORMAT).ok()
    }
}
