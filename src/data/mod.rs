//! Data module - CSV loading and region aggregation

mod loader;
mod processor;

pub use loader::{
    DataLoader, LoaderError, RawTable, LAT_COLUMN, LONG_COLUMN, REGION_COLUMN, SUB_REGION_COLUMN,
};
pub use processor::{
    AggregatedTable, DataProcessor, ProcessorError, RankedRegions, RegionSummary, DROP_COLUMNS,
};
