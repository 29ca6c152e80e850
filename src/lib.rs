//! COVID-19 Dashboard
//!
//! Fetches the global confirmed-cases time series, aggregates it per country
//! and shows line, bar and map views for a selected country.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod gui;
