//! COVID-19 Dashboard - interactive confirmed cases viewer
//!
//! Loads the dataset once, then opens a native window with a country selector
//! driving a line chart, a bar chart and a map.

use anyhow::{Context, Result};
use covid_dashboard::config::DashboardConfig;
use covid_dashboard::dashboard::Dashboard;
use covid_dashboard::data::DataLoader;
use covid_dashboard::gui::DashboardApp;
use eframe::egui;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("covid_dashboard=info")),
        )
        .with_target(true)
        .init();

    let config = DashboardConfig::from_env()?;

    // Any failure before the window opens is fatal
    let raw = DataLoader::fetch(&config.data_url)
        .with_context(|| format!("failed to load dataset from {}", config.data_url))?;
    let dashboard = Arc::new(Dashboard::new(raw, config.top_n)?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([900.0, 600.0])
            .with_title("COVID-19 Dashboard"),
        ..Default::default()
    };

    info!("opening dashboard window");
    eframe::run_native(
        "COVID-19 Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, dashboard)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {}", e))
}
