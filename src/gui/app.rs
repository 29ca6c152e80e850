//! COVID-19 Dashboard Main Application
//! Header with the region selector and the chart viewer below it.

use crate::dashboard::{Dashboard, Selection, ViewSet};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::TopBottomPanel;
use std::sync::Arc;
use tracing::{error, info, trace};

/// Main application window.
pub struct DashboardApp {
    dashboard: Arc<Dashboard>,
    selection: Selection,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dashboard: Arc<Dashboard>) -> Self {
        let selection = dashboard.initial_selection();
        let control_panel = ControlPanel::new(
            dashboard.ranked().regions().to_vec(),
            selection.region().to_string(),
        );

        let mut app = Self {
            dashboard,
            selection,
            control_panel,
            chart_viewer: ChartViewer::new(),
        };
        app.refresh_views();
        app
    }

    /// Handle a dropdown change: update the selection and recompute the views.
    fn handle_select_region(&mut self, region: &str) {
        match self.selection.set(self.dashboard.ranked(), region) {
            Ok(true) => {
                info!(region, "selection changed");
                self.control_panel.selected = region.to_string();
                self.refresh_views();
            }
            Ok(false) => {}
            Err(e) => {
                error!(error = %e, "rejected selection");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Recompute all three views; on failure keep the previous charts.
    fn refresh_views(&mut self) {
        match ViewSet::compute(&self.dashboard, &self.selection) {
            Ok(views) => {
                if tracing::enabled!(tracing::Level::TRACE) {
                    if let Ok(json) = views.to_json() {
                        trace!(%json, "views");
                    }
                }
                self.chart_viewer.set_views(views);
                self.control_panel
                    .set_status(&format!("Showing {}", self.selection.region()));
            }
            Err(e) => {
                error!(region = self.selection.region(), error = %e, "view computation failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("control_panel").show(ctx, |ui| {
            if let ControlPanelAction::SelectRegion(region) = self.control_panel.show(ui) {
                self.handle_select_region(&region);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
