//! Chart Viewer Widget
//! Scrollable central panel stacking the line, bar and map charts.

use crate::charts::ChartPlotter;
use crate::dashboard::ViewSet;
use egui::{RichText, ScrollArea};

const CHART_SPACING: f32 = 15.0;

/// Displays the views computed for the current selection.
#[derive(Default)]
pub struct ChartViewer {
    pub views: Option<ViewSet>,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed views.
    pub fn set_views(&mut self, views: ViewSet) {
        self.views = Some(views);
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let Some(views) = &self.views else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::card(ui, |ui| ChartPlotter::draw_line_chart(ui, &views.line));
                ui.add_space(CHART_SPACING);
                Self::card(ui, |ui| ChartPlotter::draw_bar_chart(ui, &views.bar));
                ui.add_space(CHART_SPACING);
                Self::card(ui, |ui| ChartPlotter::draw_map(ui, &views.map));
            });
    }

    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
    }
}
