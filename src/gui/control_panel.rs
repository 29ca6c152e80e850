//! Control Panel Widget
//! Top panel with the dashboard title and the region selector.

use egui::{Color32, ComboBox, RichText};

/// Header panel holding the single region dropdown.
pub struct ControlPanel {
    /// Selectable regions, ranked.
    pub options: Vec<String>,
    /// Region shown in the dropdown.
    pub selected: String,
    pub status: String,
}

impl ControlPanel {
    pub fn new(options: Vec<String>, selected: String) -> Self {
        Self {
            options,
            selected,
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.add_space(5.0);
        ui.label(
            RichText::new("COVID-19 Dashboard")
                .size(24.0)
                .strong()
                .color(Color32::from_rgb(100, 149, 237)),
        );
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Country:").size(14.0));
            ComboBox::from_id_salt("country_dropdown")
                .width(220.0)
                .selected_text(&self.selected)
                .show_ui(ui, |ui| {
                    for region in &self.options {
                        if ui
                            .selectable_label(self.selected == *region, region)
                            .clicked()
                            && self.selected != *region
                        {
                            action = ControlPanelAction::SelectRegion(region.clone());
                        }
                    }
                });

            ui.add_space(15.0);

            let status_color = if self.status.starts_with("Error") {
                Color32::from_rgb(220, 53, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        });

        ui.add_space(5.0);
        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectRegion(String),
}
