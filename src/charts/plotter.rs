//! Chart Plotter Module
//! Draws chart figures interactively using egui_plot.

use crate::charts::{BarFigure, ChoroplethFigure, LineFigure};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

pub const LINE_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const BAR_COLOR: Color32 = Color32::from_rgb(243, 156, 18); // Orange
const GRATICULE_COLOR: Color32 = Color32::from_gray(90);

const CHART_HEIGHT: f32 = 320.0;
const MAP_HEIGHT: f32 = 360.0;
const COLOR_BAR_STEPS: usize = 48;

pub fn to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Axis formatter mapping integer positions back to date labels.
    fn date_formatter(labels: Vec<String>) -> impl Fn(egui_plot::GridMark, &std::ops::RangeInclusive<f64>) -> String {
        move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > f64::EPSILON || rounded < 0.0 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        }
    }

    fn draw_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(16.0).strong());
    }

    /// Cumulative series as a line over the date axis.
    pub fn draw_line_chart(ui: &mut egui::Ui, figure: &LineFigure) {
        Self::draw_title(ui, &figure.title);

        let points: PlotPoints = figure
            .y
            .iter()
            .enumerate()
            .map(|(i, &y)| [i as f64, y as f64])
            .collect();

        Plot::new("line_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label(figure.x_title)
            .y_axis_label(figure.y_title)
            .x_axis_formatter(Self::date_formatter(figure.x.clone()))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(points)
                        .color(LINE_COLOR)
                        .width(2.0)
                        .name(figure.trace_name),
                );
            });
    }

    /// Daily deltas as bars; negative corrections render below the axis.
    pub fn draw_bar_chart(ui: &mut egui::Ui, figure: &BarFigure) {
        Self::draw_title(ui, &figure.title);

        let bars: Vec<Bar> = figure
            .y
            .iter()
            .enumerate()
            .map(|(i, &y)| Bar::new(i as f64, y as f64).width(0.8))
            .collect();

        Plot::new("bar_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label(figure.x_title)
            .y_axis_label(figure.y_title)
            .x_axis_formatter(Self::date_formatter(figure.x.clone()))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(BAR_COLOR)
                        .name(figure.trace_name),
                );
            });
    }

    /// Equirectangular lon/lat map with the selected region marked in scale color.
    pub fn draw_map(ui: &mut egui::Ui, figure: &ChoroplethFigure) {
        Self::draw_title(ui, &figure.title);

        ui.horizontal(|ui| {
            let map_width = (ui.available_width() - 90.0).max(200.0);

            ui.vertical(|ui| {
                ui.set_width(map_width);
                Plot::new("world_map")
                    .height(MAP_HEIGHT)
                    .data_aspect(1.0)
                    .include_x(-180.0)
                    .include_x(180.0)
                    .include_y(-90.0)
                    .include_y(90.0)
                    .allow_scroll(false)
                    .show_grid(false)
                    .x_axis_label("Longitude")
                    .y_axis_label("Latitude")
                    .show(ui, |plot_ui| {
                        for lon in (-180..=180).step_by(30) {
                            plot_ui.line(
                                Line::new(vec![[lon as f64, -90.0], [lon as f64, 90.0]])
                                    .color(GRATICULE_COLOR)
                                    .width(0.5),
                            );
                        }
                        for lat in (-90..=90).step_by(30) {
                            plot_ui.line(
                                Line::new(vec![[-180.0, lat as f64], [180.0, lat as f64]])
                                    .color(GRATICULE_COLOR)
                                    .width(0.5),
                            );
                        }

                        let Some(location) = &figure.location else {
                            plot_ui.text(Text::new(
                                PlotPoint::new(0.0, 0.0),
                                RichText::new("No data").size(18.0),
                            ));
                            return;
                        };

                        let Some((lat, long)) = location.centroid else {
                            plot_ui.text(Text::new(
                                PlotPoint::new(0.0, 0.0),
                                RichText::new(format!(
                                    "{}: {} (no coordinates)",
                                    location.region, location.value
                                ))
                                .size(14.0),
                            ));
                            return;
                        };

                        let color = to_color32(location.color);
                        plot_ui.points(
                            Points::new(vec![[long, lat]])
                                .radius(12.0)
                                .color(color)
                                .filled(true)
                                .name(&location.region),
                        );

                        let code = location.iso_alpha3.unwrap_or("?");
                        plot_ui.text(Text::new(
                            PlotPoint::new(long, lat + 12.0),
                            RichText::new(format!(
                                "{} ({}): {}",
                                location.region, code, location.value
                            ))
                            .size(13.0)
                            .strong(),
                        ));
                    });
            });

            if !figure.is_empty() {
                Self::draw_color_bar(ui, figure);
            }
        });
    }

    /// Vertical continuous color bar labelled with the color range.
    fn draw_color_bar(ui: &mut egui::Ui, figure: &ChoroplethFigure) {
        let (min, max) = figure.color_range;

        ui.vertical(|ui| {
            ui.label(RichText::new(&figure.color_column).size(11.0));
            ui.label(RichText::new(max.to_string()).size(11.0));

            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(24.0, MAP_HEIGHT - 80.0), egui::Sense::hover());
            let step_h = rect.height() / COLOR_BAR_STEPS as f32;

            for i in 0..COLOR_BAR_STEPS {
                // top of the bar is the top of the scale
                let t = 1.0 - i as f64 / (COLOR_BAR_STEPS - 1) as f64;
                let color = to_color32(figure.color_scale.sample(t));
                let top = rect.top() + i as f32 * step_h;
                let cell = egui::Rect::from_min_max(
                    egui::pos2(rect.left(), top),
                    egui::pos2(rect.right(), top + step_h + 0.5),
                );
                ui.painter().rect_filled(cell, 0.0, color);
            }

            ui.label(RichText::new(min.to_string()).size(11.0));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rgb_triplets() {
        assert_eq!(to_color32([1, 2, 3]), Color32::from_rgb(1, 2, 3));
    }
}
