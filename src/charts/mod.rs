//! Charts module - Figure descriptors and rendering

mod color_scale;
mod figures;
pub mod geo;
mod plotter;

pub use color_scale::ColorScale;
pub use figures::{
    daily_deltas, BarFigure, ChoroplethFigure, FigureBuilder, LineFigure, MapLocation,
};
pub use plotter::ChartPlotter;
