//! SVG bar charts with dollar-formatted annotations.

pub mod error;
pub mod scale;
pub mod series;
pub mod svg;

pub use error::ChartError;
pub use series::{BarSeries, ChartStyle};
pub use svg::{render_bar_chart, render_panels, write_svg};
