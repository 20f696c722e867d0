/// One bar chart: a titled list of labelled values.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

impl BarSeries {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        bars: Vec<(String, f64)>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Size of a single panel, in pixels.
    pub width: u32,
    pub height: u32,
    pub bar_color: String,
    pub negative_bar_color: String,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 640,
            height: 520,
            bar_color: "#1f77b4".to_string(),
            negative_bar_color: "#d62728".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 11,
        }
    }
}
