use std::{fmt::Write, path::Path};

use llama_types::format_usd;

use crate::{
    error::ChartError,
    scale::Scale,
    series::{BarSeries, ChartStyle},
};

const MARGIN_TOP: f64 = 48.0;
const MARGIN_LEFT: f64 = 96.0;
const MARGIN_RIGHT: f64 = 24.0;
/// Room for the rotated category labels and the x axis label.
const MARGIN_BOTTOM: f64 = 170.0;
const BAR_FILL_RATIO: f64 = 0.8;

/// Renders a single bar chart as a standalone SVG document.
pub fn render_bar_chart(series: &BarSeries, style: &ChartStyle) -> Result<String, ChartError> {
    render_panels(std::slice::from_ref(series), style)
}

/// Renders charts side by side in one SVG document, one panel per series.
pub fn render_panels(panels: &[BarSeries], style: &ChartStyle) -> Result<String, ChartError> {
    let panel_count = panels.len().max(1) as u32;
    let width = style.width * panel_count;
    let height = style.height;

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}" font-size="{}">"#,
        escape(&style.font_family),
        style.font_size
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

    for (i, panel) in panels.iter().enumerate() {
        let offset = i as u32 * style.width;
        writeln!(svg, r#"<g transform="translate({offset},0)">"#)?;
        write_panel(&mut svg, panel, style)?;
        writeln!(svg, "</g>")?;
    }

    writeln!(svg, "</svg>")?;
    Ok(svg)
}

pub fn write_svg(path: &Path, svg: &str) -> Result<(), ChartError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ChartError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, svg).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote chart {}", path.display());
    Ok(())
}

fn write_panel(svg: &mut String, series: &BarSeries, style: &ChartStyle) -> Result<(), ChartError> {
    let width = f64::from(style.width);
    let height = f64::from(style.height);
    let plot_left = MARGIN_LEFT;
    let plot_top = MARGIN_TOP;
    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let plot_bottom = plot_top + plot_height;
    let title_size = style.font_size + 3;

    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="{title_size}" font-weight="bold">{}</text>"#,
        width / 2.0,
        MARGIN_TOP / 2.0,
        escape(&series.title)
    )?;
    writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        plot_left + plot_width / 2.0,
        height - 12.0,
        escape(&series.x_label)
    )?;
    writeln!(
        svg,
        r#"<text x="16" y="{y:.1}" text-anchor="middle" transform="rotate(-90 16 {y:.1})">{}</text>"#,
        escape(&series.y_label),
        y = plot_top + plot_height / 2.0,
    )?;

    if series.is_empty() {
        writeln!(
            svg,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" fill="#777">No data</text>"##,
            plot_left + plot_width / 2.0,
            plot_top + plot_height / 2.0
        )?;
        return Ok(());
    }

    let scale = Scale::new(
        series.bars.iter().map(|(_, value)| *value),
        plot_top,
        plot_height,
    );

    for tick in scale.ticks() {
        let y = scale.y(tick);
        writeln!(
            svg,
            r##"<line x1="{plot_left:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e5e5e5"/>"##,
            plot_left + plot_width
        )?;
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{y:.1}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            plot_left - 6.0,
            escape(&format_usd(tick))
        )?;
    }

    let slot = plot_width / series.bars.len() as f64;
    let bar_width = slot * BAR_FILL_RATIO;
    let baseline = scale.y(0.0);

    for (i, (label, value)) in series.bars.iter().enumerate() {
        let center = plot_left + slot * (i as f64 + 0.5);
        let value = if value.is_finite() { *value } else { 0.0 };
        let top = scale.y(value.max(0.0));
        let bottom = scale.y(value.min(0.0));
        let fill = if value < 0.0 {
            &style.negative_bar_color
        } else {
            &style.bar_color
        };

        writeln!(
            svg,
            r#"<rect x="{:.1}" y="{top:.1}" width="{bar_width:.1}" height="{:.1}" fill="{}"/>"#,
            center - bar_width / 2.0,
            bottom - top,
            escape(fill)
        )?;

        let (annotation_y, baseline_shift) = if value < 0.0 {
            (bottom + 5.0, "hanging")
        } else {
            (top - 5.0, "auto")
        };
        writeln!(
            svg,
            r#"<text x="{center:.1}" y="{annotation_y:.1}" text-anchor="middle" dominant-baseline="{baseline_shift}">{}</text>"#,
            escape(&format_usd(value))
        )?;

        let label_y = plot_bottom + 8.0;
        writeln!(
            svg,
            r#"<text x="{center:.1}" y="{label_y:.1}" text-anchor="end" dominant-baseline="middle" transform="rotate(-90 {center:.1} {label_y:.1})">{}</text>"#,
            escape(label)
        )?;
    }

    writeln!(
        svg,
        r#"<line x1="{plot_left:.1}" y1="{baseline:.1}" x2="{:.1}" y2="{baseline:.1}" stroke="black"/>"#,
        plot_left + plot_width
    )?;
    writeln!(
        svg,
        r#"<line x1="{plot_left:.1}" y1="{plot_top:.1}" x2="{plot_left:.1}" y2="{plot_bottom:.1}" stroke="black"/>"#
    )?;

    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
