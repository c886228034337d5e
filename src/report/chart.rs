//! Self-contained line chart artifacts
//!
//! Each chart is an explicitly constructed value rendering its own data
//! to an inline SVG string. Nothing is shared between chart instances.

use crate::data::PricePoint;
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const Y_TICKS: usize = 5;
const X_TICKS: usize = 6;

/// One named line on the chart
#[derive(Debug, Clone)]
struct ChartSeries {
    label: String,
    color: String,
    points: Vec<PricePoint>,
}

/// A date/value line chart rendered to SVG
#[derive(Debug, Clone)]
pub struct LineChart {
    title: String,
    y_label: String,
    width: u32,
    height: u32,
    series: Vec<ChartSeries>,
}

impl LineChart {
    /// Create an empty chart with the given title
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            y_label: "Price in USD".to_string(),
            width: 900,
            height: 420,
            series: Vec::new(),
        }
    }

    /// Override the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Override the vertical axis label
    pub fn with_y_label(mut self, label: &str) -> Self {
        self.y_label = label.to_string();
        self
    }

    /// Add a named line to the chart
    pub fn add_series(mut self, label: &str, color: &str, points: &[PricePoint]) -> Self {
        self.series.push(ChartSeries {
            label: label.to_string(),
            color: color.to_string(),
            points: points.to_vec(),
        });
        self
    }

    /// Number of lines on the chart
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Render the chart as a standalone SVG element
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let w = self.width as f64;
        let h = self.height as f64;

        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            self.width, self.height, self.width, self.height
        );
        let _ = write!(
            svg,
            "<rect width=\"{}\" height=\"{}\" fill=\"white\"/>\n",
            self.width, self.height
        );
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"22\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"16\">{}</text>\n",
            w / 2.0,
            escape(&self.title)
        );

        let (x0, x1, y0, y1) = match self.domain() {
            Some(domain) => domain,
            None => {
                svg.push_str("</svg>\n");
                return svg;
            }
        };

        let plot_w = w - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = h - MARGIN_TOP - MARGIN_BOTTOM;
        let x_of = |date: NaiveDate| {
            let t = (date.num_days_from_ce() - x0) as f64 / (x1 - x0) as f64;
            MARGIN_LEFT + t * plot_w
        };
        let y_of = |value: f64| {
            let t = (value - y0) / (y1 - y0);
            MARGIN_TOP + (1.0 - t) * plot_h
        };

        // Horizontal gridlines and y tick labels
        for i in 0..=Y_TICKS {
            let value = y0 + (y1 - y0) * i as f64 / Y_TICKS as f64;
            let y = y_of(value);
            let _ = write!(
                svg,
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#ddd\"/>\n",
                MARGIN_LEFT,
                y,
                w - MARGIN_RIGHT,
                y
            );
            let _ = write!(
                svg,
                "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-family=\"sans-serif\" font-size=\"11\">{:.2}</text>\n",
                MARGIN_LEFT - 6.0,
                y + 4.0,
                value
            );
        }

        // X tick labels
        for i in 0..=X_TICKS {
            let days = x0 + ((x1 - x0) as f64 * i as f64 / X_TICKS as f64) as i32;
            if let Some(date) = NaiveDate::from_num_days_from_ce_opt(days) {
                let x = x_of(date);
                let _ = write!(
                    svg,
                    "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#ddd\"/>\n",
                    x,
                    MARGIN_TOP,
                    x,
                    h - MARGIN_BOTTOM
                );
                let _ = write!(
                    svg,
                    "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"11\">{}</text>\n",
                    x,
                    h - MARGIN_BOTTOM + 18.0,
                    date.format("%d/%m/%Y")
                );
            }
        }

        // Axis frame
        let _ = write!(
            svg,
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>\n",
            MARGIN_LEFT,
            MARGIN_TOP,
            MARGIN_LEFT,
            h - MARGIN_BOTTOM
        );
        let _ = write!(
            svg,
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>\n",
            MARGIN_LEFT,
            h - MARGIN_BOTTOM,
            w - MARGIN_RIGHT,
            h - MARGIN_BOTTOM
        );
        let _ = write!(
            svg,
            "<text x=\"14\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"12\" transform=\"rotate(-90 14 {:.1})\">{}</text>\n",
            MARGIN_TOP + plot_h / 2.0,
            MARGIN_TOP + plot_h / 2.0,
            escape(&self.y_label)
        );

        // Data lines
        for line in &self.series {
            let mut path = String::new();
            for point in &line.points {
                let _ = write!(path, "{:.1},{:.1} ", x_of(point.date), y_of(point.price));
            }
            let _ = write!(
                svg,
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"/>\n",
                path.trim_end(),
                line.color
            );
        }

        // Legend, top right
        for (i, line) in self.series.iter().enumerate() {
            let y = MARGIN_TOP + 14.0 * i as f64;
            let x = w - MARGIN_RIGHT - 160.0;
            let _ = write!(
                svg,
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                x,
                y,
                x + 18.0,
                y,
                line.color
            );
            let _ = write!(
                svg,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"11\">{}</text>\n",
                x + 24.0,
                y + 4.0,
                escape(&line.label)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Combined date and value extent over every series, padded
    fn domain(&self) -> Option<(i32, i32, f64, f64)> {
        let mut x_min = i32::MAX;
        let mut x_max = i32::MIN;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for line in &self.series {
            for point in &line.points {
                let days = point.date.num_days_from_ce();
                x_min = x_min.min(days);
                x_max = x_max.max(days);
                y_min = y_min.min(point.price);
                y_max = y_max.max(point.price);
            }
        }

        if x_min > x_max {
            return None;
        }
        if x_min == x_max {
            x_max += 1;
        }

        let pad = ((y_max - y_min) * 0.05).max(0.5);
        Some((x_min, x_max, y_min - pad, y_max + pad))
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
