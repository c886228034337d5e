//! Report assembly and rendering
//!
//! Composes the dashboard page from the summary, the historical series
//! and an optional forecast, in a fixed section order: metric callouts,
//! descriptive statistics, commentary, historical chart, commentary,
//! combined historical and forecast chart, commentary. The forecast
//! sections are simply omitted when no forecast is attached.

pub mod chart;

use crate::data::PriceSeries;
use crate::forecast::ForecastResult;
use crate::stats::SummaryReport;
use self::chart::LineChart;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const HISTORICAL_COLOR: &str = "#1f4fd8";
const FORECAST_COLOR: &str = "#d82f2f";

const STATS_COMMENTARY: &str = "The distribution reflects a historically volatile \
market, shaped by economic crises, global conflicts and shifts in energy demand. \
The spread between the quartiles and the extremes gives a sense of how wide the \
swings have been over the observed period.";

const HISTORY_COMMENTARY: &str = "Long stretches of the series show sustained \
climbs followed by sharp corrections, with pronounced drawdowns around global \
downturns and supply gluts. The most recent years remain choppy, so the level \
alone says little without the surrounding trend.";

const FORECAST_COMMENTARY: &str = "The projection extends the level, trend and \
monthly cycle fitted on the most recent training window. Point forecasts at \
this horizon are indicative only; external shocks are outside the model and \
the projection should be re-read against current events.";

/// Output format for a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text
    Text,
    /// Markdown
    Markdown,
    /// Self-contained HTML page
    Html,
}

/// Assembled dashboard report
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    generated_at: DateTime<Utc>,
    summary: SummaryReport,
    series: PriceSeries,
    forecast: Option<ForecastResult>,
    chart_window: usize,
}

impl Report {
    /// Create a report over a series and its summary
    pub fn new(series: PriceSeries, summary: SummaryReport) -> Self {
        let chart_window = series.len();
        Self {
            title: "Brent Crude Oil Price Dashboard".to_string(),
            generated_at: Utc::now(),
            summary,
            series,
            forecast: None,
            chart_window,
        }
    }

    /// Set a custom title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Attach a forecast, enabling the forecast sections
    pub fn with_forecast(mut self, forecast: ForecastResult) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// Limit the combined chart to the most recent `n` observations
    pub fn with_chart_window(mut self, n: usize) -> Self {
        self.chart_window = n;
        self
    }

    /// Whether the forecast sections will render
    pub fn has_forecast(&self) -> bool {
        self.forecast.is_some()
    }

    /// Render the report in the requested format
    pub fn generate(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.generate_text(),
            ReportFormat::Markdown => self.generate_markdown(),
            ReportFormat::Html => self.generate_html(),
        }
    }

    /// Chart of the full historical series
    pub fn historical_chart(&self) -> LineChart {
        LineChart::new("Brent Crude Oil Price Over Time").add_series(
            "Brent price",
            HISTORICAL_COLOR,
            self.series.points(),
        )
    }

    /// Chart of the recent window with the forecast overlaid
    pub fn forecast_chart(&self, forecast: &ForecastResult) -> LineChart {
        LineChart::new("Brent Price Forecast, Exponential Smoothing")
            .add_series(
                "Recent history",
                HISTORICAL_COLOR,
                self.series.tail(self.chart_window),
            )
            .add_series("Forecast", FORECAST_COLOR, forecast.points())
    }

    fn generate_text(&self) -> String {
        let mut out = String::new();
        let s = &self.summary;

        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(
            out,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out, "{}", "=".repeat(60));
        let _ = writeln!(out);

        let _ = writeln!(out, "BIG NUMBERS");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "Data updated through: {}", s.latest_date.format("%d/%m/%Y"));
        let _ = writeln!(out, "Monitored since:      {}", s.earliest_date.format("%d/%m/%Y"));
        let _ = writeln!(
            out,
            "Lowest price:  US$ {:.2} (reached {})",
            s.min_price,
            s.min_price_date.format("%d/%m/%Y")
        );
        let _ = writeln!(
            out,
            "Highest price: US$ {:.2} (reached {})",
            s.max_price,
            s.max_price_date.format("%d/%m/%Y")
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "DESCRIPTIVE STATISTICS");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = write!(out, "{}", s.distribution);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", STATS_COMMENTARY);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", HISTORY_COMMENTARY);

        if let Some(forecast) = &self.forecast {
            let _ = writeln!(out);
            let _ = writeln!(out, "FORECAST, NEXT {} DAYS", forecast.len());
            let _ = writeln!(out, "{}", "-".repeat(40));
            for point in forecast.points() {
                let _ = writeln!(
                    out,
                    "  {}  US$ {:.2}",
                    point.date.format("%d/%m/%Y"),
                    point.price
                );
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", FORECAST_COMMENTARY);
        }

        out
    }

    fn generate_markdown(&self) -> String {
        let mut out = String::new();
        let s = &self.summary;

        let _ = writeln!(out, "# {}\n", self.title);
        let _ = writeln!(
            out,
            "*Generated: {}*\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        let _ = writeln!(out, "## Big Numbers\n");
        let _ = writeln!(out, "| Metric | Value |");
        let _ = writeln!(out, "|--------|-------|");
        let _ = writeln!(
            out,
            "| Data updated through | {} |",
            s.latest_date.format("%d/%m/%Y")
        );
        let _ = writeln!(
            out,
            "| Monitored since | {} |",
            s.earliest_date.format("%d/%m/%Y")
        );
        let _ = writeln!(
            out,
            "| Lowest price | US$ {:.2} ({}) |",
            s.min_price,
            s.min_price_date.format("%d/%m/%Y")
        );
        let _ = writeln!(
            out,
            "| Highest price | US$ {:.2} ({}) |",
            s.max_price,
            s.max_price_date.format("%d/%m/%Y")
        );
        let _ = writeln!(out);

        let d = &s.distribution;
        let _ = writeln!(out, "## Descriptive Statistics\n");
        let _ = writeln!(out, "| Statistic | Value |");
        let _ = writeln!(out, "|-----------|-------|");
        let _ = writeln!(out, "| count | {} |", d.count);
        let _ = writeln!(out, "| mean | {:.4} |", d.mean);
        let _ = writeln!(out, "| std | {:.4} |", d.std_dev);
        let _ = writeln!(out, "| min | {:.4} |", d.min);
        let _ = writeln!(out, "| 25% | {:.4} |", d.p25);
        let _ = writeln!(out, "| 50% | {:.4} |", d.median);
        let _ = writeln!(out, "| 75% | {:.4} |", d.p75);
        let _ = writeln!(out, "| max | {:.4} |", d.max);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}\n", STATS_COMMENTARY);
        let _ = writeln!(out, "{}", HISTORY_COMMENTARY);

        if let Some(forecast) = &self.forecast {
            let _ = writeln!(out, "\n## Forecast, Next {} Days\n", forecast.len());
            let _ = writeln!(out, "| Date | Forecast |");
            let _ = writeln!(out, "|------|----------|");
            for point in forecast.points() {
                let _ = writeln!(
                    out,
                    "| {} | US$ {:.2} |",
                    point.date.format("%d/%m/%Y"),
                    point.price
                );
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", FORECAST_COMMENTARY);
        }

        out
    }

    fn generate_html(&self) -> String {
        let mut out = String::new();
        let s = &self.summary;

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", self.title);
        out.push_str("<style>\n");
        out.push_str("body { font-family: Arial, sans-serif; max-width: 1000px; margin: 0 auto; padding: 20px; }\n");
        out.push_str("h1 { color: #333; border-bottom: 2px solid #0145AC; padding-bottom: 10px; }\n");
        out.push_str("h2 { color: #555; margin-top: 30px; }\n");
        out.push_str(".cards { display: flex; gap: 16px; }\n");
        out.push_str(".card { flex: 1; border: 1px solid #ddd; border-radius: 5px; padding: 12px; }\n");
        out.push_str(".card h2 { color: #0145AC; margin: 0 0 6px 0; }\n");
        out.push_str(".card span { font-weight: bold; }\n");
        out.push_str("table { border-collapse: collapse; width: 100%; margin: 20px 0; }\n");
        out.push_str("th, td { border: 1px solid #ddd; padding: 10px; text-align: left; }\n");
        out.push_str("th { background-color: #0145AC; color: white; }\n");
        out.push_str("tr:nth-child(even) { background-color: #f2f2f2; }\n");
        out.push_str(".commentary { background-color: #f9f9f9; padding: 16px; border-radius: 5px; }\n");
        out.push_str("</style>\n</head>\n<body>\n");

        let _ = writeln!(out, "<h1>{}</h1>", self.title);
        let _ = writeln!(
            out,
            "<p><em>Generated: {}</em></p>",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        // Big number callouts
        out.push_str("<h2>Big Numbers</h2>\n<div class=\"cards\">\n");
        let _ = writeln!(
            out,
            "<div class=\"card\"><h2>{}</h2><span>Data updated through</span></div>",
            s.latest_date.format("%d/%m/%Y")
        );
        let _ = writeln!(
            out,
            "<div class=\"card\"><h2>{}</h2><span>Monitored since</span></div>",
            s.earliest_date.format("%d/%m/%Y")
        );
        let _ = writeln!(
            out,
            "<div class=\"card\"><h2>US$ {:.2}</h2><span>Lowest price on record<br>(reached {})</span></div>",
            s.min_price,
            s.min_price_date.format("%d/%m/%Y")
        );
        let _ = writeln!(
            out,
            "<div class=\"card\"><h2>US$ {:.2}</h2><span>Highest price on record<br>(reached {})</span></div>",
            s.max_price,
            s.max_price_date.format("%d/%m/%Y")
        );
        out.push_str("</div>\n");

        // Descriptive statistics
        let d = &s.distribution;
        out.push_str("<h2>Analysis</h2>\n");
        out.push_str("<table>\n<tr><th>Statistic</th><th>Value</th></tr>\n");
        let _ = writeln!(out, "<tr><td>count</td><td>{}</td></tr>", d.count);
        let _ = writeln!(out, "<tr><td>mean</td><td>{:.4}</td></tr>", d.mean);
        let _ = writeln!(out, "<tr><td>std</td><td>{:.4}</td></tr>", d.std_dev);
        let _ = writeln!(out, "<tr><td>min</td><td>{:.4}</td></tr>", d.min);
        let _ = writeln!(out, "<tr><td>25%</td><td>{:.4}</td></tr>", d.p25);
        let _ = writeln!(out, "<tr><td>50%</td><td>{:.4}</td></tr>", d.median);
        let _ = writeln!(out, "<tr><td>75%</td><td>{:.4}</td></tr>", d.p75);
        let _ = writeln!(out, "<tr><td>max</td><td>{:.4}</td></tr>", d.max);
        out.push_str("</table>\n");
        let _ = writeln!(out, "<div class=\"commentary\"><p>{}</p></div>", STATS_COMMENTARY);

        // Historical chart
        out.push_str("<h2>Price Over Time</h2>\n");
        out.push_str(&self.historical_chart().to_svg());
        let _ = writeln!(out, "<div class=\"commentary\"><p>{}</p></div>", HISTORY_COMMENTARY);

        // Forecast sections
        if let Some(forecast) = &self.forecast {
            out.push_str("<h2>Predictive Model, Exponential Smoothing</h2>\n");
            out.push_str(&self.forecast_chart(forecast).to_svg());
            let _ = writeln!(
                out,
                "<div class=\"commentary\"><p>{}</p></div>",
                FORECAST_COMMENTARY
            );
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}
