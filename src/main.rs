//! Dashboard pipeline binary
//!
//! Fetches the source table, normalizes it, computes the summary, fits
//! the forecast and writes the rendered HTML report. A forecast failure
//! downgrades to a warning and the report is written without its
//! forecast sections; everything earlier in the pipeline is fatal.

use anyhow::{Context, Result};
use brent_dashboard::config;
use brent_dashboard::data::PriceSeries;
use brent_dashboard::fetch::IpeaClient;
use brent_dashboard::forecast::{forecast_series, ForecastRequest};
use brent_dashboard::report::{Report, ReportFormat};
use brent_dashboard::stats::summarize;
use log::{info, warn};

fn main() -> Result<()> {
    env_logger::init();

    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::REPORT_PATH.to_string());

    info!("fetching source table from {}", config::SOURCE_URL);
    let client = IpeaClient::new().context("building HTTP client")?;
    let table = client
        .fetch_price_table()
        .context("acquiring the source table")?;

    let series = PriceSeries::from_raw_table(&table).context("normalizing the series")?;
    info!(
        "normalized {} observations, {} through {}",
        series.len(),
        series.first_date(),
        series.last_date()
    );

    let summary = summarize(&series);
    let request = ForecastRequest::default();

    let forecast = match forecast_series(&series, &request) {
        Ok(forecast) => {
            info!(
                "forecast fitted on the last {} observations, {} points ahead",
                request.history_window_days,
                forecast.len()
            );
            Some(forecast)
        }
        Err(err) => {
            warn!("forecast skipped: {}", err);
            None
        }
    };

    let mut report =
        Report::new(series, summary).with_chart_window(request.history_window_days);
    if let Some(forecast) = forecast {
        report = report.with_forecast(forecast);
    }

    std::fs::write(&out_path, report.generate(ReportFormat::Html))
        .with_context(|| format!("writing report to {}", out_path))?;
    info!("report written to {}", out_path);

    Ok(())
}
