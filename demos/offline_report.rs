//! Render a full report from a synthetic series, no network involved
//!
//! ```bash
//! cargo run --example offline_report
//! ```

use brent_dashboard::data::{PricePoint, PriceSeries};
use brent_dashboard::forecast::{forecast_series, ForecastRequest};
use brent_dashboard::report::{Report, ReportFormat};
use brent_dashboard::stats::summarize;
use chrono::NaiveDate;
use rand::Rng;

fn main() -> anyhow::Result<()> {
    let series = synthetic_series(400, 75.0);
    let summary = summarize(&series);

    println!("{}", serde_json::to_string_pretty(&summary)?);

    let request = ForecastRequest::default();
    let forecast = forecast_series(&series, &request)?;

    let report = Report::new(series, summary)
        .with_title("Brent Dashboard (synthetic data)")
        .with_chart_window(request.history_window_days)
        .with_forecast(forecast);

    println!("{}", report.generate(ReportFormat::Text));

    let path = "offline_report.html";
    std::fs::write(path, report.generate(ReportFormat::Html))?;
    println!("HTML report written to {}", path);

    Ok(())
}

/// Trending random walk with a monthly cycle layered on top
fn synthetic_series(n: usize, start_price: f64) -> PriceSeries {
    let mut rng = rand::thread_rng();
    let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let mut level = start_price;
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        level = (level + rng.gen_range(-0.8..0.9)).max(5.0);
        let cycle = 3.0 * (i as f64 * std::f64::consts::TAU / 30.0).sin();
        points.push(PricePoint {
            date,
            price: level + cycle,
        });
        date = date.succ_opt().expect("date in range");
    }

    PriceSeries::from_points(points).expect("valid synthetic series")
}
