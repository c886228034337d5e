use brent_dashboard::data::{PricePoint, PriceSeries};
use brent_dashboard::forecast::{forecast_series, ForecastRequest, Seasonal, Trend};
use brent_dashboard::report::{Report, ReportFormat};
use brent_dashboard::stats::summarize;
use chrono::NaiveDate;

fn sample_series(n: usize) -> PriceSeries {
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        points.push(PricePoint {
            date,
            price: 70.0 + (i as f64 * 0.7).sin() * 5.0,
        });
        date = date.succ_opt().unwrap();
    }
    PriceSeries::from_points(points).unwrap()
}

fn sample_report(with_forecast: bool) -> Report {
    let series = sample_series(60);
    let summary = summarize(&series);

    let mut report = Report::new(series.clone(), summary).with_chart_window(30);
    if with_forecast {
        let request = ForecastRequest {
            history_window_days: 30,
            horizon_days: 10,
            trend: Trend::Additive,
            seasonal: Seasonal::None,
            seasonal_period: 0,
        };
        let forecast = forecast_series(&series, &request).unwrap();
        report = report.with_forecast(forecast);
    }
    report
}

#[test]
fn test_html_sections_in_order() {
    let html = sample_report(true).generate(ReportFormat::Html);

    let markers = [
        "Big Numbers",
        "Data updated through",
        "Monitored since",
        "Lowest price on record",
        "Highest price on record",
        "Analysis",
        "Price Over Time",
        "Predictive Model",
    ];

    let mut cursor = 0;
    for marker in markers {
        let position = html[cursor..]
            .find(marker)
            .unwrap_or_else(|| panic!("section '{}' missing or out of order", marker));
        cursor += position;
    }
}

#[test]
fn test_html_embeds_two_charts_with_forecast() {
    let html = sample_report(true).generate(ReportFormat::Html);
    assert_eq!(html.matches("<svg").count(), 2);
}

#[test]
fn test_forecast_sections_omitted_without_forecast() {
    let report = sample_report(false);
    assert!(!report.has_forecast());

    let html = report.generate(ReportFormat::Html);
    assert_eq!(html.matches("<svg").count(), 1);
    assert!(!html.contains("Predictive Model"));
}

#[test]
fn test_charts_are_independent_artifacts() {
    let report = sample_report(true);
    let historical = report.historical_chart();

    let request = ForecastRequest {
        history_window_days: 30,
        horizon_days: 10,
        trend: Trend::Additive,
        seasonal: Seasonal::None,
        seasonal_period: 0,
    };
    let forecast = forecast_series(&sample_series(60), &request).unwrap();
    let combined = report.forecast_chart(&forecast);

    assert_eq!(historical.series_count(), 1);
    assert_eq!(combined.series_count(), 2);

    // Rendering one chart leaves the other untouched.
    let before = combined.to_svg();
    let _ = historical.to_svg();
    assert_eq!(combined.to_svg(), before);
}

#[test]
fn test_text_format_lists_forecast_points() {
    let text = sample_report(true).generate(ReportFormat::Text);

    assert!(text.contains("BIG NUMBERS"));
    assert!(text.contains("FORECAST, NEXT 10 DAYS"));
    assert!(text.matches("US$").count() >= 12);
}

#[test]
fn test_markdown_format_has_tables() {
    let markdown = sample_report(true).generate(ReportFormat::Markdown);

    assert!(markdown.contains("# Brent Crude Oil Price Dashboard"));
    assert!(markdown.contains("| Metric | Value |"));
    assert!(markdown.contains("| Statistic | Value |"));
    assert!(markdown.contains("## Forecast, Next 10 Days"));
}

#[test]
fn test_callout_values_render_in_source_format() {
    let html = sample_report(false).generate(ReportFormat::Html);

    // Dates as dd/mm/yyyy, prices with two decimals.
    assert!(html.contains("01/01/2024"));
    assert!(html.contains("US$ 65."), "min callout missing: {}", html);
}
