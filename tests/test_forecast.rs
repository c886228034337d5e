use brent_dashboard::data::{PricePoint, PriceSeries};
use brent_dashboard::error::DashboardError;
use brent_dashboard::forecast::{forecast_series, ForecastRequest, Seasonal, Trend};
use chrono::NaiveDate;
use rand::Rng;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

/// Random-walk series of daily observations, strictly positive
fn generate_series(n: usize, start_price: f64) -> PriceSeries {
    let mut rng = rand::thread_rng();
    let mut price = start_price;
    let mut date = start_date();
    let mut points = Vec::with_capacity(n);

    for _ in 0..n {
        price = (price + rng.gen_range(-1.0..1.0)).max(1.0);
        points.push(PricePoint { date, price });
        date = date.succ_opt().unwrap();
    }

    PriceSeries::from_points(points).unwrap()
}

fn linear_series(n: usize, start: f64, step: f64) -> PriceSeries {
    let mut date = start_date();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        points.push(PricePoint {
            date,
            price: start + step * i as f64,
        });
        date = date.succ_opt().unwrap();
    }
    PriceSeries::from_points(points).unwrap()
}

#[test]
fn test_forecast_shape_invariant() {
    let series = generate_series(200, 80.0);
    let request = ForecastRequest::default();

    let forecast = forecast_series(&series, &request).unwrap();

    assert_eq!(forecast.len(), 30);

    let mut expected = series.last_date();
    for point in forecast.points() {
        expected = expected.succ_opt().unwrap();
        assert_eq!(point.date, expected, "dates must be consecutive, no gaps");
    }
}

#[test]
fn test_insufficient_history_fails_loudly() {
    let series = generate_series(10, 80.0);
    let request = ForecastRequest::default();

    let result = forecast_series(&series, &request);

    assert!(matches!(
        result,
        Err(DashboardError::InsufficientHistory {
            required: 180,
            actual: 10
        })
    ));
}

#[test]
fn test_window_equal_to_series_length_is_accepted() {
    let series = generate_series(180, 80.0);
    let request = ForecastRequest::default();

    let forecast = forecast_series(&series, &request).unwrap();
    assert_eq!(forecast.len(), 30);
}

#[test]
fn test_trend_model_follows_linear_series() {
    let series = linear_series(60, 10.0, 2.0);
    let request = ForecastRequest {
        history_window_days: 60,
        horizon_days: 5,
        trend: Trend::Additive,
        seasonal: Seasonal::None,
        seasonal_period: 0,
    };

    let forecast = forecast_series(&series, &request).unwrap();
    let values = forecast.values();

    // The series continues 130, 132, ... and the fit should track it.
    assert!((values[0] - 130.0).abs() < 2.0, "got {}", values[0]);
    for pair in values.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_negative_forecasts_are_not_clipped() {
    // Steadily falling series ending near zero keeps falling in the
    // projection; the contract passes negative values through.
    let series = linear_series(60, 59.0, -1.0);
    let request = ForecastRequest {
        history_window_days: 60,
        horizon_days: 10,
        trend: Trend::Additive,
        seasonal: Seasonal::None,
        seasonal_period: 0,
    };

    let forecast = forecast_series(&series, &request).unwrap();
    assert!(*forecast.values().last().unwrap() < 0.0);
}

#[test]
fn test_seasonal_model_tracks_cycle() {
    // Clean 12-observation cycle repeated five times, no trend.
    let cycle: Vec<f64> = (0..12)
        .map(|i| 50.0 + 10.0 * (i as f64 * std::f64::consts::PI / 6.0).sin())
        .collect();
    let mut date = start_date();
    let mut points = Vec::new();
    for _ in 0..5 {
        for &value in &cycle {
            points.push(PricePoint { date, price: value });
            date = date.succ_opt().unwrap();
        }
    }
    let series = PriceSeries::from_points(points).unwrap();

    let request = ForecastRequest {
        history_window_days: 60,
        horizon_days: 12,
        trend: Trend::None,
        seasonal: Seasonal::Additive,
        seasonal_period: 12,
    };

    let forecast = forecast_series(&series, &request).unwrap();
    let values = forecast.values();

    // The projected cycle should stay in phase with the input cycle.
    for (i, value) in values.iter().enumerate() {
        assert!(
            (value - cycle[i]).abs() < 3.0,
            "step {}: forecast {} drifted from cycle value {}",
            i,
            value,
            cycle[i]
        );
    }
}

#[test]
fn test_seasonal_window_must_hold_two_cycles() {
    let series = generate_series(200, 80.0);
    let request = ForecastRequest {
        history_window_days: 40,
        horizon_days: 10,
        trend: Trend::Additive,
        seasonal: Seasonal::Additive,
        seasonal_period: 30,
    };

    let result = forecast_series(&series, &request);
    assert!(matches!(result, Err(DashboardError::InvalidParameter(_))));
}

#[test]
fn test_zero_horizon_is_rejected() {
    let series = generate_series(200, 80.0);
    let request = ForecastRequest {
        horizon_days: 0,
        ..ForecastRequest::default()
    };

    let result = forecast_series(&series, &request);
    assert!(matches!(result, Err(DashboardError::InvalidParameter(_))));
}
