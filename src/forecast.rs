//! Short-horizon forecasting with additive exponential smoothing
//!
//! The model family covers simple exponential smoothing, Holt's linear
//! trend and additive Holt-Winters, selected through the [`Trend`] and
//! [`Seasonal`] component switches. Smoothing coefficients are estimated
//! by a coarse grid search minimizing in-sample one-step-ahead squared
//! error; the public contract is the configuration in and the shape of
//! the projection out.

use crate::config;
use crate::data::{PricePoint, PriceSeries};
use crate::error::{DashboardError, Result};
use serde::Serialize;

/// Trend component of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    /// No trend term
    None,
    /// Additive linear trend
    Additive,
}

/// Seasonal component of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Seasonal {
    /// No seasonal term
    None,
    /// Additive seasonal offsets
    Additive,
}

/// Configuration for one forecasting run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForecastRequest {
    /// Number of most-recent observations used for fitting
    pub history_window_days: usize,
    /// Number of future daily points to produce
    pub horizon_days: usize,
    /// Trend component
    pub trend: Trend,
    /// Seasonal component
    pub seasonal: Seasonal,
    /// Observations per seasonal cycle
    pub seasonal_period: usize,
}

impl Default for ForecastRequest {
    fn default() -> Self {
        Self {
            history_window_days: config::HISTORY_WINDOW_DAYS,
            horizon_days: config::HORIZON_DAYS,
            trend: Trend::Additive,
            seasonal: Seasonal::Additive,
            seasonal_period: config::SEASONAL_PERIOD,
        }
    }
}

impl ForecastRequest {
    /// Check the request's internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.history_window_days == 0 {
            return Err(DashboardError::InvalidParameter(
                "history window must be positive".to_string(),
            ));
        }
        if self.horizon_days == 0 {
            return Err(DashboardError::InvalidParameter(
                "horizon must be positive".to_string(),
            ));
        }
        if self.seasonal == Seasonal::Additive {
            if self.seasonal_period < 2 {
                return Err(DashboardError::InvalidParameter(
                    "seasonal period must be at least 2".to_string(),
                ));
            }
            if self.history_window_days < 2 * self.seasonal_period {
                return Err(DashboardError::InvalidParameter(format!(
                    "history window of {} cannot hold two seasonal cycles of {}",
                    self.history_window_days, self.seasonal_period
                )));
            }
        }
        Ok(())
    }
}

/// Point forecast paired with its synthesized calendar date
///
/// Dates start the day after the fitted series ends and advance one
/// calendar day per point. Values are unconstrained floats; the model
/// does not clip negative projections.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResult {
    points: Vec<PricePoint>,
}

impl ForecastResult {
    /// Number of forecast points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the forecast holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Forecast points in chronological order
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Forecast values in chronological order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}

/// Additive exponential-smoothing model configuration
#[derive(Debug, Clone, Copy)]
pub struct EtsModel {
    trend: Trend,
    seasonal: Seasonal,
    period: usize,
}

/// State of a fitted model, ready to project forward
#[derive(Debug, Clone)]
pub struct FittedEts {
    trend: Trend,
    seasonal_mode: Seasonal,
    period: usize,
    // Seasonal slot the first forecast step falls into
    phase: usize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    level: f64,
    slope: f64,
    seasonal: Vec<f64>,
    sse: f64,
}

/// One full smoothing pass over the data for fixed coefficients
struct PassState {
    level: f64,
    slope: f64,
    seasonal: Vec<f64>,
    sse: f64,
}

impl EtsModel {
    /// Create a model with the given components
    pub fn new(trend: Trend, seasonal: Seasonal, period: usize) -> Result<Self> {
        if seasonal == Seasonal::Additive && period < 2 {
            return Err(DashboardError::InvalidParameter(
                "seasonal period must be at least 2".to_string(),
            ));
        }
        Ok(Self {
            trend,
            seasonal,
            period,
        })
    }

    /// Minimum observations the initialization scheme needs
    fn min_observations(&self) -> usize {
        match (self.seasonal, self.trend) {
            (Seasonal::Additive, _) => 2 * self.period,
            (Seasonal::None, Trend::Additive) => 3,
            (Seasonal::None, Trend::None) => 2,
        }
    }

    /// Estimate coefficients and return the fitted state
    ///
    /// Runs the smoothing recursion for every coefficient combination on
    /// a coarse grid and keeps the one with the lowest in-sample
    /// one-step-ahead squared error. Inactive components are pinned to a
    /// zero coefficient.
    pub fn fit(&self, values: &[f64]) -> Result<FittedEts> {
        if values.is_empty() {
            return Err(DashboardError::EmptySeries);
        }
        let required = self.min_observations();
        if values.len() < required {
            return Err(DashboardError::InsufficientHistory {
                required,
                actual: values.len(),
            });
        }

        let alphas: Vec<f64> = (1..20).map(|i| i as f64 * 0.05).collect();
        let betas: Vec<f64> = match self.trend {
            Trend::Additive => (1..10).map(|i| i as f64 * 0.1).collect(),
            Trend::None => vec![0.0],
        };
        let gammas: Vec<f64> = match self.seasonal {
            Seasonal::Additive => (1..10).map(|i| i as f64 * 0.1).collect(),
            Seasonal::None => vec![0.0],
        };

        let phase = match self.seasonal {
            Seasonal::Additive => values.len() % self.period,
            Seasonal::None => 0,
        };

        let mut best: Option<FittedEts> = None;
        for &alpha in &alphas {
            for &beta in &betas {
                for &gamma in &gammas {
                    let pass = self.smoothing_pass(values, alpha, beta, gamma);
                    let better = best
                        .as_ref()
                        .map(|b| pass.sse < b.sse)
                        .unwrap_or(true);
                    if better {
                        best = Some(FittedEts {
                            trend: self.trend,
                            seasonal_mode: self.seasonal,
                            period: self.period,
                            phase,
                            alpha,
                            beta,
                            gamma,
                            level: pass.level,
                            slope: pass.slope,
                            seasonal: pass.seasonal,
                            sse: pass.sse,
                        });
                    }
                }
            }
        }

        // The grids are never empty, so a best candidate always exists.
        best.ok_or_else(|| {
            DashboardError::InvalidParameter("empty coefficient grid".to_string())
        })
    }

    fn smoothing_pass(&self, values: &[f64], alpha: f64, beta: f64, gamma: f64) -> PassState {
        match self.seasonal {
            Seasonal::Additive => self.seasonal_pass(values, alpha, beta, gamma),
            Seasonal::None => self.plain_pass(values, alpha, beta),
        }
    }

    /// Holt-Winters recursion with additive seasonality
    ///
    /// Level starts at the mean of the first cycle, the trend at the
    /// difference between the first two cycle means, and the seasonal
    /// offsets at each first-cycle deviation from the level.
    fn seasonal_pass(&self, values: &[f64], alpha: f64, beta: f64, gamma: f64) -> PassState {
        let m = self.period;
        let first_cycle_mean = values[..m].iter().sum::<f64>() / m as f64;
        let second_cycle_mean = values[m..2 * m].iter().sum::<f64>() / m as f64;

        let mut level = first_cycle_mean;
        let mut slope = match self.trend {
            Trend::Additive => (second_cycle_mean - first_cycle_mean) / m as f64,
            Trend::None => 0.0,
        };
        let mut seasonal: Vec<f64> = values[..m].iter().map(|v| v - level).collect();
        let mut sse = 0.0;

        for (i, &value) in values.iter().enumerate().skip(m) {
            let idx = i % m;
            let drift = match self.trend {
                Trend::Additive => slope,
                Trend::None => 0.0,
            };

            let prediction = level + drift + seasonal[idx];
            let error = value - prediction;
            sse += error * error;

            let prev_level = level;
            let prev_seasonal = seasonal[idx];
            level = alpha * (value - prev_seasonal) + (1.0 - alpha) * (level + drift);
            if self.trend == Trend::Additive {
                slope = beta * (level - prev_level) + (1.0 - beta) * slope;
            }
            seasonal[idx] = gamma * (value - level) + (1.0 - gamma) * prev_seasonal;
        }

        PassState {
            level,
            slope,
            seasonal,
            sse,
        }
    }

    /// Simple or Holt recursion without seasonality
    fn plain_pass(&self, values: &[f64], alpha: f64, beta: f64) -> PassState {
        let mut level = values[0];
        let mut slope = match self.trend {
            Trend::Additive => values[1] - values[0],
            Trend::None => 0.0,
        };
        let mut sse = 0.0;

        for &value in &values[1..] {
            let drift = match self.trend {
                Trend::Additive => slope,
                Trend::None => 0.0,
            };

            let prediction = level + drift;
            let error = value - prediction;
            sse += error * error;

            let prev_level = level;
            level = alpha * value + (1.0 - alpha) * (level + drift);
            if self.trend == Trend::Additive {
                slope = beta * (level - prev_level) + (1.0 - beta) * slope;
            }
        }

        PassState {
            level,
            slope,
            seasonal: Vec::new(),
            sse,
        }
    }
}

impl FittedEts {
    /// Project `horizon` sequential point forecasts
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let mut projections = Vec::with_capacity(horizon);
        for h in 1..=horizon {
            let mut value = self.level;
            if self.trend == Trend::Additive {
                value += h as f64 * self.slope;
            }
            if self.seasonal_mode == Seasonal::Additive {
                value += self.seasonal[(self.phase + h - 1) % self.period];
            }
            projections.push(value);
        }
        projections
    }

    /// Selected level smoothing coefficient
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Selected trend smoothing coefficient
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Selected seasonal smoothing coefficient
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// In-sample sum of squared one-step-ahead errors
    pub fn sse(&self) -> f64 {
        self.sse
    }
}

/// Fit on the trailing window of a series and project forward
///
/// Selects the most recent `history_window_days` observations, fits the
/// configured model and pairs each projection with the next calendar
/// day after the series ends.
pub fn forecast_series(
    series: &PriceSeries,
    request: &ForecastRequest,
) -> Result<ForecastResult> {
    if series.is_empty() {
        return Err(DashboardError::EmptySeries);
    }
    request.validate()?;
    if series.len() < request.history_window_days {
        return Err(DashboardError::InsufficientHistory {
            required: request.history_window_days,
            actual: series.len(),
        });
    }

    let window = series.tail(request.history_window_days);
    let values: Vec<f64> = window.iter().map(|p| p.price).collect();

    let model = EtsModel::new(request.trend, request.seasonal, request.seasonal_period)?;
    let fitted = model.fit(&values)?;
    let projections = fitted.forecast(request.horizon_days);

    let mut date = series.last_date();
    let mut points = Vec::with_capacity(projections.len());
    for value in projections {
        date = date.succ_opt().ok_or_else(|| {
            DashboardError::InvalidParameter("forecast date out of calendar range".to_string())
        })?;
        points.push(PricePoint { date, price: value });
    }

    Ok(ForecastResult { points })
}
