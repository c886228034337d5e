//! # Brent Dashboard
//!
//! A Rust library for building a single-pass analytical dashboard over
//! the Brent crude oil benchmark price.
//!
//! ## Pipeline
//!
//! - Fetch the public IPEA daily price table (HTML)
//! - Normalize it into a date-indexed [`data::PriceSeries`]
//! - Compute summary statistics ([`stats::summarize`])
//! - Project a short-horizon forecast with additive exponential
//!   smoothing ([`forecast::forecast_series`])
//! - Render the report page ([`report::Report`])
//!
//! ## Quick Start
//!
//! ```no_run
//! use brent_dashboard::fetch::IpeaClient;
//! use brent_dashboard::data::PriceSeries;
//! use brent_dashboard::forecast::{forecast_series, ForecastRequest};
//! use brent_dashboard::report::{Report, ReportFormat};
//! use brent_dashboard::stats::summarize;
//!
//! # fn main() -> brent_dashboard::Result<()> {
//! let table = IpeaClient::new()?.fetch_price_table()?;
//! let series = PriceSeries::from_raw_table(&table)?;
//! let summary = summarize(&series);
//! let forecast = forecast_series(&series, &ForecastRequest::default())?;
//!
//! let report = Report::new(series, summary).with_forecast(forecast);
//! let html = report.generate(ReportFormat::Html);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod fetch;
pub mod forecast;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use crate::data::{PricePoint, PriceSeries};
pub use crate::error::{DashboardError, Result};
pub use crate::fetch::{IpeaClient, RawTable};
pub use crate::forecast::{ForecastRequest, ForecastResult, Seasonal, Trend};
pub use crate::report::{Report, ReportFormat};
pub use crate::stats::{summarize, SummaryReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
