//! Summary statistics over the normalized price series

use crate::data::PriceSeries;
use chrono::NaiveDate;
use serde::Serialize;
use statrs::statistics::{Data, OrderStatistics, Statistics};

/// Descriptive statistics over the full series
#[derive(Debug, Clone, Serialize)]
pub struct DistributionStats {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Minimum price
    pub min: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median
    pub median: f64,
    /// 75th percentile
    pub p75: f64,
    /// Maximum price
    pub max: f64,
}

/// Big-number callouts plus the distribution table
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Most recent observation date
    pub latest_date: NaiveDate,
    /// Earliest observation date
    pub earliest_date: NaiveDate,
    /// Lowest price in the series
    pub min_price: f64,
    /// First date the minimum was reached
    pub min_price_date: NaiveDate,
    /// Highest price in the series
    pub max_price: f64,
    /// First date the maximum was reached
    pub max_price_date: NaiveDate,
    /// Descriptive statistics over the full series
    pub distribution: DistributionStats,
}

/// Compute the summary over a full series
///
/// Ties on the extreme prices resolve to the earliest date carrying the
/// tied value.
pub fn summarize(series: &PriceSeries) -> SummaryReport {
    let points = series.points();

    let mut min = points[0];
    let mut max = points[0];
    for point in &points[1..] {
        if point.price < min.price {
            min = *point;
        }
        if point.price > max.price {
            max = *point;
        }
    }

    SummaryReport {
        latest_date: series.last_date(),
        earliest_date: series.first_date(),
        min_price: min.price,
        min_price_date: min.date,
        max_price: max.price,
        max_price_date: max.date,
        distribution: distribution_stats(&series.prices()),
    }
}

fn distribution_stats(prices: &[f64]) -> DistributionStats {
    let mut ordered = Data::new(prices.to_vec());

    DistributionStats {
        count: prices.len(),
        mean: prices.mean(),
        std_dev: prices.std_dev(),
        min: prices.min(),
        p25: ordered.lower_quartile(),
        median: ordered.median(),
        p75: ordered.upper_quartile(),
        max: prices.max(),
    }
}

impl std::fmt::Display for DistributionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  count:  {}", self.count)?;
        writeln!(f, "  mean:   {:.4}", self.mean)?;
        writeln!(f, "  std:    {:.4}", self.std_dev)?;
        writeln!(f, "  min:    {:.4}", self.min)?;
        writeln!(f, "  25%:    {:.4}", self.p25)?;
        writeln!(f, "  50%:    {:.4}", self.median)?;
        writeln!(f, "  75%:    {:.4}", self.p75)?;
        writeln!(f, "  max:    {:.4}", self.max)?;
        Ok(())
    }
}
