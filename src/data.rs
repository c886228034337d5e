//! Price series handling and normalization
//!
//! The normalizer turns the raw string table pulled off the source page
//! into a [`PriceSeries`]: dates parsed from `dd/mm/yyyy` text, prices
//! parsed from comma-decimal text, rows sorted chronologically. Every
//! downstream step (summary statistics, forecasting, rendering) reads
//! from this one canonical form.

use crate::config;
use crate::error::{DashboardError, Result};
use crate::fetch::RawTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the source table
const DATE_FORMAT: &str = "%d/%m/%Y";

/// A single daily observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Closing price in US dollars
    pub price: f64,
}

/// Date-indexed price series, unique dates in ascending order
///
/// Constructed once by the normalizer and never mutated afterwards.
/// Construction enforces the invariants the rest of the pipeline relies
/// on: non-empty, dates unique, strictly ascending, prices finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Normalize a raw table into a price series
    ///
    /// The first row must carry the expected header label so it can be
    /// promoted to a header and dropped; a table without a recognizable
    /// header fails instead of guessing. Rows are then parsed cell by
    /// cell and sorted by date.
    pub fn from_raw_table(table: &RawTable) -> Result<Self> {
        let data_rows = resolve_header(&table.rows)?;

        let mut points = Vec::with_capacity(data_rows.len());
        for (i, row) in data_rows.iter().enumerate() {
            points.push(parse_row(row, i)?);
        }

        Self::from_points(points)
    }

    /// Build a series from already-parsed observations
    ///
    /// Sorts ascending by date and checks the series invariants.
    pub fn from_points(mut points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(DashboardError::MalformedInput(
                "normalized series is empty".to_string(),
            ));
        }

        for point in &points {
            if !point.price.is_finite() {
                return Err(DashboardError::MalformedInput(format!(
                    "non-finite price for {}",
                    point.date
                )));
            }
        }

        points.sort_by_key(|p| p.date);

        for pair in points.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(DashboardError::MalformedInput(format!(
                    "duplicate date {}",
                    pair[0].date
                )));
            }
        }

        Ok(Self { points })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series is empty
    ///
    /// Always false for a constructed series; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in chronological order
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Earliest observation date
    pub fn first_date(&self) -> NaiveDate {
        self.points[0].date
    }

    /// Most recent observation date
    pub fn last_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].date
    }

    /// Observation dates in chronological order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Prices in chronological order
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// The most recent `n` observations, chronological order preserved
    ///
    /// Returns the whole series when `n` exceeds its length.
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Price observed on a given date, if present
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].price)
    }
}

/// Promote the header row, returning the remaining data rows
///
/// The source page does not mark its header row, so the table arrives
/// with the labels as its first data row. That row is only promoted when
/// it actually carries the expected label; anything else is rejected.
fn resolve_header(rows: &[Vec<String>]) -> Result<&[Vec<String>]> {
    let first = rows.first().ok_or_else(|| {
        DashboardError::MalformedInput("table has no rows".to_string())
    })?;

    let has_label = first
        .first()
        .map(|cell| cell.trim().eq_ignore_ascii_case(config::TABLE_HEADER_LABEL))
        .unwrap_or(false);

    if !has_label {
        return Err(DashboardError::MalformedInput(format!(
            "expected header label '{}', found {:?}",
            config::TABLE_HEADER_LABEL,
            first.first().map(String::as_str).unwrap_or("")
        )));
    }

    Ok(&rows[1..])
}

/// Parse one data row into an observation
///
/// Dates are `dd/mm/yyyy`; prices use a comma decimal separator and no
/// thousands separator. `row_index` is zero-based over the data rows and
/// only used for error reporting.
fn parse_row(row: &[String], row_index: usize) -> Result<PricePoint> {
    if row.len() < 2 {
        return Err(DashboardError::MalformedInput(format!(
            "row {}: expected 2 columns, found {}",
            row_index,
            row.len()
        )));
    }

    let date_text = row[0].trim();
    let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
        DashboardError::MalformedInput(format!(
            "row {}: unparseable date '{}'",
            row_index, date_text
        ))
    })?;

    let price_text = row[1].trim().replace(',', ".");
    let price: f64 = price_text.parse().map_err(|_| {
        DashboardError::MalformedInput(format!(
            "row {}: unparseable price '{}'",
            row_index,
            row[1].trim()
        ))
    })?;

    Ok(PricePoint { date, price })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_row_comma_decimal() {
        let row = vec!["05/01/2024".to_string(), "78,42".to_string()];
        let point = parse_row(&row, 0).unwrap();
        assert_eq!(point.date, day(2024, 1, 5));
        assert_eq!(point.price, 78.42);
    }

    #[test]
    fn test_from_points_sorts_descending_input() {
        let points = vec![
            PricePoint { date: day(2024, 1, 3), price: 80.0 },
            PricePoint { date: day(2024, 1, 1), price: 50.0 },
            PricePoint { date: day(2024, 1, 2), price: 30.0 },
        ];
        let series = PriceSeries::from_points(points).unwrap();
        assert_eq!(series.first_date(), day(2024, 1, 1));
        assert_eq!(series.last_date(), day(2024, 1, 3));
        assert_eq!(series.prices(), vec![50.0, 30.0, 80.0]);
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let points = vec![
            PricePoint { date: day(2024, 1, 1), price: 50.0 },
            PricePoint { date: day(2024, 1, 1), price: 51.0 },
        ];
        let result = PriceSeries::from_points(points);
        assert!(matches!(result, Err(DashboardError::MalformedInput(_))));
    }

    #[test]
    fn test_tail_clamps_to_length() {
        let points = vec![
            PricePoint { date: day(2024, 1, 1), price: 1.0 },
            PricePoint { date: day(2024, 1, 2), price: 2.0 },
        ];
        let series = PriceSeries::from_points(points).unwrap();
        assert_eq!(series.tail(10).len(), 2);
        assert_eq!(series.tail(1)[0].price, 2.0);
    }
}
