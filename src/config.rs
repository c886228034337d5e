//! Pipeline configuration constants
//!
//! Everything here is fixed at compile time. The binary and the tests
//! build their requests from the same values.

/// IPEA series page carrying the daily Brent spot price table
pub const SOURCE_URL: &str =
    "http://www.ipeadata.gov.br/ExibeSerie.aspx?module=m&serid=1650971490&oper=view";

/// Header label identifying candidate price tables in the document
pub const TABLE_HEADER_LABEL: &str = "Data";

/// Index of the consumed table among the matching ones, in document order
pub const TABLE_MATCH_INDEX: usize = 1;

/// HTTP timeout for the one-shot fetch
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Number of most-recent observations used for model fitting
pub const HISTORY_WINDOW_DAYS: usize = 180;

/// Number of future daily points to project
pub const HORIZON_DAYS: usize = 30;

/// Observations per seasonal cycle
pub const SEASONAL_PERIOD: usize = 30;

/// Default output path for the rendered report
pub const REPORT_PATH: &str = "brent_report.html";
