//! Source table acquisition
//!
//! One synchronous GET against the IPEA series page, then extraction of
//! the price table from the returned document. The page lists several
//! tables whose text carries the `Data` header label; the second match
//! in document order is the one holding the date/price rows.

use crate::config;
use crate::error::{DashboardError, Result};
use scraper::{Html, Selector};
use std::time::Duration;

/// Raw tabular structure lifted from the HTML document
///
/// Rows of trimmed string cells, exactly as they appear in the table.
/// Header resolution is the normalizer's job, not the acquirer's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

/// HTTP client for the IPEA series page
#[derive(Debug, Clone)]
pub struct IpeaClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl IpeaClient {
    /// Create a client against the fixed series URL
    pub fn new() -> Result<Self> {
        Self::with_url(config::SOURCE_URL)
    }

    /// Create a client with a custom URL (for testing)
    pub fn with_url(url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetch the document and extract the price table
    ///
    /// No retry and no fallback source: any transport failure, non-2xx
    /// status or missing table is fatal to the run.
    pub fn fetch_price_table(&self) -> Result<RawTable> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;

        extract_price_table(&body)
    }
}

/// Extract the consumed table from an HTML document
///
/// Collects every `<table>` whose text contains the header label and
/// returns the one at the configured match index.
pub fn extract_price_table(html: &str) -> Result<RawTable> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table").expect("static selector");
    let row_selector = Selector::parse("tr").expect("static selector");
    let cell_selector = Selector::parse("th, td").expect("static selector");

    let mut matches = Vec::new();
    for table in document.select(&table_selector) {
        let text: String = table.text().collect();
        if !text.contains(config::TABLE_HEADER_LABEL) {
            continue;
        }

        let mut rows = Vec::new();
        for row in table.select(&row_selector) {
            let cells: Vec<String> = row
                .select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        matches.push(RawTable { rows });
    }

    matches
        .into_iter()
        .nth(config::TABLE_MATCH_INDEX)
        .ok_or_else(|| {
            DashboardError::Fetch(format!(
                "document has no table #{} matching '{}'",
                config::TABLE_MATCH_INDEX,
                config::TABLE_HEADER_LABEL
            ))
        })
}
