//! iRaiser counter API client

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::normalize::normalize;
use crate::error::CounterError;

/// Upstream field keys for the served year. The counter exposes every
/// campaign year in one object; only these two are read.
const DONATIONS_KEY: &str = "RE2025_nb";
const COLLECTED_KEY: &str = "RE2025_value";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Totals extracted from one counter response.
///
/// Either field may be missing upstream; an absent field leaves the
/// corresponding snapshot value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterTotals {
    pub donations: Option<i64>,
    pub collected: Option<i64>,
}

/// HTTP client for the iRaiser counter endpoint
pub struct CounterClient {
    http: Client,
    url: String,
}

impl CounterClient {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }

    /// Fetch the counter once and extract the 2025 totals.
    pub async fn fetch_totals(&self) -> Result<CounterTotals, CounterError> {
        let body = self.http.get(&self.url).send().await?.text().await?;

        parse_totals(&body)
    }
}

/// Normalize the raw body and pull the year's figures out of it.
///
/// The counter reports integral values but JSON numbers parse as floats,
/// so each field is read as f64 and truncated.
fn parse_totals(body: &str) -> Result<CounterTotals, CounterError> {
    let data: Value = serde_json::from_str(&normalize(body))?;

    Ok(CounterTotals {
        donations: data.get(DONATIONS_KEY).and_then(|v| v.as_f64()).map(|v| v as i64),
        collected: data.get(COLLECTED_KEY).and_then(|v| v.as_f64()).map(|v| v as i64),
    })
}
