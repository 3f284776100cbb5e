//! Background refresh task
//!
//! Keeps the shared snapshot fresh on a fixed interval, independently of
//! request traffic. Failed attempts leave the previous snapshot
//! authoritative and the loop itself never stops.

use std::time::Duration;

use chrono::Utc;

use super::client::{CounterClient, CounterTotals};
use crate::config::Config;
use crate::state::{AppState, FundraisingSnapshot};

/// Delay between the end of one fetch cycle and the start of the next.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Apply one set of extracted totals to the snapshot.
///
/// Fields apply independently; a missing field keeps its previous value.
/// The percentage is recomputed whenever the collected amount changes, and
/// `last_updated` is stamped when at least one field applied.
pub fn apply_totals(snapshot: &mut FundraisingSnapshot, totals: CounterTotals, config: &Config) {
    if let Some(donations) = totals.donations {
        snapshot.donations = donations;
    }
    if let Some(value) = totals.collected {
        snapshot.collected = value + config.adjustment;
        snapshot.percent = snapshot.collected as f64 / config.goal as f64 * 100.0;
    }
    if totals.donations.is_some() || totals.collected.is_some() {
        snapshot.last_updated = Utc::now();
    }
}

/// Run one fetch-and-apply cycle.
///
/// Transport and parse failures are logged and the snapshot is left
/// untouched.
pub async fn refresh_once(client: &CounterClient, state: &AppState) {
    tracing::info!("querying iRaiser counter");

    let totals = match client.fetch_totals().await {
        Ok(totals) => totals,
        Err(e) => {
            tracing::error!(error = %e, "counter refresh failed");
            return;
        }
    };

    let mut snapshot = state.snapshot.write().await;
    apply_totals(&mut snapshot, totals, &state.config);
    tracing::debug!(
        collected = snapshot.collected,
        donations = snapshot.donations,
        "snapshot updated"
    );
}

/// Refresh forever: once at startup, then again after each completed cycle
/// plus the fixed interval.
pub async fn run(client: CounterClient, state: AppState) {
    loop {
        refresh_once(&client, &state).await;
        tokio::time::sleep(REFRESH_INTERVAL).await;
    }
}
