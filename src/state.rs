//! Application state shared between the HTTP handlers and the refresh task

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::Config;

/// Latest successfully computed donation totals.
///
/// The refresh task overwrites all applied fields under one write guard;
/// readers clone the whole struct under one read guard, so a request never
/// observes figures drawn from two different fetch cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct FundraisingSnapshot {
    /// Collected amount in euros, manual adjustment included
    pub collected: i64,
    /// Cumulative donation count
    pub donations: i64,
    /// Collected amount as a percentage of the yearly goal
    pub percent: f64,
    /// Time the last fetch applied at least one field
    pub last_updated: DateTime<Utc>,
}

impl Default for FundraisingSnapshot {
    fn default() -> Self {
        Self {
            collected: 0,
            donations: 0,
            percent: 0.0,
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<RwLock<FundraisingSnapshot>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(FundraisingSnapshot::default())),
            config: Arc::new(config),
        }
    }
}
