// Application state module
// Immutable configuration plus the range table, shared by every connection

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use super::types::Config;
use crate::table::RangeTable;

/// Application state
pub struct AppState {
    pub config: Config,
    pub table: RangeTable,
    pub data_dir: PathBuf,

    // Requests seen since startup; reported at shutdown only
    request_counter: AtomicU64,
}

impl AppState {
    /// Build the state once at startup
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            table: RangeTable::builtin(),
            data_dir: config.data_dir(),
            request_counter: AtomicU64::new(0),
        }
    }

    /// Count a request and return the new total
    pub fn record_request(&self) -> u64 {
        self.request_counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests_served(&self) -> u64 {
        self.request_counter.load(Ordering::Relaxed)
    }
}
