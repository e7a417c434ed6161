//! Logger module
//!
//! Provides logging utilities for the mock server including:
//! - Server lifecycle logging
//! - Access logging in `common` or `json` format
//! - Leveled error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;
pub use writer::Level;

use crate::config::Config;
use crate::table::RangeTable;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Initialize the logger with configuration
///
/// Should be called once at application startup. An unknown level falls
/// back to `info`.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config.logging.level.parse::<Level>().unwrap_or_else(|e: String| {
        eprintln!("[WARN] {e}, using info");
        Level::Info
    });
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
        level,
    )
}

fn write(level: Level, message: &str) {
    match writer::get() {
        Some(w) => w.write(level, message),
        None => match level {
            Level::Error | Level::Warn => eprintln!("{message}"),
            Level::Info | Level::Debug => println!("{message}"),
        },
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, data_dir: &Path) {
    write(Level::Info, "======================================");
    write(Level::Info, "Foodstats mock server started");
    write(Level::Info, &format!("Listening on: http://{addr}"));
    write(
        Level::Info,
        &format!("Route: GET {}?offset=<integer>", config.data.route),
    );
    write(Level::Info, &format!("Data directory: {}", data_dir.display()));
    write(Level::Info, &format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write(Level::Info, &format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write(Level::Info, &format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write(Level::Info, &format!("Error log: {path}"));
    }
    write(Level::Info, "======================================\n");
}

pub fn log_table(table: &RangeTable) {
    write(Level::Info, &format!("[Table] {} range entries", table.len()));
    for entry in table {
        write(
            Level::Debug,
            &format!(
                "[Table] offset {}: [{}, {}) -> {}",
                entry.offset, entry.range.start, entry.range.end, entry.filename
            ),
        );
    }
}

pub fn log_missing_files(missing: &[PathBuf]) {
    for path in missing {
        log_warning(&format!(
            "Chunk file not found: {} (requests resolving to it will fail)",
            path.display()
        ));
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write(Level::Debug, &format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_lookup(offset: i64, file: Option<&str>) {
    write(
        Level::Debug,
        &format!("[Lookup] offset={offset} -> {}", file.unwrap_or("no match")),
    );
}

pub fn log_error(message: &str) {
    write(Level::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write(Level::Warn, &format!("[WARN] {message}"));
}

pub fn log_info(message: &str) {
    write(Level::Info, &format!("[INFO] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_shutdown(requests_served: u64) {
    write(Level::Info, "\n[Shutdown] Stopped accepting connections");
    write(
        Level::Info,
        &format!("[Shutdown] Requests served: {requests_served}"),
    );
}
