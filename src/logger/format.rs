//! Access log format module
//!
//! Supported formats:
//! - `common` (Common Log Format plus the resolved chunk)
//! - `json` (one JSON object per line)

use chrono::Local;
use serde_json::json;

/// Access log entry for a single request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    pub status: u16,
    pub body_bytes: usize,
    /// Offset after lenient parsing, when the lookup route ran
    pub offset: Option<i64>,
    /// Chunk file the offset resolved to
    pub file: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new entry stamped with the current local time
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            status: 200,
            body_bytes: 0,
            offset: None,
            file: None,
            request_time_us: 0,
        }
    }

    /// Render the entry; unknown format names fall back to `common`
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_common(),
        }
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $bytes $file $request_time`
    fn format_common(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;
        format!(
            "{} - - [{}] \"{} {}\" {} {} {} {request_time:.3}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.request_uri(),
            self.status,
            self.body_bytes,
            self.file.as_deref().unwrap_or("-"),
        )
    }

    fn format_json(&self) -> String {
        json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "offset": self.offset,
            "file": self.file,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/foodstats".to_string(),
        );
        entry.query = Some("offset=658330908".to_string());
        entry.body_bytes = 1234;
        entry.offset = Some(658_330_908);
        entry.file = Some("3.json".to_string());
        entry.request_time_us = 12_000;
        entry
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format("common");
        assert!(log.starts_with("192.168.1.1 - - ["));
        assert!(log.contains("\"GET /foodstats?offset=658330908\" 200 1234 3.json"));
        assert!(log.ends_with(" 0.012"), "got: {log}");
    }

    #[test]
    fn test_format_common_without_match() {
        let mut entry = create_test_entry();
        entry.query = None;
        entry.file = None;
        let log = entry.format("something-else");
        assert!(log.contains("\"GET /foodstats\" 200 1234 - "));
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["remote_addr"], "192.168.1.1");
        assert_eq!(value["status"], 200);
        assert_eq!(value["offset"], 658_330_908);
        assert_eq!(value["file"], "3.json");
        assert!(value["time"].is_string());
    }

    #[test]
    fn test_format_json_escapes() {
        let mut entry = create_test_entry();
        entry.query = Some("offset=\"1\"".to_string());
        entry.file = None;
        let value: serde_json::Value = serde_json::from_str(&entry.format("json")).unwrap();
        assert_eq!(value["query"], "offset=\"1\"");
        assert!(value["file"].is_null());
    }
}
