//! Foodstats route module
//!
//! Resolves the requested offset to a chunk file and serves its bytes.

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::query;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// Response plus what the lookup resolved, for the access log
pub struct LookupOutcome {
    pub response: Response<Full<Bytes>>,
    pub offset: i64,
    pub file: Option<&'static str>,
}

/// Serve `GET <route>?offset=<integer>`
///
/// - no matching range: 200 `{}`
/// - match: 200 with the chunk file verbatim, re-read on every request
/// - match but the file cannot be read: 500
pub async fn serve_offset(query: Option<&str>, state: &AppState, is_head: bool) -> LookupOutcome {
    let offset = query::parse_offset(query);
    let server_name = state.config.http.server_name.as_str();

    let Some(entry) = state.table.find(offset) else {
        logger::log_lookup(offset, None);
        return LookupOutcome {
            response: http::build_empty_object_response(server_name, is_head),
            offset,
            file: None,
        };
    };
    logger::log_lookup(offset, Some(entry.filename));

    let path = state.data_dir.join(entry.filename);
    let response = match fs::read(&path).await {
        Ok(content) => http::build_json_response(Bytes::from(content), server_name, is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read chunk file '{}' for offset {offset}: {e}",
                path.display()
            ));
            http::build_file_error_response(entry.filename, server_name)
        }
    };

    LookupOutcome {
        response,
        offset,
        file: Some(entry.filename),
    }
}
