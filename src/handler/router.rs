//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, path match,
//! dispatch to the lookup route, and access logging.

use crate::config::AppState;
use crate::handler::foodstats;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Generic over the body type: the route only reads the URI.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    state.record_request();

    let method = req.method();
    let path = req.uri().path();
    let query = req.uri().query();

    let mut resolved = None;
    let response = if path != state.config.data.route {
        http::build_404_response()
    } else if let Some(resp) = check_http_method(method) {
        resp
    } else {
        let is_head = *method == Method::HEAD;
        let outcome = foodstats::serve_offset(query, &state, is_head).await;
        resolved = Some((outcome.offset, outcome.file));
        outcome.response
    };

    if state.config.logging.access_log {
        let mut entry = access_entry(peer_addr, method, path, query, &response);
        if let Some((offset, file)) = resolved {
            entry.offset = Some(offset);
            entry.file = file.map(ToString::to_string);
        }
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Reject everything but GET and HEAD on the lookup route
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Access log entry for a finished response, sized from the body itself
fn access_entry(
    peer_addr: SocketAddr,
    method: &Method,
    path: &str,
    query: Option<&str>,
    response: &Response<Full<Bytes>>,
) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), path.to_string());
    entry.query = query.map(ToString::to_string);
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry
}
