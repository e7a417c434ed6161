//! HTTP response building module
//!
//! Builders for every response the mock server emits. Builder failures are
//! logged and replaced with a bare response so handlers never fail.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body returned when no range matches the offset
pub const EMPTY_OBJECT: &str = "{}";

/// Allowed methods on the lookup route
pub const ALLOW: &str = "GET, HEAD";

/// Build 200 response carrying raw JSON bytes, passed through unmodified
pub fn build_json_response(data: Bytes, server_name: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 `{}` response for offsets outside every range
pub fn build_empty_object_response(server_name: &str, is_head: bool) -> Response<Full<Bytes>> {
    build_json_response(Bytes::from_static(EMPTY_OBJECT.as_bytes()), server_name, is_head)
}

/// Build 500 response for a chunk file that could not be read
pub fn build_file_error_response(filename: &str, server_name: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "data file unreadable",
        "file": filename,
    })
    .to_string();

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Content-Length", body.len())
        .header("Server", server_name)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut resp = Response::new(Full::new(Bytes::new()));
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "text/plain")
        .header("Allow", ALLOW)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_empty_object_response() {
        let resp = build_empty_object_response("test", false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], JSON_CONTENT_TYPE);
        assert_eq!(resp.headers()["content-length"], "2");
        assert_eq!(body_of(resp).await, Bytes::from_static(b"{}"));
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let resp = build_json_response(Bytes::from_static(b"[1,2,3]"), "test", true);
        assert_eq!(resp.headers()["content-length"], "7");
        assert!(body_of(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_file_error_response() {
        let resp = build_file_error_response("7.json", "test");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let value: serde_json::Value = serde_json::from_slice(&body_of(resp).await).unwrap();
        assert_eq!(value["file"], "7.json");
    }

    #[test]
    fn test_method_responses() {
        let resp = build_405_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], ALLOW);
        assert_eq!(build_404_response().status(), StatusCode::NOT_FOUND);
    }
}
