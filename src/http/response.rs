//! HTTP response building module
//!
//! Builders for the status codes this server emits. Builder failures fall
//! back to a plain response rather than panicking.

use crate::config::HttpConfig;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

fn log_build_error(kind: &str, err: &hyper::http::Error) {
    eprintln!("[ERROR] Failed to build {kind} response: {err}");
}

/// Body bytes for a possibly-HEAD request
fn body_for(content: Bytes, is_head: bool) -> Bytes {
    if is_head {
        Bytes::new()
    } else {
        content
    }
}

/// Build a 200 response carrying a JSON document
pub fn build_json_response(
    json: &serde_json::Value,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = json.to_string();
    let content_length = body.len();

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .header("Server", &http_config.server_name);

    if http_config.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(body_for(Bytes::from(body), is_head)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build an error response with a JSON envelope `{"error": <message>}`
pub fn build_error_json_response(
    status: StatusCode,
    message: &str,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message }).to_string();
    let content_length = body.len();

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .header("Server", &http_config.server_name);

    if http_config.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(body_for(Bytes::from(body), is_head)))
        .unwrap_or_else(|e| {
            log_build_error("error JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 HTML response
pub fn build_html_response(
    html: String,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = html.len();

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .header("Server", &http_config.server_name);

    if http_config.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(body_for(Bytes::from(html), is_head)))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response for a static asset
pub fn build_static_file_response(
    content: &[u8],
    content_type: &str,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Server", &http_config.server_name);

    if http_config.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder
        .body(Full::new(body_for(Bytes::copy_from_slice(content), is_head)))
        .unwrap_or_else(|e| {
            log_build_error("static file", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response (non-API paths)
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
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::PAYLOAD_TOO_LARGE)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}
