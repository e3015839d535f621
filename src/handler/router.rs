//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body-size
//! guard, and dispatch to the dashboard, data API, or static files.

use crate::api::{self, Resource};
use crate::config::Config;
use crate::handler::{dashboard, static_files};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

const FAVICON_PATHS: [&str; 2] = ["/favicon.ico", "/favicon.svg"];

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method, config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Check body size
    if let Some(resp) = check_body_size(&req, config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Log headers if enabled
    logger::log_headers_count(req.headers().len(), config.logging.show_headers);

    // 4. Dispatch
    let response = route_request(uri.path(), is_head, &config).await;

    if config.logging.access_log {
        let body_bytes = response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        logger::log_access(method, uri, response.status().as_u16(), body_bytes);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Route the request based on its path
pub(crate) async fn route_request(
    path: &str,
    is_head: bool,
    config: &Config,
) -> Response<Full<Bytes>> {
    // 1. Favicon
    if FAVICON_PATHS.contains(&path) {
        return static_files::serve_favicon(
            path,
            &config.resources.static_dir,
            &config.http,
            is_head,
        )
        .await;
    }

    // 2. Dashboard page
    if path == "/" {
        return dashboard::serve_dashboard(&config.resources.template_dir, &config.http, is_head)
            .await;
    }

    // 3. Data API
    if let Some(resource) = Resource::from_path(path) {
        return serve_resource(resource, config, is_head).await;
    }
    if path.starts_with("/api/") {
        return http::build_error_json_response(
            StatusCode::NOT_FOUND,
            "Not found",
            &config.http,
            is_head,
        );
    }

    // 4. Static assets
    if path.starts_with("/static/") {
        return static_files::serve_directory(
            path,
            &config.resources.static_dir,
            &config.http,
            is_head,
        )
        .await;
    }

    http::build_404_response()
}

/// Serve one of the fixed data resources, translating fetch errors into the
/// JSON error envelope.
async fn serve_resource(resource: Resource, config: &Config, is_head: bool) -> Response<Full<Bytes>> {
    match api::fetch(&config.resources.data_dir, resource).await {
        Ok(value) => http::build_json_response(&value, &config.http, is_head),
        Err(err) => {
            logger::log_error(&format!("{}: {err}", resource.api_path()));
            http::build_error_json_response(err.status(), err.message(), &config.http, is_head)
        }
    }
}
