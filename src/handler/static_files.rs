//! Static file serving module
//!
//! Serves browser assets from the configured static directory with MIME
//! detection and directory-traversal protection.

use crate::config::HttpConfig;
use crate::http::{self, mime};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const STATIC_PREFIX: &str = "/static/";

/// Serve the favicon from the static directory
pub async fn serve_favicon(
    path: &str,
    static_dir: &Path,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let file_name = path.trim_start_matches('/');
    let file_path = static_dir.join(file_name);
    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type =
                mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            http::build_static_file_response(&content, content_type, http_config, is_head)
        }
        Err(_) => http::build_404_response(),
    }
}

/// Serve a file under the static directory for a `/static/...` request path
pub async fn serve_directory(
    path: &str,
    static_dir: &Path,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match load_from_directory(static_dir, path).await {
        Some((content, content_type)) => {
            http::build_static_file_response(&content, content_type, http_config, is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load a static file, refusing anything that escapes the static directory
async fn load_from_directory(static_dir: &Path, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = path.strip_prefix(STATIC_PREFIX)?;
    if relative.is_empty() {
        return None;
    }
    let file_path = static_dir.join(relative);

    // Canonicalized path must stay inside the static directory
    let static_dir_canonical = fs::canonicalize(static_dir).await.ok()?;
    let file_path_canonical = fs::canonicalize(&file_path).await.ok()?;
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        return None;
    }

    let content = fs::read(&file_path_canonical).await.ok()?;
    let content_type = mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
