//! Dashboard page module
//!
//! Serves the HTML dashboard from the template directory, with a built-in
//! fallback page when the template is missing.

use crate::config::HttpConfig;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const TEMPLATE_FILE: &str = "index.html";

/// Serve the dashboard page
pub async fn serve_dashboard(
    template_dir: &Path,
    http_config: &HttpConfig,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let html = match fs::read_to_string(template_dir.join(TEMPLATE_FILE)).await {
        Ok(content) => content,
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to load {TEMPLATE_FILE} from {}: {e}, using fallback page",
                template_dir.display()
            ));
            fallback_page()
        }
    };
    http::build_html_response(html, http_config, is_head)
}

fn fallback_page() -> String {
    String::from(
        r"<!DOCTYPE html>
<html>
<head><title>Market Analysis Dashboard</title></head>
<body>
<h1>Market Analysis Dashboard</h1>
<p>Dashboard template not found. Data endpoints remain available under /api/.</p>
</body>
</html>",
    )
}
