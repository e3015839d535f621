//! Logger module
//!
//! println-based logging: server lifecycle events to stdout, warnings and
//! errors to stderr, and a CLF-like timestamped access line per request.

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Market dashboard server started");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Data directory: {}", config.resources.data_dir.display());
    println!("Template directory: {}", config.resources.template_dir.display());
    println!("Static directory: {}", config.resources.static_dir.display());
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_connection_timeout(secs: u64) {
    eprintln!("[WARN] Connection timeout after {secs} seconds");
}

pub fn log_connection_rejected(active: usize, max: u64) {
    eprintln!("[WARN] Max connections reached: {active}/{max}. Connection rejected.");
}

/// CLF-like access line: `[28/Aug/2026:10:01:02 +0000] "GET /api/marketShare" 200 42`
pub fn log_access(method: &Method, uri: &Uri, status: u16, body_bytes: usize) {
    println!(
        "[{}] \"{} {}\" {} {}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        uri.path(),
        status,
        body_bytes,
    );
}

pub fn log_headers_count(count: usize, show: bool) {
    if show {
        println!("[Headers] Count: {count}");
    }
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}
