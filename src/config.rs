//! Configuration module
//!
//! Layered configuration: programmatic defaults, an optional `config.toml`
//! file, and `DASHBOARD_*` environment variable overrides.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub resources: ResourcesConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Locations of the externally-owned content directories
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// Directory holding the JSON data files
    pub data_dir: PathBuf,
    /// Directory holding the dashboard HTML template
    pub template_dir: PathBuf,
    /// Directory holding browser-served assets
    pub static_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    pub show_headers: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            // Double-underscore separates nesting levels so single
            // underscores inside key names (max_body_size) survive:
            // DASHBOARD_SERVER__PORT -> server.port
            .add_source(
                config::Environment::with_prefix("DASHBOARD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("resources.data_dir", "data")?
            .set_default("resources.template_dir", "templates")?
            .set_default("resources.static_dir", "static")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("http.server_name", "MarketDashboard/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let cfg = Config::load().expect("defaults must deserialize");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.resources.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.resources.template_dir, PathBuf::from("templates"));
        assert_eq!(cfg.resources.static_dir, PathBuf::from("static"));
        assert!(cfg.logging.access_log);
        assert!(!cfg.http.enable_cors);
    }

    #[test]
    fn test_env_override_reaches_nested_key() {
        // Keys chosen so the parallel defaults test never reads them
        std::env::set_var("DASHBOARD_PERFORMANCE__READ_TIMEOUT", "45");
        std::env::set_var("DASHBOARD_HTTP__SERVER_NAME", "EnvOverride/1.0");

        let cfg = Config::load().expect("env overrides must deserialize");

        std::env::remove_var("DASHBOARD_PERFORMANCE__READ_TIMEOUT");
        std::env::remove_var("DASHBOARD_HTTP__SERVER_NAME");

        assert_eq!(cfg.performance.read_timeout, 45);
        assert_eq!(cfg.http.server_name, "EnvOverride/1.0");
    }

    #[test]
    fn test_socket_addr_parses() {
        let cfg = Config::load().expect("defaults must deserialize");
        let addr = cfg.socket_addr().expect("default address must parse");
        assert_eq!(addr.port(), cfg.server.port);
    }
}
