//! Resource endpoint resolver
//!
//! The fixed set of dashboard resources, their on-disk file names, and the
//! fetch operation that reads and parses one of them per request.

use hyper::StatusCode;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// The dashboard's data resources. The set is fixed at compile time and
/// each variant maps to exactly one file under the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    MarketShare,
    RevenueTrends,
    MarketSegmentation,
}

impl Resource {
    pub const ALL: [Self; 3] = [Self::MarketShare, Self::RevenueTrends, Self::MarketSegmentation];

    /// File name under the data directory
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::MarketShare => "marketShare.json",
            Self::RevenueTrends => "revenueTrends.json",
            Self::MarketSegmentation => "marketSegmentation.json",
        }
    }

    /// API path serving this resource
    pub const fn api_path(self) -> &'static str {
        match self {
            Self::MarketShare => "/api/marketShare",
            Self::RevenueTrends => "/api/revenueTrends",
            Self::MarketSegmentation => "/api/marketSegmentation",
        }
    }

    /// Resolve a request path to a resource, if it names one
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.api_path() == path)
    }
}

/// Failure modes of a resource fetch
#[derive(Debug)]
pub enum FetchError {
    /// The data file does not exist at the expected path
    NotFound,
    /// The file exists but its content is not valid JSON
    Malformed(serde_json::Error),
    /// Any other read failure (permissions, truncated read)
    Io(std::io::Error),
}

impl FetchError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Malformed(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed message surfaced in the error envelope. Io details are not
    /// leaked to the caller.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Data file not found",
            Self::Malformed(_) => "Invalid JSON format in data file",
            Self::Io(_) => "Internal server error",
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "data file not found"),
            Self::Malformed(e) => write!(f, "invalid JSON in data file: {e}"),
            Self::Io(e) => write!(f, "failed to read data file: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Read and parse the JSON file backing `resource`.
///
/// Each call is independent and stateless: the file is opened, read, and
/// parsed per request, with no caching in between.
pub async fn fetch(data_dir: &Path, resource: Resource) -> Result<Value, FetchError> {
    let file_path = data_dir.join(resource.file_name());

    let content = match fs::read(&file_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(FetchError::NotFound),
        Err(e) => return Err(FetchError::Io(e)),
    };

    serde_json::from_slice(&content).map_err(FetchError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn temp_data_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dashboard-test-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_path_mapping() {
        assert_eq!(Resource::from_path("/api/marketShare"), Some(Resource::MarketShare));
        assert_eq!(Resource::from_path("/api/revenueTrends"), Some(Resource::RevenueTrends));
        assert_eq!(
            Resource::from_path("/api/marketSegmentation"),
            Some(Resource::MarketSegmentation)
        );
        assert_eq!(Resource::from_path("/api/unknown"), None);
        assert_eq!(Resource::from_path("/api/marketshare"), None); // case-sensitive
        assert_eq!(Resource::from_path("/"), None);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Resource::MarketShare.file_name(), "marketShare.json");
        assert_eq!(Resource::RevenueTrends.file_name(), "revenueTrends.json");
        assert_eq!(Resource::MarketSegmentation.file_name(), "marketSegmentation.json");
    }

    #[tokio::test]
    async fn test_fetch_valid_file() {
        let dir = temp_data_dir("valid");
        std::fs::write(dir.join("marketShare.json"), r#"{"2023": 40, "2024": 45}"#).unwrap();

        let value = fetch(&dir, Resource::MarketShare).await.unwrap();
        assert_eq!(value, json!({"2023": 40, "2024": 45}));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_array_document() {
        let dir = temp_data_dir("array");
        std::fs::write(dir.join("revenueTrends.json"), r#"[{"q": "Q1", "rev": 10}]"#).unwrap();

        let value = fetch(&dir, Resource::RevenueTrends).await.unwrap();
        assert_eq!(value, json!([{"q": "Q1", "rev": 10}]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let dir = temp_data_dir("missing");

        let err = fetch(&dir, Resource::RevenueTrends).await.unwrap_err();
        assert!(matches!(err, FetchError::NotFound));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Data file not found");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let dir = temp_data_dir("invalid");
        std::fs::write(dir.join("marketSegmentation.json"), "not-json").unwrap();

        let err = fetch(&dir, Resource::MarketSegmentation).await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Invalid JSON format in data file");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_is_idempotent() {
        let dir = temp_data_dir("idempotent");
        std::fs::write(dir.join("marketShare.json"), r#"{"2023": 40}"#).unwrap();

        let first = fetch(&dir, Resource::MarketShare).await.unwrap();
        let second = fetch(&dir, Resource::MarketShare).await.unwrap();
        assert_eq!(first, second);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
