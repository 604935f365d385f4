use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use pairdiff_fetch::FetchConfig;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Base URL this deployment is reached at, used in the API description.
    pub public_url: String,
    /// Scheme prefixed to resolved document URLs.
    pub scheme: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub allow_anonymous: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            public_url: "http://127.0.0.1:8787".into(),
            scheme: "https".into(),
            fetch_timeout_secs: 30,
            user_agent: concat!("pairdiff/", env!("CARGO_PKG_VERSION")).into(),
            allow_anonymous: true,
        }
    }
}

impl ServerConfig {
    /// Load a TOML config file. Keys it leaves out keep their defaults.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.fetch_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8787".parse::<SocketAddr>().unwrap());
        assert_eq!(c.scheme, "https");
        assert_eq!(c.fetch_timeout_secs, 30);
        assert!(c.allow_anonymous);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml("scheme = \"http\"\nfetch_timeout_secs = 5\n").unwrap();
        assert_eq!(c.scheme, "http");
        assert_eq!(c.fetch_config().timeout, Duration::from_secs(5));
        assert_eq!(c.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml("bind_addr = 12").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"0.0.0.0:9000\"").unwrap();
        writeln!(file, "allow_anonymous = false").unwrap();
        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.bind_addr.port(), 9000);
        assert!(!c.allow_anonymous);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ServerConfig::load(Path::new("/nonexistent/pairdiff.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
