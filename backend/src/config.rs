//! Server configuration.
//!
//! Values come from a TOML file when one is present (`scholarship.toml` in the
//! working directory, or the path named by `SCHOLARSHIP_CONFIG`). Missing keys
//! fall back to [`ServerConfig::default`]. `SCHOLARSHIP_HOST` and
//! `SCHOLARSHIP_PORT` override the bind address last.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "scholarship.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid port {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the `scholarship_applications` table.
    pub database_path: PathBuf,
    /// Root directory for storage buckets; each bucket is a subdirectory.
    pub storage_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Open the form in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("scholarship.sqlite"),
            storage_dir: PathBuf::from("storage"),
            max_upload_bytes: 10 * 1024 * 1024, // 10 MB
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var_os("SCHOLARSHIP_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        config.with_overrides(
            env::var("SCHOLARSHIP_HOST").ok(),
            env::var("SCHOLARSHIP_PORT").ok(),
        )
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        Ok(self)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9090\nopen_browser = false").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.port, 9090);
        assert!(!config.open_browser);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn unknown_file_is_a_read_error() {
        let err = ServerConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"eighty\"").unwrap();

        let err = ServerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn overrides_apply_last() {
        let config = ServerConfig::default()
            .with_overrides(Some("0.0.0.0".into()), Some(" 3000 ".into()))
            .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:3000");

        let untouched = ServerConfig::default().with_overrides(Some("  ".into()), None).unwrap();
        assert_eq!(untouched.host, "127.0.0.1");

        let err = ServerConfig::default()
            .with_overrides(None, Some("http".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "http"));
    }
}
