use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3002;
const DEFAULT_DATA_PATH: &str = "data/movies.json";
const DEFAULT_TEMPLATES_DIR: &str = "static/templates";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
    pub templates_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, default = DEFAULT_PORT, "ignoring unparsable PORT");
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            data_path: lookup("MOVIES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            templates_dir: lookup("TEMPLATES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.templates_dir),
        }
    }

    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))
    }
}
