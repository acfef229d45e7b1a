use serde::Deserialize;
use tracing::warn;

/// Startup configuration: the host/service pair the listener binds.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_service")]
    pub service: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_service() -> String {
    "8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            service: default_service(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `COHO_CONFIG`
    /// (when set and readable), then applies `COHO_HOST` / `COHO_PORT`
    /// overrides. An unreadable or invalid file falls back to defaults.
    pub fn load() -> Self {
        let mut cfg = std::env::var("COHO_CONFIG")
            .ok()
            .and_then(|path| Self::from_file(&path))
            .unwrap_or_default();

        if let Ok(host) = std::env::var("COHO_HOST") {
            cfg.host = host;
        }
        if let Ok(port) = std::env::var("COHO_PORT") {
            cfg.service = port;
        }

        cfg
    }

    fn from_file(path: &str) -> Option<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path, e);
                return None;
            }
        };

        match serde_yaml::from_str(&text) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!("Ignoring config file {}: {}", path, e);
                None
            }
        }
    }
}
