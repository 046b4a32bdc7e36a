use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use madoguchi::resolve::ResolveConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address for the HTTP API.
    pub listen: String,

    /// Reference directory JSON file.
    pub directory_file: PathBuf,

    /// Landmark coordinate table; optional, skipped when absent.
    pub landmark_file: Option<PathBuf>,

    /// Outbound geocoder endpoint (Nominatim-compatible). Unset uses the
    /// public default.
    pub geocoder_endpoint: Option<String>,

    /// Disable the network geocoder entirely (landmark table only).
    pub offline: bool,

    /// Resolution tunables.
    pub resolver: ResolveConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
            directory_file: PathBuf::from("data/directory.json"),
            landmark_file: Some(PathBuf::from("data/landmarks.json")),
            geocoder_endpoint: None,
            offline: false,
            resolver: ResolveConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: ServerConfig = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
