//! Runtime configuration, loaded from an optional JSON file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_ATLAS_URL: &str =
    "https://cdn.jsdelivr.net/npm/world-atlas/countries-110m.json";

const APP_DIR: &str = "esports-atlas";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where to fetch the world topology from.
    pub atlas_url: String,
    /// Directory for the cached topology download.
    pub cache_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self {
            atlas_url: DEFAULT_ATLAS_URL.to_string(),
            cache_dir,
        }
    }
}

impl Config {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    /// Loads the config file if one exists, falling back to defaults on
    /// any read or parse problem.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    config
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "invalid config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn cached_atlas_path(&self) -> PathBuf {
        self.cache_dir.join("countries-110m.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_world_atlas() {
        let config = Config::default();
        assert_eq!(config.atlas_url, DEFAULT_ATLAS_URL);
        assert!(config.cache_dir.ends_with(APP_DIR));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"atlas_url": "https://example.com/atlas.json"}"#).unwrap();
        assert_eq!(config.atlas_url, "https://example.com/atlas.json");
        assert!(config.cache_dir.ends_with(APP_DIR));
    }
}
