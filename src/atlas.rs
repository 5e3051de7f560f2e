//! Fetching and caching of the world topology document.

use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::geography::Topology;

/// Loads the topology, preferring the on-disk cache.
///
/// With `refresh` set the cache is bypassed and rewritten from the
/// network; a failed write is ignored since the parsed document is
/// already in hand.
pub async fn load_topology(config: &Config, refresh: bool) -> Result<Topology> {
    let cache_path = config.cached_atlas_path();

    if !refresh && cache_path.is_file() {
        debug!(path = %cache_path.display(), "loading topology from cache");
        return load_topology_from_file(&cache_path);
    }

    info!(url = %config.atlas_url, "downloading topology");
    let body = reqwest::get(config.atlas_url.as_str())
        .await?
        .error_for_status()?
        .text()
        .await?;
    let topology: Topology = serde_json::from_str(&body)?;

    if std::fs::create_dir_all(&config.cache_dir).is_ok() {
        if let Err(error) = std::fs::write(&cache_path, &body) {
            debug!(%error, "failed to write topology cache");
        }
    }

    Ok(topology)
}

/// Parses a topology document from a local file.
pub fn load_topology_from_file(path: &Path) -> Result<Topology> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
