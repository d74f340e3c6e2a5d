use crate::config::types::StoreConfig;
use crate::error::StoreError;
use crate::paths::PATH_STORE;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> StoreConfig {
    load_cfg_from(&PATH_STORE.join("settings.json"))
}

pub fn save_cfg(config: &StoreConfig) -> Result<(), StoreError> {
    save_cfg_to(config, &PATH_STORE.join("settings.json"))
}

pub(crate) fn load_cfg_from(path: &Path) -> StoreConfig {
    let Ok(file) = File::open(path) else {
        // Return default settings if the file doesn't exist
        return StoreConfig::default();
    };

    match serde_json::from_reader::<_, StoreConfig>(BufReader::new(file)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring invalid settings: {e}");
            StoreConfig::default()
        }
    }
}

pub(crate) fn save_cfg_to(config: &StoreConfig, path: &Path) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
