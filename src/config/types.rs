use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How product images are fetched
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageLoadConfig {
    /// Attempts per image, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
    #[serde(default = "default_backoff_max_ms")]
    pub backoff_max_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Longest side of a decoded image; larger images are downscaled
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    250
}

fn default_backoff_max_ms() -> u64 {
    2000
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_max_dimension() -> u32 {
    512
}

impl Default for ImageLoadConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
            backoff_max_ms: default_backoff_max_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            max_dimension: default_max_dimension(),
        }
    }
}

/// Main application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    /// Initial window size in logical points (phone-like portrait by default)
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// Catalog document to show instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub images: ImageLoadConfig,
}

fn default_ui_scale() -> f32 {
    1.0
}

fn default_window_size() -> [f32; 2] {
    [412.0, 860.0]
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            ui_scale: default_ui_scale(),
            window_size: default_window_size(),
            catalog_path: None,
            images: ImageLoadConfig::default(),
        }
    }
}
