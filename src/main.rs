mod app;
mod catalog;
mod config;
mod error;
mod grid;
mod images;
mod paths;
mod tabs;
mod ui;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::StoreApp;
use crate::catalog::{Storefront, default_storefront, load_storefront};
use crate::config::{StoreConfig, load_cfg, save_cfg};
use crate::error::StoreError;
use crate::images::{HttpFetcher, ImageCache, RetryPolicy};
use crate::paths::PATH_STORE;

#[derive(Parser, Debug)]
#[command(name = "estore", version, about = "Storefront with a tabbed, paged product grid")]
struct Cli {
    /// Catalog document (YAML) to show instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Start the window in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// UI zoom factor, overrides the saved setting
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f32>,
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = std::fs::create_dir_all(&*PATH_STORE) {
        tracing::warn!(path = %PATH_STORE.display(), "failed to create data directory: {e}");
    }
    let settings_path = PATH_STORE.join("settings.json");
    let options = load_cfg();
    if !settings_path.exists() {
        if let Err(e) = save_cfg(&options) {
            tracing::warn!("failed to write default settings: {e}");
        }
    }

    let storefront = match resolve_storefront(cli.catalog.as_deref(), &options) {
        Ok(storefront) => storefront,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    let (profile, catalog) = storefront.into_parts();

    let fetcher = match HttpFetcher::new(Duration::from_secs(options.images.request_timeout_secs)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    let images = ImageCache::new(
        Arc::new(fetcher),
        RetryPolicy::from_config(&options.images),
        options.images.max_dimension,
    );

    let scale = cli.scale.unwrap_or(options.ui_scale).clamp(0.5, 4.0);
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(profile.name.clone())
            .with_inner_size(options.window_size)
            .with_min_inner_size([320.0, 480.0])
            .with_fullscreen(cli.fullscreen),
        ..Default::default()
    };

    tracing::info!(scale, fullscreen = cli.fullscreen, "starting eframe app");

    eframe::run_native(
        "estore",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_zoom_factor(scale);
            crate::ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(StoreApp::new(profile, catalog, images)))
        }),
    )
}

/// Pick the catalog: `--catalog`, then the configured path, then
/// `catalog.yaml` in the data directory, then the built-in one
fn resolve_storefront(cli_path: Option<&Path>, options: &StoreConfig) -> Result<Storefront, StoreError> {
    if let Some(path) = cli_path.or(options.catalog_path.as_deref()) {
        return load_storefront(path);
    }

    let default_path = PATH_STORE.join("catalog.yaml");
    if default_path.exists() {
        match load_storefront(&default_path) {
            Ok(storefront) => return Ok(storefront),
            Err(e) => tracing::warn!("falling back to the built-in catalog: {e}"),
        }
    }

    default_storefront()
}
