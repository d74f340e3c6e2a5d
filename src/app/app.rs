// Core app structure

mod eframe_impl;

use crate::catalog::{ProductCatalog, StoreProfile};
use crate::images::ImageCache;
use crate::tabs::{STORE_TABS, TabSelectionController};

pub struct StoreApp {
    pub profile: StoreProfile,
    pub catalog: ProductCatalog,
    pub tabs: TabSelectionController,
    pub images: ImageCache,
}

impl StoreApp {
    pub fn new(profile: StoreProfile, catalog: ProductCatalog, images: ImageCache) -> Self {
        tracing::info!(
            store = %profile.name,
            products = catalog.len(),
            tabs = STORE_TABS.len(),
            "storefront ready"
        );
        Self {
            profile,
            catalog,
            tabs: TabSelectionController::new(STORE_TABS.len()),
            images,
        }
    }

    /// Select a tab, logging rejected indices instead of failing the frame
    pub fn select_tab(&mut self, index: usize) {
        match self.tabs.select_tab(index) {
            Ok(()) => tracing::debug!(tab = STORE_TABS[index].label, "tab selected"),
            Err(e) => tracing::warn!("ignoring tab selection: {e}"),
        }
    }
}
