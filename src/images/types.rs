use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use eframe::egui::TextureHandle;

/// What a card can show for one image URL
#[derive(Clone)]
pub enum ImageState {
    Pending,
    Ready(TextureHandle),
    Failed(String),
}

/// RGBA pixels produced off the UI thread, uploaded as a texture on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

/// Shared flag telling a worker its result is no longer wanted
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
