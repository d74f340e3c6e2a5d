//! Per-URL image states, loaded on worker threads
//!
//! Frame protocol: `begin_frame` uploads finished loads, `request` is called
//! for every image that is on screen, `end_frame` cancels loads nobody asked
//! for during the frame (their card scrolled out of view). Finished images
//! are dropped once they go unrequested for `DONE_RETENTION_FRAMES` frames.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use eframe::egui::{self, ColorImage, TextureOptions};

use crate::error::StoreError;
use crate::images::operations::{ImageFetcher, RetryPolicy, decode_image, fetch_with_retry};
use crate::images::types::{CancelToken, DecodedImage, ImageState};

/// Frames a finished texture or failure is kept after its last request
pub const DONE_RETENTION_FRAMES: u64 = 600;

struct LoadResult {
    url: String,
    load_id: u64,
    outcome: Result<DecodedImage, StoreError>,
}

enum Slot {
    Loading { load_id: u64, cancel: CancelToken },
    Done(ImageState),
}

struct Entry {
    slot: Slot,
    last_requested: u64,
}

pub struct ImageCache {
    fetcher: Arc<dyn ImageFetcher>,
    policy: RetryPolicy,
    max_dimension: u32,
    retention_frames: u64,
    entries: HashMap<String, Entry>,
    frame: u64,
    next_load_id: u64,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl ImageCache {
    pub fn new(fetcher: Arc<dyn ImageFetcher>, policy: RetryPolicy, max_dimension: u32) -> Self {
        let (tx, rx) = channel();
        Self {
            fetcher,
            policy,
            max_dimension,
            retention_frames: DONE_RETENTION_FRAMES,
            entries: HashMap::new(),
            frame: 0,
            next_load_id: 0,
            tx,
            rx,
        }
    }

    /// Number of loads currently running
    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e.slot, Slot::Loading { .. }))
            .count()
    }

    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;

        while let Ok(result) = self.rx.try_recv() {
            let Some(entry) = self.entries.get_mut(&result.url) else {
                continue;
            };
            // A newer load for the same URL may have replaced this one
            let Slot::Loading { load_id, .. } = entry.slot else {
                continue;
            };
            if load_id != result.load_id {
                continue;
            }

            let state = match result.outcome {
                Ok(decoded) => {
                    let image = ColorImage::from_rgba_unmultiplied(decoded.size, &decoded.rgba);
                    let texture = ctx.load_texture(&result.url, image, TextureOptions::LINEAR);
                    tracing::debug!(url = %result.url, size = ?decoded.size, "image ready");
                    ImageState::Ready(texture)
                }
                Err(e) => {
                    tracing::warn!(url = %result.url, "image failed to load: {e}");
                    ImageState::Failed(e.to_string())
                }
            };
            entry.slot = Slot::Done(state);
        }
    }

    /// State of `url`, starting a load the first time it is asked for
    pub fn request(&mut self, ctx: &egui::Context, url: &str) -> ImageState {
        let frame = self.frame;
        if let Some(entry) = self.entries.get_mut(url) {
            entry.last_requested = frame;
            return match &entry.slot {
                Slot::Loading { .. } => ImageState::Pending,
                Slot::Done(state) => state.clone(),
            };
        }

        let slot = self.spawn_load(ctx, url);
        let state = match &slot {
            Slot::Loading { .. } => ImageState::Pending,
            Slot::Done(state) => state.clone(),
        };
        self.entries.insert(
            url.to_string(),
            Entry {
                slot,
                last_requested: frame,
            },
        );
        state
    }

    /// Cancel loads that were not requested since `begin_frame` and drop
    /// finished images that have been off screen for too long
    pub fn end_frame(&mut self) {
        let frame = self.frame;
        let retention = self.retention_frames;
        self.entries.retain(|url, entry| match &entry.slot {
            Slot::Loading { cancel, .. } if entry.last_requested < frame => {
                tracing::debug!(url, "image no longer visible, cancelling load");
                cancel.cancel();
                false
            }
            Slot::Done(_) if frame - entry.last_requested > retention => {
                tracing::debug!(url, "evicting unused image");
                false
            }
            _ => true,
        });
    }

    fn spawn_load(&mut self, ctx: &egui::Context, url: &str) -> Slot {
        self.next_load_id += 1;
        let load_id = self.next_load_id;
        let cancel = CancelToken::default();

        let fetcher = Arc::clone(&self.fetcher);
        let policy = self.policy.clone();
        let max_dimension = self.max_dimension;
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let worker_cancel = cancel.clone();
        let worker_url = url.to_string();

        let spawned = std::thread::Builder::new()
            .name("image-loader".to_string())
            .spawn(move || {
                let url = worker_url;
                let outcome = fetch_with_retry(fetcher.as_ref(), &url, &policy, &worker_cancel)
                    .and_then(|bytes| {
                        if worker_cancel.is_cancelled() {
                            return Err(StoreError::Cancelled);
                        }
                        decode_image(&url, &bytes, max_dimension)
                    });

                if worker_cancel.is_cancelled() {
                    return;
                }
                if tx.send(LoadResult { url, load_id, outcome }).is_ok() {
                    ctx.request_repaint();
                }
            });

        match spawned {
            Ok(_) => Slot::Loading { load_id, cancel },
            Err(e) => {
                tracing::error!(url, "failed to spawn image loader: {e}");
                Slot::Done(ImageState::Failed(e.to_string()))
            }
        }
    }
}
