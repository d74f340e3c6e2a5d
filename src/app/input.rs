//! Keyboard navigation handling

use crate::app::app::StoreApp;
use eframe::egui::{self, Key};

/// Clamp an index after applying a delta
pub fn apply_index_delta(current: usize, delta: i32, max: usize) -> usize {
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (current + delta as usize).min(max.saturating_sub(1))
    }
}

impl StoreApp {
    /// Left/Right arrows move between tabs
    pub(super) fn process_keyboard_nav(&mut self, raw_input: &egui::RawInput) {
        for event in &raw_input.events {
            let egui::Event::Key {
                key, pressed: true, ..
            } = event
            else {
                continue;
            };
            let delta = match key {
                Key::ArrowLeft => -1,
                Key::ArrowRight => 1,
                _ => continue,
            };
            let target = apply_index_delta(self.tabs.selected(), delta, self.tabs.tab_count());
            if target != self.tabs.selected() {
                self.select_tab(target);
            }
        }
    }
}
