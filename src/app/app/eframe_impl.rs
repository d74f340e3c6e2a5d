//! eframe::App implementation for StoreApp

use super::StoreApp;
use crate::ui::theme;
use eframe::egui;

/// Longest frame step fed to the pager animation
const MAX_FRAME_DT: f32 = 0.1;

impl eframe::App for StoreApp {
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            return;
        }
        self.process_keyboard_nav(raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Upload images finished since the last frame
        self.images.begin_frame(ctx);

        let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        self.tabs.step(dt);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::WHITE))
            .show(ctx, |ui| self.display_store_screen(ui));

        // Cards that were not drawn this frame no longer need their images
        self.images.end_frame();

        if !self.tabs.is_in_sync() {
            ctx.request_repaint();
        }
    }
}
