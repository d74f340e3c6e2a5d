//! Image area backed by the [`ImageCache`]: texture when ready, spinner
//! while loading, placeholder icon on failure

use eframe::egui::{self, Rect, Sense, Ui, Vec2};
use egui_phosphor::regular as icons;

use crate::images::{ImageCache, ImageState};
use crate::ui::theme;

/// UV rect that crops the centre of a `texture` sized image to `target`'s
/// aspect ratio
pub fn center_crop_uv(texture: [usize; 2], target: Vec2) -> Rect {
    let full = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    let [w, h] = texture;
    if w == 0 || h == 0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let texture_ratio = w as f32 / h as f32;
    let target_ratio = target.x / target.y;
    if texture_ratio > target_ratio {
        let visible = target_ratio / texture_ratio;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let visible = texture_ratio / target_ratio;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

pub fn show_remote_image(
    ui: &mut Ui,
    images: &mut ImageCache,
    url: Option<&str>,
    size: Vec2,
    corner_radius: u8,
) -> egui::Response {
    let state = match url {
        Some(url) => images.request(ui.ctx(), url),
        None => ImageState::Failed("no image".to_string()),
    };

    if let ImageState::Ready(texture) = &state {
        return ui.add(
            egui::Image::new(texture)
                .uv(center_crop_uv(texture.size(), size))
                .fit_to_exact_size(size)
                .maintain_aspect_ratio(false)
                .corner_radius(corner_radius),
        );
    }

    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    ui.painter()
        .rect_filled(rect, corner_radius, theme::IMAGE_PLACEHOLDER);

    match state {
        ImageState::Pending => {
            let spinner_size = (size.min_elem() * 0.25).clamp(12.0, 32.0);
            ui.put(
                Rect::from_center_size(rect.center(), Vec2::splat(spinner_size)),
                egui::Spinner::new().size(spinner_size).color(theme::BLUISH_GREY),
            );
            response
        }
        ImageState::Failed(reason) => {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                icons::IMAGE,
                egui::FontId::proportional((size.min_elem() * 0.3).max(12.0)),
                theme::BLUISH_GREY,
            );
            response.on_hover_text(reason)
        }
        ImageState::Ready(_) => response,
    }
}
