//! Store colors, fonts and frame helpers

use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, Stroke};

pub mod colors {
    use eframe::egui::Color32;

    pub const WHITE: Color32 = Color32::WHITE;
    pub const LIGHT_GREY: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);
    pub const DARK_BLUE: Color32 = Color32::from_rgb(0x1f, 0x2a, 0x5c);
    pub const BLUISH_GREY: Color32 = Color32::from_rgb(0x8a, 0x94, 0xa6);

    pub const TEXT_PRIMARY: Color32 = Color32::BLACK;
    pub const TEXT_SECONDARY: Color32 = Color32::DARK_GRAY;

    // Profile section
    pub const BADGE_BG: Color32 = Color32::from_rgb(0xff, 0xf4, 0xdc);
    pub const BADGE_TEXT: Color32 = Color32::from_rgb(0xff, 0xa1, 0x85);
    pub const CHAT_BG: Color32 = Color32::from_rgb(0xf1, 0xf2, 0xf3);

    // Product card
    pub const DETAIL_BG: Color32 = Color32::from_rgb(0xf2, 0xf8, 0xfd);
    pub const DETAIL_ARROW: Color32 = Color32::from_rgb(0xff, 0x00, 0xff);
    pub const IMAGE_PLACEHOLDER: Color32 = Color32::from_rgb(0xe4, 0xe7, 0xec);
}

pub use colors::*;

/// Install light visuals and the phosphor icon font
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = WHITE;
    visuals.window_fill = WHITE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::NONE;
    visuals.selection.bg_fill = DARK_BLUE;
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(4.0, 4.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
    });
}

/// Rounded light-grey card around a product
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(LIGHT_GREY)
        .corner_radius(CornerRadius::same(16))
        .inner_margin(Margin::same(8))
}

/// White block holding a card's text
pub fn card_text_frame() -> Frame {
    Frame::new()
        .fill(WHITE)
        .corner_radius(CornerRadius::same(16))
        .inner_margin(Margin::same(8))
}

/// Small rounded label background ("Top seller")
pub fn badge_frame() -> Frame {
    Frame::new()
        .fill(BADGE_BG)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(4))
}

/// Rounded button with a solid fill and no outline
pub fn pill_button<'a>(text: impl Into<egui::WidgetText>, fill: Color32) -> egui::Button<'a> {
    let text: egui::WidgetText = text.into();
    egui::Button::new(text)
        .fill(fill)
        .stroke(Stroke::NONE)
        .corner_radius(12)
}
