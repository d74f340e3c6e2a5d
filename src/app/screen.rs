//! Store screen: top bar, profile, tab strip and the paged product grid

use crate::app::app::StoreApp;
use crate::grid::show_product_grid;
use crate::tabs::STORE_TABS;
use crate::ui::components::{show_pager, show_remote_image, show_tab_strip};
use crate::ui::theme;

use eframe::egui::{self, Layout, Margin, RichText, Ui};
use egui_phosphor::regular as icons;

const SECTION_SPACING: f32 = 16.0;
const LOGO_SIZE: f32 = 80.0;
const LOGO_BORDER: f32 = 4.0;
const ACTION_BUTTON_SIZE: egui::Vec2 = egui::vec2(110.0, 36.0);

impl StoreApp {
    pub fn display_store_screen(&mut self, ui: &mut Ui) {
        self.display_top_bar(ui);
        ui.add_space(SECTION_SPACING);
        self.display_profile_section(ui);
        ui.add_space(SECTION_SPACING);
        self.display_tabs(ui);
        self.display_pages(ui);
    }

    fn display_top_bar(&mut self, ui: &mut Ui) {
        egui::Frame::new()
            .inner_margin(Margin::symmetric(16, 10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icons::ARROW_LEFT).size(22.0))
                        .on_hover_text("Back");
                    ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(icons::DOTS_THREE_VERTICAL).size(22.0))
                            .on_hover_text("Menu");
                    });
                });
            });
    }

    fn display_profile_section(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            egui::Frame::new()
                .stroke(egui::Stroke::new(LOGO_BORDER, theme::LIGHT_GREY))
                .corner_radius(12)
                .inner_margin(Margin::same(LOGO_BORDER as i8))
                .show(ui, |ui| {
                    let inner = LOGO_SIZE - 4.0 * LOGO_BORDER;
                    show_remote_image(
                        ui,
                        &mut self.images,
                        self.profile.logo.as_deref(),
                        egui::Vec2::splat(inner),
                        8,
                    )
                    .on_hover_text("Logo");
                });

            if !self.profile.badge.is_empty() {
                ui.add_space(SECTION_SPACING);
                theme::badge_frame().show(ui, |ui| {
                    ui.label(
                        RichText::new(&self.profile.badge)
                            .size(12.0)
                            .strong()
                            .color(theme::BADGE_TEXT),
                    );
                });
            }

            ui.add_space(SECTION_SPACING);
            ui.label(
                RichText::new(&self.profile.name)
                    .size(18.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );

            ui.add_space(SECTION_SPACING);
            self.display_action_buttons(ui);
        });
    }

    /// "Turn on" and "Chat" have no behavior attached yet
    fn display_action_buttons(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let total = 2.0 * ACTION_BUTTON_SIZE.x + SECTION_SPACING;
            ui.add_space(((ui.available_width() - total) / 2.0).max(0.0));

            let notify = ui.add(
                theme::pill_button(
                    RichText::new(format!("Turn on {}", icons::BELL)).color(theme::WHITE),
                    theme::DARK_BLUE,
                )
                .min_size(ACTION_BUTTON_SIZE),
            );
            ui.add_space(SECTION_SPACING);
            let chat = ui.add(
                theme::pill_button(
                    RichText::new(format!("Chat {}", icons::ENVELOPE_SIMPLE)).color(theme::DARK_BLUE),
                    theme::CHAT_BG,
                )
                .min_size(ACTION_BUTTON_SIZE),
            );

            if notify.clicked() || chat.clicked() {
                tracing::debug!("store action has no behavior bound");
            }
        });
    }

    fn display_tabs(&mut self, ui: &mut Ui) {
        if let Some(index) = show_tab_strip(ui, &STORE_TABS, self.tabs.selected()) {
            self.select_tab(index);
        }
    }

    /// Every page shows the catalog grid with its own scroll position
    fn display_pages(&mut self, ui: &mut Ui) {
        let catalog = &self.catalog;
        let images = &mut self.images;
        show_pager(ui, "store_pages", &mut self.tabs, |ui, page| {
            show_product_grid(ui, ("store_page", page), catalog, images);
        });
    }
}
