//! Two-column product grid rendered with egui
//!
//! Rows are virtualized through `ScrollArea::show_rows`, so cards (and their
//! image loads) exist only for rows on screen.

use std::hash::Hash;

use eframe::egui::scroll_area::ScrollSource;
use eframe::egui::{self, Align, Layout, RichText, Sense, Ui, UiBuilder};
use egui_phosphor::regular as icons;

use crate::catalog::ProductCatalog;
use crate::grid::layout::{
    BRAND_SIZE, CARD_MARGIN, CONTENT_PADDING, DETAIL_BUTTON_WIDTH, GRID_COLUMNS, IMAGE_SIZE,
    IMAGE_SPACING, NAME_SIZE, NAME_SPACING, PRICE_SIZE, ProductCard, ROW_HEIGHT, row_count,
    rows_in_range,
};
use crate::images::ImageCache;
use crate::ui::components::show_remote_image;
use crate::ui::theme;

pub fn show_product_grid(
    ui: &mut Ui,
    id_salt: impl Hash,
    catalog: &ProductCatalog,
    images: &mut ImageCache,
) {
    if catalog.is_empty() {
        ui.add_space(CONTENT_PADDING);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No products yet").color(theme::BLUISH_GREY));
        });
        return;
    }

    let total_rows = row_count(catalog.len());
    ui.scope(|ui| {
        ui.spacing_mut().item_spacing.y = 0.0;
        egui::ScrollArea::vertical()
            .id_salt(id_salt)
            .auto_shrink([false, false])
            // Horizontal drags belong to the pager; the wheel and scrollbar still scroll
            .scroll_source(ScrollSource {
                drag: false,
                ..ScrollSource::ALL
            })
            .show_rows(ui, ROW_HEIGHT, total_rows, |ui, rows| {
                let inner_width = (ui.available_width() - 2.0 * CONTENT_PADDING).max(0.0);
                let card_width = inner_width / GRID_COLUMNS as f32;

                for row in rows_in_range(catalog.products(), rows) {
                    let (row_rect, _) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), ROW_HEIGHT),
                        Sense::hover(),
                    );
                    for (column, card) in row.iter().enumerate() {
                        let card_rect = egui::Rect::from_min_size(
                            egui::pos2(
                                row_rect.left() + CONTENT_PADDING + column as f32 * card_width,
                                row_rect.top(),
                            ),
                            egui::vec2(card_width, ROW_HEIGHT),
                        )
                        .shrink(CARD_MARGIN);

                        ui.scope_builder(
                            UiBuilder::new()
                                .id_salt(("product_card", card.index))
                                .max_rect(card_rect)
                                .layout(Layout::top_down(Align::Center)),
                            |ui| show_product_card(ui, card, images),
                        );
                    }
                }
            });
    });
}

fn show_product_card(ui: &mut Ui, card: &ProductCard<'_>, images: &mut ImageCache) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        show_remote_image(ui, images, card.image_url, egui::Vec2::splat(IMAGE_SIZE), 16);

        ui.add_space(IMAGE_SPACING);

        theme::card_text_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.add(
                    egui::Label::new(
                        RichText::new(card.name)
                            .size(NAME_SIZE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .truncate(),
                );
                ui.add_space(NAME_SPACING);
                ui.add(
                    egui::Label::new(
                        RichText::new(card.brand)
                            .size(BRAND_SIZE)
                            .color(theme::TEXT_SECONDARY),
                    )
                    .truncate(),
                );

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&card.price_label)
                            .size(PRICE_SIZE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let details = ui
                            .add(
                                theme::pill_button(
                                    RichText::new(icons::ARROW_RIGHT).color(theme::DETAIL_ARROW),
                                    theme::DETAIL_BG,
                                )
                                .corner_radius(16)
                                .min_size(egui::vec2(DETAIL_BUTTON_WIDTH, DETAIL_BUTTON_WIDTH - 10.0)),
                            )
                            .on_hover_text("View details");
                        // No product detail screen yet
                        if details.clicked() {
                            tracing::debug!(product = card.name, "detail view is not available");
                        }
                    });
                });
            });
        });
    });
}
