//! Horizontally paged container driven by a [`TabSelectionController`]
//!
//! Only the pages overlapping the viewport are laid out: one when the pager
//! is at rest, two while it moves between pages.

use std::hash::Hash;

use eframe::egui::{self, Rect, Sense, Ui, UiBuilder};

use crate::tabs::TabSelectionController;

/// Pages intersecting the viewport at a fractional `offset`
pub fn visible_pages(offset: f32, page_count: usize) -> std::ops::RangeInclusive<usize> {
    let last_page = page_count.saturating_sub(1);
    let first = (offset.floor().max(0.0) as usize).min(last_page);
    let last = (offset.ceil().max(0.0) as usize).min(last_page);
    first..=last
}

pub fn show_pager(
    ui: &mut Ui,
    id_salt: impl Hash,
    controller: &mut TabSelectionController,
    mut add_page: impl FnMut(&mut Ui, usize),
) {
    let rect = ui.available_rect_before_wrap();
    let page_count = controller.pager().page_count();
    if page_count == 0 || rect.width() <= 0.0 {
        return;
    }

    let width = rect.width();
    let id = ui.id().with(id_salt);
    let response = ui.interact(rect, id, Sense::drag());

    // Dragging left reveals the next page
    if response.dragged() {
        let dx = response.drag_delta().x;
        if dx != 0.0 {
            controller.drag_pages(-dx / width);
        }
    }
    if response.drag_stopped() {
        let velocity = ui.input(|i| i.pointer.velocity().x);
        controller.release(-velocity / width);
    }

    let offset = controller.pager().offset();
    let clip = rect.intersect(ui.clip_rect());
    for page in visible_pages(offset, page_count) {
        let left = rect.left() + (page as f32 - offset) * width;
        let page_rect = Rect::from_min_size(egui::pos2(left, rect.top()), rect.size());

        let mut page_ui = ui.new_child(
            UiBuilder::new()
                .id_salt((id, page))
                .max_rect(page_rect)
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        page_ui.set_clip_rect(page_rect.intersect(clip));
        add_page(&mut page_ui, page);
    }

    ui.allocate_rect(rect, Sense::hover());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{Harness, pointer_move, pointer_press, pointer_release};

    fn show_pages(
        harness: &mut Harness,
        events: Vec<egui::Event>,
        controller: &mut TabSelectionController,
    ) {
        harness.frame(events, |ui| {
            controller.step(1.0 / 60.0);
            show_pager(ui, "pages", controller, |ui, page| {
                ui.label(format!("page {page}"));
            });
        });
    }

    #[test]
    fn test_visible_pages_at_rest() {
        assert_eq!(visible_pages(0.0, 4), 0..=0);
        assert_eq!(visible_pages(2.0, 4), 2..=2);
    }

    #[test]
    fn test_visible_pages_between() {
        assert_eq!(visible_pages(0.4, 4), 0..=1);
        assert_eq!(visible_pages(2.9, 4), 2..=3);
    }

    #[test]
    fn test_visible_pages_clamped() {
        assert_eq!(visible_pages(-0.5, 4), 0..=0);
        assert_eq!(visible_pages(3.5, 4), 3..=3);
        assert_eq!(visible_pages(0.0, 1), 0..=0);
    }

    #[test]
    fn test_swipe_left_selects_next_page() {
        let mut harness = Harness::new();
        let mut controller = TabSelectionController::new(4);

        let start = egui::pos2(380.0, 400.0);
        show_pages(&mut harness, pointer_move(start), &mut controller);
        show_pages(&mut harness, pointer_press(start), &mut controller);

        let mut pos = start;
        for _ in 0..8 {
            pos.x -= 40.0;
            show_pages(&mut harness, pointer_move(pos), &mut controller);
        }
        assert!(controller.pager().offset() > 0.5);
        assert!(!controller.pager().is_settled());
        assert_eq!(controller.selected(), 0);

        show_pages(&mut harness, pointer_release(pos), &mut controller);
        for _ in 0..60 {
            show_pages(&mut harness, Vec::new(), &mut controller);
        }

        assert_eq!(controller.selected(), 1);
        assert_eq!(controller.pager().current_page(), 1);
        assert!(controller.is_in_sync());
    }

    #[test]
    fn test_selected_tab_moves_pages() {
        let mut harness = Harness::new();
        let mut controller = TabSelectionController::new(4);
        show_pages(&mut harness, Vec::new(), &mut controller);

        controller.select_tab(3).unwrap();
        for _ in 0..60 {
            show_pages(&mut harness, Vec::new(), &mut controller);
        }
        assert_eq!(controller.pager().offset(), 3.0);
        assert!(controller.is_in_sync());
    }
}
