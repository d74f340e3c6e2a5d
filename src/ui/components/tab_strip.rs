//! Tab row with a rounded indicator under the selected tab

use eframe::egui::{self, Align2, CursorIcon, FontId, Rect, Sense, Ui};

use crate::tabs::TabItem;
use crate::ui::theme;

pub const TAB_HEIGHT: f32 = 48.0;
pub const INDICATOR_HEIGHT: f32 = 6.0;
/// Horizontal inset of the indicator inside its tab
pub const INDICATOR_INSET: f32 = 6.0;

/// Left edge and width of tab `index` in a strip of `count` equal tabs
pub fn tab_span(strip_left: f32, strip_width: f32, count: usize, index: usize) -> (f32, f32) {
    if count == 0 {
        return (strip_left, 0.0);
    }
    let tab_width = strip_width / count as f32;
    (strip_left + index as f32 * tab_width, tab_width)
}

/// Draw the strip. Returns the tab clicked this frame, if any.
pub fn show_tab_strip(ui: &mut Ui, tabs: &[TabItem], selected: usize) -> Option<usize> {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), TAB_HEIGHT),
        Sense::hover(),
    );
    if tabs.is_empty() {
        return None;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme::WHITE);

    let mut clicked = None;
    for (index, tab) in tabs.iter().enumerate() {
        let (left, width) = tab_span(rect.left(), rect.width(), tabs.len(), index);
        let tab_rect = Rect::from_min_size(
            egui::pos2(left, rect.top()),
            egui::vec2(width, TAB_HEIGHT - INDICATOR_HEIGHT),
        );

        let response = ui
            .interact(tab_rect, ui.id().with(("store_tab", index)), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        if response.clicked() {
            clicked = Some(index);
        }

        let color = if index == selected {
            theme::DARK_BLUE
        } else {
            theme::BLUISH_GREY
        };
        painter.text(
            tab_rect.center(),
            Align2::CENTER_CENTER,
            tab.caption(),
            FontId::proportional(14.0),
            color,
        );
    }

    let (target_left, width) = tab_span(rect.left(), rect.width(), tabs.len(), selected);
    let left = ui
        .ctx()
        .animate_value_with_time(ui.id().with("tab_indicator"), target_left, 0.25);
    let indicator = Rect::from_min_size(
        egui::pos2(left + INDICATOR_INSET, rect.bottom() - INDICATOR_HEIGHT),
        egui::vec2((width - 2.0 * INDICATOR_INSET).max(0.0), INDICATOR_HEIGHT),
    );
    painter.rect_filled(indicator, INDICATOR_HEIGHT / 2.0, theme::DARK_BLUE);

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::{STORE_TABS, TabSelectionController};
    use crate::ui::testing::{Harness, pointer_move, pointer_press, pointer_release};

    #[test]
    fn test_tab_span() {
        assert_eq!(tab_span(0.0, 400.0, 4, 0), (0.0, 100.0));
        assert_eq!(tab_span(10.0, 400.0, 4, 3), (310.0, 100.0));
        assert_eq!(tab_span(0.0, 400.0, 0, 0), (0.0, 0.0));
    }

    /// Draw the strip for one frame and return its rect
    fn show_tabs(
        harness: &mut Harness,
        events: Vec<egui::Event>,
        controller: &mut TabSelectionController,
    ) -> Rect {
        let mut strip = Rect::NOTHING;
        harness.frame(events, |ui| {
            strip = ui.available_rect_before_wrap();
            if let Some(index) = show_tab_strip(ui, &STORE_TABS, controller.selected()) {
                controller.select_tab(index).unwrap();
            }
        });
        strip
    }

    #[test]
    fn test_click_selects_tab() {
        let mut harness = Harness::new();
        let mut controller = TabSelectionController::new(STORE_TABS.len());

        let strip = show_tabs(&mut harness, Vec::new(), &mut controller);
        let (left, width) = tab_span(strip.left(), strip.width(), STORE_TABS.len(), 2);
        let target = egui::pos2(
            left + width / 2.0,
            strip.top() + (TAB_HEIGHT - INDICATOR_HEIGHT) / 2.0,
        );

        show_tabs(&mut harness, pointer_move(target), &mut controller);
        show_tabs(&mut harness, pointer_press(target), &mut controller);
        assert_eq!(controller.selected(), 0);
        show_tabs(&mut harness, pointer_release(target), &mut controller);

        assert_eq!(controller.selected(), 2);
        assert_eq!(controller.pager().target_page(), 2);
    }
}
