//! Single source of truth for the selected tab
//!
//! Tab clicks and page swipes both end up here. The tab strip reads
//! `selected()`, the paged view reads `pager()`.

use crate::error::StoreError;
use crate::tabs::pager::PagerState;

#[derive(Debug, Clone)]
pub struct TabSelectionController {
    selected: usize,
    tab_count: usize,
    pager: PagerState,
}

impl TabSelectionController {
    pub fn new(tab_count: usize) -> Self {
        Self {
            selected: 0,
            tab_count,
            pager: PagerState::new(tab_count),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    pub fn pager(&self) -> &PagerState {
        &self.pager
    }

    /// Tab strip and pager agree and nothing is moving
    pub fn is_in_sync(&self) -> bool {
        self.pager.is_settled() && self.pager.current_page() == self.selected
    }

    /// A tab was clicked: select it now and scroll the pager there
    pub fn select_tab(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.selected = index;
        if self.pager.target_page() != index || !self.pager.is_settled() {
            self.pager.animate_scroll_to(index);
        }
        Ok(())
    }

    /// The pager came to rest on `index` after a swipe
    pub fn on_page_settled(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.selected = index;
        if !self.pager.is_settled() || self.pager.current_page() != index {
            self.pager.jump_to(index);
        }
        Ok(())
    }

    pub fn drag_pages(&mut self, delta: f32) {
        self.pager.drag_by(delta);
    }

    pub fn release(&mut self, velocity: f32) {
        self.pager.release(velocity);
    }

    /// Advance the pager animation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        let Some(settle) = self.pager.tick(dt) else {
            return;
        };
        if settle.by_user && settle.page != self.selected {
            tracing::debug!(page = settle.page, "page settled after swipe");
            if let Err(e) = self.on_page_settled(settle.page) {
                tracing::warn!("ignoring settled page: {e}");
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index >= self.tab_count {
            return Err(StoreError::TabOutOfRange {
                index,
                count: self.tab_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(controller: &mut TabSelectionController) {
        for _ in 0..100 {
            controller.step(1.0 / 60.0);
            if controller.pager().is_settled() {
                return;
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = TabSelectionController::new(4);
        assert_eq!(controller.selected(), 0);
        assert!(controller.is_in_sync());
    }

    #[test]
    fn test_select_tab_is_immediate() {
        for index in 0..4 {
            let mut controller = TabSelectionController::new(4);
            controller.select_tab(index).unwrap();
            assert_eq!(controller.selected(), index);
        }
    }

    #[test]
    fn test_select_tab_scrolls_pager() {
        let mut controller = TabSelectionController::new(4);
        controller.select_tab(2).unwrap();
        assert!(!controller.is_in_sync());
        assert_eq!(controller.pager().target_page(), 2);

        settle(&mut controller);
        assert!(controller.is_in_sync());
        assert_eq!(controller.pager().current_page(), 2);
        assert_eq!(controller.selected(), 2);
    }

    #[test]
    fn test_select_tab_out_of_range() {
        let mut controller = TabSelectionController::new(4);
        controller.select_tab(1).unwrap();
        settle(&mut controller);

        let err = controller.select_tab(4).unwrap_err();
        assert!(matches!(err, StoreError::TabOutOfRange { index: 4, count: 4 }));
        assert_eq!(controller.selected(), 1);
        assert!(controller.is_in_sync());

        assert!(controller.select_tab(usize::MAX).is_err());
        assert_eq!(controller.selected(), 1);
    }

    #[test]
    fn test_page_settled_updates_selection() {
        let mut controller = TabSelectionController::new(4);
        controller.on_page_settled(3).unwrap();
        assert_eq!(controller.selected(), 3);
        assert!(controller.pager().is_settled());
        assert_eq!(controller.pager().current_page(), 3);
    }

    #[test]
    fn test_page_settled_out_of_range() {
        let mut controller = TabSelectionController::new(4);
        assert!(controller.on_page_settled(7).is_err());
        assert_eq!(controller.selected(), 0);
        assert!(controller.is_in_sync());
    }

    #[test]
    fn test_swipe_moves_selection() {
        let mut controller = TabSelectionController::new(4);
        controller.drag_pages(0.6);
        // Selection follows only once the page settles
        assert_eq!(controller.selected(), 0);
        controller.release(0.0);
        settle(&mut controller);

        assert_eq!(controller.selected(), 1);
        assert!(controller.is_in_sync());
    }

    #[test]
    fn test_short_swipe_snaps_back() {
        let mut controller = TabSelectionController::new(4);
        controller.select_tab(2).unwrap();
        settle(&mut controller);

        controller.drag_pages(-0.2);
        controller.release(0.0);
        settle(&mut controller);
        assert_eq!(controller.selected(), 2);
        assert!(controller.is_in_sync());
    }

    #[test]
    fn test_select_tab_during_drag() {
        let mut controller = TabSelectionController::new(4);
        controller.drag_pages(0.4);
        controller.select_tab(3).unwrap();
        assert_eq!(controller.selected(), 3);

        settle(&mut controller);
        assert_eq!(controller.pager().current_page(), 3);
        assert!(controller.is_in_sync());
    }

    #[test]
    fn test_reselect_current_tab() {
        let mut controller = TabSelectionController::new(4);
        controller.select_tab(0).unwrap();
        assert!(controller.is_in_sync());
    }

    #[test]
    fn test_swipe_settling_outside_tabs_keeps_selection() {
        // Pager with more pages than tabs
        let mut controller = TabSelectionController {
            selected: 1,
            tab_count: 2,
            pager: PagerState::new(4),
        };
        controller.drag_pages(3.0);
        controller.release(0.0);
        settle(&mut controller);

        assert_eq!(controller.selected(), 1);
        assert_eq!(controller.pager().current_page(), 3);
        assert!(!controller.is_in_sync());
    }
}
