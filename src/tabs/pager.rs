//! Scroll model of the horizontally paged view
//!
//! The pager tracks a fractional page offset. It is moved either by a
//! programmatic animation (a tab was clicked) or by the user dragging and
//! releasing it, after which it snaps to a page. Both end in a settle event.

/// Seconds an animated page change takes
pub const ANIMATION_SECS: f32 = 0.3;

/// Release velocity (pages per second) above which a drag flings to the
/// neighbouring page instead of snapping to the nearest one
pub const FLING_VELOCITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerMotion {
    Idle,
    Dragging,
    Animating {
        from: f32,
        to: usize,
        elapsed: f32,
        /// True when the motion finishes a user swipe
        by_user: bool,
    },
}

/// Emitted by [`PagerState::tick`] when an animation comes to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerSettle {
    pub page: usize,
    pub by_user: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagerState {
    page_count: usize,
    offset: f32,
    motion: PagerMotion,
}

impl PagerState {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            offset: 0.0,
            motion: PagerMotion::Idle,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Fractional position, 0.0 is the first page
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_settled(&self) -> bool {
        self.motion == PagerMotion::Idle
    }

    /// Page closest to the current offset
    pub fn current_page(&self) -> usize {
        self.clamp_page(self.offset.round().max(0.0) as usize)
    }

    /// Page the pager is heading to, or the current page when idle or dragging
    pub fn target_page(&self) -> usize {
        match self.motion {
            PagerMotion::Animating { to, .. } => to,
            _ => self.current_page(),
        }
    }

    /// Animate towards `page`. Interrupts a drag or a running animation.
    pub fn animate_scroll_to(&mut self, page: usize) {
        let page = self.clamp_page(page);
        if self.is_settled() && self.offset == page as f32 {
            return;
        }
        self.motion = PagerMotion::Animating {
            from: self.offset,
            to: page,
            elapsed: 0.0,
            by_user: false,
        };
    }

    /// Move to `page` immediately, without animating
    pub fn jump_to(&mut self, page: usize) {
        self.offset = self.clamp_page(page) as f32;
        self.motion = PagerMotion::Idle;
    }

    /// Follow the pointer. Positive `delta` moves towards later pages.
    pub fn drag_by(&mut self, delta: f32) {
        self.motion = PagerMotion::Dragging;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// End a drag and snap to a page. `velocity` is in pages per second,
    /// positive towards later pages.
    pub fn release(&mut self, velocity: f32) {
        if self.motion != PagerMotion::Dragging {
            return;
        }

        let target = if velocity > FLING_VELOCITY {
            self.offset.floor() + 1.0
        } else if velocity < -FLING_VELOCITY {
            self.offset.ceil() - 1.0
        } else {
            self.offset.round()
        };
        let target = target.clamp(0.0, self.max_offset()) as usize;

        self.motion = PagerMotion::Animating {
            from: self.offset,
            to: target,
            elapsed: 0.0,
            by_user: true,
        };
    }

    /// Advance a running animation by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Option<PagerSettle> {
        let PagerMotion::Animating {
            from,
            to,
            elapsed,
            by_user,
        } = self.motion
        else {
            return None;
        };

        let elapsed = elapsed + dt.max(0.0);
        let t = (elapsed / ANIMATION_SECS).min(1.0);
        self.offset = from + (to as f32 - from) * ease_out_cubic(t);

        if t >= 1.0 {
            self.offset = to as f32;
            self.motion = PagerMotion::Idle;
            return Some(PagerSettle { page: to, by_user });
        }

        self.motion = PagerMotion::Animating {
            from,
            to,
            elapsed,
            by_user,
        };
        None
    }

    fn max_offset(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.page_count.saturating_sub(1))
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(pager: &mut PagerState) -> Option<PagerSettle> {
        for _ in 0..100 {
            if let Some(settle) = pager.tick(1.0 / 60.0) {
                return Some(settle);
            }
        }
        None
    }

    #[test]
    fn test_animate_settles_on_target() {
        let mut pager = PagerState::new(4);
        pager.animate_scroll_to(2);
        assert_eq!(pager.target_page(), 2);
        assert!(!pager.is_settled());

        let settle = run_to_rest(&mut pager).unwrap();
        assert_eq!(settle, PagerSettle { page: 2, by_user: false });
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.offset(), 2.0);
        assert!(pager.is_settled());
    }

    #[test]
    fn test_animation_progresses_monotonically() {
        let mut pager = PagerState::new(4);
        pager.animate_scroll_to(3);
        let mut last = pager.offset();
        while pager.tick(0.05).is_none() {
            assert!(pager.offset() >= last);
            last = pager.offset();
        }
        assert_eq!(pager.offset(), 3.0);
    }

    #[test]
    fn test_animate_to_current_page_is_noop() {
        let mut pager = PagerState::new(4);
        pager.animate_scroll_to(0);
        assert!(pager.is_settled());
        assert_eq!(pager.tick(0.1), None);
    }

    #[test]
    fn test_drag_release_snaps_to_nearest() {
        let mut pager = PagerState::new(4);
        pager.drag_by(0.7);
        assert!(!pager.is_settled());
        pager.release(0.0);
        assert_eq!(run_to_rest(&mut pager), Some(PagerSettle { page: 1, by_user: true }));

        pager.drag_by(0.3);
        pager.release(0.0);
        assert_eq!(run_to_rest(&mut pager), Some(PagerSettle { page: 1, by_user: true }));
    }

    #[test]
    fn test_fling_moves_to_neighbour() {
        let mut pager = PagerState::new(4);
        pager.drag_by(0.1);
        pager.release(2.0);
        assert_eq!(pager.target_page(), 1);

        run_to_rest(&mut pager);
        pager.drag_by(-0.1);
        pager.release(-2.0);
        assert_eq!(pager.target_page(), 0);
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut pager = PagerState::new(4);
        pager.drag_by(-1.0);
        assert_eq!(pager.offset(), 0.0);
        pager.drag_by(10.0);
        assert_eq!(pager.offset(), 3.0);
        pager.release(5.0);
        assert_eq!(pager.target_page(), 3);
    }

    #[test]
    fn test_release_without_drag_is_ignored() {
        let mut pager = PagerState::new(4);
        pager.release(3.0);
        assert!(pager.is_settled());
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_jump_interrupts_animation() {
        let mut pager = PagerState::new(4);
        pager.animate_scroll_to(3);
        pager.tick(0.1);
        pager.jump_to(1);
        assert!(pager.is_settled());
        assert_eq!(pager.offset(), 1.0);
    }

    #[test]
    fn test_empty_pager() {
        let mut pager = PagerState::new(0);
        pager.drag_by(1.0);
        pager.release(1.0);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(run_to_rest(&mut pager), Some(PagerSettle { page: 0, by_user: true }));
    }
}
