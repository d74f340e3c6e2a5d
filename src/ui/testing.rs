//! Headless egui frames for widget tests

use eframe::egui::{
    self, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Ui,
};

/// Phone-sized viewport used by the app window
pub const SCREEN_SIZE: egui::Vec2 = egui::vec2(412.0, 860.0);
pub const FRAME_SECS: f64 = 1.0 / 60.0;

pub struct Harness {
    pub ctx: egui::Context,
    time: f64,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            time: 0.0,
        }
    }

    /// Run one frame with `events`, drawing `add` inside a central panel
    pub fn frame(&mut self, events: Vec<Event>, mut add: impl FnMut(&mut Ui)) {
        self.time += FRAME_SECS;
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN_SIZE)),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }
}

pub fn pointer_move(pos: Pos2) -> Vec<Event> {
    vec![Event::PointerMoved(pos)]
}

pub fn pointer_press(pos: Pos2) -> Vec<Event> {
    pointer_button(pos, true)
}

pub fn pointer_release(pos: Pos2) -> Vec<Event> {
    pointer_button(pos, false)
}

fn pointer_button(pos: Pos2, pressed: bool) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        },
    ]
}
