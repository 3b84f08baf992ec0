use eframe::egui::{self, Event, Key, PointerButton, Pos2};
use nalgebra::Point2;

use crate::control::PointerEvent;
use crate::sim::Command;

/// What one frame of window input means to the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Pointer(PointerEvent),
    Command(Command),
    ToggleTelemetry,
}

/// Per-frame input as seen by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameFlags {
    /// The window's close button (or the OS) asked to close.
    pub close_requested: bool,
    /// The pointer is over a floating egui window, not the play area.
    pub pointer_over_window: bool,
}

fn local(p: Pos2, origin: Pos2) -> Point2<f32> {
    Point2::new(p.x - origin.x, p.y - origin.y)
}

/// Map one toolkit event. `origin` is the top-left of the play area.
pub fn translate(event: &Event, origin: Pos2) -> Option<Input> {
    match event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            ..
        } => Some(Input::Pointer(PointerEvent::Down(local(*pos, origin)))),
        Event::PointerButton { pressed: false, .. } => Some(Input::Pointer(PointerEvent::Up)),
        Event::PointerMoved(pos) => Some(Input::Pointer(PointerEvent::Moved(local(*pos, origin)))),
        Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => match key {
            Key::Escape => Some(Input::Command(Command::Quit)),
            Key::Space => Some(Input::Command(Command::Reset)),
            Key::T => Some(Input::ToggleTelemetry),
            _ => None,
        },
        _ => None,
    }
}

/// Map a whole frame. Presses over a floating window never reach the
/// slider; releases and moves still do so an ongoing drag can finish.
pub fn translate_frame(events: &[Event], origin: Pos2, flags: FrameFlags) -> Vec<Input> {
    let mut inputs: Vec<Input> = events
        .iter()
        .filter_map(|e| translate(e, origin))
        .filter(|i| !(flags.pointer_over_window && matches!(i, Input::Pointer(PointerEvent::Down(_)))))
        .collect();
    if flags.close_requested {
        inputs.push(Input::Command(Command::Quit));
    }
    inputs
}

/// Read this frame's events and flags from the context.
pub fn poll(ctx: &egui::Context, origin: Pos2) -> Vec<Input> {
    let (events, close_requested) =
        ctx.input(|i| (i.events.clone(), i.viewport().close_requested()));
    let flags = FrameFlags {
        close_requested,
        pointer_over_window: ctx.is_pointer_over_area(),
    };
    translate_frame(&events, origin, flags)
}
