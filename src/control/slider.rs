use nalgebra::{distance, Point2};

use crate::dynamics::{FlightState, MAX_THRUST};

// ---------------------------------------------------------------------------
// Pointer events, decoupled from the window toolkit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point2<f32>),
    Moved(Point2<f32>),
    Up,
}

// ---------------------------------------------------------------------------
// Vertical thrust slider: track geometry + knob hit test
// ---------------------------------------------------------------------------

/// Screen coordinates, y grows downward. Track bottom maps to zero thrust,
/// track top to full thrust.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustSlider {
    pub x: f32,       // left edge of the track
    pub top: f32,
    pub height: f32,
    pub width: f32,
    pub knob_radius: f32,
}

impl ThrustSlider {
    pub const WIDTH: f32 = 10.0;
    pub const KNOB_RADIUS: f32 = 15.0;

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn knob_center(&self, thrust: f64) -> Point2<f32> {
        let frac = (thrust / MAX_THRUST) as f32;
        Point2::new(
            self.x + (self.width / 2.0).floor(),
            self.bottom() - frac * self.height,
        )
    }

    /// Euclidean distance from the knob centre <= knob radius.
    pub fn hits_knob(&self, pointer: Point2<f32>, thrust: f64) -> bool {
        distance(&pointer, &self.knob_center(thrust)) <= self.knob_radius
    }

    /// Thrust for a pointer height, clamped to the track first.
    pub fn thrust_at(&self, y: f32) -> f64 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let y = y.clamp(self.top, self.bottom());
        let frac = f64::from((self.bottom() - y) / self.height);
        (MAX_THRUST * frac).clamp(0.0, MAX_THRUST)
    }

    /// Apply one pointer event to the drag state and thrust.
    pub fn handle(&self, state: &mut FlightState, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => {
                if self.hits_knob(p, state.thrust) {
                    state.dragging = true;
                }
            }
            PointerEvent::Moved(p) if state.dragging => {
                state.set_thrust(self.thrust_at(p.y));
            }
            PointerEvent::Moved(_) => {}
            PointerEvent::Up => state.dragging = false,
        }
    }
}
