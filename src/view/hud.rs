use nalgebra::Point2;

use super::layout::{Layout, FUEL_BAR_X, SLIDER_TOP};
use crate::dynamics::{FlightPhase, FlightState};

pub const NEW_HIGH_SCORE: &str = "NEW HIGH SCORE!";
pub const RESET_PROMPT: &str = "Press space to reset";

/// One line of HUD text, anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub anchor: Point2<f32>,
    pub text: String,
}

/// Values shown as whole numbers, truncated toward zero.
fn whole(v: f64) -> i64 {
    v.trunc() as i64
}

pub fn hud_lines(state: &FlightState, layout: &Layout) -> Vec<HudLine> {
    let left = layout.slider.x - 100.0;
    let mut lines = vec![
        HudLine {
            anchor: Point2::new(left, SLIDER_TOP - 80.0),
            text: format!("Position: {}", whole(state.position)),
        },
        HudLine {
            anchor: Point2::new(left, SLIDER_TOP - 60.0),
            text: format!("Velocity: {}", whole(state.velocity)),
        },
        HudLine {
            anchor: Point2::new(left, SLIDER_TOP - 40.0),
            text: format!("Thrust: {}", whole(state.thrust)),
        },
        HudLine {
            anchor: Point2::new(FUEL_BAR_X, SLIDER_TOP - 40.0),
            text: format!("High Score: {}", whole(state.high_score)),
        },
    ];

    if state.phase == FlightPhase::Landed {
        let mid = Point2::new((layout.width / 2.0).floor(), (layout.height / 2.0).floor());
        if state.new_high_score {
            lines.push(HudLine { anchor: mid, text: NEW_HIGH_SCORE.to_string() });
        }
        lines.push(HudLine {
            anchor: Point2::new(mid.x, mid.y - 20.0),
            text: RESET_PROMPT.to_string(),
        });
    }
    lines
}
