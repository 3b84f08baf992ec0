use nalgebra::Point2;

use crate::control::ThrustSlider;

// ---------------------------------------------------------------------------
// Palette (sRGB)
// ---------------------------------------------------------------------------

pub const SKY_BLUE: [u8; 3] = [135, 206, 235];
pub const GRASS_GREEN: [u8; 3] = [34, 139, 34];
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const GREY: [u8; 3] = [180, 180, 180];
pub const RED: [u8; 3] = [200, 50, 50];

// ---------------------------------------------------------------------------
// Fixed dimensions, px
// ---------------------------------------------------------------------------

pub const GROUND_HEIGHT: f32 = 100.0;
pub const SLIDER_TOP: f32 = 100.0;
pub const SLIDER_RIGHT_INSET: f32 = 50.0;
pub const SLIDER_BOTTOM_GAP: f32 = 20.0;
pub const FUEL_BAR_X: f32 = 40.0;
pub const FUEL_BAR_WIDTH: f32 = 20.0;
pub const ROCKET_RADIUS: f32 = 10.0;

/// Axis-aligned box, screen coordinates (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Where everything goes for a given window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub altitude_scale: f64,
    pub slider: ThrustSlider,
}

impl Layout {
    pub fn new(width: f32, height: f32, altitude_scale: f64) -> Self {
        let ground_top = height - GROUND_HEIGHT;
        let slider = ThrustSlider {
            x: width - SLIDER_RIGHT_INSET,
            top: SLIDER_TOP,
            height: (ground_top - SLIDER_TOP - SLIDER_BOTTOM_GAP).max(0.0),
            width: ThrustSlider::WIDTH,
            knob_radius: ThrustSlider::KNOB_RADIUS,
        };
        Self { width, height, altitude_scale, slider }
    }

    /// y of the ground line; the sky spans [0, ground_top).
    pub fn ground_top(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }

    pub fn ground(&self) -> Bounds {
        Bounds { x: 0.0, y: self.ground_top(), w: self.width, h: GROUND_HEIGHT }
    }

    pub fn slider_track(&self) -> Bounds {
        let s = &self.slider;
        Bounds { x: s.x, y: s.top, w: s.width, h: s.height }
    }

    /// Fixed horizontal centre, one pixel per `altitude_scale` units of height.
    pub fn rocket_center(&self, position: f64) -> Point2<f32> {
        let lift = (position / self.altitude_scale) as f32;
        Point2::new((self.width / 2.0).floor(), self.ground_top() - lift)
    }

    pub fn fuel_bar(&self) -> Bounds {
        Bounds { x: FUEL_BAR_X, y: SLIDER_TOP, w: FUEL_BAR_WIDTH, h: self.slider.height }
    }

    /// Filled part of the fuel gauge, anchored at the bottom.
    pub fn fuel_fill(&self, fraction: f64) -> Bounds {
        let bar = self.fuel_bar();
        let h = bar.h * fraction.clamp(0.0, 1.0) as f32;
        Bounds { x: bar.x, y: bar.y + (bar.h - h), w: bar.w, h }
    }

    /// Sky colour at screen row `y`: black at the top, sky blue at the ground.
    pub fn sky_color(&self, y: f32) -> [u8; 3] {
        let span = self.ground_top();
        if span <= 0.0 {
            return SKY_BLUE;
        }
        let ratio = (y / span).clamp(0.0, 1.0);
        SKY_BLUE.map(|c| (f32::from(c) * ratio) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(700.0, 900.0, 20.0)
    }

    #[test]
    fn slider_geometry() {
        let l = layout();
        assert_eq!(l.slider.x, 650.0);
        assert_eq!(l.slider.top, 100.0);
        assert_eq!(l.slider.height, 680.0);
        assert_eq!(l.slider.knob_center(0.0).x, 655.0);
    }

    #[test]
    fn tiny_window_collapses_track() {
        let l = Layout::new(700.0, 150.0, 20.0);
        assert_eq!(l.slider.height, 0.0);
        assert_eq!(l.slider.thrust_at(10.0), 0.0);
    }

    #[test]
    fn rocket_rises_one_pixel_per_scale() {
        let l = layout();
        assert_eq!(l.rocket_center(0.0), Point2::new(350.0, 800.0));
        assert_eq!(l.rocket_center(2_000.0).y, 700.0);
    }

    #[test]
    fn fuel_fill_anchored_at_bottom() {
        let l = layout();
        let full = l.fuel_fill(1.0);
        assert_eq!(full, l.fuel_bar());
        let half = l.fuel_fill(0.5);
        assert_eq!(half.h, 340.0);
        assert_eq!(half.y + half.h, l.fuel_bar().y + l.fuel_bar().h);
        assert_eq!(l.fuel_fill(0.0).h, 0.0);
    }

    #[test]
    fn sky_gradient_endpoints() {
        let l = layout();
        assert_eq!(l.sky_color(0.0), [0, 0, 0]);
        assert_eq!(l.sky_color(l.ground_top()), SKY_BLUE);
        assert_eq!(l.sky_color(400.0), [67, 103, 117]);
    }
}
