use eframe::egui::{self, Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Shape};
use nalgebra::Point2;

use super::hud::hud_lines;
use super::layout::{Bounds, Layout, GRASS_GREEN, GREY, RED, ROCKET_RADIUS, WHITE};
use crate::dynamics::FlightState;

const HUD_FONT_SIZE: f32 = 20.0;

fn color(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

fn pos(origin: Pos2, p: Point2<f32>) -> Pos2 {
    origin + egui::vec2(p.x, p.y)
}

fn rect(origin: Pos2, b: Bounds) -> Rect {
    Rect::from_min_size(origin + egui::vec2(b.x, b.y), egui::vec2(b.w, b.h))
}

/// Draw one frame. Reads the state, never writes it.
///
/// Order: sky, ground, slider track + knob, rocket, fuel gauge, HUD text.
pub fn paint_scene(painter: &Painter, origin: Pos2, layout: &Layout, state: &FlightState) {
    paint_sky(painter, origin, layout);
    painter.rect_filled(rect(origin, layout.ground()), 0.0, color(GRASS_GREEN));

    painter.rect_filled(rect(origin, layout.slider_track()), 0.0, color(GREY));
    let knob = layout.slider.knob_center(state.thrust);
    painter.circle_filled(pos(origin, knob), layout.slider.knob_radius, color(RED));

    let rocket = layout.rocket_center(state.position);
    painter.circle_filled(pos(origin, rocket), ROCKET_RADIUS, color(RED));

    painter.rect_filled(rect(origin, layout.fuel_bar()), 0.0, color(GREY));
    let fill = layout.fuel_fill(state.fuel_fraction());
    if fill.h > 0.0 {
        painter.rect_filled(rect(origin, fill), 0.0, color(RED));
    }

    let font = FontId::proportional(HUD_FONT_SIZE);
    for line in hud_lines(state, layout) {
        painter.text(
            pos(origin, line.anchor),
            Align2::LEFT_TOP,
            line.text,
            font.clone(),
            color(WHITE),
        );
    }
}

/// Vertical gradient quad; vertex colours interpolate linearly down the sky.
fn paint_sky(painter: &Painter, origin: Pos2, layout: &Layout) {
    let bottom = layout.ground_top();
    let top_color = color(layout.sky_color(0.0));
    let bottom_color = color(layout.sky_color(bottom));

    let mut mesh = Mesh::default();
    mesh.colored_vertex(origin, top_color);
    mesh.colored_vertex(origin + egui::vec2(layout.width, 0.0), top_color);
    mesh.colored_vertex(origin + egui::vec2(0.0, bottom), bottom_color);
    mesh.colored_vertex(origin + egui::vec2(layout.width, bottom), bottom_color);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    painter.add(Shape::mesh(mesh));
}
