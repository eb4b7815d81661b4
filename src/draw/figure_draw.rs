// src/draw/figure_draw.rs
// Graph paper and rounded-rectangle drawing on a GridFrame

use nannou::prelude::*;
use std::f32::consts::PI;

use crate::draw::{DrawParams, GridFrame};

/// Points sampled along each quarter-circle corner.
const CORNER_RESOLUTION: usize = 8;

/// Draw the lattice: num_grids + 1 lines each way, spanning the full
/// drawing bounds.
pub fn draw_graph_paper(draw: &Draw, frame: &GridFrame, color: Rgba, weight: f32) {
    let upper = frame.upper_bound();

    for i in 0..=frame.num_grids {
        let g = i as f32 * frame.delta + frame.offset;

        // vertical, then horizontal
        draw.line()
            .points(frame.to_screen(g, 0.0), frame.to_screen(g, upper))
            .color(color)
            .stroke_weight(weight);
        draw.line()
            .points(frame.to_screen(0.0, g), frame.to_screen(upper, g))
            .color(color)
            .stroke_weight(weight);
    }
}

/// Outline of an axis-aligned rounded rectangle, counterclockwise.
/// The radius is clamped to half the short side.
pub fn rounded_rect_points(center: Point2, size: Vec2, radius: f32) -> Vec<Point2> {
    let half_w = size.x / 2.0;
    let half_h = size.y / 2.0;
    let r = radius.clamp(0.0, half_w.min(half_h));

    if r <= 0.0 {
        return vec![
            pt2(center.x + half_w, center.y + half_h),
            pt2(center.x - half_w, center.y + half_h),
            pt2(center.x - half_w, center.y - half_h),
            pt2(center.x + half_w, center.y - half_h),
        ];
    }

    // quarter-arc corner centers with their start angles, CCW from the
    // top-right corner
    let corners = [
        (pt2(center.x + half_w - r, center.y + half_h - r), 0.0),
        (pt2(center.x - half_w + r, center.y + half_h - r), PI / 2.0),
        (pt2(center.x - half_w + r, center.y - half_h + r), PI),
        (pt2(center.x + half_w - r, center.y - half_h + r), 3.0 * PI / 2.0),
    ];

    let mut points = Vec::with_capacity(4 * (CORNER_RESOLUTION + 1));
    for (corner, start_angle) in corners {
        for i in 0..=CORNER_RESOLUTION {
            let angle = start_angle + (i as f32 / CORNER_RESOLUTION as f32) * (PI / 2.0);
            points.push(pt2(
                corner.x + r * angle.cos(),
                corner.y + r * angle.sin(),
            ));
        }
    }
    points
}

/// Fill + stroke a rounded rectangle.
pub fn draw_round_rect(
    draw: &Draw,
    center: Point2,
    size: Vec2,
    radius: f32,
    fill: Rgba,
    params: &DrawParams,
) {
    let points = rounded_rect_points(center, size, radius);

    draw.polygon()
        .color(fill)
        .stroke(params.stroke)
        .stroke_weight(params.stroke_weight)
        .points(points);
}
