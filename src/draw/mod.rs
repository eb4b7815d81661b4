// src/draw/mod.rs
// Grid-to-screen mapping and draw parameters

pub mod figure_draw;

pub use figure_draw::{draw_graph_paper, draw_round_rect, rounded_rect_points};

use crate::models::RectSpec;
use nannou::prelude::*;

/// Maps grid-cell coordinates (origin top-left, rows growing downward)
/// onto nannou screen coordinates (origin center, y up), with the
/// drawing centered in the window.
#[derive(Debug, Clone, Copy)]
pub struct GridFrame {
    pub delta: f32,
    pub num_grids: u32,
    pub offset: f32,
}

impl GridFrame {
    pub fn new(delta: f32, num_grids: u32, offset: f32) -> Self {
        Self {
            delta,
            num_grids,
            offset,
        }
    }

    /// Pixel extent of the lattice itself.
    pub fn span(&self) -> f32 {
        self.num_grids as f32 * self.delta
    }

    /// Upper pixel bound of the drawing in grid space.
    pub fn upper_bound(&self) -> f32 {
        self.offset + self.span()
    }

    /// Grid-space pixels to screen coordinates (y inverted to match
    /// nannou).
    pub fn to_screen(&self, gx: f32, gy: f32) -> Point2 {
        let half = self.upper_bound() / 2.0;
        pt2(gx - half, half - gy)
    }

    /// Screen position of the top-left corner of a cell.
    pub fn cell_origin(&self, col: i32, row: i32) -> Point2 {
        self.to_screen(
            col as f32 * self.delta + self.offset,
            row as f32 * self.delta + self.offset,
        )
    }

    /// Screen position of a rectangle's center.
    pub fn rect_center(&self, rect: &RectSpec) -> Point2 {
        let gx = rect.x as f32 * self.delta + self.offset + rect.w as f32 * self.delta / 2.0;
        let gy = rect.y as f32 * self.delta + self.offset + rect.h as f32 * self.delta / 2.0;
        self.to_screen(gx, gy)
    }

    /// Rectangle extent in pixels.
    pub fn rect_size(&self, rect: &RectSpec) -> Vec2 {
        vec2(rect.w as f32 * self.delta, rect.h as f32 * self.delta)
    }
}

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub stroke: Rgba,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            stroke: rgba(0.0, 0.0, 0.0, 1.0),
            stroke_weight: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> GridFrame {
        GridFrame::new(20.0, 13, 0.0)
    }

    #[test]
    fn test_span_and_bounds() {
        assert_eq!(frame().span(), 260.0);
        assert_eq!(frame().upper_bound(), 260.0);

        let offset_frame = GridFrame::new(20.0, 13, 10.0);
        assert_eq!(offset_frame.span(), 260.0);
        assert_eq!(offset_frame.upper_bound(), 270.0);
    }

    #[test]
    fn test_cell_origin_mapping() {
        let tests = vec![
            // Format: (col, row, expected screen position)
            (0, 0, pt2(-130.0, 130.0)),
            (13, 13, pt2(130.0, -130.0)),
            (6, 6, pt2(-10.0, 10.0)),
        ];

        for (col, row, expected) in tests {
            assert_eq!(
                frame().cell_origin(col, row),
                expected,
                "Failed for col:{}, row:{}",
                col,
                row
            );
        }
    }

    #[test]
    fn test_center_square_lands_on_screen_center() {
        let center = RectSpec { x: 6, y: 6, w: 1, h: 1 };
        assert_eq!(frame().rect_center(&center), pt2(0.0, 0.0));
        assert_eq!(frame().rect_size(&center), vec2(20.0, 20.0));
    }

    #[test]
    fn test_rect_center_accounts_for_extent() {
        // a 3x1 rect reaching right of the center column
        let rect = RectSpec { x: 6, y: 6, w: 3, h: 1 };
        assert_eq!(frame().rect_center(&rect), pt2(20.0, 0.0));
        assert_eq!(frame().rect_size(&rect), vec2(60.0, 20.0));
    }
}
