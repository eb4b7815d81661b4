// src/models/figure_model.rs
// The figure: a center square ringed by eight triangles, each built
// from stacked rectangles

use crate::models::geometry::{rect_spec, Direction, RectSpec};

/// Compass orientation of one triangle, named for where it sits
/// relative to the center square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Ene,
    Nne,
    Nnw,
    Wnw,
    Wsw,
    Ssw,
    Sse,
    Ese,
}

impl Orientation {
    /// All eight orientations in radial order, 0 to 2π. A triangle's
    /// position in this list is its shape slot for the state tables.
    pub const ALL: [Orientation; 8] = [
        Orientation::Ene,
        Orientation::Nne,
        Orientation::Nnw,
        Orientation::Wnw,
        Orientation::Wsw,
        Orientation::Ssw,
        Orientation::Sse,
        Orientation::Ese,
    ];

    /// The rectangle for outward step `i` (1-based) of a triangle
    /// centered on column `cc`, row `cr`.
    pub fn step_rect(&self, cc: i32, cr: i32, i: u32) -> RectSpec {
        let step = i as i32;
        match self {
            Orientation::Ene => rect_spec(cc + step, cr, i, Direction::Up),
            Orientation::Nne => rect_spec(cc + 1, cr - step, i, Direction::Right),
            Orientation::Nnw => rect_spec(cc, cr - step, i, Direction::Left),
            Orientation::Wnw => rect_spec(cc - step, cr - 1, i, Direction::Up),
            Orientation::Wsw => rect_spec(cc - step, cr, i, Direction::Down),
            Orientation::Ssw => rect_spec(cc - 1, cr + step, i, Direction::Left),
            Orientation::Sse => rect_spec(cc, cr + step, i, Direction::Right),
            Orientation::Ese => rect_spec(cc + step, cr + 1, i, Direction::Down),
        }
    }
}

/// One triangle: its orientation plus its stacked rectangles,
/// innermost first.
#[derive(Debug, Clone)]
pub struct Shape {
    pub orientation: Orientation,
    pub rects: Vec<RectSpec>,
}

impl Shape {
    pub fn build(orientation: Orientation, cc: i32, cr: i32, steps: u32) -> Self {
        let rects = (1..=steps).map(|i| orientation.step_rect(cc, cr, i)).collect();
        Self { orientation, rects }
    }
}

/// The complete figure on an `num_grids` x `num_grids` lattice.
#[derive(Debug, Clone)]
pub struct Figure {
    pub num_grids: u32,
    pub center_col: i32,
    pub center_row: i32,
    pub steps: u32,
    pub center: RectSpec,
    pub shapes: Vec<Shape>,
}

impl Figure {
    pub fn build(num_grids: u32) -> Self {
        let center = (num_grids / 2) as i32;
        // Leaves one empty cell between the triangle tips and the edge.
        let steps = (num_grids / 2).saturating_sub(2);

        let shapes = Orientation::ALL
            .iter()
            .map(|&orientation| Shape::build(orientation, center, center, steps))
            .collect();

        Self {
            num_grids,
            center_col: center,
            center_row: center,
            steps,
            center: rect_spec(center, center, 1, Direction::Right),
            shapes,
        }
    }
}
