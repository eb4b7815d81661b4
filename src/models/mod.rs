pub mod figure_model;
pub mod geometry;
pub mod palette;

pub use figure_model::{Figure, Orientation, Shape};
pub use geometry::{rect_spec, Axis, Direction, RectSpec};
pub use palette::{parse_hex_color, Palette};
