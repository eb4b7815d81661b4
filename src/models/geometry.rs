// src/models/geometry.rs
// Grid-cell geometry: directions and the rectangle builder

use std::fmt;
use std::str::FromStr;

/// Which screen axis a direction moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One of the four movement / stacking directions.
///
/// Grid coordinates grow rightward (columns) and downward (rows),
/// so Down is +y in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }

    pub fn sign(&self) -> i32 {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }

    /// Unit displacement in grid cells, (d_col, d_row).
    pub fn cell_delta(&self) -> (i32, i32) {
        match self.axis() {
            Axis::X => (self.sign(), 0),
            Axis::Y => (0, self.sign()),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// An axis-aligned rectangle in grid-cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectSpec {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Build the rectangle covering `length` cells from cell (col, row)
/// toward `direction`. The anchor cell is always inside the result.
pub fn rect_spec(col: i32, row: i32, length: u32, direction: Direction) -> RectSpec {
    let len = length as i32;
    match direction {
        Direction::Left => RectSpec {
            x: col - len + 1,
            y: row,
            w: length,
            h: 1,
        },
        Direction::Right => RectSpec {
            x: col,
            y: row,
            w: length,
            h: 1,
        },
        Direction::Up => RectSpec {
            x: col,
            y: row - len + 1,
            w: 1,
            h: length,
        },
        Direction::Down => RectSpec {
            x: col,
            y: row,
            w: 1,
            h: length,
        },
    }
}
