pub mod cycle;
pub mod movement;

pub use cycle::{plan_moves, CycleState, SHAPE_COUNT, STATE_COUNT};
pub use movement::{EasingType, Movement, MovementEngine};
