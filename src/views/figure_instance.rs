// src/views/figure_instance.rs
//
// The FigureInstance is the main updating entity in the visualization.
// It owns the figure geometry, the cycle-state counter, and whatever
// movements are in flight, and provides methods for updating them.

use nannou::prelude::*;

use crate::{
    animation::{plan_moves, CycleState, Movement, MovementEngine, SHAPE_COUNT},
    draw::{draw_graph_paper, draw_round_rect, DrawParams, GridFrame},
    models::{Figure, Palette},
};

pub struct FigureInstance {
    // figure data
    pub figure: Figure,
    pub palette: Palette,
    pub frame: GridFrame,
    pub radius: f32,

    // display state
    pub show_grid: bool,

    // animation state
    state: CycleState,
    shape_offsets: [Vec2; SHAPE_COUNT],
    active_movements: [Option<Movement>; SHAPE_COUNT],
}

impl FigureInstance {
    pub fn new(figure: Figure, palette: Palette, frame: GridFrame, radius: f32) -> Self {
        Self {
            figure,
            palette,
            frame,
            radius,

            show_grid: true,

            state: CycleState::new(),
            shape_offsets: [Vec2::ZERO; SHAPE_COUNT],
            active_movements: Default::default(),
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn shape_offset(&self, slot: usize) -> Vec2 {
        self.shape_offsets[slot]
    }

    pub fn has_active_movements(&self) -> bool {
        self.active_movements.iter().any(|m| m.is_some())
    }

    /************************** Animation *********************************/

    /// One click: start a one-cell movement for every shape per the
    /// current state's direction tables, then advance the counter.
    ///
    /// A shape already in flight has its movement replaced outright;
    /// rapid triggers are best-effort.
    pub fn trigger_cycle(&mut self, engine: &MovementEngine) {
        let moves = plan_moves(self.state);

        for (slot, (d_col, d_row)) in moves.iter().enumerate() {
            // rows grow downward in grid space, screen y grows upward
            let total = vec2(
                *d_col as f32 * self.frame.delta,
                -*d_row as f32 * self.frame.delta,
            );
            self.active_movements[slot] = Some(engine.generate_movement(total));
        }

        self.state = self.state.advance();
    }

    /// Advance in-flight movements, folding their step deltas into the
    /// per-shape offsets.
    pub fn update(&mut self, dt: f32) {
        for (slot, active) in self.active_movements.iter_mut().enumerate() {
            if let Some(movement) = active {
                if movement.update(dt) {
                    if let Some(delta) = movement.advance() {
                        self.shape_offsets[slot] += delta;
                    }
                    if movement.is_complete() {
                        *active = None;
                    }
                }
            }
        }
    }

    /**************************** Drawing *********************************/

    pub fn draw(&self, draw: &Draw, grid_style: &DrawParams, rect_style: &DrawParams) {
        if self.show_grid {
            draw_graph_paper(draw, &self.frame, grid_style.stroke, grid_style.stroke_weight);
        }

        draw_round_rect(
            draw,
            self.frame.rect_center(&self.figure.center),
            self.frame.rect_size(&self.figure.center),
            self.radius,
            self.palette.center,
            rect_style,
        );

        for (slot, shape) in self.figure.shapes.iter().enumerate() {
            let offset = self.shape_offsets[slot];
            for rect in &shape.rects {
                draw_round_rect(
                    draw,
                    self.frame.rect_center(rect) + offset,
                    self.frame.rect_size(rect),
                    self.radius,
                    self.palette.triangles[slot],
                    rect_style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingType;
    use crate::config::MovementConfig;

    fn test_instance() -> FigureInstance {
        FigureInstance::new(
            Figure::build(13),
            Palette::default(),
            GridFrame::new(20.0, 13, 0.0),
            6.0,
        )
    }

    fn test_engine() -> MovementEngine {
        MovementEngine::new(MovementConfig {
            duration: 0.1,
            easing: EasingType::Linear,
        })
    }

    /// Step updates until every movement has drained.
    fn settle(instance: &mut FigureInstance, engine: &MovementEngine) {
        let frame_duration = engine.config.duration / engine.steps as f32;
        for _ in 0..engine.steps * 2 {
            instance.update(frame_duration * 1.01);
        }
        assert!(!instance.has_active_movements());
    }

    #[test]
    fn test_new_instance_is_at_rest() {
        let instance = test_instance();
        assert_eq!(instance.state().index(), 0);
        assert!(!instance.has_active_movements());
        for slot in 0..SHAPE_COUNT {
            assert_eq!(instance.shape_offset(slot), Vec2::ZERO);
        }
    }

    #[test]
    fn test_trigger_advances_state() {
        let mut instance = test_instance();
        let engine = test_engine();

        instance.trigger_cycle(&engine);
        assert_eq!(instance.state().index(), 1);
        assert!(instance.has_active_movements());
    }

    #[test]
    fn test_four_triggers_return_state_to_start() {
        let mut instance = test_instance();
        let engine = test_engine();

        for _ in 0..4 {
            instance.trigger_cycle(&engine);
        }
        assert_eq!(instance.state().index(), 0);
    }

    #[test]
    fn test_first_cycle_moves_shapes_one_cell() {
        let mut instance = test_instance();
        let engine = test_engine();

        instance.trigger_cycle(&engine);
        settle(&mut instance, &engine);

        // state 0: slot 0 moves right and up one cell, slot 3 left only
        let delta = instance.frame.delta;
        assert!((instance.shape_offset(0) - vec2(delta, delta)).length() < 1e-2);
        assert!((instance.shape_offset(3) - vec2(-delta, 0.0)).length() < 1e-2);
    }

    #[test]
    fn test_full_cycle_returns_shapes_home() {
        let mut instance = test_instance();
        let engine = test_engine();

        for _ in 0..4 {
            instance.trigger_cycle(&engine);
            settle(&mut instance, &engine);
        }

        assert_eq!(instance.state().index(), 0);
        for slot in 0..SHAPE_COUNT {
            assert!(
                instance.shape_offset(slot).length() < 1e-2,
                "slot {} drifted to {:?}",
                slot,
                instance.shape_offset(slot)
            );
        }
    }

    #[test]
    fn test_retrigger_replaces_in_flight_movement() {
        let mut instance = test_instance();
        let engine = test_engine();

        instance.trigger_cycle(&engine);
        // advance partway through the first movement
        let frame_duration = engine.config.duration / engine.steps as f32;
        instance.update(frame_duration * 1.01);

        instance.trigger_cycle(&engine);
        assert_eq!(instance.state().index(), 2);

        // the replacement is best-effort: the remainder of the first
        // movement is dropped, so the shape settles off-lattice
        settle(&mut instance, &engine);
        let offset = instance.shape_offset(0);
        assert!(offset.length() > 0.0);
    }
}
