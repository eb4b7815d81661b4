// src/animation/movement.rs
//
// The shape movement manager: a movement is a precomputed sequence of
// per-frame position deltas, consumed at a fixed frame rate.

use crate::config::MovementConfig;
use nannou::prelude::*;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingType {
    Linear,
    EaseInOut,
    EaseIn,
    EaseOut,
}

impl EasingType {
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
        }
    }
}

impl FromStr for EasingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(EasingType::Linear),
            "ease_in_out" => Ok(EasingType::EaseInOut),
            "ease_in" => Ok(EasingType::EaseIn),
            "ease_out" => Ok(EasingType::EaseOut),
            _ => Err(format!("Invalid easing: {}", s)),
        }
    }
}

/// An in-flight movement: position deltas still to be applied.
#[derive(Debug, Clone)]
pub struct Movement {
    changes: Vec<Vec2>,
    current_step: usize,
    frame_timer: f32,
    frame_duration: f32,
}

impl Movement {
    pub fn new(changes: Vec<Vec2>, frame_duration: f32) -> Self {
        Self {
            changes,
            current_step: 0,
            frame_timer: 0.0,
            frame_duration,
        }
    }

    /// True when enough time has accumulated to advance a step.
    pub fn update(&mut self, dt: f32) -> bool {
        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            true
        } else {
            false
        }
    }

    pub fn advance(&mut self) -> Option<Vec2> {
        if self.current_step < self.changes.len() {
            let delta = self.changes[self.current_step];
            self.current_step += 1;
            Some(delta)
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_step >= self.changes.len()
    }

    /// Whatever displacement this movement has not yet applied.
    pub fn remaining(&self) -> Vec2 {
        self.changes[self.current_step..]
            .iter()
            .fold(Vec2::ZERO, |acc, d| acc + *d)
    }
}

pub struct MovementEngine {
    pub config: MovementConfig,
    pub steps: usize,
}

impl MovementEngine {
    pub fn new(config: MovementConfig) -> Self {
        // nominal 60 steps per second of duration
        let steps = if config.duration == 0.0 {
            2
        } else {
            ((config.duration * 60.0).floor() as usize).max(2)
        };
        Self { config, steps }
    }

    /// Chop `total` into eased per-step deltas. The deltas telescope,
    /// so their sum is `total` up to float rounding.
    pub fn generate_movement(&self, total: Vec2) -> Movement {
        let mut changes = Vec::with_capacity(self.steps);

        for step in 0..self.steps {
            let t = step as f32 / (self.steps - 1) as f32;
            let previous_t = if step == 0 {
                0.0
            } else {
                (step - 1) as f32 / (self.steps - 1) as f32
            };

            let eased_t = self.config.easing.apply(t);
            let previous_eased_t = self.config.easing.apply(previous_t);

            changes.push(total * (eased_t - previous_eased_t));
        }

        let frame_duration = self.config.duration / self.steps as f32;
        Movement::new(changes, frame_duration)
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}
