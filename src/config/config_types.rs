// src/config/config_types.rs
//
// Config types for the app. Every field has a default so trivis runs
// with no config.toml at all.

use crate::animation::EasingType;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub grid_delta: f32, // distance between grid lines, pixels
    pub num_grids: u32,  // cells per side
    pub radius: f32,     // rectangle corner radius, pixels
    pub duration: f32,   // animation duration, milliseconds
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            grid_delta: 20.0,
            num_grids: 13,
            radius: 6.0,
            duration: 500.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background: String,
    pub grid_color: String,
    pub grid_weight: f32,
    pub stroke_color: String,
    pub stroke_weight: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            grid_color: "#6666aa33".to_string(),
            grid_weight: 3.0,
            stroke_color: "#000000".to_string(),
            stroke_weight: 2.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub easing: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            easing: "linear".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub palette_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MovementConfig {
    pub duration: f32, // seconds
    pub easing: EasingType,
}
