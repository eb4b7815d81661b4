// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::animation::EasingType;
use crate::config::config_types::*;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub figure: FigureConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
    pub paths: PathConfig,
}

impl Config {
    /// Look for config.toml beside the executable, then in the working
    /// directory. A missing file means defaults; a malformed one is an
    /// error.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = Self::exe_dir_config() {
            return Self::load_from(&path);
        }

        let cwd_path = Path::new("config.toml");
        if cwd_path.exists() {
            return Self::load_from(cwd_path);
        }

        Ok(Self::default())
    }

    fn exe_dir_config() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join("config.toml");
        config_path.exists().then_some(config_path)
    }

    fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Movement parameters in engine units (seconds, parsed easing).
    pub fn movement_config(&self) -> Result<MovementConfig, String> {
        Ok(MovementConfig {
            duration: self.figure.duration / 1000.0,
            easing: self.animation.easing.parse::<EasingType>()?,
        })
    }

    pub fn resolve_palette_path(&self) -> Option<PathBuf> {
        let file = self.paths.palette_file.as_ref()?;
        if Path::new(file).is_absolute() {
            return Some(PathBuf::from(file));
        }
        // relative paths resolve against the executable, falling back
        // to the working directory
        let resolved = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(file)))
            .filter(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from(file));
        Some(resolved)
    }
}
