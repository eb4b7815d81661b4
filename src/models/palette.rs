// src/models/palette.rs
// the JSON-based fill palette data model

use nannou::prelude::*;
use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::path::Path;

/// Fill colors for the figure: one for the center square and one per
/// triangle slot, in radial order.
#[derive(Debug, Clone)]
pub struct Palette {
    pub center: Rgba,
    pub triangles: [Rgba; 8],
}

/// On-disk palette format: hex color strings, "#RRGGBB" or "#RRGGBBAA".
#[derive(Debug, Serialize, Deserialize)]
struct PaletteFile {
    center: String,
    triangles: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            center: parse_hex_color("#008B0299").unwrap(),
            triangles: [
                parse_hex_color("#4CAF5099").unwrap(), // green
                parse_hex_color("#00968899").unwrap(), // teal
                parse_hex_color("#2196F399").unwrap(), // blue
                parse_hex_color("#673AB799").unwrap(), // purple
                parse_hex_color("#B8000099").unwrap(), // red
                parse_hex_color("#FF690099").unwrap(), // orange
                parse_hex_color("#FFEB3B99").unwrap(), // yellow
                parse_hex_color("#CDDC3999").unwrap(), // yellow green
            ],
        }
    }
}

impl Palette {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let file: PaletteFile = serde_json::from_str(&content)?;

        if file.triangles.len() != 8 {
            return Err(format!(
                "palette must list 8 triangle colors, found {}",
                file.triangles.len()
            )
            .into());
        }

        let mut triangles = [rgba(0.0, 0.0, 0.0, 0.0); 8];
        for (slot, hex) in file.triangles.iter().enumerate() {
            triangles[slot] = parse_hex_color(hex)?;
        }

        Ok(Self {
            center: parse_hex_color(&file.center)?,
            triangles,
        })
    }
}

/// Parse "#RRGGBB" or "#RRGGBBAA" into an Rgba.
pub fn parse_hex_color(hex: &str) -> Result<Rgba, String> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| format!("color must start with '#': {}", hex))?;

    if digits.len() != 6 && digits.len() != 8 {
        return Err(format!("color must be 6 or 8 hex digits: {}", hex));
    }

    let channel = |idx: usize| -> Result<f32, String> {
        let pair = &digits[idx * 2..idx * 2 + 2];
        u8::from_str_radix(pair, 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| format!("bad hex digits '{}' in {}", pair, hex))
    };

    let r = channel(0)?;
    let g = channel(1)?;
    let b = channel(2)?;
    let a = if digits.len() == 8 { channel(3)? } else { 1.0 };

    Ok(rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let color = parse_hex_color("#ff0000").unwrap();
        assert_eq!(color.color.red, 1.0);
        assert_eq!(color.color.green, 0.0);
        assert_eq!(color.color.blue, 0.0);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn test_parse_eight_digit_hex() {
        let color = parse_hex_color("#00968899").unwrap();
        assert!((color.color.green - 150.0 / 255.0).abs() < 1e-6);
        assert!((color.alpha - 153.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_bad_hex_is_an_error() {
        let tests = vec!["008B02", "#12345", "#12345G99", "#", ""];
        for bad in tests {
            assert!(parse_hex_color(bad).is_err(), "expected error for {:?}", bad);
        }
    }

    #[test]
    fn test_default_palette_matches_the_figure() {
        let palette = Palette::default();
        assert_eq!(palette.triangles.len(), 8);
        // all fills are translucent (0x99 alpha)
        assert!((palette.center.alpha - 0.6).abs() < 0.01);
        for color in &palette.triangles {
            assert!((color.alpha - 0.6).abs() < 0.01);
        }
    }

    #[test]
    fn test_load_rejects_short_palette() {
        let dir = std::env::temp_dir().join("trivis_palette_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("short.json");
        fs::write(&path, r##"{"center": "#ffffff", "triangles": ["#000000"]}"##).unwrap();

        assert!(Palette::load(&path).is_err());
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = std::env::temp_dir().join("trivis_palette_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.json");
        fs::write(
            &path,
            r##"{
                "center": "#008B0299",
                "triangles": [
                    "#4CAF5099", "#00968899", "#2196F399", "#673AB799",
                    "#B8000099", "#FF690099", "#FFEB3B99", "#CDDC3999"
                ]
            }"##,
        )
        .unwrap();

        let palette = Palette::load(&path).unwrap();
        let default = Palette::default();
        assert_eq!(palette.center, default.center);
        assert_eq!(palette.triangles, default.triangles);
    }
}
