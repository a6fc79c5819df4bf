//! Label configuration
//!
//! Every constructor parameter of a [`LabelNode`](crate::LabelNode) lives in
//! [`LabelConfig`]. Configs can be built in code or loaded from TOML:
//!
//! ```toml
//! text = "Joint 3"
//! font_size = 14.0
//! align = "center"
//! position = [10.0, 20.0]
//! background_color = [0.0, 0.0, 0.0, 0.6]
//! border_color = [1.0, 1.0, 1.0, 1.0]
//! border_width = 1.0
//!
//! [padding]
//! left = 4.0
//! right = 4.0
//! ```

use crate::types::{Color, Padding, TextAlign};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

/// Default character size
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Font resolution at which no resolution correction is applied
pub const DEFAULT_FONT_RESOLUTION: u32 = 32;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelConfig {
    pub text: String,
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Anchor in the parent's 2D space.
    pub position: (f32, f32),
    pub align: TextAlign,
    pub padding: Padding,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    /// Font file; empty selects the builtin face.
    pub font_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_height: Option<f32>,
    /// Glyph rasterization resolution (x, y).
    pub font_resolution: (u32, u32),
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
            position: (0.0, 0.0),
            align: TextAlign::Left,
            padding: Padding::default(),
            background_color: Color::TRANSPARENT,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            font_path: String::new(),
            fixed_width: None,
            fixed_height: None,
            font_resolution: (DEFAULT_FONT_RESOLUTION, DEFAULT_FONT_RESOLUTION),
        }
    }
}

impl LabelConfig {
    /// Create a config with the given text and defaults for everything else
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builder: Set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Builder: Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: Set anchor position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = (x, y);
        self
    }

    /// Builder: Set alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Builder: Set padding
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Builder: Set background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Builder: Set border color and width
    pub fn with_border(mut self, color: Color, width: f32) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }

    /// Builder: Set font file
    pub fn with_font_path(mut self, path: impl Into<String>) -> Self {
        self.font_path = path.into();
        self
    }

    /// Builder: Set fixed box size overrides
    pub fn with_fixed_size(mut self, width: Option<f32>, height: Option<f32>) -> Self {
        self.fixed_width = width;
        self.fixed_height = height;
        self
    }

    /// Parse a config from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Serialize the config to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = LabelConfig::default();
        assert_eq!(cfg.text, "");
        assert_eq!(cfg.font_size, 12.0);
        assert_eq!(cfg.position, (0.0, 0.0));
        assert_eq!(cfg.align, TextAlign::Left);
        assert_eq!(cfg.padding, Padding::default());
        assert!(cfg.background_color.is_transparent());
        assert!(cfg.border_color.is_transparent());
        assert_eq!(cfg.border_width, 0.0);
        assert!(cfg.fixed_width.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let cfg = LabelConfig::from_toml_str(
            r#"
            text = "Joint 3"
            align = "center"
            position = [10.0, 20.0]
            background_color = [0.0, 0.0, 0.0, 0.5]

            [padding]
            left = 4.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.text, "Joint 3");
        assert_eq!(cfg.align, TextAlign::Center);
        assert_eq!(cfg.position, (10.0, 20.0));
        assert_eq!(cfg.background_color, Color::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(cfg.padding, Padding::new(4.0, 0.0, 0.0, 0.0));
        assert_eq!(cfg.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_toml_roundtrip() {
        let cfg = LabelConfig::new("Hi")
            .with_align(TextAlign::Right)
            .with_padding(Padding::uniform(2.0))
            .with_fixed_size(Some(40.0), None);
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(LabelConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn test_load_falls_back_on_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "font_size = \"large\"").unwrap();

        let cfg = LabelConfig::load_from_path(file.path());
        assert_eq!(cfg, LabelConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cfg = LabelConfig::load_from_path(Path::new("/nonexistent/label.toml"));
        assert_eq!(cfg, LabelConfig::default());
    }
}
