//! Shared configuration for Giornata
//!
//! This crate provides the single source of truth for the painter's
//! startup settings: which image and mask to load, the brush parameters,
//! and the on-screen rect the canvas is rendered into.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default path of the editable image
pub const DEFAULT_IMAGE_PATH: &str = "assets/canvas.png";

/// Default path of the paintability mask
pub const DEFAULT_MASK_PATH: &str = "assets/mask.png";

/// Default brush color (opaque red)
pub const DEFAULT_BRUSH_COLOR: [u8; 4] = [255, 0, 0, 255];

/// Default brush half-width in pixels
pub const DEFAULT_BRUSH_SIZE: i32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Brush settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushConfig {
    /// RGBA stamp color
    pub color: [u8; 4],
    /// Half-width of the square footprint in pixels
    pub size: i32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_BRUSH_COLOR,
            size: DEFAULT_BRUSH_SIZE,
        }
    }
}

/// Geometry of the on-screen rect the canvas is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRectConfig {
    /// Screen-space location of the rect's pivot point
    pub position: [f32; 2],
    /// Rect size in screen units
    pub size: [f32; 2],
    /// Normalized pivot, [0.5, 0.5] = centered
    pub pivot: [f32; 2],
}

/// Painter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// The editable image; saving overwrites this file
    pub image_path: PathBuf,
    /// The paintability mask, same dimensions as the image
    pub mask_path: PathBuf,
    /// Brush settings
    pub brush: BrushConfig,
    /// Optional view rect; when absent, pointer positions are taken to be
    /// in buffer pixel coordinates
    pub view: Option<ViewRectConfig>,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            mask_path: PathBuf::from(DEFAULT_MASK_PATH),
            brush: BrushConfig::default(),
            view: None,
        }
    }
}

impl PaintConfig {
    /// Configuration with the default asset paths and brush
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaintConfig::new();
        assert_eq!(config.image_path, PathBuf::from(DEFAULT_IMAGE_PATH));
        assert_eq!(config.mask_path, PathBuf::from(DEFAULT_MASK_PATH));
        assert_eq!(config.brush.size, DEFAULT_BRUSH_SIZE);
        assert!(config.view.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = PaintConfig::new();
        config.brush = BrushConfig {
            color: [0, 128, 255, 255],
            size: 3,
        };
        config.view = Some(ViewRectConfig {
            position: [400.0, 300.0],
            size: [200.0, 100.0],
            pivot: [0.5, 0.5],
        });

        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: PaintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let back: PaintConfig =
            serde_json::from_str(r#"{"image_path": "painting.png"}"#).unwrap();
        assert_eq!(back.image_path, PathBuf::from("painting.png"));
        assert_eq!(back.mask_path, PathBuf::from(DEFAULT_MASK_PATH));
        assert_eq!(back.brush, BrushConfig::default());
    }

    #[test]
    fn test_from_file_missing_is_an_error() {
        assert!(PaintConfig::from_file("/nonexistent/giornata.json").is_err());
    }
}
