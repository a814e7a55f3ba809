//! Configuration constants and settings for the demo.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::model::{Point, Size};

/// Number of horizontal bands the viewport is divided into.
pub const BAND_COUNT: usize = 4;

/// Side length of the draggable rectangle.
pub const DEFAULT_RECT_SIDE: f32 = 100.0;

/// Size of the draggable rectangle.
pub const DEFAULT_RECT_SIZE: Size = Size::new(DEFAULT_RECT_SIDE, DEFAULT_RECT_SIDE);

/// Rectangle center before any drag occurs.
pub const DEFAULT_CENTER: Point = Point::new(200.0, 200.0);

/// Corner radius used when painting the rectangle.
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

/// Initial window size of the viewer.
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(400.0, 800.0);

/// Largest number of positions a single sweep may produce.
pub const MAX_SWEEP_SAMPLES: usize = 100_000;

/// Slack added to a sweep's step count so an inclusive end survives rounding.
pub const SWEEP_EPS: f64 = 1e-6;

/// Floating-point comparison epsilon.
pub const EPS: f32 = 0.0001;

/// Demo configuration.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Where the rectangle starts (and where Home resets it to).
    pub initial_center: Point,
    /// Size of the draggable rectangle.
    pub rect_size: Size,
    /// Corner radius of the painted rectangle.
    pub corner_radius: f32,
    /// Initial inner size of the viewer window.
    pub window_size: Size,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_center: DEFAULT_CENTER,
            rect_size: DEFAULT_RECT_SIZE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl DemoConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SwatchError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Check that all values are usable by the mapper and renderer.
    pub fn validate(&self) -> Result<()> {
        positive("rect_size.width", self.rect_size.width)?;
        positive("rect_size.height", self.rect_size.height)?;
        positive("window_size.width", self.window_size.width)?;
        positive("window_size.height", self.window_size.height)?;
        finite("initial_center.x", self.initial_center.x)?;
        finite("initial_center.y", self.initial_center.y)?;

        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(SwatchError::InvalidConfig {
                field: "corner_radius",
                expected: "a non-negative number",
                value: self.corner_radius,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SwatchError::InvalidConfig {
            field,
            expected: "a positive number",
            value,
        })
    }
}

fn finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SwatchError::InvalidConfig {
            field,
            expected: "a finite number",
            value,
        })
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }
}
