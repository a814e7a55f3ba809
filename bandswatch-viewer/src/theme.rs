//! Color palette and styling constants for the viewer.
//!
//! Band and swatch colors come from `bandswatch_core`; everything here is
//! overlay chrome drawn on top of them.

use bandswatch_core::{BandColor, Rgb};
use egui::Color32;

/// Convert a core color value to an egui color.
pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Paint color of a band or swatch.
pub fn band_color(color: BandColor) -> Color32 {
    color32(color.rgb())
}

// =============================================================================
// BACKGROUND
// =============================================================================
pub const CANVAS_BG: Color32 = Color32::from_rgb(25, 25, 28);

// =============================================================================
// GUIDES - Band boundaries and rectangle edges
// =============================================================================
pub const BAND_GUIDE: Color32 = Color32::from_rgb(0, 170, 255);
pub const EDGE_GUIDE: Color32 = Color32::from_rgb(255, 85, 50);

// =============================================================================
// READOUT
// =============================================================================
pub const READOUT_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 24, 200);
pub const READOUT_TEXT: Color32 = Color32::from_rgb(240, 240, 240);
pub const READOUT_PADDING: f32 = 8.0;
pub const READOUT_FONT_SIZE: f32 = 13.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const GUIDE_STROKE_WIDTH: f32 = 1.0;
