//! Software rendering of a frame for PNG export.

use bandswatch_core::{band_index, BandColor, DraggableRect, Rgb, Size, SwatchPair, BANDS};
use image::{Rgba, RgbaImage};

use crate::canvas::swatch_split_y;

/// Largest exported image side, in pixels.
pub const MAX_EXPORT_DIM: u32 = 4096;

fn rgba(rgb: Rgb) -> Rgba<u8> {
    Rgba([rgb.r, rgb.g, rgb.b, 255])
}

/// Check whether `(x, y)` lies inside the rectangle `min..max` with rounded corners.
fn inside_rounded(x: f32, y: f32, min: (f32, f32), max: (f32, f32), radius: f32) -> bool {
    if x < min.0 || x > max.0 || y < min.1 || y > max.1 {
        return false;
    }
    let radius = radius
        .min((max.0 - min.0) / 2.0)
        .min((max.1 - min.1) / 2.0)
        .max(0.0);

    // Distance from the nearest corner circle center, zero outside the corner zones.
    let dx = (min.0 + radius - x).max(x - (max.0 - radius)).max(0.0);
    let dy = (min.1 + radius - y).max(y - (max.1 - radius)).max(0.0);
    dx * dx + dy * dy <= radius * radius
}

/// Render bands and the rounded two-swatch rectangle into an image the size of `viewport`.
///
/// Each pixel is sampled at its center.
pub fn render_image(
    viewport: Size,
    rect: &DraggableRect,
    pair: &SwatchPair,
    corner_radius: f32,
) -> RgbaImage {
    let width = (viewport.width.max(0.0) as u32).min(MAX_EXPORT_DIM);
    let height = (viewport.height.max(0.0) as u32).min(MAX_EXPORT_DIM);

    let (min, max) = rect.bounds();
    let split_y = swatch_split_y(rect, pair);

    RgbaImage::from_fn(width, height, |px, py| {
        let x = px as f32 + 0.5;
        let y = py as f32 + 0.5;

        let color: BandColor = if inside_rounded(x, y, (min.x, min.y), (max.x, max.y), corner_radius)
        {
            if y < split_y {
                pair.top
            } else {
                pair.bottom
            }
        } else {
            BANDS[band_index(y, viewport.height)]
        };
        rgba(color.rgb())
    })
}

/// Default export file name for a rectangle position.
pub fn default_file_name(rect: &DraggableRect) -> String {
    format!(
        "bandswatch_{:.0}x{:.0}.png",
        rect.center.x.round(),
        rect.center.y.round()
    )
}
