//! The four fixed background bands and their swatch contrast colors.

use serde::{Deserialize, Serialize};

use crate::config::BAND_COUNT;

/// An 8-bit RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One of the colors used for bands and swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    White,
    Pink,
    Yellow,
    Black,
}

/// Band colors from top (index 0) to bottom.
pub const BANDS: [BandColor; BAND_COUNT] = [
    BandColor::White,
    BandColor::Pink,
    BandColor::Yellow,
    BandColor::Black,
];

impl BandColor {
    /// Whether swatches over this band are painted white.
    pub fn is_dark(self) -> bool {
        matches!(self, BandColor::Pink | BandColor::Black)
    }

    /// The swatch color drawn over this band.
    ///
    /// This is a fixed table, not a luminance computation: pink maps to white
    /// even though a luminance rule would pick black.
    pub fn contrast(self) -> BandColor {
        if self.is_dark() {
            BandColor::White
        } else {
            BandColor::Black
        }
    }

    /// Display color.
    pub fn rgb(self) -> Rgb {
        match self {
            BandColor::White => Rgb::new(255, 255, 255),
            BandColor::Pink => Rgb::new(255, 45, 85),
            BandColor::Yellow => Rgb::new(255, 204, 0),
            BandColor::Black => Rgb::new(0, 0, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BandColor::White => "white",
            BandColor::Pink => "pink",
            BandColor::Yellow => "yellow",
            BandColor::Black => "black",
        }
    }
}

impl std::fmt::Display for BandColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A laid-out band: its index, color and vertical extent `[top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandSpan {
    pub index: usize,
    pub color: BandColor,
    pub top: f32,
    pub bottom: f32,
}

impl BandSpan {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Divide a viewport of the given height into the four bands.
///
/// The last band always ends exactly at `viewport_height`, so the spans
/// partition `[0, viewport_height)` with no gap from rounding.
pub fn layout_bands(viewport_height: f32) -> [BandSpan; BAND_COUNT] {
    let segment_height = viewport_height / BAND_COUNT as f32;
    std::array::from_fn(|index| BandSpan {
        index,
        color: BANDS[index],
        top: segment_height * index as f32,
        bottom: if index + 1 == BAND_COUNT {
            viewport_height
        } else {
            segment_height * (index + 1) as f32
        },
    })
}

/// Index of the band containing `y`, saturated to the first and last band.
///
/// Degenerate input (a non-positive segment height, or a NaN quotient)
/// resolves to band 0.
pub(crate) fn segment_index(y: f32, segment_height: f32) -> usize {
    if !(segment_height > 0.0) {
        return 0;
    }
    let raw = (y / segment_height).floor();
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, (BAND_COUNT - 1) as f32) as usize
}

/// Index of the band containing `y` in a viewport of the given height.
pub fn band_index(y: f32, viewport_height: f32) -> usize {
    segment_index(y, viewport_height / BAND_COUNT as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    // ==================== Contrast table tests ====================

    #[test]
    fn test_contrast_table() {
        assert_eq!(BandColor::White.contrast(), BandColor::Black);
        assert_eq!(BandColor::Pink.contrast(), BandColor::White);
        assert_eq!(BandColor::Yellow.contrast(), BandColor::Black);
        assert_eq!(BandColor::Black.contrast(), BandColor::White);
    }

    #[test]
    fn test_contrast_never_matches_band() {
        for color in BANDS {
            assert_ne!(color.contrast(), color, "{color} maps to itself");
        }
    }

    #[test]
    fn test_band_order() {
        let names: Vec<_> = BANDS.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["white", "pink", "yellow", "black"]);
    }

    // ==================== Layout tests ====================

    #[test]
    fn test_layout_partitions_viewport() {
        let bands = layout_bands(400.0);
        assert!(approx_eq(bands[0].top, 0.0));
        for pair in bands.windows(2) {
            assert_eq!(pair[0].bottom, pair[1].top);
        }
        assert_eq!(bands[3].bottom, 400.0);
        for band in &bands {
            assert!(approx_eq(band.height(), 100.0));
        }
    }

    #[test]
    fn test_layout_uneven_height_ends_at_viewport() {
        let height = 333.3;
        let bands = layout_bands(height);
        assert_eq!(bands[3].bottom, height);
        assert_eq!(bands[2].color, BandColor::Yellow);
    }

    // ==================== Index tests ====================

    #[test]
    fn test_band_index_in_range() {
        for height in [1.0_f32, 37.5, 400.0, 1080.0] {
            let mut y = 0.0;
            while y < height {
                assert!(band_index(y, height) <= 3);
                y += height / 97.0;
            }
        }
    }

    #[test]
    fn test_band_index_boundaries() {
        assert_eq!(band_index(0.0, 400.0), 0);
        assert_eq!(band_index(99.9, 400.0), 0);
        assert_eq!(band_index(100.0, 400.0), 1);
        assert_eq!(band_index(399.9, 400.0), 3);
    }

    #[test]
    fn test_band_index_saturates() {
        assert_eq!(band_index(-150.0, 400.0), 0);
        assert_eq!(band_index(400.0, 400.0), 3);
        assert_eq!(band_index(10_000.0, 400.0), 3);
        assert_eq!(band_index(f32::INFINITY, 400.0), 3);
    }

    #[test]
    fn test_band_index_degenerate_viewport() {
        assert_eq!(band_index(50.0, 0.0), 0);
        assert_eq!(band_index(50.0, -400.0), 0);
        assert_eq!(band_index(f32::NAN, 400.0), 0);
        assert_eq!(band_index(50.0, f32::NAN), 0);
    }
}
