//! Position-to-swatch mapping.
//!
//! Given the rectangle's center and the viewport, find the bands under the
//! rectangle's top and bottom edges and how much of the rectangle lies in
//! the top one. Only the two edge bands are considered: when the rectangle
//! is taller than a band, any band fully covered in between is not shown.

use serde::Serialize;

use crate::config::{BAND_COUNT, MAX_SWEEP_SAMPLES, SWEEP_EPS};
use crate::error::{Result, SwatchError};
use crate::model::{segment_index, BandColor, DraggableRect, Point, Size, BANDS};

/// The two swatch colors and their split, derived from a rectangle position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SwatchPair {
    /// Swatch color of the upper part.
    pub top: BandColor,
    /// Swatch color of the lower part.
    pub bottom: BandColor,
    /// Fraction of the rectangle height painted with `top`.
    pub top_ratio: f32,
    /// Band index under the top edge (after clamping).
    pub top_segment: usize,
    /// Band index under the bottom edge (after clamping).
    pub bottom_segment: usize,
}

impl SwatchPair {
    /// Fraction of the rectangle height painted with `bottom`.
    pub fn bottom_ratio(&self) -> f32 {
        1.0 - self.top_ratio
    }

    /// Pixel height of the upper swatch.
    pub fn top_height(&self, rect_height: f32) -> f32 {
        rect_height * self.top_ratio
    }

    /// Pixel height of the lower swatch; the two heights always sum to `rect_height`.
    pub fn bottom_height(&self, rect_height: f32) -> f32 {
        rect_height - self.top_height(rect_height)
    }

    /// True when the edges fall in different bands.
    pub fn is_split(&self) -> bool {
        self.top_segment != self.bottom_segment
    }

    /// Background band color under the top edge.
    pub fn top_band(&self) -> BandColor {
        BANDS[self.top_segment]
    }

    /// Background band color under the bottom edge.
    pub fn bottom_band(&self) -> BandColor {
        BANDS[self.bottom_segment]
    }
}

/// Compute the swatch pair for a rectangle of `rect_height` centered at `center`.
///
/// Edges outside the viewport saturate to the first or last band. An edge
/// lying exactly on a band boundary belongs to the band below the boundary.
/// `rect_height` is expected to be non-negative.
pub fn map_position(center: Point, rect_height: f32, viewport: Size) -> SwatchPair {
    let segment_height = viewport.height / BAND_COUNT as f32;
    let top_y = center.y - rect_height / 2.0;
    let bottom_y = center.y + rect_height / 2.0;

    let top_segment = segment_index(top_y, segment_height);
    let bottom_segment = segment_index(bottom_y, segment_height);

    if top_segment == bottom_segment {
        let color = BANDS[top_segment].contrast();
        return SwatchPair {
            top: color,
            bottom: color,
            top_ratio: 1.0,
            top_segment,
            bottom_segment,
        };
    }

    let top_overlap = (segment_height * (top_segment + 1) as f32).min(bottom_y) - top_y;

    SwatchPair {
        top: BANDS[top_segment].contrast(),
        bottom: BANDS[bottom_segment].contrast(),
        top_ratio: top_overlap / rect_height,
        top_segment,
        bottom_segment,
    }
}

/// Compute the swatch pair for a draggable rectangle.
pub fn map_rect(rect: &DraggableRect, viewport: Size) -> SwatchPair {
    map_position(rect.center, rect.size.height, viewport)
}

/// One sample of a vertical sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSample {
    pub center: Point,
    pub swatches: SwatchPair,
}

/// Evaluate the mapper at every `step` from `from` to `to` (inclusive) along x = `x`.
///
/// Positions are computed in f64 and the last one snaps to `to`, so a range
/// that is a multiple of `step` always ends exactly on `to`. At most
/// `MAX_SWEEP_SAMPLES` positions are produced.
pub fn sweep(
    x: f32,
    from: f32,
    to: f32,
    step: f32,
    rect_height: f32,
    viewport: Size,
) -> Result<Vec<SweepSample>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(SwatchError::InvalidSweep {
            message: format!("step must be a positive number, got {step}"),
        });
    }
    if !(from.is_finite() && to.is_finite()) || to < from {
        return Err(SwatchError::InvalidSweep {
            message: format!("range {from}..={to} is empty or not finite"),
        });
    }

    let steps = ((f64::from(to) - f64::from(from)) / f64::from(step) + SWEEP_EPS).floor();
    if steps + 1.0 > MAX_SWEEP_SAMPLES as f64 {
        return Err(SwatchError::InvalidSweep {
            message: format!(
                "step {step} over {from}..={to} exceeds {MAX_SWEEP_SAMPLES} positions"
            ),
        });
    }
    let count = steps as usize + 1;
    tracing::debug!("Sweeping {} positions from y={} to y={}", count, from, to);

    Ok((0..count)
        .map(|i| {
            let y = f64::from(from) + f64::from(step) * i as f64;
            // Positions within rounding slack of the end land exactly on it.
            let y = if f64::from(to) - y <= f64::from(step) * SWEEP_EPS {
                to
            } else {
                y as f32
            };
            let center = Point::new(x, y);
            SweepSample {
                center,
                swatches: map_position(center, rect_height, viewport),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    const VIEWPORT: Size = Size::new(400.0, 400.0);
    const RECT_HEIGHT: f32 = 100.0;

    fn at(y: f32) -> SwatchPair {
        map_position(Point::new(200.0, y), RECT_HEIGHT, VIEWPORT)
    }

    // ==================== Reference scenarios ====================

    #[test]
    fn test_straddling_pink_and_yellow() {
        let pair = at(200.0);
        assert_eq!(pair.top_segment, 1);
        assert_eq!(pair.bottom_segment, 2);
        assert_eq!(pair.top, BandColor::White);
        assert_eq!(pair.bottom, BandColor::Black);
        assert!(approx_eq(pair.top_ratio, 0.5));
    }

    #[test]
    fn test_bottom_edge_on_boundary() {
        // Bottom edge at exactly y=100 belongs to band 1.
        let pair = at(50.0);
        assert_eq!(pair.top_segment, 0);
        assert_eq!(pair.bottom_segment, 1);
        assert_eq!(pair.top, BandColor::Black);
        assert_eq!(pair.bottom, BandColor::White);
        assert_eq!(pair.top_ratio, 1.0);
        assert!(pair.is_split());
    }

    #[test]
    fn test_above_viewport_clamps_to_first_band() {
        let pair = at(-100.0);
        assert_eq!(pair.top_segment, 0);
        assert_eq!(pair.bottom_segment, 0);
        assert_eq!((pair.top, pair.bottom), (BandColor::Black, BandColor::Black));
        assert_eq!(pair.top_ratio, 1.0);
    }

    #[test]
    fn test_below_viewport_clamps_to_last_band() {
        let pair = at(450.0);
        assert_eq!(pair.top_segment, 3);
        assert_eq!(pair.bottom_segment, 3);
        assert_eq!((pair.top, pair.bottom), (BandColor::White, BandColor::White));
        assert_eq!(pair.top_ratio, 1.0);
    }

    // ==================== Ratio tests ====================

    #[test]
    fn test_inside_single_band() {
        // Segment height 200: top=250 and bottom=350 both in band 1.
        let pair = map_position(Point::new(200.0, 300.0), RECT_HEIGHT, Size::new(400.0, 800.0));
        assert!(!pair.is_split());
        assert_eq!(pair.top_band(), BandColor::Pink);
        assert_eq!(pair.top, BandColor::White);
        assert_eq!(pair.top_ratio, 1.0);
    }

    #[test]
    fn test_quarter_split() {
        // top=275, bottom=375: 25 px in yellow, 75 px in black.
        let pair = at(325.0);
        assert_eq!(pair.top_band(), BandColor::Yellow);
        assert_eq!(pair.bottom_band(), BandColor::Black);
        assert!(approx_eq(pair.top_ratio, 0.25));
        assert!(approx_eq(pair.bottom_ratio(), 0.75));
        assert!(approx_eq(pair.top_height(RECT_HEIGHT), 25.0));
        assert!(approx_eq(pair.bottom_height(RECT_HEIGHT), 75.0));
    }

    #[test]
    fn test_partially_above_viewport() {
        // top=-40 clamps to band 0, overlap measured from the real top edge.
        let pair = at(10.0);
        assert_eq!(pair.top_segment, 0);
        assert_eq!(pair.bottom_segment, 0);

        let small = Size::new(400.0, 200.0);
        let pair = map_position(Point::new(0.0, 10.0), RECT_HEIGHT, small);
        assert_eq!(pair.top_segment, 0);
        assert_eq!(pair.bottom_segment, 1);
        assert!(approx_eq(pair.top_ratio, 0.9));
    }

    #[test]
    fn test_tall_rect_skips_middle_band() {
        // Segment height 50: top in band 0, bottom in band 2, band 1 is not shown.
        let viewport = Size::new(400.0, 200.0);
        let pair = map_position(Point::new(0.0, 70.0), RECT_HEIGHT, viewport);
        assert_eq!(pair.top_segment, 0);
        assert_eq!(pair.bottom_segment, 2);
        assert_eq!(pair.top, BandColor::Black);
        assert_eq!(pair.bottom, BandColor::Black);
        assert!(approx_eq(pair.top_ratio, 0.3));
    }

    #[test]
    fn test_ratio_always_in_unit_range() {
        for height in [120.0_f32, 200.0, 400.0, 900.0] {
            let viewport = Size::new(300.0, height);
            let mut y = -200.0;
            while y < height + 200.0 {
                let pair = map_position(Point::new(0.0, y), RECT_HEIGHT, viewport);
                assert!(
                    (0.0..=1.0).contains(&pair.top_ratio),
                    "ratio {} out of range at y={y}, height={height}",
                    pair.top_ratio
                );
                if !pair.is_split() {
                    assert_eq!(pair.top_ratio, 1.0);
                }
                y += 7.5;
            }
        }
    }

    #[test]
    fn test_same_input_same_output() {
        let first = at(237.25);
        let second = at(237.25);
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_viewport() {
        let pair = map_position(Point::new(0.0, 50.0), RECT_HEIGHT, Size::new(0.0, 0.0));
        assert_eq!((pair.top, pair.bottom, pair.top_ratio), (BandColor::Black, BandColor::Black, 1.0));
    }

    #[test]
    fn test_non_finite_center_resolves_to_first_band() {
        for y in [f32::NAN, f32::NEG_INFINITY] {
            let pair = map_position(Point::new(0.0, y), RECT_HEIGHT, VIEWPORT);
            assert_eq!(pair.top_segment, 0);
            assert_eq!((pair.top, pair.bottom, pair.top_ratio), (BandColor::Black, BandColor::Black, 1.0));
        }
    }

    #[test]
    fn test_map_rect_matches_map_position() {
        let rect = DraggableRect::default();
        assert_eq!(map_rect(&rect, VIEWPORT), at(200.0));
    }

    // ==================== Sweep tests ====================

    #[test]
    fn test_sweep_inclusive_range() {
        let samples = sweep(200.0, 0.0, 400.0, 100.0, RECT_HEIGHT, VIEWPORT).unwrap();
        let ys: Vec<f32> = samples.iter().map(|s| s.center.y).collect();
        assert_eq!(ys, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        assert_eq!(samples[2].swatches, at(200.0));
    }

    #[test]
    fn test_sweep_rejects_bad_step() {
        assert!(sweep(0.0, 0.0, 10.0, 0.0, RECT_HEIGHT, VIEWPORT).is_err());
        assert!(sweep(0.0, 0.0, 10.0, -1.0, RECT_HEIGHT, VIEWPORT).is_err());
        assert!(sweep(0.0, 0.0, 10.0, f32::NAN, RECT_HEIGHT, VIEWPORT).is_err());
    }

    #[test]
    fn test_sweep_keeps_inclusive_end() {
        // 4.5 / 0.3 rounds just below 15 in f32.
        let samples = sweep(0.0, 0.0, 4.5, 0.3, RECT_HEIGHT, VIEWPORT).unwrap();
        assert_eq!(samples.len(), 16);
        assert_eq!(samples[15].center.y, 4.5);

        let samples = sweep(0.0, 0.0, 9.1, 0.7, RECT_HEIGHT, VIEWPORT).unwrap();
        assert_eq!(samples.len(), 14);
        assert_eq!(samples[13].center.y, 9.1);
    }

    #[test]
    fn test_sweep_single_position() {
        let samples = sweep(0.0, 0.0, 0.0, 5.0, RECT_HEIGHT, VIEWPORT).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].center.y, 0.0);
    }

    #[test]
    fn test_sweep_rejects_too_many_positions() {
        let err = sweep(0.0, 0.0, 400.0, 1e-30, RECT_HEIGHT, VIEWPORT).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidSweep);
        assert!(sweep(0.0, 0.0, 400.0, 1e-9, RECT_HEIGHT, VIEWPORT).is_err());

        let at_cap = (MAX_SWEEP_SAMPLES - 1) as f32;
        let samples = sweep(0.0, 0.0, at_cap, 1.0, RECT_HEIGHT, VIEWPORT).unwrap();
        assert_eq!(samples.len(), MAX_SWEEP_SAMPLES);
    }

    #[test]
    fn test_sweep_rejects_reversed_range() {
        let err = sweep(0.0, 10.0, 0.0, 1.0, RECT_HEIGHT, VIEWPORT).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidSweep);
    }
}
