//! Conversion between screen coordinates and viewport-local coordinates.

use bandswatch_core::{Point, Size};
use egui::{Pos2, Rect, Vec2};

/// Maps the canvas area of the window to the demo's viewport space.
///
/// The viewport origin is the top-left corner of the canvas with Y
/// increasing downward, the same orientation as the screen.
#[derive(Debug, Clone, Copy)]
pub struct ViewportTransform {
    canvas_rect: Rect,
}

impl ViewportTransform {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Size of the viewport the mapper sees.
    pub fn viewport_size(&self) -> Size {
        Size::new(self.canvas_rect.width(), self.canvas_rect.height())
    }

    /// Convert a screen position to viewport-local coordinates.
    pub fn to_local(&self, screen_pos: Pos2) -> Point {
        let local = screen_pos - self.canvas_rect.min;
        Point::new(local.x, local.y)
    }

    /// Convert viewport-local coordinates to a screen position.
    pub fn to_screen(&self, point: Point) -> Pos2 {
        self.canvas_rect.min + Vec2::new(point.x, point.y)
    }

    /// Screen rectangle spanning the full canvas width between two local Y values.
    pub fn full_width_rect(&self, top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(
            Pos2::new(self.canvas_rect.min.x, self.canvas_rect.min.y + top),
            Pos2::new(self.canvas_rect.max.x, self.canvas_rect.min.y + bottom),
        )
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }
}
