//! The draggable two-swatch rectangle.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Size};
use crate::config::{DEFAULT_CENTER, DEFAULT_RECT_SIZE};

/// The rectangle the user drags around, positioned by its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraggableRect {
    /// Center position in viewport-local coordinates.
    pub center: Point,
    /// Fixed size of the rectangle.
    pub size: Size,
}

impl Default for DraggableRect {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_RECT_SIZE)
    }
}

impl DraggableRect {
    pub fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    /// Y coordinate of the top edge.
    pub fn top_edge(&self) -> f32 {
        self.center.y - self.size.height / 2.0
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom_edge(&self) -> f32 {
        self.center.y + self.size.height / 2.0
    }

    /// Top-left and bottom-right corners.
    pub fn bounds(&self) -> (Point, Point) {
        let half_w = self.size.width / 2.0;
        (
            Point::new(self.center.x - half_w, self.top_edge()),
            Point::new(self.center.x + half_w, self.bottom_edge()),
        )
    }

    /// Check whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Move the center to a new position.
    pub fn move_to(&mut self, center: Point) {
        self.center = center;
    }
}
