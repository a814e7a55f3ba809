//! Drag gesture handling for the swatch rectangle.

use bandswatch_core::{DraggableRect, Point};

/// Tracks whether the current pointer drag is moving the rectangle.
///
/// A drag only grabs the rectangle when the press lands inside it. While
/// grabbed, the rectangle center follows the pointer; after release the
/// last position stays.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: bool,
}

impl DragTracker {
    /// Start a drag at `press`. Returns true if the rectangle was grabbed.
    pub fn begin(&mut self, rect: &DraggableRect, press: Point) -> bool {
        self.active = rect.contains(press);
        self.active
    }

    /// Follow the pointer while a grab is active.
    pub fn update(&self, rect: &mut DraggableRect, pointer: Point) {
        if self.active {
            rect.move_to(pointer);
        }
    }

    /// Release the grab.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
