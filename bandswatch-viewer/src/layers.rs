//! Overlay visibility controls.

/// Controls which diagnostic overlays are drawn over the demo.
#[derive(Debug, Clone, Default)]
pub struct OverlayVisibility {
    /// Show the text readout of the current mapping
    pub readout: bool,
    /// Show band boundary and rectangle edge guide lines
    pub guides: bool,
}

impl OverlayVisibility {
    /// True when nothing but the demo itself is drawn.
    pub fn is_clean(&self) -> bool {
        !self.readout && !self.guides
    }

    /// Hide every overlay.
    pub fn hide_all(&mut self) {
        self.readout = false;
        self.guides = false;
    }
}
