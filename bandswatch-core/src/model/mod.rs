//! Data model types for the band background and the draggable rectangle.

mod band;
mod geometry;
mod rect;

pub(crate) use band::segment_index;
pub use band::{band_index, layout_bands, BandColor, BandSpan, Rgb, BANDS};
pub use geometry::{Point, Size};
pub use rect::DraggableRect;
