//! bandswatch-core - Band model and position mapping for the bandswatch demo.
//!
//! The viewport is split into four equal horizontal bands (white, pink,
//! yellow, black). A draggable rectangle over the bands is painted as two
//! stacked swatches whose colors contrast with the bands under its top and
//! bottom edges, split in proportion to how much of the rectangle lies in
//! the top band.
//!
//! # Example
//!
//! ```
//! use bandswatch_core::{map_position, BandColor, Point, Size};
//!
//! let pair = map_position(Point::new(200.0, 200.0), 100.0, Size::new(400.0, 400.0));
//! assert_eq!(pair.top, BandColor::White);
//! assert_eq!(pair.bottom, BandColor::Black);
//! assert_eq!(pair.top_ratio, 0.5);
//! ```

pub mod config;
pub mod error;
pub mod mapper;
pub mod model;

// Re-exports for convenience
pub use config::DemoConfig;
pub use error::{ErrorCode, Result, SwatchError};
pub use mapper::{map_position, map_rect, sweep, SwatchPair, SweepSample};
pub use model::{band_index, layout_bands, BandColor, BandSpan, DraggableRect, Point, Rgb, Size, BANDS};
