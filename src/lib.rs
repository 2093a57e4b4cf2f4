#![doc = include_str!("../README.md")]

// Core engine
pub mod access;
pub mod control;
pub mod engine;
pub mod index;
pub mod partition;

// Grid containers and entry points
pub mod image;
pub mod ops;

// Demo tooling support
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

pub use crate::engine::{CellError, Engine, EngineError, EngineOptions};
pub use crate::partition::{Partition, Partitioner, Strategy, WorkRange};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use grid_par::prelude::*;
///
/// let mut img = Raster::filled(5, 6, Rgba8::WHITE);
/// parallel_read_write(&mut img, |_, _, c| c.inverted());
/// assert!(img.data.iter().all(|&c| c == Rgba8::BLACK));
/// ```
pub mod prelude {
    pub use crate::image::{ImageView, ImageViewMut, NrgbaBuffer, Raster, Rgba8, RgbaBuffer};
    pub use crate::ops::*;
    pub use crate::{CellError, Engine, EngineOptions, Strategy};
}
