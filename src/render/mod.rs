//! Pixel work for the tiling pipeline.
//!
//! Resampling of oversized sources and composition of grid cells into
//! uniformly-sized tiles.

mod compositor;
mod resample;

pub use compositor::{compose, Background, Raster, SourceImage, Tile};
pub use resample::resample;
