//! tiler - Square image tile generator
//!
//! A library for splitting one raster image into a grid of fixed-size square
//! tiles. Oversized sources are downscaled first, and partial edge tiles are
//! padded so every tile has identical dimensions.

pub mod cli;
pub mod error;
pub mod format;
pub mod grid;
pub mod manifest;
pub mod output;
pub mod planner;
pub mod render;
pub mod types;

pub use error::{Result, TilerError};
pub use format::TileFormat;
pub use grid::Grid;
pub use manifest::{Manifest, ManifestBuilder};
pub use planner::TilePlan;
pub use render::{compose, resample, Background, Raster, SourceImage, Tile};
pub use types::{TileId, TilePolicy, TileRegion, DEFAULT_MAX_MULTIPLE, DEFAULT_TILE_EDGE};
