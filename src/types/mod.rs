//! Plain data types shared across the tiling pipeline:
//! - `TilePolicy` - tile edge and downscale threshold
//! - `TileRegion` - pixel bounds of one grid cell
//! - `TileId` - `name_row_col` identifiers

mod policy;
mod region;
mod tile_id;

pub use policy::{TilePolicy, DEFAULT_MAX_MULTIPLE, DEFAULT_TILE_EDGE};
pub use region::TileRegion;
pub use tile_id::TileId;
