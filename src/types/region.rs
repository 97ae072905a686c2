//! Grid cell bounds.

/// Source-pixel rectangle covered by one grid cell.
///
/// `row` and `col` are 1-indexed. The rectangle is half-open:
/// `left..right` by `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub row: u32,
    pub col: u32,
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl TileRegion {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the region covers a whole tile.
    pub fn is_full(&self, tile_edge: u32) -> bool {
        self.width() == tile_edge && self.height() == tile_edge
    }

    /// True when the region sits on the right or bottom boundary and falls short
    /// of a whole tile.
    pub fn is_edge(&self, tile_edge: u32) -> bool {
        !self.is_full(tile_edge)
    }
}
