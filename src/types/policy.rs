//! Fixed tiling policy.

/// Edge length of every output tile, in pixels.
pub const DEFAULT_TILE_EDGE: u32 = 128;

/// How many tiles the longest source side may span before it is downscaled.
pub const DEFAULT_MAX_MULTIPLE: u32 = 4;

/// Tile edge and downscale threshold used for a single run.
///
/// Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePolicy {
    tile_edge: u32,
    max_multiple: u32,
}

impl TilePolicy {
    /// Zero values are raised to 1.
    pub const fn new(tile_edge: u32, max_multiple: u32) -> Self {
        Self {
            tile_edge: if tile_edge == 0 { 1 } else { tile_edge },
            max_multiple: if max_multiple == 0 { 1 } else { max_multiple },
        }
    }

    pub const fn tile_edge(&self) -> u32 {
        self.tile_edge
    }

    pub const fn max_multiple(&self) -> u32 {
        self.max_multiple
    }

    /// Longest side allowed before the source gets downscaled.
    ///
    /// Saturates at `u32::MAX`.
    pub const fn limit(&self) -> u32 {
        self.tile_edge.saturating_mul(self.max_multiple)
    }
}

impl Default for TilePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_EDGE, DEFAULT_MAX_MULTIPLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = TilePolicy::default();
        assert_eq!(policy.tile_edge(), 128);
        assert_eq!(policy.max_multiple(), 4);
        assert_eq!(policy.limit(), 512);
    }

    #[test]
    fn test_custom_limit() {
        assert_eq!(TilePolicy::new(16, 3).limit(), 48);
    }

    #[test]
    fn test_zero_values_raised_to_one() {
        let policy = TilePolicy::new(0, 0);
        assert_eq!(policy.tile_edge(), 1);
        assert_eq!(policy.max_multiple(), 1);
        assert_eq!(policy.limit(), 1);
    }

    #[test]
    fn test_limit_saturates() {
        assert_eq!(TilePolicy::new(u32::MAX, 4).limit(), u32::MAX);
    }
}
