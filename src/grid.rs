//! Grid derivation over the working image.

use crate::types::{TilePolicy, TileRegion};

/// Row and column counts for a (possibly resized) image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: u32,
    pub cols: u32,
    pub width: u32,
    pub height: u32,
    pub tile_edge: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32, policy: &TilePolicy) -> Self {
        let tile_edge = policy.tile_edge();
        Self {
            rows: height.div_ceil(tile_edge),
            cols: width.div_ceil(tile_edge),
            width,
            height,
            tile_edge,
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds of cell (`row`, `col`), both 1-indexed.
    ///
    /// The bottom-right corner is clamped to the image; cells outside the grid
    /// return `None`.
    pub fn region(&self, row: u32, col: u32) -> Option<TileRegion> {
        if row == 0 || col == 0 || row > self.rows || col > self.cols {
            return None;
        }
        let edge = self.tile_edge;
        Some(TileRegion {
            row,
            col,
            left: edge * (col - 1),
            top: edge * (row - 1),
            right: edge.saturating_mul(col).min(self.width),
            bottom: edge.saturating_mul(row).min(self.height),
        })
    }

    /// Every cell in row-major order.
    pub fn regions(&self) -> impl Iterator<Item = TileRegion> + '_ {
        (1..=self.rows)
            .flat_map(move |row| (1..=self.cols).filter_map(move |col| self.region(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: u32, h: u32) -> Grid {
        Grid::new(w, h, &TilePolicy::default())
    }

    #[test]
    fn test_counts_round_up() {
        let g = grid(300, 200);
        assert_eq!((g.rows, g.cols), (2, 3));
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn test_even_division() {
        let g = grid(512, 512);
        assert_eq!((g.rows, g.cols), (4, 4));
        assert!(g.regions().all(|r| r.is_full(128)));
    }

    #[test]
    fn test_single_small_cell() {
        let g = grid(100, 80);
        assert_eq!(g.len(), 1);
        let r = g.region(1, 1).unwrap();
        assert_eq!((r.left, r.top, r.right, r.bottom), (0, 0, 100, 80));
        assert!(r.is_edge(128));
    }

    #[test]
    fn test_corner_cell_clamped() {
        let g = grid(300, 200);
        let r = g.region(2, 3).unwrap();
        assert_eq!((r.left, r.top, r.right, r.bottom), (256, 128, 300, 200));
        assert!(r.is_edge(128));
    }

    #[test]
    fn test_out_of_range() {
        let g = grid(300, 200);
        assert!(g.region(0, 1).is_none());
        assert!(g.region(1, 0).is_none());
        assert!(g.region(3, 1).is_none());
        assert!(g.region(1, 4).is_none());
    }

    #[test]
    fn test_row_major_order() {
        let g = grid(300, 200);
        let order: Vec<(u32, u32)> = g.regions().map(|r| (r.row, r.col)).collect();
        assert_eq!(
            order,
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn test_regions_cover_rows_without_gaps() {
        for (w, h) in [(300, 200), (1, 1), (129, 257), (512, 358)] {
            let g = grid(w, h);
            for row in 1..=g.rows {
                let widths: u32 = (1..=g.cols)
                    .map(|col| g.region(row, col).unwrap().width())
                    .sum();
                assert_eq!(widths, w, "{}x{} row {}", w, h, row);
            }
            for col in 1..=g.cols {
                let heights: u32 = (1..=g.rows)
                    .map(|row| g.region(row, col).unwrap().height())
                    .sum();
                assert_eq!(heights, h, "{}x{} col {}", w, h, col);
            }
        }
    }

    #[test]
    fn test_regions_never_empty() {
        let g = grid(257, 129);
        assert!(g.regions().all(|r| r.width() > 0 && r.height() > 0));
        assert!(g.regions().all(|r| r.right <= 257 && r.bottom <= 129));
    }

    #[test]
    fn test_zero_edge_policy_does_not_divide_by_zero() {
        let g = Grid::new(3, 2, &TilePolicy::new(0, 4));
        assert_eq!((g.rows, g.cols), (2, 3));
        assert!(g.regions().all(|r| r.is_full(1)));
    }

    #[test]
    fn test_huge_edge_single_cell() {
        let g = Grid::new(300, 200, &TilePolicy::new(u32::MAX, 1));
        assert_eq!(g.len(), 1);
        let r = g.region(1, 1).unwrap();
        assert_eq!((r.right, r.bottom), (300, 200));
    }
}
