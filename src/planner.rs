//! Downscale planning.
//!
//! Bounds the longest source side to `tile_edge * max_multiple` pixels before
//! gridding. Sources already within the limit are never touched, and the plan
//! never upscales.

use crate::types::TilePolicy;

/// Resize decision for one source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlan {
    pub policy: TilePolicy,
    pub source_width: u32,
    pub source_height: u32,
    /// Uniform downscale factor, always in `(0, 1]`.
    pub ratio: f64,
    pub target_width: u32,
    pub target_height: u32,
}

impl TilePlan {
    /// Plan the working size for a `width` x `height` source.
    ///
    /// Target dimensions are `floor(side * limit / longest)`, computed in
    /// integers so the longest side lands on the limit exactly. Both sides are
    /// kept at one pixel or more.
    pub fn compute(width: u32, height: u32, policy: &TilePolicy) -> Self {
        let limit = policy.limit();
        let longest = width.max(height);

        if longest <= limit {
            return Self {
                policy: *policy,
                source_width: width,
                source_height: height,
                ratio: 1.0,
                target_width: width,
                target_height: height,
            };
        }

        let scale = |side: u32| -> u32 {
            let scaled = u64::from(side) * u64::from(limit) / u64::from(longest);
            (scaled as u32).max(1)
        };

        Self {
            policy: *policy,
            source_width: width,
            source_height: height,
            ratio: f64::from(limit) / f64::from(longest),
            target_width: scale(width),
            target_height: scale(height),
        }
    }

    pub fn needs_resize(&self) -> bool {
        self.target_width != self.source_width || self.target_height != self.source_height
    }
}
