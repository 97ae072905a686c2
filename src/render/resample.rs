//! Downscaling of oversized sources.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::planner::TilePlan;

/// Bring `source` to the planned working size.
///
/// Images that need no resize are returned untouched. Everything else goes
/// through a Lanczos3 filter, which keeps alpha since the buffer is RGBA.
pub fn resample(source: RgbaImage, plan: &TilePlan) -> RgbaImage {
    if !plan.needs_resize() {
        return source;
    }
    imageops::resize(
        &source,
        plan.target_width,
        plan.target_height,
        FilterType::Lanczos3,
    )
}
