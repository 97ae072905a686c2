//! Tile extraction and edge-tile padding.
//!
//! Full cells are handed out as views into the working image. Cells on the
//! right or bottom boundary are copied onto a fresh `tile_edge x tile_edge`
//! canvas pre-filled with a background that suits the output format.

use image::{imageops, Rgba, RgbaImage, SubImage};

use crate::format::TileFormat;
use crate::types::{TilePolicy, TileRegion};

/// Pixel source the compositor can cut tiles from.
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn alpha_capable(&self) -> bool;

    /// View of the pixels inside `region`, without copying.
    fn crop(&self, region: &TileRegion) -> SubImage<&RgbaImage>;

    /// Copy `region` onto the top-left corner of `canvas`, replacing the
    /// covered canvas pixels.
    fn draw_onto(&self, region: &TileRegion, canvas: &mut RgbaImage) {
        imageops::replace(canvas, &*self.crop(region), 0, 0);
    }
}

/// Decoded (and possibly resized) working image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: RgbaImage,
    pub format: TileFormat,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage, format: TileFormat) -> Self {
        Self { pixels, format }
    }
}

impl Raster for SourceImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn alpha_capable(&self) -> bool {
        self.format.alpha_capable()
    }

    fn crop(&self, region: &TileRegion) -> SubImage<&RgbaImage> {
        imageops::crop_imm(
            &self.pixels,
            region.left,
            region.top,
            region.width(),
            region.height(),
        )
    }
}

/// Fill used for the uncovered part of an edge tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    OpaqueWhite,
    Transparent,
}

impl Background {
    pub fn for_alpha(alpha_capable: bool) -> Self {
        if alpha_capable {
            Background::Transparent
        } else {
            Background::OpaqueWhite
        }
    }

    pub fn rgba(self) -> Rgba<u8> {
        match self {
            Background::OpaqueWhite => Rgba([255, 255, 255, 255]),
            Background::Transparent => Rgba([0, 0, 0, 0]),
        }
    }
}

/// One composed tile, always `tile_edge` pixels square.
pub enum Tile<'a> {
    /// A whole cell, borrowed from the source.
    Full(SubImage<&'a RgbaImage>),
    /// An edge cell drawn onto a padded canvas.
    Padded(RgbaImage),
}

impl Tile<'_> {
    pub fn is_padded(&self) -> bool {
        matches!(self, Tile::Padded(_))
    }

    pub fn into_image(self) -> RgbaImage {
        match self {
            Tile::Full(view) => view.to_image(),
            Tile::Padded(canvas) => canvas,
        }
    }
}

/// Cut the tile for `region` out of `source`.
pub fn compose<'a, R: Raster + ?Sized>(
    source: &'a R,
    region: &TileRegion,
    policy: &TilePolicy,
) -> Tile<'a> {
    let edge = policy.tile_edge();
    if region.is_full(edge) {
        return Tile::Full(source.crop(region));
    }

    let background = Background::for_alpha(source.alpha_capable());
    let mut canvas = RgbaImage::from_pixel(edge, edge, background.rgba());
    source.draw_onto(region, &mut canvas);
    Tile::Padded(canvas)
}
