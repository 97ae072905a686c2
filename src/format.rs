//! Image container formats accepted by the tiler.
//!
//! Picks the format from the lowercased file extension and wraps the `image`
//! crate's decoders and encoders for it. Tiles are written in the same format
//! (and with the same extension) as the source.

use std::io::{BufRead, Seek, Write};
use std::path::Path;

use image::buffer::ConvertBuffer;
use image::{ImageFormat, ImageResult, RgbImage, RgbaImage};

use crate::error::{Result, TilerError};

/// A supported source/tile format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFormat {
    Jpeg,
    Png,
    Gif,
}

impl TileFormat {
    /// Detect the format from `path`'s extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(TileFormat::Jpeg),
            "png" => Ok(TileFormat::Png),
            "gif" => Ok(TileFormat::Gif),
            _ => Err(TilerError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }

    /// Whether the format can store transparency.
    pub fn alpha_capable(self) -> bool {
        !matches!(self, TileFormat::Jpeg)
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            TileFormat::Jpeg => ImageFormat::Jpeg,
            TileFormat::Png => ImageFormat::Png,
            TileFormat::Gif => ImageFormat::Gif,
        }
    }

    /// Decode a whole image into an 8-bit RGBA buffer.
    ///
    /// Animated GIFs yield their first frame. 16-bit PNGs are reduced to 8 bits.
    pub fn decode<R: BufRead + Seek>(self, reader: R) -> ImageResult<RgbaImage> {
        Ok(image::load(reader, self.image_format())?.to_rgba8())
    }

    /// Encode one tile.
    ///
    /// JPEG has no alpha channel, so tiles are flattened to RGB first.
    pub fn encode<W: Write + Seek>(self, tile: &RgbaImage, writer: &mut W) -> ImageResult<()> {
        match self {
            TileFormat::Jpeg => {
                let rgb: RgbImage = tile.convert();
                rgb.write_to(writer, ImageFormat::Jpeg)
            }
            TileFormat::Png | TileFormat::Gif => tile.write_to(writer, self.image_format()),
        }
    }
}
