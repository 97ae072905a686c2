//! Split command implementation.
//!
//! Decodes one image, downscales it if the longest side exceeds the policy
//! limit, cuts it into a grid of square tiles and writes each tile next to
//! the others in the output directory.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Result, TilerError};
use crate::format::TileFormat;
use crate::grid::Grid;
use crate::manifest::{Manifest, ManifestBuilder};
use crate::output::{display_path, plural, Printer};
use crate::planner::TilePlan;
use crate::render::{compose, resample, SourceImage};
use crate::types::{TileId, TilePolicy};

/// Inputs for a single split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub input: PathBuf,
    /// Directory the tiles are written to.
    pub output: PathBuf,
    pub policy: TilePolicy,
}

impl SplitOptions {
    /// Split `input` into the current directory using the default policy.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from("."),
            policy: TilePolicy::default(),
        }
    }
}

pub fn run(options: &SplitOptions, printer: &Printer) -> Result<Manifest> {
    let path = &options.input;
    let policy = &options.policy;

    // Reject unknown formats before touching the file
    let format = TileFormat::from_path(path)?;
    let stem = tile_stem(path);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    printer.status("Loading", &display_path(path));
    let decoded = load(path, format)?;

    let plan = TilePlan::compute(decoded.width(), decoded.height(), policy);
    if plan.needs_resize() {
        printer.status(
            "Resizing",
            &format!(
                "{}x{} -> {}x{} (ratio {:.3})",
                plan.source_width,
                plan.source_height,
                plan.target_width,
                plan.target_height,
                plan.ratio
            ),
        );
    }
    let source = SourceImage::new(resample(decoded, &plan), format);

    let grid = Grid::new(plan.target_width, plan.target_height, policy);
    printer.status(
        "Slicing",
        &format!(
            "{}x{} grid ({}x{} tiles)",
            grid.cols, grid.rows, policy.tile_edge(), policy.tile_edge()
        ),
    );

    let mut manifest = ManifestBuilder::new();
    let mut padded = 0usize;

    for region in grid.regions() {
        let id = TileId::new(stem.as_str(), region.row, region.col);
        let tile = compose(&source, &region, policy);
        if tile.is_padded() {
            padded += 1;
        }

        let tile_path = options.output.join(id.file_name(&extension));
        printer.status("Writing", &display_path(&tile_path));
        write_tile(&tile.into_image(), &tile_path, format)?;

        manifest.push(&id);
        if region.col == grid.cols {
            manifest.end_row();
        }
    }

    let manifest = manifest.finish();
    printer.info(
        "Finished",
        &format!(
            "{} ({} padded)",
            plural(manifest.tile_count(), "tile", "tiles"),
            padded
        ),
    );

    Ok(manifest)
}

/// Base name of `path` without its extension.
///
/// Bytes that are not valid UTF-8 become U+FFFD rather than dropping the name.
fn tile_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn load(path: &Path, format: TileFormat) -> Result<RgbaImage> {
    let file = File::open(path).map_err(|e| TilerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open image: {}", e),
    })?;

    format
        .decode(BufReader::new(file))
        .map_err(|e| TilerError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Write one tile, closing the file before returning.
fn write_tile(tile: &RgbaImage, path: &Path, format: TileFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| TilerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create tile: {}", e),
    })?;
    let mut writer = BufWriter::new(file);

    format
        .encode(tile, &mut writer)
        .map_err(|e| TilerError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    writer.flush().map_err(|e| TilerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write tile: {}", e),
    })
}
