//! Textual grid of produced tile identifiers.
//!
//! Each grid row becomes one line of `:id:` tokens with nothing between
//! them, and every line ends with `\n`:
//!
//! ```text
//! :photo_1_1::photo_1_2::photo_1_3:
//! :photo_2_1::photo_2_2::photo_2_3:
//! ```

use std::fmt;

use crate::types::TileId;

/// Finished manifest, in grid order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    rows: Vec<Vec<String>>,
}

impl Manifest {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of tile entries.
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for id in row {
                write!(f, ":{}:", id)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Append-only builder used while tiles are produced in row-major order.
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    rows: Vec<Vec<String>>,
    current: Vec<String>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to the current row.
    pub fn push(&mut self, id: &TileId) {
        self.current.push(id.to_string());
    }

    /// Close the current row.
    pub fn end_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.current));
    }

    /// Finish the manifest. A row left open is closed first.
    pub fn finish(mut self) -> Manifest {
        if !self.current.is_empty() {
            self.end_row();
        }
        Manifest { rows: self.rows }
    }
}
