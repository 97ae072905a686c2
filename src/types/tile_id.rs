use std::fmt;

/// Identifier of one output tile: `<stem>_<row>_<col>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileId {
    pub stem: String,
    pub row: u32,
    pub col: u32,
}

impl TileId {
    pub fn new(stem: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            stem: stem.into(),
            row,
            col,
        }
    }

    /// File name for this tile with the given extension (without the dot).
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self, extension)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.stem, self.row, self.col)
    }
}
