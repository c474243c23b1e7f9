use thiserror::Error;

/// Raised when a [TileGeometry](crate::coords::TileGeometry) cannot be used for pixel/grid
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tile dimensions must be positive, got {width}x{height}")]
    InvalidTileSize { width: i32, height: i32 },
}

/// Raised while building a [TileGrid](crate::tile_grid::TileGrid) from codes or ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileGridError {
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile character {ch:?} at row {row}, column {col}")]
    UnknownChar { ch: char, row: usize, col: usize },
    #[error("unknown tile code {code} at row {row}, column {col}")]
    UnknownCode { code: u8, row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent mode {0:?}")]
pub struct ParseModeError(pub String);
