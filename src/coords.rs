//! Conversion boundary between screen pixels and grid cells. The searches never see pixels.
use core::fmt;

use crate::error::ConfigError;
use crate::grid::GridCell;

/// A position in screen space. For entities this is the top-left corner of the bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    pub const fn new(x: i32, y: i32) -> PixelPosition {
        PixelPosition { x, y }
    }
}

impl fmt::Display for PixelPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]px", self.x, self.y)
    }
}

/// Movement directions of the entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// (row, column) delta of one step.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }
    pub const fn step(self, cell: GridCell) -> GridCell {
        let (d_row, d_col) = self.offset();
        cell.offset(d_row, d_col)
    }
    /// Direction from `from` towards `to`. Column changes take precedence over row changes;
    /// [None] when both cells coincide.
    pub fn between(from: GridCell, to: GridCell) -> Option<Direction> {
        Direction::from_delta(to.col.saturating_sub(from.col), to.row.saturating_sub(from.row))
    }
    /// Direction of a horizontal/vertical delta with the same precedence as [between](Self::between).
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        if dx > 0 {
            Some(Direction::Right)
        } else if dx < 0 {
            Some(Direction::Left)
        } else if dy < 0 {
            Some(Direction::Up)
        } else if dy > 0 {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

pub const DEFAULT_TILE_WIDTH: i32 = 30;
pub const DEFAULT_TILE_HEIGHT: i32 = 28;
/// Offset from an entity's top-left corner to its centre.
pub const DEFAULT_HALF_EXTENT: (i32, i32) = (23, 24);

/// Tile size and entity half-extent, everything needed to map between pixels and cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGeometry {
    tile_width: i32,
    tile_height: i32,
    half_extent_x: i32,
    half_extent_y: i32,
}

impl Default for TileGeometry {
    fn default() -> TileGeometry {
        TileGeometry {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            half_extent_x: DEFAULT_HALF_EXTENT.0,
            half_extent_y: DEFAULT_HALF_EXTENT.1,
        }
    }
}

impl TileGeometry {
    pub fn new(
        tile_width: i32,
        tile_height: i32,
        half_extent_x: i32,
        half_extent_y: i32,
    ) -> Result<TileGeometry, ConfigError> {
        if tile_width <= 0 || tile_height <= 0 {
            return Err(ConfigError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }
        Ok(TileGeometry {
            tile_width,
            tile_height,
            half_extent_x,
            half_extent_y,
        })
    }
    pub fn tile_width(&self) -> i32 {
        self.tile_width
    }
    pub fn tile_height(&self) -> i32 {
        self.tile_height
    }

    /// Centre of the bounding box anchored at `top_left`.
    pub fn center_of(&self, top_left: PixelPosition) -> PixelPosition {
        PixelPosition::new(
            top_left.x.saturating_add(self.half_extent_x),
            top_left.y.saturating_add(self.half_extent_y),
        )
    }
    /// Cell containing the pixel. Floor division, so pixels left of or above the board land on
    /// negative (never walkable) cells.
    pub fn center_to_cell(&self, center: PixelPosition) -> GridCell {
        GridCell::new(
            center.y.div_euclid(self.tile_height),
            center.x.div_euclid(self.tile_width),
        )
    }
    /// Cell of the entity whose bounding box is anchored at `top_left`.
    pub fn pixel_to_cell(&self, top_left: PixelPosition) -> GridCell {
        self.center_to_cell(self.center_of(top_left))
    }
    /// Pixel centre of a cell.
    pub fn cell_center(&self, cell: GridCell) -> PixelPosition {
        PixelPosition::new(
            cell.col
                .saturating_mul(self.tile_width)
                .saturating_add(self.tile_width / 2),
            cell.row
                .saturating_mul(self.tile_height)
                .saturating_add(self.tile_height / 2),
        )
    }
    /// Top-left anchor that centres an entity on `cell`.
    pub fn cell_to_top_left(&self, cell: GridCell) -> PixelPosition {
        let center = self.cell_center(cell);
        PixelPosition::new(
            center.x.saturating_sub(self.half_extent_x),
            center.y.saturating_sub(self.half_extent_y),
        )
    }
    /// Distance (per axis) under which a path step counts as reached: a quarter of half the
    /// smaller tile dimension, at least 2 pixels.
    pub fn proximity_threshold(&self) -> i32 {
        (self.tile_width.min(self.tile_height) / 2 / 4).max(2)
    }
}
