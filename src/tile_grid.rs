use core::fmt;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::error::TileGridError;
use crate::grid::{GridCell, GridQuery};
use crate::layout::CLASSIC_LAYOUT;

/// Per-cell tile classification of the maze.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Dot,
    PowerPellet,
    Wall,
    /// The ghost-house door. Walkable here; who may actually pass it is decided by the entities.
    Gate,
}

impl Tile {
    /// Decodes the numeric tile codes of the board layouts: 0 empty, 1 dot, 2 power pellet,
    /// 3 to 8 wall pieces and 9 the gate.
    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Empty),
            1 => Some(Tile::Dot),
            2 => Some(Tile::PowerPellet),
            3..=8 => Some(Tile::Wall),
            9 => Some(Tile::Gate),
            _ => None,
        }
    }
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            ' ' => Some(Tile::Empty),
            '.' => Some(Tile::Dot),
            'o' => Some(Tile::PowerPellet),
            '#' => Some(Tile::Wall),
            '-' => Some(Tile::Gate),
            _ => None,
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Dot => '.',
            Tile::PowerPellet => 'o',
            Tile::Wall => '#',
            Tile::Gate => '-',
        }
    }
    pub fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
    pub fn is_collectible(self) -> bool {
        matches!(self, Tile::Dot | Tile::PowerPellet)
    }
}

/// [TileGrid] stores the tiles of a rectangular maze row by row and maintains information about
/// connected components of walkable cells using a [UnionFind] structure.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for TileGrid {
    fn default() -> TileGrid {
        TileGrid::new(0, 0, Tile::Empty)
    }
}

impl TileGrid {
    pub fn new(width: usize, height: usize, tile: Tile) -> TileGrid {
        let mut grid = TileGrid {
            width,
            height,
            tiles: vec![tile; width * height],
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Builds a grid from rows of numeric tile codes.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<TileGrid, TileGridError> {
        Self::from_tile_rows(rows.iter().enumerate().map(|(row, codes)| {
            codes
                .as_ref()
                .iter()
                .enumerate()
                .map(|(col, &code)| {
                    Tile::from_code(code).ok_or(TileGridError::UnknownCode { code, row, col })
                })
                .collect::<Result<Vec<_>, _>>()
        }))
    }

    /// Builds a grid from ASCII rows (`' '` empty, `.` dot, `o` pellet, `#` wall, `-` gate).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<TileGrid, TileGridError> {
        Self::from_tile_rows(rows.iter().enumerate().map(|(row, line)| {
            line.as_ref()
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    Tile::from_char(ch).ok_or(TileGridError::UnknownChar { ch, row, col })
                })
                .collect::<Result<Vec<_>, _>>()
        }))
    }

    /// Parses the format produced by the [Display](fmt::Display) implementation.
    pub fn parse(text: &str) -> Result<TileGrid, TileGridError> {
        Self::from_rows(&text.lines().collect::<Vec<_>>())
    }

    /// The 30 x 33 board of the arcade maze.
    pub fn classic() -> TileGrid {
        Self::from_codes(&CLASSIC_LAYOUT).unwrap_or_default()
    }

    fn from_tile_rows<I>(rows: I) -> Result<TileGrid, TileGridError>
    where
        I: Iterator<Item = Result<Vec<Tile>, TileGridError>>,
    {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (row, parsed) in rows.enumerate() {
            let parsed = parsed?;
            let expected = *width.get_or_insert(parsed.len());
            if parsed.len() != expected {
                return Err(TileGridError::RaggedRow {
                    row,
                    expected,
                    found: parsed.len(),
                });
            }
            tiles.extend(parsed);
            height += 1;
        }
        let width = width.unwrap_or(0);
        let mut grid = TileGrid {
            width,
            height,
            tiles,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    fn ix(&self, row: i32, col: i32) -> Option<usize> {
        if row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width {
            Some(row as usize * self.width + col as usize)
        } else {
            None
        }
    }
    /// The tile at the given position, [None] if it lies outside the grid.
    pub fn tile(&self, row: i32, col: i32) -> Option<Tile> {
        self.ix(row, col).map(|ix| self.tiles[ix])
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if a walkable cell becomes blocked and components (potentially) break apart.
    pub fn set_tile(&mut self, row: i32, col: i32, tile: Tile) {
        let Some(ix) = self.ix(row, col) else {
            return;
        };
        let was_walkable = self.tiles[ix].is_walkable();
        self.tiles[ix] = tile;
        if was_walkable && !tile.is_walkable() {
            self.components_dirty = true;
        } else if tile.is_walkable() {
            let cell = GridCell::new(row, col);
            for n in cell.neumann_neighborhood() {
                if self.is_walkable_cell(n) {
                    if let Some(n_ix) = self.ix(n.row, n.col) {
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
    /// Eats the dot or power pellet at `cell`, returning what was collected.
    pub fn consume(&mut self, cell: GridCell) -> Option<Tile> {
        let tile = self.tile(cell.row, cell.col)?;
        if tile.is_collectible() {
            self.set_tile(cell.row, cell.col, Tile::Empty);
            Some(tile)
        } else {
            None
        }
    }
    /// Whether every dot and power pellet has been collected.
    pub fn is_complete(&self) -> bool {
        !self.tiles.iter().any(|t| t.is_collectible())
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, cell: GridCell) -> Option<usize> {
        self.ix(cell.row, cell.col).map(|ix| self.components.find(ix))
    }
    /// Checks if start and goal are walkable and on the same component.
    pub fn reachable(&self, start: GridCell, goal: GridCell) -> bool {
        if !self.is_walkable_cell(start) || !self.is_walkable_cell(goal) {
            return false;
        }
        match (self.ix(start.row, start.col), self.ix(goal.row, goal.col)) {
            (Some(a), Some(b)) => self.components.equiv(a, b),
            _ => false,
        }
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: GridCell, goal: GridCell) -> bool {
        !self.reachable(start, goal)
    }
    /// Number of walkable cells on the component of `cell`, 0 for a blocked cell.
    pub fn component_size(&self, cell: GridCell) -> usize {
        if !self.is_walkable_cell(cell) {
            return 0;
        }
        let Some(component) = self.get_component(cell) else {
            return 0;
        };
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .filter(|&(row, col)| {
                self.is_walkable(row, col)
                    && self.get_component(GridCell::new(row, col)) == Some(component)
            })
            .count()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up walkable 4-neighbours.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for (row, col) in iproduct!(0..self.height as i32, 0..self.width as i32) {
            if !self.is_walkable(row, col) {
                continue;
            }
            let Some(parent_ix) = self.ix(row, col) else {
                continue;
            };
            // Right and down are enough, left and up are covered by earlier cells.
            for (n_row, n_col) in [(row, col + 1), (row + 1, col)] {
                if self.is_walkable(n_row, n_col) {
                    if let Some(n_ix) = self.ix(n_row, n_col) {
                        self.components.union(parent_ix, n_ix);
                    }
                }
            }
        }
    }
}

impl GridQuery for TileGrid {
    fn is_walkable(&self, row: i32, col: i32) -> bool {
        self.tile(row, col).is_some_and(Tile::is_walkable)
    }
    fn list_goal_cells(&self) -> Vec<GridCell> {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .filter(|&(row, col)| self.tile(row, col).is_some_and(Tile::is_collectible))
            .map(GridCell::from)
            .collect()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            let line = row.iter().map(|t| t.to_char()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let grid = TileGrid::parse(".#.\n.#.").unwrap();
        let a = GridCell::new(0, 0);
        let b = GridCell::new(1, 0);
        let c = GridCell::new(0, 2);
        assert!(grid.reachable(a, b));
        assert!(grid.unreachable(a, c));
        assert!(grid.unreachable(a, GridCell::new(0, 1)));
        assert_eq!(grid.component_size(a), 2);
        assert_eq!(grid.component_size(GridCell::new(0, 1)), 0);
    }

    #[test]
    fn opening_a_wall_joins_components() {
        let mut grid = TileGrid::parse(".#.").unwrap();
        assert!(grid.unreachable(GridCell::new(0, 0), GridCell::new(0, 2)));
        grid.set_tile(0, 1, Tile::Empty);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(GridCell::new(0, 0), GridCell::new(0, 2)));
    }

    #[test]
    fn closing_a_cell_marks_components_dirty() {
        let mut grid = TileGrid::new(3, 1, Tile::Empty);
        grid.set_tile(0, 1, Tile::Wall);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(GridCell::new(0, 0), GridCell::new(0, 2)));
    }

    #[test]
    fn walkability_is_fail_closed() {
        let grid = TileGrid::parse(" .o#-").unwrap();
        assert!(grid.is_walkable(0, 0));
        assert!(grid.is_walkable(0, 1));
        assert!(grid.is_walkable(0, 2));
        assert!(!grid.is_walkable(0, 3));
        assert!(grid.is_walkable(0, 4));
        assert!(!grid.is_walkable(-1, 0));
        assert!(!grid.is_walkable(0, 5));
        assert!(!grid.is_walkable(1, 0));
    }

    #[test]
    fn goal_cells_in_scan_order() {
        let mut grid = TileGrid::parse(". o\n#..").unwrap();
        assert_eq!(
            grid.list_goal_cells(),
            vec![
                GridCell::new(0, 0),
                GridCell::new(0, 2),
                GridCell::new(1, 1),
                GridCell::new(1, 2)
            ]
        );
        assert_eq!(grid.consume(GridCell::new(0, 2)), Some(Tile::PowerPellet));
        assert_eq!(grid.consume(GridCell::new(0, 2)), None);
        assert_eq!(grid.list_goal_cells().len(), 3);
        assert!(!grid.is_complete());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            TileGrid::parse("..\n.").unwrap_err(),
            TileGridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            TileGrid::parse(".x").unwrap_err(),
            TileGridError::UnknownChar {
                ch: 'x',
                row: 0,
                col: 1
            }
        );
        assert!(TileGrid::from_codes(&[[1u8, 12]]).is_err());
    }

    #[test]
    fn display_round_trip() {
        let text = "#.o#\n# -#\n";
        let grid = TileGrid::parse(text).unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn classic_board() {
        let grid = TileGrid::classic();
        // Every code of the layout decodes; nothing is dropped on the way.
        assert_eq!(
            TileGrid::from_codes(&CLASSIC_LAYOUT).map(|g| g.to_string()),
            Ok(grid.to_string())
        );
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 33);
        assert_eq!(grid.tile(13, 14), Some(Tile::Gate));
        assert_eq!(grid.tile(4, 2), Some(Tile::PowerPellet));
        assert!(!grid.list_goal_cells().is_empty());
        // The side tunnel row is open at both borders.
        assert!(grid.reachable(GridCell::new(15, 0), GridCell::new(15, 29)));
    }
}
