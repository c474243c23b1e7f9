use core::fmt;
use smallvec::SmallVec;

/// A discrete (row, column) position on the maze grid. Ordering is row-major, which is also the
/// secondary key used by the priority queues of the cost-based searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    pub const fn new(row: i32, col: i32) -> GridCell {
        GridCell { row, col }
    }
    /// Offsets the cell by the given row and column deltas, saturating at the `i32` range.
    pub const fn offset(&self, d_row: i32, d_col: i32) -> GridCell {
        GridCell::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }
    /// Candidate 4-neighbours in the fixed order right, left, down, up. The order decides
    /// tie-breaking in every search and must not change.
    pub const fn neumann_neighborhood(&self) -> [GridCell; 4] {
        [
            self.offset(0, 1),
            self.offset(0, -1),
            self.offset(1, 0),
            self.offset(-1, 0),
        ]
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((row, col): (i32, i32)) -> GridCell {
        GridCell::new(row, col)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The read-only view of the maze that every search consumes.
pub trait GridQuery {
    /// Must return [false] for out-of-bounds cells and blocked tiles.
    fn is_walkable(&self, row: i32, col: i32) -> bool;
    /// All currently collectible cells in scan order.
    fn list_goal_cells(&self) -> Vec<GridCell>;

    fn is_walkable_cell(&self, cell: GridCell) -> bool {
        self.is_walkable(cell.row, cell.col)
    }
}

/// Walkable 4-neighbours of `cell` in right, left, down, up order.
pub fn walkable_neighbours<G>(grid: &G, cell: GridCell) -> SmallVec<[GridCell; 4]>
where
    G: GridQuery + ?Sized,
{
    cell.neumann_neighborhood()
        .into_iter()
        .filter(|n| grid.is_walkable_cell(*n))
        .collect()
}
