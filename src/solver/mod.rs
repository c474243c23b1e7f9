use crate::grid::{GridCell, GridQuery};
use crate::search_context::FxIndexSet;
use itertools::Itertools;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

/// Cells explored during one search, in the order they were marked.
pub type VisitedSet = FxIndexSet<GridCell>;

/// Output of every [GridSolver]. The path excludes the start and ends at the goal; it is empty if
/// the goal could not be reached (or if start and goal coincide).
#[derive(Clone, Debug, Default)]
pub struct SearchResult {
    pub path: Vec<GridCell>,
    pub visited: VisitedSet,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
    pub fn len(&self) -> usize {
        self.path.len()
    }
    /// Checks that the path leaves `start` and then only makes unit steps.
    pub fn is_connected_from(&self, start: GridCell) -> bool {
        std::iter::once(&start)
            .chain(self.path.iter())
            .tuple_windows()
            .all(|(a, b)| crate::manhattan(*a, *b) == 1)
    }
}

/// Every move costs one, so the cost of a path is its number of steps.
pub fn path_cost(path: &[GridCell]) -> usize {
    path.len()
}

/// A search between two cells of a [GridQuery]. Unreachable goals are not an error: the result
/// then has an empty path and whatever was explored before the frontier ran dry.
pub trait GridSolver {
    fn search<G>(&self, grid: &G, start: GridCell, goal: GridCell) -> SearchResult
    where
        G: GridQuery + ?Sized;

    /// Short name used in logs and benchmarks.
    fn name(&self) -> &'static str;
}
