use log::debug;

use crate::grid::{walkable_neighbours, GridCell, GridQuery};
use crate::solver::{GridSolver, SearchResult, VisitedSet};
use crate::DEFAULT_DFS_DEPTH_LIMIT;

/// Depth-limited depth-first search.
///
/// Note that this is not a backtracking DFS: a single visited set is shared by all branches and a
/// cell is marked as soon as it is pushed. Once a cell has been queued through one route, no other
/// route will ever reach it, even when the first route is later dropped by the depth limit. The
/// returned path is therefore connected and walkable but usually not the shortest.
#[derive(Clone, Copy, Debug)]
pub struct DfsSolver {
    /// Branches whose path (start included) holds more cells than this are not expanded.
    pub depth_limit: usize,
}

impl Default for DfsSolver {
    fn default() -> DfsSolver {
        DfsSolver::new(DEFAULT_DFS_DEPTH_LIMIT)
    }
}

impl DfsSolver {
    pub fn new(depth_limit: usize) -> DfsSolver {
        DfsSolver { depth_limit }
    }
}

impl GridSolver for DfsSolver {
    fn search<G>(&self, grid: &G, start: GridCell, goal: GridCell) -> SearchResult
    where
        G: GridQuery + ?Sized,
    {
        let mut stack: Vec<(GridCell, Vec<GridCell>)> = vec![(start, vec![start])];
        let mut visited = VisitedSet::default();
        visited.insert(start);

        while let Some((current, path)) = stack.pop() {
            if current == goal {
                debug!(
                    "DFS {} -> {}: {} steps, {} cells visited",
                    start,
                    goal,
                    path.len() - 1,
                    visited.len()
                );
                return SearchResult {
                    path: path[1..].to_vec(),
                    visited,
                };
            }
            if path.len() > self.depth_limit {
                continue;
            }
            for neighbour in walkable_neighbours(grid, current) {
                if visited.insert(neighbour) {
                    let mut extended = path.clone();
                    extended.push(neighbour);
                    stack.push((neighbour, extended));
                }
            }
        }
        debug!(
            "DFS {} -> {}: no path within depth {}, {} cells visited",
            start,
            goal,
            self.depth_limit,
            visited.len()
        );
        SearchResult {
            path: Vec::new(),
            visited,
        }
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
