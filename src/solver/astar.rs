use log::debug;

use crate::distance::manhattan;
use crate::grid::{walkable_neighbours, GridCell, GridQuery};
use crate::search_context::best_first;
use crate::solver::{GridSolver, SearchResult};

/// A* ordered on `g + h(cell, goal)`. With the default [manhattan] heuristic, which is
/// admissible and consistent on a 4-connected unit-cost grid, the returned path is optimal.
#[derive(Clone, Debug)]
pub struct AstarSolver<H = fn(GridCell, GridCell) -> u32> {
    pub heuristic: H,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic: manhattan,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> AstarSolver<H>
where
    H: Fn(GridCell, GridCell) -> u32,
{
    /// Uses a custom heuristic. Optimality only holds if it never overestimates.
    pub fn with_heuristic(heuristic: H) -> AstarSolver<H> {
        AstarSolver { heuristic }
    }
}

impl<H> GridSolver for AstarSolver<H>
where
    H: Fn(GridCell, GridCell) -> u32,
{
    fn search<G>(&self, grid: &G, start: GridCell, goal: GridCell) -> SearchResult
    where
        G: GridQuery + ?Sized,
    {
        let (found, visited) = best_first(
            &start,
            |cell| {
                walkable_neighbours(grid, *cell)
                    .into_iter()
                    .map(|n| (n, 1u32))
            },
            |cell| (self.heuristic)(*cell, goal),
            |cell| *cell == goal,
        );
        let path = found
            .map(|(mut path, _cost)| {
                path.remove(0);
                path
            })
            .unwrap_or_default();
        debug!(
            "A* {} -> {}: {} steps, {} cells finalized",
            start,
            goal,
            path.len(),
            visited.len()
        );
        SearchResult { path, visited }
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
