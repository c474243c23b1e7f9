use log::debug;

use crate::grid::{walkable_neighbours, GridCell, GridQuery};
use crate::search_context::best_first;
use crate::solver::{GridSolver, SearchResult};

/// Uniform-cost search (Dijkstra). Every move costs 1, so this pops in the same relative order as
/// BFS but through a priority queue; it is [AstarSolver](crate::solver::astar::AstarSolver) with
/// a zero heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
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
            |_| 0,
            |cell| *cell == goal,
        );
        let path = found
            .map(|(mut path, _cost)| {
                path.remove(0);
                path
            })
            .unwrap_or_default();
        debug!(
            "UCS {} -> {}: {} steps, {} cells finalized",
            start,
            goal,
            path.len(),
            visited.len()
        );
        SearchResult { path, visited }
    }

    fn name(&self) -> &'static str {
        "UCS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::bfs::BfsSolver;
    use crate::tile_grid::{Tile, TileGrid};

    #[test]
    fn matches_bfs_length() {
        let grid = TileGrid::from_rows(&[
            "     #    ",
            "## # # ## ",
            "#  #   #  ",
            "# ## ### #",
            "          ",
        ])
        .unwrap();
        let start = GridCell::new(0, 0);
        for goal in [
            GridCell::new(4, 9),
            GridCell::new(2, 9),
            GridCell::new(0, 9),
        ] {
            let ucs = DijkstraSolver.search(&grid, start, goal);
            let bfs = BfsSolver.search(&grid, start, goal);
            assert_eq!(ucs.len(), bfs.len());
            assert!(ucs.is_connected_from(start));
        }
    }

    #[test]
    fn visited_is_finalized_set() {
        let grid = TileGrid::new(3, 1, Tile::Empty);
        let result = DijkstraSolver.search(&grid, GridCell::new(0, 0), GridCell::new(0, 1));
        assert_eq!(result.path, vec![GridCell::new(0, 1)]);
        // (0, 2) was never discovered, (0, 1) was finalized as the goal.
        assert_eq!(result.visited.len(), 2);
    }

    #[test]
    fn unreachable_goal() {
        let grid = TileGrid::parse(" # ").unwrap();
        let first = DijkstraSolver.search(&grid, GridCell::new(0, 0), GridCell::new(0, 2));
        let second = DijkstraSolver.search(&grid, GridCell::new(0, 0), GridCell::new(0, 2));
        assert!(first.is_empty() && second.is_empty());
        assert_eq!(first.visited, second.visited);
    }
}
