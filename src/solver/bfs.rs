use log::debug;
use std::collections::VecDeque;

use crate::grid::{walkable_neighbours, GridCell, GridQuery};
use crate::search_context::{reverse_path, FxIndexMap};
use crate::solver::{GridSolver, SearchResult};

/// Breadth-first search. Cells are marked when enqueued, so each cell enters the queue at most
/// once and the first route found to it is a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn search<G>(&self, grid: &G, start: GridCell, goal: GridCell) -> SearchResult
    where
        G: GridQuery + ?Sized,
    {
        // Keys double as the visited set, values are parent indices.
        let mut parents: FxIndexMap<GridCell, usize> = FxIndexMap::default();
        parents.insert(start, usize::MAX);
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(0);

        let mut path = Vec::new();
        while let Some(ix) = queue.pop_front() {
            let Some((&current, _)) = parents.get_index(ix) else {
                continue;
            };
            if current == goal {
                path = reverse_path(&parents, |&p| p, ix);
                path.remove(0);
                break;
            }
            for neighbour in walkable_neighbours(grid, current) {
                if let indexmap::map::Entry::Vacant(e) = parents.entry(neighbour) {
                    queue.push_back(e.index());
                    e.insert(ix);
                }
            }
        }
        debug!(
            "BFS {} -> {}: {} steps, {} cells visited",
            start,
            goal,
            path.len(),
            parents.len()
        );
        SearchResult {
            path,
            visited: parents.into_keys().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile_grid::{Tile, TileGrid};

    #[test]
    fn open_grid_shortest_path() {
        let grid = TileGrid::new(5, 5, Tile::Empty);
        let start = GridCell::new(0, 0);
        let result = BfsSolver.search(&grid, start, GridCell::new(4, 4));
        assert_eq!(result.len(), 8);
        assert_eq!(result.path.last(), Some(&GridCell::new(4, 4)));
        assert!(result.is_connected_from(start));
        assert!(result.visited.contains(&start));
        assert!(result.visited.contains(&GridCell::new(4, 4)));
    }

    /// Right is tried before down, so the first discovered route hugs the top row.
    #[test]
    fn ties_follow_neighbour_order() {
        let grid = TileGrid::new(2, 2, Tile::Empty);
        let result = BfsSolver.search(&grid, GridCell::new(0, 0), GridCell::new(1, 1));
        assert_eq!(result.path, vec![GridCell::new(0, 1), GridCell::new(1, 1)]);
        assert_eq!(
            result.visited.iter().copied().collect::<Vec<_>>(),
            vec![
                GridCell::new(0, 0),
                GridCell::new(0, 1),
                GridCell::new(1, 0),
                GridCell::new(1, 1)
            ]
        );
    }

    #[test]
    fn walls_force_detour() {
        // |S#G|
        // | # |
        // |   |
        let grid = TileGrid::parse(" # \n # \n   ").unwrap();
        let start = GridCell::new(0, 0);
        let result = BfsSolver.search(&grid, start, GridCell::new(0, 2));
        assert_eq!(result.len(), 6);
        assert!(result.is_connected_from(start));
    }

    #[test]
    fn unreachable_goal_gives_empty_path() {
        let grid = TileGrid::parse("  #  ").unwrap();
        let result = BfsSolver.search(&grid, GridCell::new(0, 0), GridCell::new(0, 4));
        assert!(result.is_empty());
        assert_eq!(result.visited.len(), 2);
        assert!(!result.visited.contains(&GridCell::new(0, 4)));
    }

    #[test]
    fn start_equals_goal() {
        let grid = TileGrid::new(3, 3, Tile::Empty);
        let result = BfsSolver.search(&grid, GridCell::new(1, 1), GridCell::new(1, 1));
        assert!(result.is_empty());
        assert_eq!(result.visited.len(), 1);
    }
}
