use log::trace;

use crate::adversarial::{evaluate, simulate_opponents, AdversarialSolver, Score};
use crate::grid::{walkable_neighbours, GridCell, GridQuery};
use crate::DEFAULT_MINIMAX_DEPTH;

/// Plain minimax over the player's moves against greedily chasing opponents.
#[derive(Clone, Copy, Debug)]
pub struct Minimax {
    pub depth: i32,
}

impl Default for Minimax {
    fn default() -> Minimax {
        Minimax::new(DEFAULT_MINIMAX_DEPTH)
    }
}

impl Minimax {
    pub fn new(depth: i32) -> Minimax {
        Minimax { depth }
    }
}

/// One ply of minimax. Maximizing plies try the player's neighbours in right, left, down, up
/// order and keep the first strictly best one; opponent plies advance the opponents once and
/// return the player cell unchanged.
pub fn minimax<G>(
    grid: &G,
    player: GridCell,
    opponents: &[GridCell],
    depth: i32,
    maximizing: bool,
) -> (Score, GridCell)
where
    G: GridQuery + ?Sized,
{
    if depth <= 0 {
        return (evaluate(player, opponents, grid), player);
    }
    if maximizing {
        let mut max_eval = Score::MIN;
        let mut best_move = player;
        for neighbour in walkable_neighbours(grid, player) {
            let (score, _) = minimax(grid, neighbour, opponents, depth - 1, false);
            if score > max_eval {
                max_eval = score;
                best_move = neighbour;
            }
        }
        trace!("max ply {} at {}: {} -> {}", depth, player, max_eval, best_move);
        (max_eval, best_move)
    } else {
        let moved = simulate_opponents(opponents, player, grid);
        let (score, _) = minimax(grid, player, &moved, depth - 1, true);
        trace!("opponent ply {} at {}: {}", depth, player, score);
        (score, player)
    }
}

impl AdversarialSolver for Minimax {
    fn search<G>(
        &self,
        grid: &G,
        player: GridCell,
        opponents: &[GridCell],
        depth: i32,
    ) -> (Score, GridCell)
    where
        G: GridQuery + ?Sized,
    {
        minimax(grid, player, opponents, depth, true)
    }

    fn depth(&self) -> i32 {
        self.depth
    }

    fn name(&self) -> &'static str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::tile_grid::{Tile, TileGrid};

    /// With one ply the recommendation is the neighbour with the best static evaluation, the
    /// first one in right, left, down, up order on ties.
    #[test]
    fn depth_one_picks_best_evaluated_neighbour() {
        let mut grid = TileGrid::new(9, 9, Tile::Empty);
        grid.set_tile(8, 0, Tile::Dot);
        let player = GridCell::new(4, 4);
        let ghost = GridCell::new(1, 1);
        assert_eq!(manhattan(player, ghost), 6);

        let expected = walkable_neighbours(&grid, player)
            .into_iter()
            .map(|n| (evaluate(n, &[ghost], &grid), n))
            .fold((Score::MIN, player), |best, cand| {
                if cand.0 > best.0 {
                    cand
                } else {
                    best
                }
            });
        let (score, best) = Minimax::new(1).search(&grid, player, &[ghost], 1);
        assert_eq!((score, best), expected);
        // Down moves away from the ghost and towards the dot.
        assert_eq!(best, GridCell::new(5, 4));
    }

    #[test]
    fn ties_go_to_the_first_neighbour() {
        // No ghosts, no dots: every open neighbour of the centre has the same mobility.
        let grid = TileGrid::parse("#####\n#   #\n#   #\n#   #\n#####").unwrap();
        let best = Minimax::new(1).best_move(&grid, GridCell::new(2, 2), &[]);
        assert_eq!(best, GridCell::new(2, 3));
    }

    #[test]
    fn non_positive_depth_evaluates_in_place() {
        let grid = TileGrid::new(3, 3, Tile::Empty);
        let player = GridCell::new(1, 1);
        let ghost = GridCell::new(0, 0);
        for depth in [0, -1, -10] {
            let (score, cell) = Minimax::default().search(&grid, player, &[ghost], depth);
            assert_eq!(cell, player);
            assert_eq!(score, evaluate(player, &[ghost], &grid));
        }
    }

    #[test]
    fn boxed_in_player_stays() {
        let grid = TileGrid::parse("###\n# #\n###").unwrap();
        let player = GridCell::new(1, 1);
        let (score, cell) = Minimax::default().search(&grid, player, &[], 3);
        assert_eq!(score, Score::MIN);
        assert_eq!(cell, player);
    }

    /// Without dots to chase the player runs away from the ghost along the corridor.
    #[test]
    fn flees_along_corridor() {
        let grid = TileGrid::parse("#########\n#       #\n#########").unwrap();
        let player = GridCell::new(1, 4);
        let ghost = GridCell::new(1, 2);
        let best = Minimax::default().best_move(&grid, player, &[ghost]);
        assert_eq!(best, GridCell::new(1, 5));
    }
}
