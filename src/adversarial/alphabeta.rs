use log::trace;

use crate::adversarial::{evaluate, simulate_opponents, AdversarialSolver, Score};
use crate::grid::{walkable_neighbours, GridCell, GridQuery};
use crate::DEFAULT_ALPHABETA_DEPTH;

/// [Minimax](crate::adversarial::Minimax) with alpha-beta bounds. Pruning only happens on the
/// player's plies since the opponent ply has a single forced successor.
#[derive(Clone, Copy, Debug)]
pub struct AlphaBeta {
    pub depth: i32,
}

impl Default for AlphaBeta {
    fn default() -> AlphaBeta {
        AlphaBeta::new(DEFAULT_ALPHABETA_DEPTH)
    }
}

impl AlphaBeta {
    pub fn new(depth: i32) -> AlphaBeta {
        AlphaBeta { depth }
    }
}

pub fn alphabeta<G>(
    grid: &G,
    player: GridCell,
    opponents: &[GridCell],
    depth: i32,
    mut alpha: Score,
    beta: Score,
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
            let (score, _) = alphabeta(grid, neighbour, opponents, depth - 1, alpha, beta, false);
            if score > max_eval {
                max_eval = score;
                best_move = neighbour;
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                trace!("cutoff at {} (alpha {}, beta {})", player, alpha, beta);
                break;
            }
        }
        (max_eval, best_move)
    } else {
        let moved = simulate_opponents(opponents, player, grid);
        let (score, _) = alphabeta(grid, player, &moved, depth - 1, alpha, beta, true);
        let beta = beta.min(score);
        trace!("opponent ply {} at {}: {} (beta {})", depth, player, score, beta);
        (score, player)
    }
}

impl AdversarialSolver for AlphaBeta {
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
        alphabeta(grid, player, opponents, depth, Score::MIN, Score::MAX, true)
    }

    fn depth(&self) -> i32 {
        self.depth
    }

    fn name(&self) -> &'static str {
        "Alpha-Beta"
    }
}
