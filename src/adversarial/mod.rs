//! Shallow game-tree search for the player against the chasing opponents.
//!
//! The opponent ply is not a search over opponent choices. Every opponent greedily steps towards
//! the player, which yields exactly one successor configuration, so the "minimizing" ply only
//! evaluates that forced outcome.
use smallvec::SmallVec;

use crate::distance::manhattan;
use crate::grid::{walkable_neighbours, GridCell, GridQuery};

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

pub type Score = i32;

/// Weight of the distance to the nearest opponent.
pub const OPPONENT_DISTANCE_WEIGHT: Score = 10;
/// Weight of the distance to the nearest goal cell (subtracted).
pub const GOAL_DISTANCE_WEIGHT: Score = 5;
/// Weight of the number of walkable neighbours.
pub const MOBILITY_WEIGHT: Score = 2;

/// Opponent cells for one ply. Four ghosts fit inline.
pub type Opponents = SmallVec<[GridCell; 4]>;

/// Scores a position from the player's point of view, higher is better. The opponent term is
/// left out without opponents and the goal term without goal cells.
pub fn evaluate<G>(player: GridCell, opponents: &[GridCell], grid: &G) -> Score
where
    G: GridQuery + ?Sized,
{
    let mut score = 0;
    if let Some(nearest) = opponents.iter().map(|o| manhattan(player, *o)).min() {
        score += nearest as Score * OPPONENT_DISTANCE_WEIGHT;
    }
    if let Some(nearest) = grid
        .list_goal_cells()
        .into_iter()
        .map(|g| manhattan(player, g))
        .min()
    {
        score -= nearest as Score * GOAL_DISTANCE_WEIGHT;
    }
    score + walkable_neighbours(grid, player).len() as Score * MOBILITY_WEIGHT
}

/// Moves every opponent one step to the walkable neighbour closest (Manhattan) to the player.
/// Ties keep the first neighbour in right, left, down, up order; boxed-in opponents stay put.
pub fn simulate_opponents<G>(opponents: &[GridCell], player: GridCell, grid: &G) -> Opponents
where
    G: GridQuery + ?Sized,
{
    opponents
        .iter()
        .map(|&opponent| {
            walkable_neighbours(grid, opponent)
                .into_iter()
                .min_by_key(|n| manhattan(*n, player))
                .unwrap_or(opponent)
        })
        .collect()
}

/// A depth-bounded adversarial search recommending the player's next cell.
pub trait AdversarialSolver {
    /// Runs the search from a maximizing ply and returns the backed-up score together with the
    /// recommended neighbour. A depth of zero or less evaluates `player` immediately.
    fn search<G>(
        &self,
        grid: &G,
        player: GridCell,
        opponents: &[GridCell],
        depth: i32,
    ) -> (Score, GridCell)
    where
        G: GridQuery + ?Sized;

    /// Search depth used by [best_move](Self::best_move).
    fn depth(&self) -> i32;

    fn name(&self) -> &'static str;

    /// The recommended next cell; equal to `player` if it has nowhere to go.
    fn best_move<G>(&self, grid: &G, player: GridCell, opponents: &[GridCell]) -> GridCell
    where
        G: GridQuery + ?Sized,
    {
        self.search(grid, player, opponents, self.depth()).1
    }
}
