use log::{debug, trace};

use crate::adversarial::AdversarialSolver;
use crate::coords::{Direction, PixelPosition, TileGeometry};
use crate::distance::manhattan;
use crate::grid::{GridCell, GridQuery};
use crate::solver::{GridSolver, VisitedSet};

/// Everything a strategy gets to see about the current tick, already converted to grid space
/// (except the player's pixel centre, needed to follow a path smoothly).
#[derive(Clone, Copy, Debug)]
pub struct Tick<'a> {
    pub player: GridCell,
    pub player_center: PixelPosition,
    pub opponents: &'a [GridCell],
    /// Explicit goal; falls back to the nearest collectible when absent.
    pub goal: Option<GridCell>,
}

/// Decides the direction to steer in for one tick.
pub trait NextMoveStrategy {
    fn next_move(&mut self, tick: &Tick<'_>, grid: &dyn GridQuery) -> Option<Direction>;

    /// The cached path, if the strategy keeps one.
    fn path(&self) -> &[GridCell] {
        &[]
    }
    /// Index of the next unconsumed step of [path](Self::path).
    fn path_index(&self) -> usize {
        0
    }
    /// Cells explored by the last search.
    fn visited(&self) -> Option<&VisitedSet> {
        None
    }
}

/// Nearest goal cell by Manhattan distance, the first one in scan order on ties.
pub fn nearest_goal<G>(cell: GridCell, grid: &G) -> Option<GridCell>
where
    G: GridQuery + ?Sized,
{
    grid.list_goal_cells()
        .into_iter()
        .min_by_key(|goal| manhattan(cell, *goal))
}

/// Computes a path with `S` once and then steers along it tick by tick, recomputing only when
/// the path has been used up or the player has been pushed off it.
#[derive(Clone, Debug)]
pub struct PathFollower<S> {
    solver: S,
    geometry: TileGeometry,
    path: Vec<GridCell>,
    index: usize,
    visited: Option<VisitedSet>,
}

impl<S: GridSolver> PathFollower<S> {
    pub fn new(solver: S, geometry: TileGeometry) -> PathFollower<S> {
        PathFollower {
            solver,
            geometry,
            path: Vec::new(),
            index: 0,
            visited: None,
        }
    }

    fn recompute(&mut self, tick: &Tick<'_>, grid: &dyn GridQuery) -> bool {
        let Some(goal) = tick.goal.or_else(|| nearest_goal(tick.player, grid)) else {
            debug!("{}: no goal left", self.solver.name());
            return false;
        };
        let result = self.solver.search(grid, tick.player, goal);
        debug!(
            "{}: new path {} -> {} with {} steps",
            self.solver.name(),
            tick.player,
            goal,
            result.len()
        );
        self.path = result.path;
        self.visited = Some(result.visited);
        self.index = 0;
        true
    }

    /// Pixel offset from the player's centre to the centre of the current step.
    fn delta_to_step(&self, tick: &Tick<'_>) -> Option<(i32, i32)> {
        let target = self.geometry.cell_center(*self.path.get(self.index)?);
        Some((
            target.x.saturating_sub(tick.player_center.x),
            target.y.saturating_sub(tick.player_center.y),
        ))
    }
}

impl<S: GridSolver> NextMoveStrategy for PathFollower<S> {
    fn next_move(&mut self, tick: &Tick<'_>, grid: &dyn GridQuery) -> Option<Direction> {
        if self.index >= self.path.len() && !self.recompute(tick, grid) {
            return None;
        }
        let (mut dx, mut dy) = self.delta_to_step(tick)?;
        let threshold = self.geometry.proximity_threshold();
        if dx.abs() <= threshold && dy.abs() <= threshold {
            self.index += 1;
            (dx, dy) = self.delta_to_step(tick)?;
        }
        let direction = if dx.abs() >= dy.abs() {
            Direction::from_delta(dx, 0)
        } else {
            Direction::from_delta(0, dy)
        }?;
        let step = self.path[self.index];
        // Inside the step cell, heading for its centre never leaves it.
        if step == tick.player || grid.is_walkable_cell(direction.step(tick.player)) {
            return Some(direction);
        }
        match Direction::between(tick.player, step) {
            Some(grid_direction) if grid_direction.step(tick.player) == step => {
                trace!(
                    "{:?} from {} is blocked, stepping {:?} onto {}",
                    direction,
                    tick.player,
                    grid_direction,
                    step
                );
                Some(grid_direction)
            }
            _ => {
                debug!("{} is off the path at {}, replanning", tick.player, step);
                self.index = self.path.len();
                None
            }
        }
    }

    fn path(&self) -> &[GridCell] {
        &self.path
    }
    fn path_index(&self) -> usize {
        self.index
    }
    fn visited(&self) -> Option<&VisitedSet> {
        self.visited.as_ref()
    }
}

/// Runs an adversarial search every tick and steers towards the recommended neighbour.
#[derive(Clone, Debug)]
pub struct AdversarialPlanner<A> {
    solver: A,
}

impl<A: AdversarialSolver> AdversarialPlanner<A> {
    pub fn new(solver: A) -> AdversarialPlanner<A> {
        AdversarialPlanner { solver }
    }
}

impl<A: AdversarialSolver> NextMoveStrategy for AdversarialPlanner<A> {
    fn next_move(&mut self, tick: &Tick<'_>, grid: &dyn GridQuery) -> Option<Direction> {
        let next = self.solver.best_move(grid, tick.player, tick.opponents);
        trace!("{}: {} -> {}", self.solver.name(), tick.player, next);
        Direction::between(tick.player, next)
    }
}
