//! The agent steering the player: a mode switch over the searches plus the bookkeeping that turns
//! grid paths into per-tick directions.
use core::fmt;
use core::str::FromStr;
use log::info;

use crate::adversarial::{AlphaBeta, Minimax, Opponents};
use crate::coords::{Direction, PixelPosition, TileGeometry};
use crate::error::ParseModeError;
use crate::grid::{GridCell, GridQuery};
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BfsSolver;
use crate::solver::dfs::DfsSolver;
use crate::solver::dijkstra::DijkstraSolver;
use crate::solver::VisitedSet;
use crate::{DEFAULT_ALPHABETA_DEPTH, DEFAULT_DFS_DEPTH_LIMIT, DEFAULT_MINIMAX_DEPTH};

pub mod strategy;

pub use strategy::{nearest_goal, AdversarialPlanner, NextMoveStrategy, PathFollower, Tick};

/// Which algorithm drives the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AgentMode {
    /// The player is steered by the user; the agent never proposes a move.
    #[default]
    Manual,
    Bfs,
    Dfs,
    Ucs,
    AStar,
    Minimax,
    AlphaBeta,
}

impl AgentMode {
    /// All modes in hotkey order.
    pub const ALL: [AgentMode; 7] = [
        AgentMode::Manual,
        AgentMode::Bfs,
        AgentMode::Dfs,
        AgentMode::Ucs,
        AgentMode::AStar,
        AgentMode::Minimax,
        AgentMode::AlphaBeta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AgentMode::Manual => "Manual Control",
            AgentMode::Bfs => "Breadth-First Search",
            AgentMode::Dfs => "Depth-First Search",
            AgentMode::Ucs => "Uniform Cost Search",
            AgentMode::AStar => "A* Search",
            AgentMode::Minimax => "Minimax",
            AgentMode::AlphaBeta => "Alpha-Beta Pruning",
        }
    }
    /// Modes that search the game tree every tick instead of following a cached path.
    pub fn is_adversarial(self) -> bool {
        matches!(self, AgentMode::Minimax | AgentMode::AlphaBeta)
    }
    pub fn is_pathfinding(self) -> bool {
        !self.is_adversarial() && self != AgentMode::Manual
    }
    /// Keys `1` to `7` select the modes in [ALL](Self::ALL) order.
    pub fn from_hotkey(key: char) -> Option<AgentMode> {
        let ix = key.to_digit(10)?.checked_sub(1)?;
        AgentMode::ALL.get(ix as usize).copied()
    }
    /// Builds the strategy that implements this mode, [None] for [Manual](AgentMode::Manual).
    pub fn strategy(self, config: &AgentConfig) -> Option<Box<dyn NextMoveStrategy>> {
        let geometry = config.geometry;
        let strategy: Box<dyn NextMoveStrategy> = match self {
            AgentMode::Manual => return None,
            AgentMode::Bfs => Box::new(PathFollower::new(BfsSolver, geometry)),
            AgentMode::Dfs => Box::new(PathFollower::new(
                DfsSolver::new(config.dfs_depth_limit),
                geometry,
            )),
            AgentMode::Ucs => Box::new(PathFollower::new(DijkstraSolver, geometry)),
            AgentMode::AStar => Box::new(PathFollower::new(AstarSolver::new(), geometry)),
            AgentMode::Minimax => Box::new(AdversarialPlanner::new(Minimax::new(
                config.minimax_depth,
            ))),
            AgentMode::AlphaBeta => Box::new(AdversarialPlanner::new(AlphaBeta::new(
                config.alphabeta_depth,
            ))),
        };
        Some(strategy)
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgentMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<AgentMode, ParseModeError> {
        match s.to_ascii_lowercase().as_str() {
            "manual" => Ok(AgentMode::Manual),
            "bfs" => Ok(AgentMode::Bfs),
            "dfs" => Ok(AgentMode::Dfs),
            "ucs" | "dijkstra" => Ok(AgentMode::Ucs),
            "astar" | "a*" => Ok(AgentMode::AStar),
            "minimax" => Ok(AgentMode::Minimax),
            "alphabeta" | "alpha-beta" => Ok(AgentMode::AlphaBeta),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// Plain values the caller supplies; the agent reads no configuration itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentConfig {
    pub geometry: TileGeometry,
    pub dfs_depth_limit: usize,
    pub minimax_depth: i32,
    pub alphabeta_depth: i32,
}

impl Default for AgentConfig {
    fn default() -> AgentConfig {
        AgentConfig {
            geometry: TileGeometry::default(),
            dfs_depth_limit: DEFAULT_DFS_DEPTH_LIMIT,
            minimax_depth: DEFAULT_MINIMAX_DEPTH,
            alphabeta_depth: DEFAULT_ALPHABETA_DEPTH,
        }
    }
}

/// Owns the agent state of one game session: the mode and, through the mode's strategy, the
/// cached path, the index of its next step and the last visited set.
pub struct PathfindingAgent {
    mode: AgentMode,
    config: AgentConfig,
    strategy: Option<Box<dyn NextMoveStrategy>>,
}

impl Default for PathfindingAgent {
    fn default() -> PathfindingAgent {
        PathfindingAgent::new(AgentMode::default(), AgentConfig::default())
    }
}

impl PathfindingAgent {
    pub fn new(mode: AgentMode, config: AgentConfig) -> PathfindingAgent {
        PathfindingAgent {
            mode,
            config,
            strategy: mode.strategy(&config),
        }
    }

    pub fn mode(&self) -> AgentMode {
        self.mode
    }
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Switches the mode. Always starts from a clean state, even when the mode is unchanged.
    pub fn set_mode(&mut self, mode: AgentMode) {
        info!("Agent mode: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.clear_path();
    }

    /// Forgets the cached path, e.g. after the player has been moved back to its start.
    pub fn clear_path(&mut self) {
        self.strategy = self.mode.strategy(&self.config);
    }

    /// Direction to steer the player in for this tick, [None] for no move. Positions are the
    /// top-left corners of the entities' bounding boxes.
    pub fn compute_next_move<G: GridQuery>(
        &mut self,
        player: PixelPosition,
        opponents: &[PixelPosition],
        grid: &G,
        goal: Option<GridCell>,
    ) -> Option<Direction> {
        let strategy = self.strategy.as_mut()?;
        let geometry = self.config.geometry;
        let opponent_cells: Opponents = if self.mode.is_adversarial() {
            opponents
                .iter()
                .map(|p| geometry.pixel_to_cell(*p))
                .collect()
        } else {
            Opponents::new()
        };
        let tick = Tick {
            player: geometry.pixel_to_cell(player),
            player_center: geometry.center_of(player),
            opponents: &opponent_cells,
            goal,
        };
        strategy.next_move(&tick, grid)
    }

    /// Nearest collectible to `cell`, the default goal of the path-following modes.
    pub fn nearest_goal<G: GridQuery>(&self, cell: GridCell, grid: &G) -> Option<GridCell> {
        nearest_goal(cell, grid)
    }

    pub fn current_path(&self) -> &[GridCell] {
        self.strategy.as_ref().map_or(&[], |s| s.path())
    }
    pub fn path_index(&self) -> usize {
        self.strategy.as_ref().map_or(0, |s| s.path_index())
    }
    pub fn visited(&self) -> Option<&VisitedSet> {
        self.strategy.as_ref().and_then(|s| s.visited())
    }
}

impl fmt::Debug for PathfindingAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PathfindingAgent")
            .field("mode", &self.mode)
            .field("config", &self.config)
            .field("path", &self.current_path())
            .field("path_index", &self.path_index())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_follow_mode_order() {
        assert_eq!(AgentMode::from_hotkey('1'), Some(AgentMode::Manual));
        assert_eq!(AgentMode::from_hotkey('5'), Some(AgentMode::AStar));
        assert_eq!(AgentMode::from_hotkey('7'), Some(AgentMode::AlphaBeta));
        assert_eq!(AgentMode::from_hotkey('0'), None);
        assert_eq!(AgentMode::from_hotkey('8'), None);
        assert_eq!(AgentMode::from_hotkey('x'), None);
    }

    #[test]
    fn parse_modes() {
        assert_eq!("A*".parse::<AgentMode>(), Ok(AgentMode::AStar));
        assert_eq!("AlphaBeta".parse::<AgentMode>(), Ok(AgentMode::AlphaBeta));
        assert_eq!(
            "greedy".parse::<AgentMode>(),
            Err(ParseModeError("greedy".to_owned()))
        );
        for mode in AgentMode::ALL {
            assert_eq!(mode.to_string(), mode.name());
        }
    }

    #[test]
    fn mode_families() {
        let adversarial = AgentMode::ALL.iter().filter(|m| m.is_adversarial()).count();
        let pathfinding = AgentMode::ALL.iter().filter(|m| m.is_pathfinding()).count();
        assert_eq!((adversarial, pathfinding), (2, 4));
        assert!(AgentMode::Manual.strategy(&AgentConfig::default()).is_none());
    }

    #[test]
    fn manual_mode_never_moves() {
        let grid = crate::tile_grid::TileGrid::classic();
        let mut agent = PathfindingAgent::default();
        let start = PixelPosition::new(450, 663);
        assert_eq!(agent.compute_next_move(start, &[], &grid, None), None);
        assert!(agent.visited().is_none());
    }
}
