//! # maze_pathfinding
//!
//! Decision making for a maze-chase player on a 4-connected tile grid. Offers
//! [breadth-first](solver::bfs), depth-limited [depth-first](solver::dfs),
//! [uniform cost](solver::dijkstra) and [A*](solver::astar) search between grid cells, a shallow
//! [minimax](adversarial::minimax) / [alpha-beta](adversarial::alphabeta) search against greedily
//! chasing opponents, and a [PathfindingAgent] turning either into one direction per game tick.
//!
//! The grid is seen only through [GridQuery], so any board representation can be plugged in;
//! [TileGrid] is a ready-made one that also tracks
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)).
pub mod adversarial;
pub mod agent;
pub mod coords;
pub mod distance;
pub mod error;
pub mod grid;
pub mod layout;
mod search_context;
pub mod solver;
pub mod tile_grid;

pub use adversarial::{AdversarialSolver, AlphaBeta, Minimax, Score};
pub use agent::{AgentConfig, AgentMode, NextMoveStrategy, PathfindingAgent};
pub use coords::{Direction, PixelPosition, TileGeometry};
pub use distance::{euclidean, euclidean_floor, manhattan};
pub use error::{ConfigError, ParseModeError, TileGridError};
pub use grid::{walkable_neighbours, GridCell, GridQuery};
pub use solver::{GridSolver, SearchResult, VisitedSet};
pub use tile_grid::{Tile, TileGrid};

/// Depth limit of the depth-first search, counted in path cells.
pub const DEFAULT_DFS_DEPTH_LIMIT: usize = 100;
/// Plies searched by [Minimax].
pub const DEFAULT_MINIMAX_DEPTH: i32 = 3;
/// Plies searched by [AlphaBeta]; pruning buys one extra ply.
pub const DEFAULT_ALPHABETA_DEPTH: i32 = 4;
