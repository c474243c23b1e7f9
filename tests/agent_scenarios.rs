//! Drives the agent tick by tick the way a game loop would: convert, ask for a direction, move the
//! player a few pixels and eat whatever it stands on.
use maze_pathfinding::{
    solver::{astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, GridSolver},
    AgentConfig, AgentMode, Direction, GridCell, GridQuery, PathfindingAgent, PixelPosition,
    TileGeometry, TileGrid,
};

const SPEED: i32 = 3;

fn advance(pos: PixelPosition, direction: Direction) -> PixelPosition {
    let (d_row, d_col) = direction.offset();
    PixelPosition::new(pos.x + d_col * SPEED, pos.y + d_row * SPEED)
}

fn corridor() -> TileGrid {
    TileGrid::from_rows(&["#######", "#  . .#", "#######"]).unwrap()
}

/// Runs `mode` from `start` until every item is eaten, returning the final cell and the number
/// of ticks used. Fails if the budget runs out.
fn eat_everything(
    mode: AgentMode,
    grid: &mut TileGrid,
    start: PixelPosition,
    budget: usize,
) -> (GridCell, usize) {
    let geometry = TileGeometry::default();
    let mut agent = PathfindingAgent::new(mode, AgentConfig::default());
    let mut player = start;
    let mut ticks = 0;
    while !grid.is_complete() {
        ticks += 1;
        assert!(
            ticks <= budget,
            "{mode} got stuck at {player}, {} items left",
            grid.list_goal_cells().len()
        );
        if let Some(direction) = agent.compute_next_move(player, &[], &*grid, None) {
            player = advance(player, direction);
            assert!(grid.is_walkable_cell(geometry.pixel_to_cell(player)));
        }
        grid.consume(geometry.pixel_to_cell(player));
    }
    (geometry.pixel_to_cell(player), ticks)
}

#[test]
fn path_modes_clear_a_corridor() {
    let start = TileGeometry::default().cell_to_top_left(GridCell::new(1, 1));
    for mode in [AgentMode::Bfs, AgentMode::Dfs, AgentMode::Ucs, AgentMode::AStar] {
        let (end, _) = eat_everything(mode, &mut corridor(), start, 200);
        assert_eq!(end, GridCell::new(1, 5));
    }
}

#[test]
fn path_modes_turn_corners() {
    // |#####|
    // |#S  #|
    // |### #|
    // |###.#|
    // |#####|
    let start = TileGeometry::default().cell_to_top_left(GridCell::new(1, 1));
    for mode in [AgentMode::Bfs, AgentMode::Dfs, AgentMode::Ucs, AgentMode::AStar] {
        let mut grid =
            TileGrid::from_rows(&["#####", "#   #", "### #", "###.#", "#####"]).unwrap();
        let (end, _) = eat_everything(mode, &mut grid, start, 200);
        assert_eq!(end, GridCell::new(3, 3));
    }
}

#[test]
fn path_modes_clear_the_classic_board() {
    let start = PixelPosition::new(450, 663);
    for mode in [AgentMode::Bfs, AgentMode::Ucs, AgentMode::AStar] {
        let mut grid = TileGrid::classic();
        let items = grid.list_goal_cells().len();
        let (_, ticks) = eat_everything(mode, &mut grid, start, 60_000);
        // Every item costs at least one tile of travel.
        assert!(ticks >= items, "{mode} finished in {ticks} ticks");
    }
}

#[test]
fn mode_switch_drops_the_path() {
    let mut grid = TileGrid::classic();
    let geometry = TileGeometry::default();
    let start = PixelPosition::new(450, 663);
    grid.consume(geometry.pixel_to_cell(start));
    let mut agent = PathfindingAgent::new(AgentMode::Bfs, AgentConfig::default());

    // Both side neighbours hold a dot, the left one comes first in scan order.
    assert_eq!(
        agent.compute_next_move(start, &[], &grid, None),
        Some(Direction::Left)
    );
    assert_eq!(agent.current_path(), &[GridCell::new(24, 14)]);
    assert!(agent.visited().is_some());

    agent.set_mode(AgentMode::Bfs);
    assert!(agent.current_path().is_empty());
    assert_eq!(agent.path_index(), 0);
    assert!(agent.visited().is_none());

    agent.set_mode(AgentMode::Manual);
    assert_eq!(agent.compute_next_move(start, &[], &grid, None), None);

    agent.set_mode(AgentMode::AStar);
    assert!(agent.compute_next_move(start, &[], &grid, None).is_some());
    agent.clear_path();
    assert!(agent.current_path().is_empty());
}

#[test]
fn explicit_goal_overrides_nearest_dot() {
    let grid = corridor();
    let geometry = TileGeometry::default();
    let player = geometry.cell_to_top_left(GridCell::new(1, 3));
    let mut agent = PathfindingAgent::new(AgentMode::Ucs, AgentConfig::default());

    assert_eq!(
        agent.nearest_goal(GridCell::new(1, 3), &grid),
        Some(GridCell::new(1, 3))
    );
    let direction = agent.compute_next_move(player, &[], &grid, Some(GridCell::new(1, 1)));
    assert_eq!(direction, Some(Direction::Left));
    assert_eq!(agent.current_path(), &[GridCell::new(1, 2), GridCell::new(1, 1)]);
}

#[test]
fn walled_off_goal_yields_no_move() {
    let grid = TileGrid::from_rows(&["     ", " ### ", " #.# ", " ### "]).unwrap();
    let geometry = TileGeometry::default();
    let player = geometry.cell_to_top_left(GridCell::new(0, 0));
    let mut agent = PathfindingAgent::new(AgentMode::AStar, AgentConfig::default());
    assert_eq!(agent.compute_next_move(player, &[], &grid, None), None);
    assert!(agent.current_path().is_empty());
    // Every cell outside the box got explored before giving up.
    assert_eq!(
        agent.visited().map(|v| v.len()),
        Some(grid.component_size(GridCell::new(0, 0)))
    );
}

#[test]
fn adversarial_modes_flee_the_ghost() {
    let grid = TileGrid::from_rows(&["#########", "#       #", "#########"]).unwrap();
    let geometry = TileGeometry::default();
    let player = geometry.cell_to_top_left(GridCell::new(1, 4));
    let ghost = geometry.cell_to_top_left(GridCell::new(1, 2));
    for mode in [AgentMode::Minimax, AgentMode::AlphaBeta] {
        let mut agent = PathfindingAgent::new(mode, AgentConfig::default());
        assert_eq!(
            agent.compute_next_move(player, &[ghost], &grid, None),
            Some(Direction::Right),
            "{mode}"
        );
        assert!(agent.current_path().is_empty());
    }
}

#[test]
fn classic_cells_survive_pixel_round_trip() {
    let grid = TileGrid::classic();
    let geometry = TileGeometry::default();
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            if grid.is_walkable(row, col) {
                let cell = GridCell::new(row, col);
                assert_eq!(geometry.pixel_to_cell(geometry.cell_to_top_left(cell)), cell);
            }
        }
    }
}

#[test]
fn open_five_by_five() {
    let grid = TileGrid::from_rows(&["     "; 5]).unwrap();
    let start = GridCell::new(0, 0);
    let goal = GridCell::new(4, 4);

    let bfs = BfsSolver.search(&grid, start, goal);
    let dfs = DfsSolver::default().search(&grid, start, goal);
    let astar = AstarSolver::new().search(&grid, start, goal);
    assert_eq!(bfs.len(), 8);
    assert_eq!(astar.len(), 8);
    assert!(dfs.len() >= 8);
    for result in [&bfs, &dfs, &astar] {
        assert_eq!(result.path.last(), Some(&goal));
        assert!(result.is_connected_from(start));
    }
}
