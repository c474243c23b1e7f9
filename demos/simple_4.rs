use maze_pathfinding::solver::{
    astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, dijkstra::DijkstraSolver, GridSolver,
};
use maze_pathfinding::{GridCell, TileGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn print_path<S: GridSolver>(solver: S, grid: &TileGrid, start: GridCell, end: GridCell) {
    let result = solver.search(grid, start, end);
    println!(
        "{}: {} steps, {} cells visited",
        solver.name(),
        result.len(),
        result.visited.len()
    );
    for p in result.path {
        println!("  {}", p);
    }
}

fn main() {
    let grid = TileGrid::from_rows(&["   ", " # ", "   "]).unwrap();
    println!("{}", grid);
    let start = GridCell::new(0, 0);
    let end = GridCell::new(2, 2);
    print_path(BfsSolver, &grid, start, end);
    print_path(DfsSolver::default(), &grid, start, end);
    print_path(DijkstraSolver, &grid, start, end);
    print_path(AstarSolver::new(), &grid, start, end);
}
