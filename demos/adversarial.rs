use maze_pathfinding::adversarial::{evaluate, simulate_opponents};
use maze_pathfinding::{AdversarialSolver, AlphaBeta, GridCell, Minimax, TileGrid};

// Plays a few turns of minimax and alpha-beta against four greedy ghosts on the arcade board. The
// ghosts move with the same rule the searches assume, so both solvers see the future exactly.

const TURNS: usize = 20;

fn play<A: AdversarialSolver>(solver: A) {
    let mut grid = TileGrid::classic();
    let mut player = GridCell::new(24, 14);
    let mut ghosts = vec![
        GridCell::new(11, 13),
        GridCell::new(14, 13),
        GridCell::new(14, 15),
        GridCell::new(15, 15),
    ];
    println!("{} (depth {})", solver.name(), solver.depth());
    for turn in 0..TURNS {
        player = solver.best_move(&grid, player, &ghosts);
        grid.consume(player);
        if ghosts.contains(&player) {
            println!("  caught on turn {}", turn);
            return;
        }
        ghosts = simulate_opponents(&ghosts, player, &grid).to_vec();
        println!(
            "  turn {:>2}: player {} score {}",
            turn,
            player,
            evaluate(player, &ghosts, &grid)
        );
        if ghosts.contains(&player) {
            println!("  caught on turn {}", turn);
            return;
        }
    }
}

fn main() {
    play(Minimax::default());
    play(AlphaBeta::default());
}
