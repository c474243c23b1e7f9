use maze_pathfinding::{
    AgentConfig, AgentMode, PathfindingAgent, PixelPosition, TileGeometry, TileGrid,
};

// Lets every path-following mode eat the arcade board on its own, moving the player a few pixels
// per tick, and reports how many ticks each one needed.

const SPEED: i32 = 3;
const MAX_TICKS: usize = 100_000;

fn main() {
    let geometry = TileGeometry::default();
    for mode in AgentMode::ALL.into_iter().filter(|m| m.is_pathfinding()) {
        let mut grid = TileGrid::classic();
        let mut agent = PathfindingAgent::new(mode, AgentConfig::default());
        let mut player = PixelPosition::new(450, 663);
        let mut ticks = 0;
        let mut eaten = 0;
        while !grid.is_complete() && ticks < MAX_TICKS {
            ticks += 1;
            if let Some(direction) = agent.compute_next_move(player, &[], &grid, None) {
                let (d_row, d_col) = direction.offset();
                player.x += d_col * SPEED;
                player.y += d_row * SPEED;
            }
            if grid.consume(geometry.pixel_to_cell(player)).is_some() {
                eaten += 1;
            }
        }
        println!(
            "{:<22} ate {:>3} items in {:>6} ticks{}",
            mode.name(),
            eaten,
            ticks,
            if grid.is_complete() { "" } else { " (gave up)" }
        );
    }
}
