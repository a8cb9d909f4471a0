#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeded maze generation pipeline.
//!
//! Generation is a pure function of the dimensions and the seed: a fully
//! walled set is carved into a spanning tree and then handed to the
//! connectivity guard, which certifies that the goal is reachable.

use maze_game_core::{GenerationError, GridSize, Maze, WallSet};
use maze_game_system_builder::carve;
use maze_game_system_connectivity::{ensure_path, GuardOutcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a `width` × `height` maze from `seed`.
///
/// Identical arguments always produce identical mazes.
pub fn generate(width: u32, height: u32, seed: u64) -> Result<Maze, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let maze = generate_with_rng(GridSize::new(width, height), &mut rng)?;
    tracing::info!(width, height, seed, walls = maze.walls().len(), "generated maze");
    Ok(maze)
}

/// Generates a maze using the provided random source.
pub fn generate_with_rng<R>(size: GridSize, rng: &mut R) -> Result<Maze, GenerationError>
where
    R: Rng + ?Sized,
{
    if size.is_empty() {
        return Err(GenerationError::EmptyGrid {
            width: size.width(),
            height: size.height(),
        });
    }

    let mut walls = WallSet::full(size);
    let summary = carve(&mut walls, rng);
    if summary.visited_cells != size.cell_count() {
        tracing::warn!(
            visited = summary.visited_cells,
            cells = size.cell_count(),
            "spanning tree did not reach every cell"
        );
    }

    if let GuardOutcome::Repaired { carved } = ensure_path(&mut walls, size.start(), size.goal())? {
        tracing::warn!(carved, "connectivity guard repaired the maze");
    }

    Ok(Maze::from_walls(walls))
}
