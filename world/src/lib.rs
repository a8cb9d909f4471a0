#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative play session state for the maze game.

use std::time::Duration;

use maze_game_core::{
    Cell, Command, Direction, Event, GenerationError, GridSize, Maze, MoveRejection,
    SessionStatus,
};
use maze_game_system_generation::generate;
use maze_game_system_movement::check_move;

/// Number of cells along each edge of the default maze.
pub const DEFAULT_MAZE_SIZE: u32 = 40;

/// Represents the authoritative session state: one maze and one player.
#[derive(Debug)]
pub struct World {
    maze: Maze,
    seed: u64,
    player: Cell,
    elapsed: Duration,
    moves: u32,
    status: SessionStatus,
}

impl World {
    /// Creates a new session on a freshly generated maze.
    pub fn new(size: GridSize, seed: u64) -> Result<Self, GenerationError> {
        let maze = generate(size.width(), size.height(), seed)?;
        Ok(Self::from_maze(maze, seed))
    }

    fn from_maze(maze: Maze, seed: u64) -> Self {
        let player = maze.start();
        let status = if player == maze.goal() {
            SessionStatus::Completed
        } else {
            SessionStatus::Playing
        };

        Self {
            maze,
            seed,
            player,
            elapsed: Duration::ZERO,
            moves: 0,
            status,
        }
    }

    fn reset(&mut self, seed: u64, out_events: &mut Vec<Event>) {
        let size = self.maze.size();
        match generate(size.width(), size.height(), seed) {
            Ok(maze) => {
                *self = Self::from_maze(maze, seed);
                out_events.push(Event::MazeGenerated { size, seed });
            }
            Err(reason) => {
                tracing::warn!(seed, %reason, "reset failed, keeping current maze");
                out_events.push(Event::ResetRejected { seed, reason });
            }
        }
    }

    fn move_player(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        let from = self.player;
        let outcome = if self.status == SessionStatus::Completed {
            Err(MoveRejection::SessionFinished)
        } else {
            from.neighbor(direction)
                .ok_or(MoveRejection::OutOfBounds)
                .and_then(|to| check_move(&self.maze, from, to).map(|()| to))
        };

        let to = match outcome {
            Ok(to) => to,
            Err(reason) => {
                out_events.push(Event::MoveRejected {
                    from,
                    direction,
                    reason,
                });
                return;
            }
        };

        self.player = to;
        self.moves = self.moves.saturating_add(1);
        out_events.push(Event::PlayerMoved { from, to });

        if to == self.maze.goal() {
            self.status = SessionStatus::Completed;
            tracing::info!(
                moves = self.moves,
                elapsed = ?self.elapsed,
                "player reached the goal"
            );
            out_events.push(Event::GoalReached {
                elapsed: self.elapsed,
                moves: self.moves,
            });
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => {
            if world.status == SessionStatus::Playing {
                world.elapsed = world.elapsed.saturating_add(dt);
            }
            out_events.push(Event::TimeAdvanced { dt });
        }
        Command::MovePlayer { direction } => world.move_player(direction, out_events),
        Command::ResetMaze { seed } => world.reset(seed, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::World;
    use maze_game_core::{Cell, Direction, Maze, SessionStatus};
    use maze_game_system_movement::can_move;

    /// Provides read-only access to the current maze.
    #[must_use]
    pub fn maze(world: &World) -> &Maze {
        &world.maze
    }

    /// Seed the current maze was generated from.
    #[must_use]
    pub fn seed(world: &World) -> u64 {
        world.seed
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub fn player(world: &World) -> Cell {
        world.player
    }

    /// Cell the player must reach.
    #[must_use]
    pub fn goal(world: &World) -> Cell {
        world.maze.goal()
    }

    /// Time accumulated while the session was in progress.
    #[must_use]
    pub fn elapsed(world: &World) -> Duration {
        world.elapsed
    }

    /// Number of successful steps taken in the session.
    #[must_use]
    pub fn moves(world: &World) -> u32 {
        world.moves
    }

    /// Progress of the session.
    #[must_use]
    pub fn status(world: &World) -> SessionStatus {
        world.status
    }

    /// Reports whether a wall separates the two cells in the current maze.
    #[must_use]
    pub fn is_wall_between(world: &World, a: Cell, b: Cell) -> bool {
        world.maze.is_wall_between(a, b)
    }

    /// Reports whether the player could currently step in `direction`.
    #[must_use]
    pub fn can_step(world: &World, direction: Direction) -> bool {
        world.status == SessionStatus::Playing
            && world
                .player
                .neighbor(direction)
                .is_some_and(|to| can_move(&world.maze, world.player, to))
    }
}
