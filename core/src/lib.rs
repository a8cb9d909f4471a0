#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the maze game engine.
//!
//! This crate defines the grid and wall model together with the message
//! surface that connects adapters to the authoritative session world.
//! Adapters submit [`Command`] values describing desired changes, the world
//! executes them via its `apply` entry point, and reports the outcome as
//! [`Event`] values. Systems operate on immutable [`Maze`] snapshots.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod grid;
mod walls;

pub use grid::{Cell, Direction, GridSize};
pub use walls::{Maze, Wall, WallSet};

/// Commands that express all permissible session mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Advances the session clock by the provided delta time.
    Tick {
        /// Duration of real time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that the player take a single step.
    MovePlayer {
        /// Direction of travel for the attempted step.
        direction: Direction,
    },
    /// Discards the current maze and generates a new one.
    ResetMaze {
        /// Seed driving the new maze's layout.
        seed: u64,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the session clock advanced.
    TimeAdvanced {
        /// Duration of time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: Cell,
        /// Cell the player occupies after moving.
        to: Cell,
    },
    /// Reports that a movement request was refused.
    MoveRejected {
        /// Cell the player occupies.
        from: Cell,
        /// Direction of the refused step.
        direction: Direction,
        /// Specific reason the step was refused.
        reason: MoveRejection,
    },
    /// Announces that the player arrived at the goal.
    GoalReached {
        /// Time spent in the session before arriving.
        elapsed: Duration,
        /// Number of successful steps taken.
        moves: u32,
    },
    /// Confirms that a fresh maze replaced the previous one.
    MazeGenerated {
        /// Dimensions of the new maze.
        size: GridSize,
        /// Seed the maze was generated from.
        seed: u64,
    },
    /// Reports that a reset could not produce a maze; the old one is kept.
    ResetRejected {
        /// Seed provided in the reset request.
        seed: u64,
        /// Specific reason generation failed.
        reason: GenerationError,
    },
}

/// Progress of the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// The player is still looking for the goal.
    Playing,
    /// The player reached the goal; moves are no longer accepted.
    Completed,
}

/// Reasons a step may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// One of the cells lies outside the grid.
    OutOfBounds,
    /// The cells are not one orthogonal or diagonal step apart.
    NotAdjacent,
    /// A wall blocks the step.
    Blocked,
    /// The session already finished.
    SessionFinished,
}

/// Failures that can occur while generating a maze.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum GenerationError {
    /// At least one dimension was zero.
    #[error("maze dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
    /// The goal stayed unreachable even after repair.
    #[error("could not connect start {start} to goal {goal}")]
    Unreachable {
        /// Cell the path starts from.
        start: Cell,
        /// Cell the path must reach.
        goal: Cell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_messages_name_the_cells() {
        let error = GenerationError::Unreachable {
            start: Cell::new(0, 0),
            goal: Cell::new(3, 2),
        };
        assert_eq!(
            error.to_string(),
            "could not connect start (0, 0) to goal (3, 2)"
        );

        let error = GenerationError::EmptyGrid {
            width: 0,
            height: 4,
        };
        assert_eq!(
            error.to_string(),
            "maze dimensions must be non-zero, got 0x4"
        );
    }

    #[test]
    fn move_rejection_round_trips_through_bincode() {
        let bytes = bincode::serialize(&MoveRejection::Blocked).expect("serialize");
        let restored: MoveRejection = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, MoveRejection::Blocked);
    }
}
