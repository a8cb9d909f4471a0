#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Connectivity guard that checks, and if necessary repairs, the path between
//! the maze start and goal.
//!
//! A correctly carved spanning tree never needs repair. The guard turns the
//! "start and goal are connected" invariant into a checked postcondition of
//! generation instead of an assumption.

use std::collections::VecDeque;

use maze_game_core::{Cell, Direction, GenerationError, GridSize, WallSet};

/// Result of running the guard over a carved wall set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The goal was already reachable; nothing was changed.
    AlreadyConnected,
    /// A path had to be carved.
    Repaired {
        /// Number of walls removed by the repair walk.
        carved: usize,
    },
}

/// Guarantees that `goal` is reachable from `start`, carving a path if needed.
///
/// Fails with [`GenerationError::Unreachable`] when repair could not connect
/// the cells, for example because one of them lies outside the grid.
pub fn ensure_path(
    walls: &mut WallSet,
    start: Cell,
    goal: Cell,
) -> Result<GuardOutcome, GenerationError> {
    if has_path(walls, start, goal) {
        return Ok(GuardOutcome::AlreadyConnected);
    }

    tracing::warn!(%start, %goal, "goal unreachable after carving, repairing path");

    match carve_greedy_path(walls, start, goal) {
        Some(carved) if has_path(walls, start, goal) => {
            tracing::debug!(carved, "repair connected start and goal");
            Ok(GuardOutcome::Repaired { carved })
        }
        _ => Err(GenerationError::Unreachable { start, goal }),
    }
}

/// Breadth-first search over open passages from `start` to `goal`.
#[must_use]
pub fn has_path(walls: &WallSet, start: Cell, goal: Cell) -> bool {
    search(walls, start, goal).is_some()
}

/// Shortest sequence of cells leading from `start` to `goal`, both included.
#[must_use]
pub fn shortest_path(walls: &WallSet, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    let size = walls.size();
    let parents = search(walls, start, goal)?;

    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let index = size.index(current)?;
        current = parents[index]?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Runs the search and returns the parent of every discovered cell once the
/// goal is dequeued.
fn search(walls: &WallSet, start: Cell, goal: Cell) -> Option<Vec<Option<Cell>>> {
    let size = walls.size();
    let start_index = size.index(start)?;
    if !size.contains(goal) {
        return None;
    }

    let mut discovered = vec![false; size.cell_count()];
    let mut parents = vec![None; size.cell_count()];
    discovered[start_index] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return Some(parents);
        }

        for neighbor in size.neighbors(cell) {
            let Some(index) = size.index(neighbor) else {
                continue;
            };

            if discovered[index] || walls.has_wall(cell, neighbor) {
                continue;
            }

            discovered[index] = true;
            parents[index] = Some(cell);
            queue.push_back(neighbor);
        }
    }

    None
}

/// Greedily carves toward `goal`, backtracking out of dead ends.
///
/// Returns the number of walls removed once the goal is reached, or `None`
/// when the walk ran out of cells to backtrack to.
fn carve_greedy_path(walls: &mut WallSet, start: Cell, goal: Cell) -> Option<usize> {
    let size = walls.size();
    let start_index = size.index(start)?;
    if !size.contains(goal) {
        return None;
    }

    // Cells entered by the walk stay marked after backtracking so a dead end
    // is never explored twice.
    let mut entered = vec![false; size.cell_count()];
    entered[start_index] = true;

    let mut path = vec![start];
    let mut carved = 0;

    while let Some(&current) = path.last() {
        if current == goal {
            return Some(carved);
        }

        match next_step(size, &entered, current, goal) {
            Some(next) => {
                if walls.remove_wall(current, next) {
                    carved += 1;
                }
                if let Some(index) = size.index(next) {
                    entered[index] = true;
                }
                path.push(next);
            }
            None => {
                let _ = path.pop();
            }
        }
    }

    tracing::warn!(%start, %goal, "repair exhausted every cell without reaching the goal");
    None
}

/// Picks the next cell of the repair walk: the step that closes the
/// horizontal gap first and the vertical gap second, else any fresh neighbor.
fn next_step(size: GridSize, entered: &[bool], current: Cell, goal: Cell) -> Option<Cell> {
    let is_fresh = |cell: &Cell| size.index(*cell).is_some_and(|index| !entered[index]);

    preferred_direction(current, goal)
        .and_then(|direction| size.neighbor(current, direction))
        .filter(is_fresh)
        .or_else(|| size.neighbors(current).find(is_fresh))
}

fn preferred_direction(current: Cell, goal: Cell) -> Option<Direction> {
    if current.x() < goal.x() {
        Some(Direction::Right)
    } else if current.x() > goal.x() {
        Some(Direction::Left)
    } else if current.y() < goal.y() {
        Some(Direction::Down)
    } else if current.y() > goal.y() {
        Some(Direction::Up)
    } else {
        None
    }
}
