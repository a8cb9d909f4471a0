//! Canonical storage of blocked adjacencies and the finished maze.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Cell, Direction, GridSize};

/// Blocked adjacency between two grid-neighboring cells.
///
/// The smaller cell (by `x`, then `y`) is always stored first so that the
/// pairs `(a, b)` and `(b, a)` produce the same value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    first: Cell,
    second: Cell,
}

impl Wall {
    /// Creates the canonical wall separating `a` and `b`.
    #[must_use]
    pub fn between(a: Cell, b: Cell) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Lexicographically smaller cell of the pair.
    #[must_use]
    pub const fn first(&self) -> Cell {
        self.first
    }

    /// Lexicographically larger cell of the pair.
    #[must_use]
    pub const fn second(&self) -> Cell {
        self.second
    }
}

/// Set of currently blocked adjacent cell pairs.
///
/// Only adjacent pairs are ever stored. A new set starts with every pair
/// blocked; walls are only removed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallSet {
    size: GridSize,
    walls: BTreeSet<Wall>,
}

impl WallSet {
    /// Creates a fully walled set: the right and down pair of every cell
    /// that has one.
    #[must_use]
    pub fn full(size: GridSize) -> Self {
        let mut walls = BTreeSet::new();
        for cell in size.cells() {
            for direction in [Direction::Right, Direction::Down] {
                if let Some(neighbor) = size.neighbor(cell, direction) {
                    let _ = walls.insert(Wall::between(cell, neighbor));
                }
            }
        }

        Self { size, walls }
    }

    /// Dimensions of the grid the set was created for.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Reports whether the adjacent cells `a` and `b` are separated.
    ///
    /// Callers must only pass grid-adjacent cells.
    #[must_use]
    pub fn has_wall(&self, a: Cell, b: Cell) -> bool {
        debug_assert!(a.is_adjacent(b), "{a} and {b} are not adjacent");
        self.walls.contains(&Wall::between(a, b))
    }

    /// Opens the passage between `a` and `b`.
    ///
    /// Returns `false` when the passage was already open.
    pub fn remove_wall(&mut self, a: Cell, b: Cell) -> bool {
        debug_assert!(a.is_adjacent(b), "{a} and {b} are not adjacent");
        self.walls.remove(&Wall::between(a, b))
    }

    /// Number of walls still standing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Reports whether every passage is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Number of adjacent pairs that are open passages.
    #[must_use]
    pub fn open_passage_count(&self) -> usize {
        self.size.adjacent_pair_count() - self.walls.len()
    }

    /// Standing walls in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }
}

/// Finished maze ready to be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    walls: WallSet,
}

impl Maze {
    /// Wraps a carved wall set.
    #[must_use]
    pub const fn from_walls(walls: WallSet) -> Self {
        Self { walls }
    }

    /// Dimensions of the maze.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.walls.size()
    }

    /// Cell where the player starts.
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.walls.size().start()
    }

    /// Cell the player must reach.
    #[must_use]
    pub const fn goal(&self) -> Cell {
        self.walls.size().goal()
    }

    /// Wall set backing the maze.
    #[must_use]
    pub const fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Reports whether a wall separates `a` and `b`.
    ///
    /// Pairs that are not two adjacent in-bounds cells have no passage
    /// between them and therefore report a wall.
    #[must_use]
    pub fn is_wall_between(&self, a: Cell, b: Cell) -> bool {
        let size = self.size();
        if !size.contains(a) || !size.contains(b) || !a.is_adjacent(b) {
            return true;
        }

        self.walls.has_wall(a, b)
    }
}
