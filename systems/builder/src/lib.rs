#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Randomized Prim's spanning-tree growth that carves a maze out of a fully
//! walled grid.
//!
//! Starting from the upper-left cell, the builder repeatedly draws a cell
//! uniformly from the frontier, connects it to a uniformly chosen neighbor
//! already in the maze and grows the frontier around it. Both draws must be
//! uniform for the maze shape to be unbiased.

use maze_game_core::{Cell, GridSize, WallSet};
use rand::Rng;

/// Outcome of a single carving pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarveSummary {
    /// Number of cells incorporated into the spanning tree.
    pub visited_cells: usize,
    /// Number of walls removed while growing the tree.
    pub carved_passages: usize,
}

/// Carves a spanning tree into `walls` using randomized Prim's algorithm.
///
/// The set is expected to be fully walled. Identical random sources produce
/// identical results.
pub fn carve<R>(walls: &mut WallSet, rng: &mut R) -> CarveSummary
where
    R: Rng + ?Sized,
{
    let size = walls.size();
    if size.is_empty() {
        return CarveSummary::default();
    }

    let mut growth = Growth::new(size);
    let start = size.start();
    growth.visit(start);
    growth.extend_frontier(start);

    let mut carved_passages = 0;
    let mut candidates: Vec<Cell> = Vec::with_capacity(4);

    while let Some(cell) = growth.draw(rng) {
        candidates.clear();
        candidates.extend(
            size.neighbors(cell)
                .filter(|neighbor| growth.is_visited(*neighbor)),
        );

        if !candidates.is_empty() {
            let neighbor = candidates[rng.gen_range(0..candidates.len())];
            if walls.remove_wall(cell, neighbor) {
                carved_passages += 1;
            }
        }

        growth.visit(cell);
        growth.extend_frontier(cell);
    }

    let summary = CarveSummary {
        visited_cells: growth.visited_count,
        carved_passages,
    };
    tracing::debug!(
        size = %size,
        visited = summary.visited_cells,
        carved = summary.carved_passages,
        "carved spanning tree"
    );
    summary
}

/// Transient visited and frontier bookkeeping for one carving pass.
#[derive(Debug)]
struct Growth {
    size: GridSize,
    visited: Vec<bool>,
    visited_count: usize,
    in_frontier: Vec<bool>,
    frontier: Vec<Cell>,
}

impl Growth {
    fn new(size: GridSize) -> Self {
        let cell_count = size.cell_count();
        Self {
            size,
            visited: vec![false; cell_count],
            visited_count: 0,
            in_frontier: vec![false; cell_count],
            frontier: Vec::new(),
        }
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.size
            .index(cell)
            .is_some_and(|index| self.visited[index])
    }

    fn visit(&mut self, cell: Cell) {
        if let Some(index) = self.size.index(cell) {
            if !self.visited[index] {
                self.visited[index] = true;
                self.visited_count += 1;
            }
        }
    }

    fn extend_frontier(&mut self, cell: Cell) {
        for neighbor in self.size.neighbors(cell) {
            let Some(index) = self.size.index(neighbor) else {
                continue;
            };

            if self.visited[index] || self.in_frontier[index] {
                continue;
            }

            self.in_frontier[index] = true;
            self.frontier.push(neighbor);
        }
    }

    /// Removes a uniformly drawn frontier cell, swapping the last entry into
    /// its slot.
    fn draw<R>(&mut self, rng: &mut R) -> Option<Cell>
    where
        R: Rng + ?Sized,
    {
        if self.frontier.is_empty() {
            return None;
        }

        let position = rng.gen_range(0..self.frontier.len());
        let cell = self.frontier.swap_remove(position);
        if let Some(index) = self.size.index(cell) {
            self.in_frontier[index] = false;
        }
        Some(cell)
    }
}
