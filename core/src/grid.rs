//! Coordinate space and four-directional adjacency of the maze grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a single grid cell expressed as column (`x`) and row (`y`).
///
/// Ordering compares `x` first and then `y`; walls rely on this ordering to
/// store each adjacent pair under a single canonical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    x: u32,
    y: u32,
}

impl Cell {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Cell reached by taking one step in `direction`.
    ///
    /// No grid bounds are consulted. `None` is returned only when the step
    /// would leave the non-negative coordinate space.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Cell::new(x, y))
    }

    /// Computes the Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan_distance(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Reports whether the cells share an edge.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal step directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing column indices.
    Right,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
}

impl Direction {
    /// Every direction in the canonical iteration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector of the direction as `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Dimensions of a rectangular maze grid measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Creates a new grid size descriptor.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the grid contains no cells at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of unordered adjacent cell pairs, `2·W·H − W − H`.
    #[must_use]
    pub fn adjacent_pair_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        let width = self.width as usize;
        let height = self.height as usize;
        (width - 1) * height + width * (height - 1)
    }

    /// Reports whether the cell lies within `[0, width) × [0, height)`.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x() < self.width && cell.y() < self.height
    }

    /// In-bounds neighbor of `cell` in `direction`, if any.
    #[must_use]
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.neighbor(direction)
            .filter(|neighbor| self.contains(*neighbor))
    }

    /// In-bounds neighbors of `cell` in [`Direction::ALL`] order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let size = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| size.neighbor(cell, direction))
    }

    /// Row-major dense index of an in-bounds cell.
    #[must_use]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }

        let row = usize::try_from(cell.y()).ok()?;
        let column = usize::try_from(cell.x()).ok()?;
        let width = usize::try_from(self.width).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    /// Upper-left corner where the player starts.
    #[must_use]
    pub const fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Lower-right corner the player must reach.
    #[must_use]
    pub const fn goal(&self) -> Cell {
        Cell::new(
            self.width.saturating_sub(1),
            self.height.saturating_sub(1),
        )
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_does_not_underflow() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.neighbor(Direction::Up), None);
        assert_eq!(origin.neighbor(Direction::Left), None);
        assert_eq!(origin.neighbor(Direction::Right), Some(Cell::new(1, 0)));
        assert_eq!(origin.neighbor(Direction::Down), Some(Cell::new(0, 1)));
    }

    #[test]
    fn neighbor_steps_by_direction_delta() {
        let cell = Cell::new(4, 7);
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let next = cell.neighbor(direction).expect("interior cell");
            assert_eq!(i64::from(next.x()) - 4, i64::from(dx));
            assert_eq!(i64::from(next.y()) - 7, i64::from(dy));
        }
        assert_eq!(Cell::new(u32::MAX, 0).neighbor(Direction::Right), None);
    }

    #[test]
    fn neighbor_ignores_grid_bounds() {
        let size = GridSize::new(2, 2);
        let corner = Cell::new(1, 1);
        let outside = corner.neighbor(Direction::Right).expect("no overflow");

        assert_eq!(outside, Cell::new(2, 1));
        assert!(!size.contains(outside));
        assert_eq!(size.neighbor(corner, Direction::Right), None);
    }

    #[test]
    fn neighbors_follow_direction_order() {
        let size = GridSize::new(3, 3);
        let neighbors: Vec<_> = size.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(1, 2),
                Cell::new(0, 1),
            ]
        );
    }

    #[test]
    fn ordering_compares_x_before_y() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn adjacent_pair_count_matches_formula() {
        for (width, height) in [(1, 1), (1, 5), (2, 2), (4, 3), (40, 40)] {
            let size = GridSize::new(width, height);
            let expected = 2 * width * height - width - height;
            assert_eq!(size.adjacent_pair_count(), expected as usize);
        }
        assert_eq!(GridSize::new(0, 7).adjacent_pair_count(), 0);
    }

    #[test]
    fn index_is_row_major_and_bounded() {
        let size = GridSize::new(4, 3);
        assert_eq!(size.index(Cell::new(0, 0)), Some(0));
        assert_eq!(size.index(Cell::new(3, 0)), Some(3));
        assert_eq!(size.index(Cell::new(1, 2)), Some(9));
        assert_eq!(size.index(Cell::new(4, 0)), None);
        assert_eq!(size.cells().count(), size.cell_count());
    }

    #[test]
    fn goal_is_opposite_corner() {
        let size = GridSize::new(5, 3);
        assert_eq!(size.start(), Cell::new(0, 0));
        assert_eq!(size.goal(), Cell::new(4, 2));
    }
}
