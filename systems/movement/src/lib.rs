#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Movement validator consulted once per player step attempt.

use maze_game_core::{Cell, Maze, MoveRejection};

/// Decides whether a single step from `from` to `to` is legal.
///
/// Both cells must lie inside the maze. Orthogonal steps are legal when no
/// wall separates the cells. Diagonal steps are legal only when both L-shaped
/// detours around the corner are fully open, so a diagonal never cuts past a
/// wall. The game itself only issues orthogonal steps.
pub fn check_move(maze: &Maze, from: Cell, to: Cell) -> Result<(), MoveRejection> {
    let size = maze.size();
    if !size.contains(from) || !size.contains(to) {
        return Err(MoveRejection::OutOfBounds);
    }

    let walls = maze.walls();
    let open = match (from.x().abs_diff(to.x()), from.y().abs_diff(to.y())) {
        (1, 0) | (0, 1) => !walls.has_wall(from, to),
        (1, 1) => {
            let horizontal_first = Cell::new(to.x(), from.y());
            let vertical_first = Cell::new(from.x(), to.y());
            [
                (from, horizontal_first),
                (horizontal_first, to),
                (from, vertical_first),
                (vertical_first, to),
            ]
            .into_iter()
            .all(|(a, b)| !walls.has_wall(a, b))
        }
        _ => return Err(MoveRejection::NotAdjacent),
    };

    if open {
        Ok(())
    } else {
        Err(MoveRejection::Blocked)
    }
}

/// Boolean form of [`check_move`].
#[must_use]
pub fn can_move(maze: &Maze, from: Cell, to: Cell) -> bool {
    check_move(maze, from, to).is_ok()
}
