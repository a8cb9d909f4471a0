use maze_game_core::{Cell, GenerationError, GridSize, WallSet};
use maze_game_system_builder::carve;
use maze_game_system_connectivity::{ensure_path, has_path, shortest_path, GuardOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn carved(width: u32, height: u32, seed: u64) -> WallSet {
    let mut walls = WallSet::full(GridSize::new(width, height));
    let _ = carve(&mut walls, &mut ChaCha8Rng::seed_from_u64(seed));
    walls
}

#[test]
fn fully_walled_grid_has_no_path() {
    let walls = WallSet::full(GridSize::new(2, 2));
    assert!(!has_path(&walls, Cell::new(0, 0), Cell::new(1, 1)));
}

#[test]
fn single_cell_is_its_own_goal() {
    let walls = WallSet::full(GridSize::new(1, 1));
    let cell = Cell::new(0, 0);
    assert!(has_path(&walls, cell, cell));
    assert_eq!(shortest_path(&walls, cell, cell), Some(vec![cell]));
}

#[test]
fn carved_maze_needs_no_repair() {
    for seed in 0..16 {
        let mut walls = carved(9, 7, seed);
        let before = walls.clone();
        let size = walls.size();

        let outcome = ensure_path(&mut walls, size.start(), size.goal());

        assert_eq!(outcome, Ok(GuardOutcome::AlreadyConnected));
        assert_eq!(walls, before, "guard must not touch a connected maze");
    }
}

#[test]
fn repair_carves_greedy_path_through_walled_grid() {
    let size = GridSize::new(5, 4);
    let mut walls = WallSet::full(size);

    let outcome = ensure_path(&mut walls, size.start(), size.goal());

    assert_eq!(outcome, Ok(GuardOutcome::Repaired { carved: 7 }));
    assert!(has_path(&walls, size.start(), size.goal()));

    let path = shortest_path(&walls, size.start(), size.goal()).expect("path after repair");
    let expected: Vec<_> = (0..5)
        .map(|x| Cell::new(x, 0))
        .chain((1..4).map(|y| Cell::new(4, y)))
        .collect();
    assert_eq!(path, expected, "repair closes the horizontal gap first");
}

#[test]
fn repair_only_counts_walls_it_removed() {
    let size = GridSize::new(4, 2);
    let mut walls = WallSet::full(size);
    let _ = walls.remove_wall(Cell::new(0, 0), Cell::new(1, 0));

    let outcome = ensure_path(&mut walls, size.start(), size.goal());

    assert_eq!(outcome, Ok(GuardOutcome::Repaired { carved: 3 }));
}

#[test]
fn unreachable_goal_is_reported() {
    let size = GridSize::new(3, 3);
    let mut walls = WallSet::full(size);
    let start = Cell::new(0, 0);
    let goal = Cell::new(5, 5);

    assert_eq!(
        ensure_path(&mut walls, start, goal),
        Err(GenerationError::Unreachable { start, goal })
    );
    assert_eq!(walls, WallSet::full(size), "failed repair leaves walls intact");
}

#[test]
fn shortest_path_follows_open_passages() {
    let walls = carved(12, 12, 0x00c0_ffee);
    let size = walls.size();
    let path = shortest_path(&walls, size.start(), size.goal()).expect("connected");

    assert_eq!(path.first(), Some(&size.start()));
    assert_eq!(path.last(), Some(&size.goal()));
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]));
        assert!(!walls.has_wall(pair[0], pair[1]));
    }
}
