use std::collections::VecDeque;

use maze_game_core::{Cell, GridSize, Wall, WallSet};
use maze_game_system_builder::{carve, CarveSummary};
use rand::{rngs::mock::StepRng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn carved(width: u32, height: u32, seed: u64) -> (WallSet, CarveSummary) {
    let mut walls = WallSet::full(GridSize::new(width, height));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let summary = carve(&mut walls, &mut rng);
    (walls, summary)
}

fn reachable_cells(walls: &WallSet) -> usize {
    let size = walls.size();
    let mut seen = vec![false; size.cell_count()];
    let mut queue = VecDeque::from([size.start()]);
    seen[0] = true;
    let mut count = 0;

    while let Some(cell) = queue.pop_front() {
        count += 1;
        for neighbor in size.neighbors(cell) {
            let index = size.index(neighbor).expect("in bounds");
            if !seen[index] && !walls.has_wall(cell, neighbor) {
                seen[index] = true;
                queue.push_back(neighbor);
            }
        }
    }

    count
}

#[test]
fn carving_produces_a_spanning_tree() {
    for (width, height) in [(1, 1), (1, 7), (7, 1), (2, 2), (5, 3), (12, 9), (40, 40)] {
        for seed in [0, 1, 0x5eed, u64::MAX] {
            let (walls, summary) = carved(width, height, seed);
            let cell_count = (width * height) as usize;

            assert_eq!(summary.visited_cells, cell_count);
            assert_eq!(summary.carved_passages, cell_count - 1);
            assert_eq!(
                walls.open_passage_count(),
                summary.visited_cells - 1,
                "open passages must equal visited cells minus one for {width}x{height} seed {seed}",
            );
            assert_eq!(
                reachable_cells(&walls),
                cell_count,
                "every cell must be reachable in {width}x{height} seed {seed}",
            );
        }
    }
}

#[test]
fn identical_seeds_produce_identical_walls() {
    let (first, _) = carved(16, 11, 0xdead_beef);
    let (second, _) = carved(16, 11, 0xdead_beef);
    assert_eq!(first, second);
}

#[test]
fn different_seeds_produce_different_walls() {
    let (first, _) = carved(16, 16, 1);
    let (second, _) = carved(16, 16, 2);
    assert_ne!(first, second, "distinct seeds should shape distinct mazes");
}

#[test]
fn corridor_is_fully_opened() {
    let (walls, _) = carved(6, 1, 42);
    assert!(walls.is_empty());
}

#[test]
fn two_by_two_with_fixed_draws_keeps_recorded_wall() {
    let mut walls = WallSet::full(GridSize::new(2, 2));
    let summary = carve(&mut walls, &mut StepRng::new(0, 0));

    assert_eq!(summary.carved_passages, 3);
    assert_eq!(
        walls.iter().copied().collect::<Vec<_>>(),
        vec![Wall::between(Cell::new(0, 1), Cell::new(1, 1))],
        "always drawing the first candidate leaves only the bottom wall",
    );
}
