//! Behavioral properties of the frontier simulator.
//!
//! These tests drive whole simulations through the public API: frontier
//! equivalence with a full-board rescan, classic still lifes, oscillators
//! and spaceships, determinism, and long runs on empty boards.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use std::collections::BTreeSet;

use life_board::{Board, Cell, CellState, Coordinate, Pattern, seed};
use life_engine::{Frontier, Simulator};

fn alive_set(simulator: &Simulator) -> BTreeSet<Coordinate> {
    simulator
        .board()
        .alive_cells()
        .map(Cell::coord)
        .collect()
}

fn coords(cells: &[(usize, usize)]) -> BTreeSet<Coordinate> {
    cells.iter().copied().map(Coordinate::from).collect()
}

fn with_pattern(height: usize, width: usize, name: &str, origin: (usize, usize)) -> Simulator {
    let pattern = Pattern::by_name(name).unwrap();
    Simulator::new(height, width, pattern.seed_at(Coordinate::from(origin))).unwrap()
}

/// Frontier must equal the rescan, and every member's cached count must
/// match a fresh count of the board it is about to be judged against.
fn assert_frontier_consistent(simulator: &Simulator) {
    let board = simulator.board();
    assert_eq!(simulator.frontier(), &Frontier::full_rescan(board));
    for coord in simulator.frontier().iter() {
        assert_eq!(
            board.cell_at(coord).unwrap().neighbor_count(),
            board.neighbor_count(coord),
            "stale cached count at {coord}"
        );
    }
}

#[test]
fn frontier_matches_full_rescan_after_every_tick() {
    let shapes = [(1, 1), (1, 9), (9, 1), (2, 2), (12, 17), (30, 30)];
    let probabilities = [0.2, 0.5, 0.8];
    for (height, width) in shapes {
        for probability in probabilities {
            for rng_seed in 0..6_u64 {
                let seed = seed::uniform_random(rng_seed, probability).unwrap();
                let mut simulator = Simulator::new(height, width, seed).unwrap();
                assert_frontier_consistent(&simulator);
                for _ in 0..60 {
                    simulator.tick();
                    assert_frontier_consistent(&simulator);
                }
            }
        }
    }
}

#[test]
fn frontier_matches_full_rescan_for_moving_patterns() {
    for name in ["glider", "toad", "beacon"] {
        let mut simulator = with_pattern(10, 10, name, (1, 1));
        for _ in 0..80 {
            simulator.tick();
            assert_frontier_consistent(&simulator);
        }
    }
}

#[test]
fn block_is_a_still_life() {
    let block = coords(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
    let mut simulator = with_pattern(4, 4, "block", (1, 1));
    assert_eq!(alive_set(&simulator), block);
    for _ in 0..50 {
        simulator.tick();
        assert_eq!(alive_set(&simulator), block);
    }
}

#[test]
fn blinker_has_period_two() {
    let horizontal = coords(&[(2, 1), (2, 2), (2, 3)]);
    let vertical = coords(&[(1, 2), (2, 2), (3, 2)]);
    let mut simulator = with_pattern(5, 5, "blinker", (2, 1));
    assert_eq!(alive_set(&simulator), horizontal);

    simulator.tick();
    assert_eq!(alive_set(&simulator), vertical);

    simulator.tick();
    assert_eq!(alive_set(&simulator), horizontal);

    for _ in 0..20 {
        simulator.tick();
    }
    assert_eq!(alive_set(&simulator), horizontal);
}

#[test]
fn toad_and_beacon_have_period_two() {
    for name in ["toad", "beacon"] {
        let mut simulator = with_pattern(8, 8, name, (2, 2));
        let initial = alive_set(&simulator);
        simulator.tick();
        assert_ne!(alive_set(&simulator), initial, "{name} should change");
        simulator.tick();
        assert_eq!(alive_set(&simulator), initial, "{name} should return");
    }
}

#[test]
fn glider_moves_diagonally() {
    let mut simulator = with_pattern(12, 12, "glider", (0, 0));
    let initial = alive_set(&simulator);
    for _ in 0..4 {
        simulator.tick();
    }
    let shifted: BTreeSet<Coordinate> = initial
        .iter()
        .map(|coord| coord.offset(1, 1).unwrap())
        .collect();
    assert_eq!(alive_set(&simulator), shifted);
}

#[test]
fn identical_seeds_evolve_identically() {
    let mut a = Simulator::new(25, 40, seed::uniform_random(99, 0.5).unwrap()).unwrap();
    let mut b = Simulator::new(25, 40, seed::uniform_random(99, 0.5).unwrap()).unwrap();
    for _ in 0..100 {
        a.tick();
        b.tick();
        assert_eq!(a.board(), b.board());
    }
}

#[test]
fn empty_board_stays_empty_for_a_thousand_ticks() {
    let mut simulator = Simulator::new(16, 16, seed::all_dead).unwrap();
    for _ in 0..1000 {
        simulator.tick();
    }
    assert!(simulator.board().cells().all(|cell| cell.state() == CellState::Dead));
    assert!(simulator.frontier().is_empty());
}

#[test]
fn frontier_matches_rescan_after_external_edits() {
    // Rebuilding from an edited board starts from a fresh scan.
    let mut board = Board::new(10, 10, seed::uniform_random(5, 0.4).unwrap()).unwrap();
    board.set_state(Coordinate::new(0, 0), CellState::Alive).unwrap();
    board.set_state(Coordinate::new(9, 9), CellState::Dead).unwrap();
    let mut simulator = Simulator::from_board(board);
    assert_frontier_consistent(&simulator);
    for _ in 0..30 {
        simulator.tick();
        assert_frontier_consistent(&simulator);
    }
}

#[test]
fn random_soup_population_stays_bounded() {
    let mut simulator = Simulator::new(20, 20, seed::uniform_random(3, 0.5).unwrap()).unwrap();
    let cells = simulator.board().len();
    for _ in 0..200 {
        simulator.tick();
        assert!(simulator.population() <= cells);
        assert!(simulator.frontier().len() <= cells);
        assert!(simulator.population() <= simulator.frontier().len());
    }
}
