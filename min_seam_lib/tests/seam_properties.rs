mod common;

use common::{assert_connected, exhaustive_minimum_cost, grid_strategy, wide_grid_strategy};
use min_seam_lib::dp::{dp_seam, minimum_seam_cost};
use min_seam_lib::{
    find_minimum_seam, find_minimum_seam_with, seam_cost, BoundaryEdges, Distance, EnergyGrid,
    SeamError, SeamOptions,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn seam_has_one_connected_column_per_row(rows in grid_strategy(1..=12, 1..=12, 256)) {
        let grid = EnergyGrid::from_rows(&rows).unwrap();
        let seam = find_minimum_seam(&grid).unwrap();
        prop_assert_eq!(seam.len(), grid.rows());
        assert_connected(seam.columns(), grid.cols());
    }

    #[test]
    fn cost_matches_dynamic_programming(rows in grid_strategy(1..=10, 1..=10, 1000)) {
        let grid = EnergyGrid::from_rows(&rows).unwrap();
        let seam = find_minimum_seam(&grid).unwrap();
        prop_assert_eq!(seam.cost(), minimum_seam_cost(&grid).unwrap());
        prop_assert_eq!(seam_cost(&grid, seam.columns()).unwrap(), seam.cost());
        prop_assert_eq!(seam_cost(&grid, &dp_seam(&grid).unwrap()).unwrap(), seam.cost());
    }

    #[test]
    fn full_range_energies_match_dynamic_programming(rows in wide_grid_strategy(1..=8, 1..=6)) {
        let grid = EnergyGrid::from_rows(&rows).unwrap();
        let seam = find_minimum_seam(&grid).unwrap();
        prop_assert_eq!(seam.len(), grid.rows());
        assert_connected(seam.columns(), grid.cols());
        prop_assert_eq!(seam.cost(), minimum_seam_cost(&grid).unwrap());
        prop_assert_eq!(seam_cost(&grid, seam.columns()).unwrap(), seam.cost());
    }

    #[test]
    fn cost_matches_exhaustive_search(rows in grid_strategy(1..=6, 1..=5, 20)) {
        let grid = EnergyGrid::from_rows(&rows).unwrap();
        let seam = find_minimum_seam(&grid).unwrap();
        prop_assert_eq!(seam.cost(), exhaustive_minimum_cost(&grid));
    }

    #[test]
    fn repeated_runs_are_identical(rows in grid_strategy(1..=8, 1..=8, 16)) {
        let grid = EnergyGrid::from_rows(&rows).unwrap();
        let first = find_minimum_seam(&grid).unwrap();
        let second = find_minimum_seam(&grid).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn boundary_modes_find_the_same_seam(rows in grid_strategy(1..=8, 1..=8, 64)) {
        let grid = EnergyGrid::from_rows(&rows).unwrap();
        let clamped = find_minimum_seam(&grid).unwrap();
        let distinct = find_minimum_seam_with(
            &grid,
            SeamOptions { boundary: BoundaryEdges::Distinct },
        )
        .unwrap();
        prop_assert_eq!(clamped, distinct);
    }

    #[test]
    fn single_column_grids_give_zero_seams(energies in prop::collection::vec(0u32..500, 1..20)) {
        let rows: Vec<Vec<u32>> = energies.into_iter().map(|e| vec![e]).collect();
        let grid = EnergyGrid::from_rows(&rows).unwrap();
        let seam = find_minimum_seam(&grid).unwrap();
        prop_assert!(seam.columns().iter().all(|&c| c == 0));
        prop_assert_eq!(seam.len(), rows.len());
    }
}

#[test]
fn uniform_grids_cost_nothing() {
    for rows in 1..=6 {
        for cols in 1..=6 {
            let grid = EnergyGrid::from_rows(&vec![vec![7u8; cols]; rows]).unwrap();
            let seam = find_minimum_seam(&grid).unwrap();
            assert_eq!(seam.cost(), 0);
            assert_eq!(seam.len(), rows);
            assert_connected(seam.columns(), cols);
            // ties resolve to the leftmost column all the way down
            assert!(seam.columns().iter().all(|&c| c == 0));
        }
    }
}

#[test]
fn three_by_three_matches_brute_force() {
    let grid = EnergyGrid::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    let seam = find_minimum_seam(&grid).unwrap();
    assert_eq!(seam.len(), 3);
    assert_connected(seam.columns(), 3);
    assert_eq!(seam.cost(), exhaustive_minimum_cost(&grid));
}

#[test]
fn ragged_grid_fails_before_search() {
    let rows = vec![vec![1u32, 2, 3], vec![4, 5, 6], vec![7, 8]];
    assert!(matches!(
        EnergyGrid::from_rows(&rows),
        Err(SeamError::InvalidInput(_))
    ));
}

#[test]
fn wide_energies_do_not_overflow() {
    let big = u64::MAX / 8;
    let rows = vec![vec![0u64, big], vec![big, 0], vec![0, big]];
    let grid = EnergyGrid::from_rows(&rows).unwrap();
    let seam = find_minimum_seam(&grid).unwrap();
    assert_eq!(seam.cost(), 0);
    assert_eq!(seam.columns(), &[0, 1, 0]);
}

#[test]
fn maximal_energy_step_beside_a_flat_path() {
    let rows = vec![vec![0u64, 0], vec![0, u64::MAX]];
    let grid = EnergyGrid::from_rows(&rows).unwrap();
    let seam = find_minimum_seam(&grid).unwrap();
    assert_eq!(seam.columns(), &[0, 0]);
    assert_eq!(seam.cost(), 0);
    assert_eq!(minimum_seam_cost(&grid).unwrap(), 0);
}

#[test]
fn forced_maximal_steps_add_up_past_u64() {
    let rows = vec![vec![0u64], vec![u64::MAX], vec![0]];
    let grid = EnergyGrid::from_rows(&rows).unwrap();
    let seam = find_minimum_seam(&grid).unwrap();
    assert_eq!(seam.columns(), &[0, 0, 0]);
    assert_eq!(seam.cost(), 2 * Distance::from(u64::MAX));
    assert_eq!(minimum_seam_cost(&grid).unwrap(), seam.cost());
    assert_eq!(dp_seam(&grid).unwrap(), vec![0, 0, 0]);
}
