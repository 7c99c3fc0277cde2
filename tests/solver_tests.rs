//! Tests for exact row reduction and demand solving.

use industrialist_calculator::catalog::{MatchMode, RecipeCatalog};
use industrialist_calculator::error::Error;
use industrialist_calculator::matrix::{build, Matrix};
use industrialist_calculator::models::{Machine, Recipe};
use industrialist_calculator::rational::{from_int, Rational};
use industrialist_calculator::solver::{augment, rref, solve, Solution};
use num_traits::Zero;

fn machine(name: &str, recipes: &[(&str, &str, &str)]) -> Machine {
    Machine {
        name: name.to_string(),
        recipe: recipes
            .iter()
            .map(|(material, quantity, output)| Recipe {
                material: material.to_string(),
                quantity: quantity.to_string(),
                output: output.to_string(),
            })
            .collect(),
        ..Machine::default()
    }
}

fn matrix_from(rows: &[&[i64]]) -> Matrix {
    let mut m = Matrix::zeros(rows.len(), rows[0].len());
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            m.set(r, c, from_int(value));
        }
    }
    m
}

#[test]
fn rref_reduces_an_invertible_matrix_to_identity() {
    let m = matrix_from(&[&[1, 2], &[3, 4]]);
    let (reduced, pivots) = rref(&m);

    assert_eq!(pivots, vec![0, 1]);
    assert_eq!(*reduced.get(0, 0), from_int(1));
    assert_eq!(*reduced.get(0, 1), from_int(0));
    assert_eq!(*reduced.get(1, 0), from_int(0));
    assert_eq!(*reduced.get(1, 1), from_int(1));
}

#[test]
fn rref_is_idempotent() {
    for m in [
        matrix_from(&[&[1, 2], &[3, 4]]),
        matrix_from(&[&[1, 2], &[2, 4]]),
        matrix_from(&[&[0, 0, 3], &[2, 0, 1]]),
    ] {
        let (once, pivots_once) = rref(&m);
        let (twice, pivots_twice) = rref(&once);
        assert_eq!(once, twice);
        assert_eq!(pivots_once, pivots_twice);
    }
}

#[test]
fn rref_finds_pivots_past_zero_columns() {
    let m = matrix_from(&[&[0, 2, 4], &[0, 1, 3]]);
    let (_, pivots) = rref(&m);
    assert_eq!(pivots, vec![1, 2]);
}

#[test]
fn augment_appends_the_demand_column() {
    let m = matrix_from(&[&[1, 2], &[3, 4]]);
    let demand = vec![from_int(5), from_int(6)];
    let augmented = augment(&m, &demand).unwrap();

    assert_eq!(augmented.cols(), 3);
    assert_eq!(*augmented.get(0, 2), from_int(5));
    assert_eq!(*augmented.get(1, 2), from_int(6));
}

#[test]
fn mismatched_demand_length_is_a_shape_error() {
    let m = matrix_from(&[&[1, 2], &[3, 4]]);
    let err = augment(&m, &[from_int(5)]).unwrap_err();
    assert!(matches!(err, Error::ShapeError { expected: 2, got: 1 }));
}

#[test]
fn solve_rejects_a_mismatched_demand_before_any_elimination() {
    let catalog = RecipeCatalog::new(vec![machine(
        "Foundry",
        &[("2xOre", "5s + 10MF", "1xSteel Ingot")],
    )]);
    let rm = build(&catalog, "Steel Ingot", MatchMode::Exact);

    let err = solve(&rm, &[from_int(10)]).unwrap_err();
    assert!(matches!(err, Error::ShapeError { expected: 2, got: 1 }));
}

#[test]
fn one_recipe_and_one_raw_material_solve_uniquely() {
    let catalog = RecipeCatalog::new(vec![machine(
        "Foundry",
        &[("2xOre", "5s + 10MF", "1xSteel Ingot")],
    )]);
    let rm = build(&catalog, "Steel Ingot", MatchMode::Exact);

    let demand = rm.demand_for(from_int(10));
    let solution = solve(&rm, &demand).unwrap();

    let Solution::Unique(entries) = solution else {
        panic!("expected a unique solution, got {:?}", solution);
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "Foundry (Steel Ingot)");
    assert_eq!(entries[0].rate, 10.0);
    assert_eq!(entries[1].label, "extract Ore");
    assert_eq!(entries[1].rate, 20.0);
}

#[test]
fn competing_recipes_leave_free_columns() {
    let catalog = RecipeCatalog::new(vec![
        machine("Foundry", &[("2xOre", "5s + 10MF", "1xSteel Ingot")]),
        machine("Arc Furnace", &[("3xOre", "4s + 1kMF", "1xSteel Ingot")]),
    ]);
    let rm = build(&catalog, "Steel Ingot", MatchMode::Exact);
    assert_eq!(rm.matrix.cols(), 3);

    let demand = rm.demand_for(from_int(10));
    let solution = solve(&rm, &demand).unwrap();

    let Solution::Underdetermined { free_columns } = solution else {
        panic!("expected an underdetermined system, got {:?}", solution);
    };
    assert_eq!(free_columns.len(), 1);
}

#[test]
fn unmet_intermediate_demand_is_reported_inconsistent() {
    // Plate is produced elsewhere in the dataset (so it is not raw and gets
    // no extractor), but nothing in Steel's own matrix supplies it.
    let catalog = RecipeCatalog::new(vec![
        machine("Roller", &[("1xPlate", "2s", "1xSteel")]),
        machine("Press", &[("1xOre", "1s", "1xPlate")]),
    ]);
    let rm = build(&catalog, "Steel", MatchMode::Exact);
    assert!(rm.extractors.is_empty());

    let demand = rm.demand_for(from_int(10));
    let solution = solve(&rm, &demand).unwrap();
    assert_eq!(solution, Solution::Inconsistent);
}

#[test]
fn zero_demand_has_the_all_zero_unique_solution() {
    let catalog = RecipeCatalog::new(vec![machine(
        "Foundry",
        &[("2xOre", "5s + 10MF", "1xSteel Ingot")],
    )]);
    let rm = build(&catalog, "Steel Ingot", MatchMode::Exact);

    let demand = vec![Rational::zero(); 2];
    let solution = solve(&rm, &demand).unwrap();

    let Solution::Unique(entries) = solution else {
        panic!("expected a unique solution, got {:?}", solution);
    };
    assert!(entries.iter().all(|e| e.rate == 0.0));
}

#[test]
fn degenerate_extractor_only_target_solves_trivially() {
    let catalog = RecipeCatalog::new(vec![machine(
        "Foundry",
        &[("2xOre", "5s + 10MF", "1xSteel Ingot")],
    )]);
    let rm = build(&catalog, "Widget", MatchMode::Exact);
    assert!(rm.no_producers);

    let demand = rm.demand_for(from_int(4));
    let solution = solve(&rm, &demand).unwrap();

    let Solution::Unique(entries) = solution else {
        panic!("expected a unique solution, got {:?}", solution);
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "extract Widget");
    assert_eq!(entries[0].rate, 4.0);
}

#[test]
fn fractional_recipe_yields_stay_exact_through_reduction() {
    // A 0.3 consumption coefficient has no exact f64 form; the rational
    // path still recovers the clean answer.
    let catalog = RecipeCatalog::new(vec![machine(
        "Refinery",
        &[("0.3xCrude", "2s", "1xFuel")],
    )]);
    let rm = build(&catalog, "Fuel", MatchMode::Exact);

    let demand = rm.demand_for(from_int(10));
    let solution = solve(&rm, &demand).unwrap();

    let Solution::Unique(entries) = solution else {
        panic!("expected a unique solution, got {:?}", solution);
    };
    assert_eq!(entries[0].rate, 10.0);
    assert_eq!(entries[1].rate, 3.0); // 10 crafts x 0.3 Crude
}
