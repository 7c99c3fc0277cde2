//! # Industrialist crafting calculator
//!
//! Turns the scraped Industrialist wiki recipe dataset into production
//! schedules: which recipes to run, and at what rates, to produce a target
//! quantity of a chosen item.
//!
//! The pipeline runs strictly upward:
//!
//! - [`parse`] - recovers structured quantities from the raw wiki text
//! - [`catalog`] - recipe lookup and raw-material classification
//! - [`matrix`] - signed mass-balance matrix for a target item
//! - [`solver`] - exact-rational row reduction and demand solving
//!
//! All matrix arithmetic is exact ([`rational`]); floating point only
//! appears at the display boundary.
//!
//! ```no_run
//! use industrialist_calculator::catalog::{MatchMode, RecipeCatalog};
//! use industrialist_calculator::rational::from_int;
//! use industrialist_calculator::{dataset, matrix, solver};
//! use std::path::Path;
//!
//! let machines = dataset::load_machines(Path::new("industrialist_machines.json")).unwrap();
//! let catalog = RecipeCatalog::new(machines);
//!
//! let rm = matrix::build(&catalog, "Steel Ingot", MatchMode::Exact);
//! let demand = rm.demand_for(from_int(10));
//! let solution = solver::solve(&rm, &demand).unwrap();
//! println!("{solution}");
//! ```

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod matrix;
pub mod models;
pub mod parse;
pub mod rational;
pub mod solver;
