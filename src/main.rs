//! Industrialist crafting calculator
//!
//! Command-line wrapper over the calculator core. All the real work lives
//! in the library; this binary only loads the dataset, dispatches a query
//! and prints the result.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use industrialist_calculator::catalog::{MatchMode, RecipeCatalog};
use industrialist_calculator::models::CraftingMethod;
use industrialist_calculator::rational::{parse_decimal, to_f64};
use industrialist_calculator::{dataset, matrix, solver};

#[derive(Parser)]
#[command(name = "industrialist-calculator")]
#[command(about = "Crafting schedule calculator for Industrialist")]
struct Cli {
    /// Path to the scraped machines JSON
    #[arg(short, long, default_value = "industrialist_machines.json")]
    dataset: PathBuf,

    /// Match item names by substring (the wiki tooling's behavior) instead
    /// of exact name
    #[arg(long)]
    substring: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show time, energy and materials for an item in a specific machine
    Info {
        /// Machine name (e.g., "Advanced Assembler")
        machine: String,
        /// Item name (e.g., "Chair")
        item: String,
    },

    /// List every crafting method for an item across all machines
    Methods {
        item: String,
    },

    /// Print the mass-balance matrix for an item
    Matrix {
        item: String,
    },

    /// Solve for recipe and extraction rates meeting a demand
    Solve {
        item: String,

        /// Desired net production of the item (decimal)
        #[arg(short, long, default_value = "1")]
        amount: String,
    },

    /// List all machines in the dataset
    ListMachines,

    /// List all raw materials (never produced by any recipe)
    ListRaw,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let machines = dataset::load_machines(&cli.dataset)?;
    let catalog = RecipeCatalog::new(machines);
    let mode = if cli.substring {
        MatchMode::Substring
    } else {
        MatchMode::Exact
    };

    match cli.command {
        Commands::Info { machine, item } => {
            match catalog.crafting_info(&machine, &item, mode)? {
                Some(method) => print_method(&method),
                None => println!("No recipe for '{}' in '{}'", item, machine),
            }
        }

        Commands::Methods { item } => {
            let methods = catalog.find_methods(&item, mode);
            if methods.is_empty() {
                println!("No crafting methods for '{}'", item);
            } else {
                for method in &methods {
                    print_method(method);
                    println!();
                }
            }
        }

        Commands::Matrix { item } => {
            let rm = matrix::build(&catalog, &item, mode);
            if rm.no_producers {
                println!("Note: '{}' has no producers; extractor-only matrix.\n", item);
            }
            let labels: Vec<String> = (0..rm.matrix.cols()).map(|c| rm.column_label(c)).collect();
            println!("Columns: {}", labels.join(" | "));
            let cells = rm.matrix.to_f64();
            for (name, row) in rm.materials.iter().zip(&cells) {
                let formatted: Vec<String> = row.iter().map(|v| format!("{:>8.3}", v)).collect();
                println!("{:<24} {}", name, formatted.join(" "));
            }
        }

        Commands::Solve { item, amount } => {
            let amount = parse_decimal(&amount)
                .ok_or_else(|| anyhow!("'{}' is not a decimal amount", amount))?;
            let rm = matrix::build(&catalog, &item, mode);
            if rm.no_producers {
                println!("Note: '{}' has no producers; solving extractor-only system.\n", item);
            }
            let demand = rm.demand_for(amount);
            let solution = solver::solve(&rm, &demand)?;
            print!("{}", solution);
        }

        Commands::ListMachines => {
            if catalog.machines().is_empty() {
                println!("Dataset contains no machines.");
            } else {
                println!("{:<30} {:>8}", "Machine", "Recipes");
                println!("{}", "-".repeat(40));
                for machine in catalog.machines() {
                    println!("{:<30} {:>8}", machine.name, machine.recipe.len());
                }
            }
        }

        Commands::ListRaw => {
            let raw = catalog.raw_materials();
            if raw.is_empty() {
                println!("No raw materials: every material has a producer.");
            } else {
                println!("Raw materials (no known recipe):");
                for name in raw {
                    println!("  {}", name);
                }
            }
        }
    }

    Ok(())
}

fn print_method(method: &CraftingMethod) {
    println!("{} x {} in {}", method.output_count, method.output_name, method.machine);
    match method.quantity.duration_s {
        Some(s) => println!("  Time:   {} s", s),
        None => println!("  Time:   unspecified"),
    }
    match method.quantity.energy_mf {
        Some(mf) => println!("  Energy: {} MF", mf),
        None => println!("  Energy: unspecified"),
    }
    if method.inputs.is_empty() {
        println!("  Materials: none (raw extraction)");
    } else {
        println!("  Materials:");
        for (name, qty) in &method.inputs {
            println!("    {} x {}", to_f64(qty), name);
        }
    }
}
