//! Read-only catalog over the loaded dataset.
//!
//! The catalog answers two kinds of questions: "how is this item crafted?"
//! (per machine or across all machines) and "which materials are raw?"
//! (never produced by any recipe). It owns the immutable machine list and
//! derives everything else on demand.

use std::collections::BTreeSet;

use once_cell::sync::OnceCell;

use crate::error::Error;
use crate::models::{CraftingMethod, Machine};
use crate::parse::{parse_materials, parse_output, parse_quantity};

/// How a queried item name is matched against recipe outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive equality against the parsed output name.
    #[default]
    Exact,
    /// Case-insensitive substring match against the raw output text.
    /// Kept for parity with the wiki tooling this dataset comes from; in
    /// this mode "Steel" also hits "Steel Plate".
    Substring,
}

/// Item names are compared case-insensitively throughout; the wiki
/// capitalizes inconsistently across pages.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug)]
pub struct RecipeCatalog {
    machines: Vec<Machine>,
    // Target-independent, so computed once and cached.
    raw: OnceCell<BTreeSet<String>>,
}

impl RecipeCatalog {
    pub fn new(machines: Vec<Machine>) -> Self {
        Self {
            machines,
            raw: OnceCell::new(),
        }
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    fn matches(output_text: &str, item: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Exact => {
                let (_, name) = parse_output(output_text);
                normalize(&name) == normalize(item)
            }
            MatchMode::Substring => normalize(output_text).contains(&normalize(item)),
        }
    }

    /// Every crafting method for an item, in dataset order (machine order,
    /// then recipe order within a machine). Recipes whose material text
    /// fails to parse are skipped so one bad record cannot poison the scan;
    /// an unknown item yields an empty list, not an error.
    pub fn find_methods(&self, item: &str, mode: MatchMode) -> Vec<CraftingMethod> {
        let mut methods = Vec::new();
        for machine in &self.machines {
            for recipe in &machine.recipe {
                if !Self::matches(&recipe.output, item, mode) {
                    continue;
                }
                let Ok(inputs) = parse_materials(&recipe.material) else {
                    continue;
                };
                let (output_count, output_name) = parse_output(&recipe.output);
                methods.push(CraftingMethod {
                    machine: machine.name.clone(),
                    quantity: parse_quantity(&recipe.quantity),
                    inputs,
                    output_count,
                    output_name,
                });
            }
        }
        methods
    }

    /// Looks up the first matching recipe for an item in a named machine.
    /// `Ok(None)` when the machine or item is unknown; absence is an
    /// expected outcome of exploratory queries. Malformed material text in
    /// the matched recipe surfaces as [`Error::ParseFailure`] here, since
    /// the caller asked about this record specifically.
    pub fn crafting_info(
        &self,
        machine_name: &str,
        item: &str,
        mode: MatchMode,
    ) -> Result<Option<CraftingMethod>, Error> {
        let Some(machine) = self
            .machines
            .iter()
            .find(|m| normalize(&m.name) == normalize(machine_name))
        else {
            return Ok(None);
        };

        for recipe in &machine.recipe {
            if !Self::matches(&recipe.output, item, mode) {
                continue;
            }
            let inputs = parse_materials(&recipe.material)?;
            let (output_count, output_name) = parse_output(&recipe.output);
            return Ok(Some(CraftingMethod {
                machine: machine.name.clone(),
                quantity: parse_quantity(&recipe.quantity),
                inputs,
                output_count,
                output_name,
            }));
        }
        Ok(None)
    }

    /// Normalized names of every parsed recipe output in the dataset.
    pub fn output_names(&self) -> BTreeSet<String> {
        self.machines
            .iter()
            .flat_map(|m| &m.recipe)
            .map(|r| normalize(&parse_output(&r.output).1))
            .collect()
    }

    /// Normalized names of all raw materials: names that appear as an input
    /// somewhere but never equal any recipe's parsed output name. A whole-
    /// dataset property, independent of any target item.
    pub fn raw_materials(&self) -> &BTreeSet<String> {
        self.raw.get_or_init(|| {
            let outputs = self.output_names();
            let mut raw = BTreeSet::new();
            for machine in &self.machines {
                for recipe in &machine.recipe {
                    let Ok(inputs) = parse_materials(&recipe.material) else {
                        continue;
                    };
                    for name in inputs.keys() {
                        let key = normalize(name);
                        if !outputs.contains(&key) {
                            raw.insert(key);
                        }
                    }
                }
            }
            raw
        })
    }
}
