//! Data models for machines, recipes and crafting methods.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::rational::Rational;

/// One machine record as scraped from the wiki. The non-recipe fields are
/// carried through from the crawler output but not interpreted by the core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Machine {
    pub name: String,
    #[serde(default)]
    pub recipe: Vec<Recipe>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub input_energy: String,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub pollution: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub cost: String,
}

/// One recipe row, raw text exactly as scraped. Immutable once loaded;
/// everything structured is derived on demand by the parsers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub output: String,
}

/// Structured time/energy for one recipe. `None` means the text carried no
/// such component ("unspecified"), which is distinct from zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParsedQuantity {
    /// Crafting time in seconds.
    pub duration_s: Option<f64>,
    /// Power draw in MF (base unit; kMF and MMF are scaled down to it).
    pub energy_mf: Option<f64>,
}

/// Mapping from material name to exact quantity consumed per craft.
pub type MaterialQuantity = BTreeMap<String, Rational>;

/// One concrete way to produce an item: one machine, one recipe.
/// Recomputed on demand from the dataset, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftingMethod {
    pub machine: String,
    pub quantity: ParsedQuantity,
    pub inputs: MaterialQuantity,
    /// Units produced per craft; 1 when the output text has no multiplier.
    pub output_count: u32,
    /// Item name parsed out of the output text.
    pub output_name: String,
}
