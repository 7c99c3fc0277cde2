//! Mass-balance matrix assembly for a target item.
//!
//! Rows are materials (lexicographic by normalized name, so results are
//! reproducible); columns are one per crafting method for the target,
//! followed by one "extractor" per raw material. A recipe column carries
//! `-quantity` at each consumed material's row and `+output_count` at the
//! target's row; an extractor column carries a single `+1`.

use std::collections::BTreeMap;

use num_traits::Zero;

use crate::catalog::{normalize, MatchMode, RecipeCatalog};
use crate::models::CraftingMethod;
use crate::rational::{from_int, Rational};

/// Dense matrix of exact rationals, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Rational>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Rational::zero(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> &Rational {
        &self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Rational) {
        self.data[row * self.cols + col] = value;
    }

    /// Adds into a cell. Used during assembly, where a recipe may both
    /// consume and produce the same material (the entries net out).
    pub fn add(&mut self, row: usize, col: usize, value: Rational) {
        let cell = self.get(row, col).clone() + value;
        self.set(row, col, cell);
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }

    /// Presentation-boundary copy; exactness ends here.
    pub fn to_f64(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| crate::rational::to_f64(self.get(r, c))).collect())
            .collect()
    }
}

/// The assembled mass-balance system for one target item, with the row and
/// column bookkeeping needed to interpret it.
#[derive(Debug, Clone)]
pub struct RecipeMatrix {
    /// Requested item, as given (trimmed).
    pub target: String,
    /// Display names in row order.
    pub materials: Vec<String>,
    /// Crafting methods, one per leading column, in dataset order.
    pub methods: Vec<CraftingMethod>,
    /// Display names of the extractor columns, in row order.
    pub extractors: Vec<String>,
    pub matrix: Matrix,
    /// True when the target has no crafting method at all; the matrix is
    /// then the degenerate extractor-only system for the target.
    pub no_producers: bool,
    keys: Vec<String>,
    target_row: usize,
}

impl RecipeMatrix {
    pub fn target_row(&self) -> usize {
        self.target_row
    }

    /// Row index of a material, matched case-insensitively.
    pub fn row_of(&self, name: &str) -> Option<usize> {
        let key = normalize(name);
        self.keys.binary_search(&key).ok()
    }

    /// Demand vector that is zero everywhere except `amount` at the
    /// target's row.
    pub fn demand_for(&self, amount: Rational) -> Vec<Rational> {
        let mut demand = vec![Rational::zero(); self.materials.len()];
        demand[self.target_row] = amount;
        demand
    }

    /// Human-readable label for a column: the producing machine for recipe
    /// columns, "extract <material>" for extractor columns.
    pub fn column_label(&self, col: usize) -> String {
        if col < self.methods.len() {
            let method = &self.methods[col];
            format!("{} ({})", method.machine, method.output_name)
        } else {
            format!("extract {}", self.extractors[col - self.methods.len()])
        }
    }
}

/// Assembles the mass-balance matrix for `item`.
///
/// The material set is the union of every matched method's inputs plus the
/// target itself. A material gets an extractor column when it is globally
/// raw, or when it is the target and nothing produces it (the extractor
/// fallback keeps the degenerate no-producer case solvable).
pub fn build(catalog: &RecipeCatalog, item: &str, mode: MatchMode) -> RecipeMatrix {
    let methods = catalog.find_methods(item, mode);
    let no_producers = methods.is_empty();
    let target_key = normalize(item);

    // normalized name -> display name; BTreeMap fixes the row order.
    let mut names: BTreeMap<String, String> = BTreeMap::new();
    names.insert(target_key.clone(), item.trim().to_string());
    for method in &methods {
        for name in method.inputs.keys() {
            names.entry(normalize(name)).or_insert_with(|| name.clone());
        }
    }
    let keys: Vec<String> = names.keys().cloned().collect();
    let materials: Vec<String> = names.values().cloned().collect();
    let target_row = keys
        .binary_search(&target_key)
        .unwrap_or(0); // inserted above, always present

    let raw = catalog.raw_materials();
    let extractor_rows: Vec<usize> = keys
        .iter()
        .enumerate()
        .filter(|(_, key)| raw.contains(*key) || (**key == target_key && no_producers))
        .map(|(row, _)| row)
        .collect();
    let extractors: Vec<String> = extractor_rows.iter().map(|&r| materials[r].clone()).collect();

    let mut matrix = Matrix::zeros(keys.len(), methods.len() + extractor_rows.len());
    for (col, method) in methods.iter().enumerate() {
        for (name, qty) in &method.inputs {
            if let Ok(row) = keys.binary_search(&normalize(name)) {
                matrix.add(row, col, -qty.clone());
            }
        }
        matrix.add(target_row, col, from_int(i64::from(method.output_count)));
    }
    for (offset, &row) in extractor_rows.iter().enumerate() {
        matrix.set(row, methods.len() + offset, from_int(1));
    }

    RecipeMatrix {
        target: item.trim().to_string(),
        materials,
        methods,
        extractors,
        matrix,
        no_producers,
        keys,
        target_row,
    }
}
