//! Exact row reduction and demand solving.
//!
//! Reduction runs entirely over rationals; a pivot is nonzero or it is not,
//! with no epsilon involved. The augmented system classifies as a unique
//! schedule, an underdetermined one (free columns), or inconsistent (a
//! zero-coefficient row demanding a nonzero amount).

use std::fmt;

use num_traits::Zero;

use crate::error::Error;
use crate::matrix::{Matrix, RecipeMatrix};
use crate::rational::{to_f64, Rational};

/// Gauss-Jordan reduction to reduced row echelon form. Returns the reduced
/// matrix and the pivot column indices in order.
pub fn rref(input: &Matrix) -> (Matrix, Vec<usize>) {
    let mut m = input.clone();
    let mut pivots = Vec::new();
    let mut pivot_row = 0;

    for col in 0..m.cols() {
        if pivot_row == m.rows() {
            break;
        }
        let Some(found) = (pivot_row..m.rows()).find(|&r| !m.get(r, col).is_zero()) else {
            continue;
        };
        m.swap_rows(pivot_row, found);

        let pivot = m.get(pivot_row, col).clone();
        for c in col..m.cols() {
            let value = m.get(pivot_row, c) / &pivot;
            m.set(pivot_row, c, value);
        }

        for r in 0..m.rows() {
            if r == pivot_row {
                continue;
            }
            let factor = m.get(r, col).clone();
            if factor.is_zero() {
                continue;
            }
            for c in col..m.cols() {
                let value = m.get(r, c) - &factor * m.get(pivot_row, c);
                m.set(r, c, value);
            }
        }

        pivots.push(col);
        pivot_row += 1;
    }

    (m, pivots)
}

/// Appends `demand` as the last column. Shape is checked before any other
/// work happens.
pub fn augment(m: &Matrix, demand: &[Rational]) -> Result<Matrix, Error> {
    if demand.len() != m.rows() {
        return Err(Error::ShapeError {
            expected: m.rows(),
            got: demand.len(),
        });
    }
    let mut out = Matrix::zeros(m.rows(), m.cols() + 1);
    for r in 0..m.rows() {
        for c in 0..m.cols() {
            out.set(r, c, m.get(r, c).clone());
        }
        out.set(r, m.cols(), demand[r].clone());
    }
    Ok(out)
}

/// One column of a unique solution: run this recipe (or extractor) at this
/// rate. Rates are presented as f64; the computation behind them is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub label: String,
    pub rate: f64,
}

/// Outcome of solving a demand against a recipe matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// Every structural column is a pivot; rates read directly off the
    /// reduced augmented column.
    Unique(Vec<ScheduleEntry>),
    /// Some structural columns are free; the demand admits infinitely many
    /// schedules.
    Underdetermined { free_columns: Vec<String> },
    /// A row with zero coefficients demands a nonzero amount; no rate
    /// assignment can satisfy it.
    Inconsistent,
}

/// Solves the recipe matrix against a demand vector (one entry per material
/// row, in row order).
pub fn solve(rm: &RecipeMatrix, demand: &[Rational]) -> Result<Solution, Error> {
    let augmented = augment(&rm.matrix, demand)?;
    let (reduced, pivots) = rref(&augmented);
    let structural_cols = rm.matrix.cols();

    for r in 0..reduced.rows() {
        let coefficients_zero = (0..structural_cols).all(|c| reduced.get(r, c).is_zero());
        if coefficients_zero && !reduced.get(r, structural_cols).is_zero() {
            return Ok(Solution::Inconsistent);
        }
    }

    let structural_pivots: Vec<usize> = pivots
        .iter()
        .copied()
        .filter(|&c| c < structural_cols)
        .collect();

    if structural_pivots.len() < structural_cols {
        let free_columns = (0..structural_cols)
            .filter(|c| !structural_pivots.contains(c))
            .map(|c| rm.column_label(c))
            .collect();
        return Ok(Solution::Underdetermined { free_columns });
    }

    // The i-th pivot lives in row i, so its rate is that row's augmented
    // entry.
    let entries = structural_pivots
        .iter()
        .enumerate()
        .map(|(row, &col)| ScheduleEntry {
            label: rm.column_label(col),
            rate: to_f64(reduced.get(row, structural_cols)),
        })
        .collect();
    Ok(Solution::Unique(entries))
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique(entries) => {
                writeln!(f, "Unique schedule:")?;
                for entry in entries {
                    writeln!(f, "  {:>10.3} x {}", entry.rate, entry.label)?;
                }
                Ok(())
            }
            Solution::Underdetermined { free_columns } => {
                writeln!(f, "Underdetermined: free columns")?;
                for label in free_columns {
                    writeln!(f, "  {}", label)?;
                }
                Ok(())
            }
            Solution::Inconsistent => writeln!(f, "No solution: the demand is inconsistent"),
        }
    }
}
