use log::trace;
use num_traits::Float;
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::optimization::{LinearProgram, OptimizationConfig, OptimizationResult};

/// Cost charged to artificial variables. Must dominate every objective
/// coefficient that can appear in the programs built by this crate.
const BIG_M: f64 = 1e7;

/// Minimizes a linear program with the Big-M tableau simplex method.
///
/// The program is expected in inequality form (min c^T x, Ax ≤ b, x ≥ 0).
/// Rows with a negative right-hand side are treated as ≥ constraints and
/// receive a surplus plus an artificial variable; Bland's pivoting rule is
/// used throughout, so the method cannot cycle.
///
/// # Arguments
///
/// * `lp` - The linear program to solve
/// * `config` - Pivot limit and numerical tolerance
///
/// # Returns
///
/// Returns an `OptimizationResult` holding the optimal point, its objective
/// value, and the number of pivots performed.
///
/// # Errors
///
/// * `Error::InvalidInput` if the matrix dimensions are inconsistent
/// * `Error::Solver` if the program is infeasible or unbounded, or if no
///   optimum was reached within the pivot limit
pub fn minimize<T>(
    lp: &LinearProgram<T>,
    config: &OptimizationConfig<T>,
) -> Result<OptimizationResult<T>>
where
    T: Float + Debug,
{
    let m = lp.constraints.len();
    let n = lp.objective.len();

    if lp.rhs.len() != m {
        return Err(Error::InvalidInput(format!(
            "{} right-hand sides for {} constraints",
            lp.rhs.len(),
            m
        )));
    }
    if let Some(row) = lp.constraints.iter().find(|row| row.len() != n) {
        return Err(Error::InvalidInput(format!(
            "constraint row has {} coefficients, expected {}",
            row.len(),
            n
        )));
    }

    let eps = config.tolerance;
    let big_m = T::from(BIG_M).unwrap();

    // Column layout: n structural, m slack/surplus, one artificial per
    // negative right-hand side, then the rhs column.
    let artificial_rows: Vec<usize> = (0..m).filter(|&i| lp.rhs[i] < T::zero()).collect();
    let rhs_col = n + m + artificial_rows.len();
    let width = rhs_col + 1;

    let mut tableau = vec![vec![T::zero(); width]; m + 1];
    let mut basis = vec![0usize; m];

    let mut next_artificial = n + m;
    for i in 0..m {
        let negate = lp.rhs[i] < T::zero();
        for j in 0..n {
            tableau[i][j] = if negate {
                -lp.constraints[i][j]
            } else {
                lp.constraints[i][j]
            };
        }
        tableau[i][n + i] = if negate { -T::one() } else { T::one() };
        tableau[i][rhs_col] = lp.rhs[i].abs();
        if negate {
            tableau[i][next_artificial] = T::one();
            basis[i] = next_artificial;
            next_artificial += 1;
        } else {
            basis[i] = n + i;
        }
    }

    // The objective row holds reduced costs: structural costs, zero for
    // slacks, BIG_M for artificials, priced out against the artificial rows
    // so the initial basis has zero reduced cost.
    for j in 0..n {
        tableau[m][j] = lp.objective[j];
    }
    for j in n + m..rhs_col {
        tableau[m][j] = big_m;
    }
    for &i in &artificial_rows {
        for j in 0..width {
            tableau[m][j] = tableau[m][j] - big_m * tableau[i][j];
        }
    }

    let mut iterations = 0;
    loop {
        // Bland's rule: the lowest-index column with a negative reduced cost
        // enters. Artificial columns never re-enter once driven out.
        let entering = match (0..n + m).find(|&j| tableau[m][j] < -eps) {
            Some(j) => j,
            None => break,
        };

        if iterations >= config.max_iterations {
            return Err(Error::Solver(format!(
                "no optimum after {} pivots",
                config.max_iterations
            )));
        }

        // Minimum ratio test; ties go to the row whose basic variable has
        // the lowest index, which completes Bland's anti-cycling rule.
        let mut leaving: Option<usize> = None;
        let mut best_ratio = T::infinity();
        for i in 0..m {
            let coef = tableau[i][entering];
            if coef > eps {
                let ratio = tableau[i][rhs_col] / coef;
                let better = match leaving {
                    None => true,
                    Some(l) => {
                        ratio < best_ratio - eps
                            || (ratio < best_ratio + eps && basis[i] < basis[l])
                    }
                };
                if better {
                    best_ratio = ratio;
                    leaving = Some(i);
                }
            }
        }
        let leaving = match leaving {
            Some(i) => i,
            None => return Err(Error::Solver("objective is unbounded below".into())),
        };

        trace!(
            "pivot {}: column {} enters, row {} leaves",
            iterations,
            entering,
            leaving
        );
        pivot(&mut tableau, &mut basis, leaving, entering);
        iterations += 1;
    }

    // A basic artificial variable at a positive level means no feasible
    // point satisfies the constraints.
    for i in 0..m {
        if basis[i] >= n + m && tableau[i][rhs_col] > eps {
            return Err(Error::Solver("constraints are infeasible".into()));
        }
    }

    let mut optimal_point = vec![T::zero(); n];
    for i in 0..m {
        if basis[i] < n {
            let value = tableau[i][rhs_col];
            optimal_point[basis[i]] = if value.abs() < eps { T::zero() } else { value };
        }
    }
    let optimal_value = optimal_point
        .iter()
        .zip(lp.objective.iter())
        .fold(T::zero(), |acc, (&x, &c)| acc + c * x);

    Ok(OptimizationResult {
        optimal_point,
        optimal_value,
        iterations,
    })
}

fn pivot<T>(tableau: &mut [Vec<T>], basis: &mut [usize], leaving_row: usize, entering_col: usize)
where
    T: Float + Debug,
{
    let width = tableau[0].len();
    let pivot_value = tableau[leaving_row][entering_col];

    for j in 0..width {
        tableau[leaving_row][j] = tableau[leaving_row][j] / pivot_value;
    }
    for i in 0..tableau.len() {
        if i == leaving_row {
            continue;
        }
        let factor = tableau[i][entering_col];
        if factor != T::zero() {
            for j in 0..width {
                tableau[i][j] = tableau[i][j] - factor * tableau[leaving_row][j];
            }
        }
    }

    basis[leaving_row] = entering_col;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_lp() {
        // minimize -x - y subject to x + y ≤ 1, x, y ≥ 0
        let lp = LinearProgram {
            objective: vec![-1.0, -1.0],
            constraints: vec![vec![1.0, 1.0]],
            rhs: vec![1.0],
        };

        let result = minimize(&lp, &OptimizationConfig::default()).unwrap();

        assert_relative_eq!(result.optimal_value, -1.0, epsilon = 1e-6);
        let sum: f64 = result.optimal_point.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_covering_lp() {
        // minimize x + y subject to x + y ≥ 1, x ≤ 1, y ≤ 1
        let lp = LinearProgram {
            objective: vec![1.0, 1.0],
            constraints: vec![vec![-1.0, -1.0], vec![1.0, 0.0], vec![0.0, 1.0]],
            rhs: vec![-1.0, 1.0, 1.0],
        };

        let result = minimize(&lp, &OptimizationConfig::default()).unwrap();

        assert_relative_eq!(result.optimal_value, 1.0, epsilon = 1e-6);
        for &x in &result.optimal_point {
            assert!((-1e-6..=1.0 + 1e-6).contains(&x));
        }
    }

    #[test]
    fn test_bounded_lp() {
        // minimize -2x - y subject to x + y ≤ 2, x ≤ 1, x, y ≥ 0
        let lp = LinearProgram {
            objective: vec![-2.0, -1.0],
            constraints: vec![vec![1.0, 1.0], vec![1.0, 0.0]],
            rhs: vec![2.0, 1.0],
        };

        let result = minimize(&lp, &OptimizationConfig::default()).unwrap();

        assert_relative_eq!(result.optimal_value, -3.0, epsilon = 1e-6);
        assert_relative_eq!(result.optimal_point[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(result.optimal_point[1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_infeasible_lp() {
        // x ≤ -1 contradicts x ≥ 0
        let lp = LinearProgram {
            objective: vec![1.0],
            constraints: vec![vec![1.0]],
            rhs: vec![-1.0],
        };

        let err = minimize(&lp, &OptimizationConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Solver(_)));
    }

    #[test]
    fn test_unbounded_lp() {
        // minimize -x with no constraints at all
        let lp = LinearProgram {
            objective: vec![-1.0],
            constraints: vec![],
            rhs: vec![],
        };

        let err = minimize(&lp, &OptimizationConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Solver(_)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let lp = LinearProgram {
            objective: vec![1.0, 1.0],
            constraints: vec![vec![1.0]],
            rhs: vec![1.0],
        };

        let err = minimize(&lp, &OptimizationConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
