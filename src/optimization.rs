pub mod simplex;

use std::fmt::Debug;

use num_traits::Float;

use crate::error::Result;

pub use simplex::minimize as simplex_minimize;

/// A linear programming problem in inequality form:
/// minimize c^T x subject to Ax ≤ b and x ≥ 0.
///
/// Constraints of the form a^T x ≥ b are entered with both sides negated;
/// upper bounds on individual variables are entered as ordinary rows.
#[derive(Debug, Clone)]
pub struct LinearProgram<T>
where
    T: Float + Debug,
{
    /// The objective function coefficients (c in min c^T x)
    pub objective: Vec<T>,
    /// The constraint matrix (A in Ax ≤ b)
    pub constraints: Vec<Vec<T>>,
    /// The right-hand side vector (b in Ax ≤ b)
    pub rhs: Vec<T>,
}

/// Configuration options for the LP solver.
#[derive(Debug, Clone)]
pub struct OptimizationConfig<T>
where
    T: Float + Debug,
{
    /// Maximum number of simplex pivots
    pub max_iterations: usize,
    /// Numerical tolerance for pivot and feasibility tests
    pub tolerance: T,
}

impl<T> Default for OptimizationConfig<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: T::from(1e-6).unwrap(),
        }
    }
}

/// Result of a successful LP solve.
#[derive(Debug, Clone)]
pub struct OptimizationResult<T>
where
    T: Float + Debug,
{
    /// The optimal point found
    pub optimal_point: Vec<T>,
    /// The value of the objective function at the optimal point
    pub optimal_value: T,
    /// Number of pivots performed
    pub iterations: usize,
}

/// The linear-programming capability consumed by the rounding algorithms.
///
/// Implementations minimize a linear objective subject to `Ax ≤ b, x ≥ 0`
/// and return the fractional optimum. The rounding logic depends only on
/// this trait, so it can be exercised against a stub solver in tests.
pub trait LpSolver {
    /// Solves the program to optimality or reports why it could not.
    fn minimize(&self, lp: &LinearProgram<f64>) -> Result<OptimizationResult<f64>>;
}

/// Tableau-simplex implementation of [`LpSolver`].
#[derive(Debug, Clone, Default)]
pub struct SimplexSolver {
    config: OptimizationConfig<f64>,
}

impl SimplexSolver {
    pub fn new(config: OptimizationConfig<f64>) -> Self {
        Self { config }
    }
}

impl LpSolver for SimplexSolver {
    fn minimize(&self, lp: &LinearProgram<f64>) -> Result<OptimizationResult<f64>> {
        simplex::minimize(lp, &self.config)
    }
}
