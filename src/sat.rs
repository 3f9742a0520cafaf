use log::debug;

use crate::error::{Error, Result};

/// A propositional formula in conjunctive normal form.
///
/// Literals follow the DIMACS convention: `v` is the positive literal of
/// variable `v` and `-v` its negation, with variables numbered
/// `1..=num_variables`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfFormula {
    clauses: Vec<Vec<i32>>,
    num_variables: usize,
}

impl CnfFormula {
    /// Builds a formula, validating every literal.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidInput` on a zero literal or a variable outside
    ///   `1..=num_variables`
    pub fn new(clauses: Vec<Vec<i32>>, num_variables: usize) -> Result<Self> {
        for clause in &clauses {
            for &literal in clause {
                if literal == 0 {
                    return Err(Error::InvalidInput("literal 0 is not allowed".into()));
                }
                if literal.unsigned_abs() as usize > num_variables {
                    return Err(Error::InvalidInput(format!(
                        "literal {} references a variable beyond {}",
                        literal, num_variables
                    )));
                }
            }
        }
        Ok(Self {
            clauses,
            num_variables,
        })
    }

    pub fn clauses(&self) -> &[Vec<i32>] {
        &self.clauses
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// NP verifier for SAT: checks that the assignment (indexed by
    /// variable number minus one) satisfies every clause.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.clauses.iter().all(|clause| {
            clause.iter().any(|&literal| {
                let value = assignment
                    .get(literal.unsigned_abs() as usize - 1)
                    .copied()
                    .unwrap_or(false);
                if literal > 0 {
                    value
                } else {
                    !value
                }
            })
        })
    }

    /// Solves the formula by checking every truth assignment, returning the
    /// first satisfying one. Exponential in the variable count; meant for
    /// the small instances used in coursework.
    pub fn solve_brute_force(&self) -> Option<Vec<bool>> {
        assert!(
            self.num_variables < 64,
            "too many variables for brute-force enumeration"
        );
        for mask in 0u64..1u64 << self.num_variables {
            let assignment: Vec<bool> = (0..self.num_variables)
                .map(|i| mask >> i & 1 == 1)
                .collect();
            if self.is_satisfied_by(&assignment) {
                debug!("satisfying assignment found at mask {}", mask);
                return Some(assignment);
            }
        }
        None
    }
}
