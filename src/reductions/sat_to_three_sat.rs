use crate::error::{Error, Result};
use crate::sat::CnfFormula;

/// Rewrites a CNF formula into an equisatisfiable 3-CNF formula.
///
/// Clauses with one or two literals are padded by repeating their last
/// literal. Clauses with more than three literals are split into a chain of
/// 3-literal clauses linked by fresh variables, so the output formula may
/// use more variables than the input.
///
/// # Errors
///
/// * `Error::InvalidInput` if the formula contains an empty clause, which
///   has no 3-CNF equivalent
pub fn sat_to_three_sat(formula: &CnfFormula) -> Result<CnfFormula> {
    let mut next_variable = formula.num_variables() as i32;
    let mut clauses = Vec::new();

    for (idx, clause) in formula.clauses().iter().enumerate() {
        match clause.len() {
            0 => {
                return Err(Error::InvalidInput(format!(
                    "clause {} is empty and cannot be converted",
                    idx
                )));
            }
            1..=3 => {
                let mut padded = clause.clone();
                while padded.len() < 3 {
                    padded.push(padded[padded.len() - 1]);
                }
                clauses.push(padded);
            }
            k => {
                // Chain (l1 l2 y1) (¬y1 l3 y2) ... (¬y_{k-3} l_{k-1} l_k).
                let fresh: Vec<i32> = (0..k - 3)
                    .map(|_| {
                        next_variable += 1;
                        next_variable
                    })
                    .collect();

                clauses.push(vec![clause[0], clause[1], fresh[0]]);
                for i in 1..fresh.len() {
                    clauses.push(vec![-fresh[i - 1], clause[i + 1], fresh[i]]);
                }
                clauses.push(vec![-fresh[fresh.len() - 1], clause[k - 2], clause[k - 1]]);
            }
        }
    }

    CnfFormula::new(clauses, next_variable as usize)
}
