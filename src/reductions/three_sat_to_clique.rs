use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::sat::CnfFormula;

/// Output of the 3-SAT → CLIQUE construction.
///
/// `graph` is an adjacency-set graph over node ids; `literals[id]` records
/// the clause index and literal the node stands for. The source formula is
/// satisfiable iff `graph` contains a clique of size `k`.
#[derive(Debug, Clone)]
pub struct CliqueInstance {
    pub graph: HashMap<usize, HashSet<usize>>,
    pub literals: Vec<(usize, i32)>,
    pub k: usize,
}

/// Builds the textbook reduction from 3-SAT to CLIQUE: one node per literal
/// occurrence and an edge between every pair of non-complementary literals
/// from different clauses, with target clique size equal to the clause
/// count.
///
/// # Errors
///
/// * `Error::InvalidInput` if any clause does not have exactly 3 literals
pub fn three_sat_to_clique(formula: &CnfFormula) -> Result<CliqueInstance> {
    let mut literals = Vec::new();
    for (i, clause) in formula.clauses().iter().enumerate() {
        if clause.len() != 3 {
            return Err(Error::InvalidInput(format!(
                "clause {} has {} literals, expected exactly 3",
                i,
                clause.len()
            )));
        }
        for &literal in clause {
            literals.push((i, literal));
        }
    }

    let mut graph: HashMap<usize, HashSet<usize>> =
        (0..literals.len()).map(|id| (id, HashSet::new())).collect();
    for a in 0..literals.len() {
        for b in a + 1..literals.len() {
            let (clause_a, literal_a) = literals[a];
            let (clause_b, literal_b) = literals[b];
            if clause_a != clause_b && literal_a != -literal_b {
                graph.get_mut(&a).unwrap().insert(b);
                graph.get_mut(&b).unwrap().insert(a);
            }
        }
    }

    Ok(CliqueInstance {
        graph,
        literals,
        k: formula.clauses().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorial::combinations;
    use crate::graph::is_clique;

    fn has_clique_of_size(instance: &CliqueInstance) -> bool {
        let ids: Vec<usize> = (0..instance.literals.len()).collect();
        combinations(&ids, instance.k)
            .into_iter()
            .any(|combo| is_clique(&instance.graph, &combo))
    }

    #[test]
    fn test_course_example() {
        // (x1 ∨ ¬x2 ∨ x3) ∧ (¬x1 ∨ x2 ∨ x4) ∧ (¬x3 ∨ ¬x4 ∨ x1)
        let formula = CnfFormula::new(
            vec![vec![1, -2, 3], vec![-1, 2, 4], vec![-3, -4, 1]],
            4,
        )
        .unwrap();

        let instance = three_sat_to_clique(&formula).unwrap();

        assert_eq!(instance.k, 3);
        assert_eq!(instance.literals.len(), 9);
        assert!(formula.solve_brute_force().is_some());
        assert!(has_clique_of_size(&instance));
    }

    #[test]
    fn test_unsatisfiable_formula_has_no_clique() {
        // (x1 ∨ x1 ∨ x1) ∧ (¬x1 ∨ ¬x1 ∨ ¬x1): every cross-clause pair is
        // complementary, so the graph has no edge at all.
        let formula = CnfFormula::new(vec![vec![1, 1, 1], vec![-1, -1, -1]], 1).unwrap();

        let instance = three_sat_to_clique(&formula).unwrap();

        assert!(formula.solve_brute_force().is_none());
        assert!(!has_clique_of_size(&instance));
    }

    #[test]
    fn test_no_edges_inside_a_clause() {
        let formula = CnfFormula::new(vec![vec![1, 2, 3], vec![1, 2, 3]], 3).unwrap();
        let instance = three_sat_to_clique(&formula).unwrap();

        for a in 0..3 {
            for b in 0..3 {
                assert!(!instance.graph[&a].contains(&b));
            }
        }
    }

    #[test]
    fn test_wrong_clause_width_rejected() {
        let formula = CnfFormula::new(vec![vec![1, 2]], 2).unwrap();
        let err = three_sat_to_clique(&formula).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
