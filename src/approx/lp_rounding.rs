use log::debug;

use crate::error::{Error, Result};
use crate::optimization::{LinearProgram, LpSolver, SimplexSolver};

use super::validate_edge_list;

/// Fractional values at least this large round into the cover. Slightly
/// below 1/2 so that an exact half reported with rounding error still
/// qualifies.
const ROUNDING_THRESHOLD: f64 = 0.5 - 1e-9;

/// Implements the LP-rounding 2-approximation for the Vertex Cover problem.
///
/// The integer program is relaxed to the linear program
/// minimize Σ x_i subject to x_u + x_v ≥ 1 per edge and 0 ≤ x_i ≤ 1,
/// solved to a fractional optimum, and every vertex with x_i ≥ 1/2 is taken.
/// For each edge at least one endpoint reaches 1/2, so the rounded set is a
/// cover, and its size is at most twice the LP optimum and therefore at most
/// twice the minimum cover.
///
/// # Arguments
///
/// * `edges` - The edges as (u, v) index pairs
/// * `num_vertices` - Number of vertices; indices range over 0..num_vertices
///
/// # Returns
///
/// * The cover as ascending vertex indices
///
/// # Errors
///
/// * `Error::InvalidInput` if an endpoint is out of range or the graph has
///   no vertices
/// * `Error::Solver` if the LP solve fails or the rounded solution does not
///   cover every edge
pub fn lp_rounding_vertex_cover(
    edges: &[(usize, usize)],
    num_vertices: usize,
) -> Result<Vec<usize>> {
    lp_rounding_vertex_cover_with(edges, num_vertices, &SimplexSolver::default())
}

/// Same as [`lp_rounding_vertex_cover`], solving the relaxation with the
/// injected solver.
pub fn lp_rounding_vertex_cover_with(
    edges: &[(usize, usize)],
    num_vertices: usize,
    solver: &dyn LpSolver,
) -> Result<Vec<usize>> {
    validate_edge_list(edges, num_vertices)?;

    // minimize Σ x_i subject to x_u + x_v ≥ 1 per edge, 0 ≤ x_i ≤ 1.
    // The ≥ rows are entered negated; the upper bounds are ordinary rows.
    let mut constraints = Vec::with_capacity(edges.len() + num_vertices);
    let mut rhs = Vec::with_capacity(edges.len() + num_vertices);
    for &(u, v) in edges {
        let mut row = vec![0.0; num_vertices];
        row[u] -= 1.0;
        row[v] -= 1.0;
        constraints.push(row);
        rhs.push(-1.0);
    }
    for i in 0..num_vertices {
        let mut row = vec![0.0; num_vertices];
        row[i] = 1.0;
        constraints.push(row);
        rhs.push(1.0);
    }

    let lp = LinearProgram {
        objective: vec![1.0; num_vertices],
        constraints,
        rhs,
    };

    let solution = solver.minimize(&lp)?;
    debug!(
        "vertex cover LP optimum {} after {} pivots",
        solution.optimal_value, solution.iterations
    );

    let cover: Vec<usize> = (0..num_vertices)
        .filter(|&i| solution.optimal_point[i] >= ROUNDING_THRESHOLD)
        .collect();

    // The threshold argument guarantees coverage for an exact fractional
    // optimum; anything else is a solver failure and is reported as one.
    for &(u, v) in edges {
        if !cover.contains(&u) && !cover.contains(&v) {
            return Err(Error::Solver(format!(
                "rounded cover leaves edge ({}, {}) uncovered",
                u, v
            )));
        }
    }

    Ok(cover)
}
