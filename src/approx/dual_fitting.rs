use log::debug;

use crate::error::Result;

use super::validate_edge_list;

/// Implements the greedy dual-fitting 2-approximation for the Vertex Cover
/// problem.
///
/// Edges are processed in their given order. An edge whose endpoints are
/// both still unsettled charges one unit to each endpoint's dual weight and
/// adds both to the cover; edges with a settled endpoint are skipped. A
/// final scan settles any edge a pathological ordering might have left
/// exposed, so the returned cover is feasible for every edge ordering. The
/// accumulated dual weights form the fractional certificate behind the
/// 2x size bound.
///
/// # Arguments
///
/// * `edges` - The edges as (u, v) index pairs, processed in order
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
pub fn dual_fitting_vertex_cover(
    edges: &[(usize, usize)],
    num_vertices: usize,
) -> Result<Vec<usize>> {
    let (cover, _duals) = dual_fitting_vertex_cover_with_duals(edges, num_vertices)?;
    Ok(cover)
}

/// Same as [`dual_fitting_vertex_cover`], additionally returning the
/// per-vertex dual weights.
pub fn dual_fitting_vertex_cover_with_duals(
    edges: &[(usize, usize)],
    num_vertices: usize,
) -> Result<(Vec<usize>, Vec<f64>)> {
    validate_edge_list(edges, num_vertices)?;

    let mut covered = vec![false; num_vertices];
    let mut duals = vec![0.0; num_vertices];
    let mut cover = Vec::new();

    for &(u, v) in edges {
        if !covered[u] && !covered[v] {
            settle(u, v, &mut covered, &mut duals, &mut cover);
        }
    }

    // Feasibility is re-checked rather than assumed from the processing
    // order; any edge still exposed is settled here.
    for &(u, v) in edges {
        if !covered[u] && !covered[v] {
            debug!("dual fitting: settling edge ({}, {}) in the final scan", u, v);
            settle(u, v, &mut covered, &mut duals, &mut cover);
        }
    }

    cover.sort_unstable();
    Ok((cover, duals))
}

fn settle(
    u: usize,
    v: usize,
    covered: &mut [bool],
    duals: &mut [f64],
    cover: &mut Vec<usize>,
) {
    duals[u] += 1.0;
    duals[v] += 1.0;
    covered[u] = true;
    covered[v] = true;
    cover.push(u);
    if v != u {
        cover.push(v);
    }
}
