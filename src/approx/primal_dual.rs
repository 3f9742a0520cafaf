use std::collections::HashSet;

use crate::error::Result;

use super::validate_edge_list;

/// Implements the primal-dual 2-approximation for the Vertex Cover problem.
///
/// While uncovered edges remain, the first one is selected and its dual
/// variable raised until both endpoint constraints are tight; both endpoints
/// enter the cover and every edge they touch is discarded. The cover is
/// feasible by construction and at most twice the minimum, since each raised
/// dual pays for both vertices it brought in.
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
pub fn primal_dual_vertex_cover(
    edges: &[(usize, usize)],
    num_vertices: usize,
) -> Result<Vec<usize>> {
    let (cover, _duals) = primal_dual_vertex_cover_with_duals(edges, num_vertices)?;
    Ok(cover)
}

/// Same as [`primal_dual_vertex_cover`], additionally returning the per-edge
/// dual values that certify the approximation bound.
pub fn primal_dual_vertex_cover_with_duals(
    edges: &[(usize, usize)],
    num_vertices: usize,
) -> Result<(Vec<usize>, Vec<f64>)> {
    validate_edge_list(edges, num_vertices)?;

    let mut cover = HashSet::new();
    let mut duals = vec![0.0; edges.len()];
    let mut uncovered: Vec<usize> = (0..edges.len()).collect();

    while let Some(&idx) = uncovered.first() {
        let (u, v) = edges[idx];
        // Raising this edge's dual makes both endpoint constraints tight.
        duals[idx] = 1.0;
        cover.insert(u);
        cover.insert(v);
        uncovered.retain(|&i| {
            let (a, b) = edges[i];
            !cover.contains(&a) && !cover.contains(&b)
        });
    }

    let mut cover: Vec<usize> = cover.into_iter().collect();
    cover.sort_unstable();
    Ok((cover, duals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_cover(edges: &[(usize, usize)], cover: &[usize]) {
        for &(u, v) in edges {
            assert!(
                cover.contains(&u) || cover.contains(&v),
                "edge ({}, {}) is uncovered",
                u,
                v
            );
        }
    }

    #[test]
    fn test_four_cycle() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
        let cover = primal_dual_vertex_cover(&edges, 4).unwrap();

        assert_is_cover(&edges, &cover);
        // Minimum cover has size 2; the schema stays within twice that.
        assert!(cover.len() <= 4);
    }

    #[test]
    fn test_four_cycle_duals() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
        let (cover, duals) = primal_dual_vertex_cover_with_duals(&edges, 4).unwrap();

        // Edge (0,1) settles first, covering (1,2) and (3,0); edge (2,3)
        // settles second.
        assert_eq!(cover, vec![0, 1, 2, 3]);
        assert_eq!(duals, vec![1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_star_graph() {
        let edges = vec![(0, 1), (0, 2), (0, 3), (0, 4)];
        let cover = primal_dual_vertex_cover(&edges, 5).unwrap();

        assert_is_cover(&edges, &cover);
        assert_eq!(cover, vec![0, 1]);
    }

    #[test]
    fn test_path() {
        let edges = vec![(0, 1), (1, 2), (2, 3)];
        let cover = primal_dual_vertex_cover(&edges, 4).unwrap();

        assert_is_cover(&edges, &cover);
        assert!(cover.len() <= 4);
    }

    #[test]
    fn test_empty_edge_list_gives_empty_cover() {
        let cover = primal_dual_vertex_cover(&[], 2).unwrap();
        assert!(cover.is_empty());
    }

    #[test]
    fn test_out_of_range_endpoint_rejected() {
        let err = primal_dual_vertex_cover(&[(7, 0)], 4).unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidInput(_)));
    }

    #[test]
    fn test_dual_sum_bounds_cover_size() {
        // Each settled edge pays for at most two cover vertices.
        let edges = vec![(0, 1), (2, 3), (4, 5), (1, 2)];
        let (cover, duals) = primal_dual_vertex_cover_with_duals(&edges, 6).unwrap();

        let dual_sum: f64 = duals.iter().sum();
        assert!(cover.len() as f64 <= 2.0 * dual_sum);
    }
}
