pub mod dual_fitting;
pub mod greedy_set_cover;
pub mod local_search;
pub mod lp_rounding;
pub mod primal_dual;

pub use dual_fitting::{dual_fitting_vertex_cover, dual_fitting_vertex_cover_with_duals};
pub use greedy_set_cover::greedy_set_cover;
pub use local_search::{cut_weight, local_search_max_cut};
pub use lp_rounding::{lp_rounding_vertex_cover, lp_rounding_vertex_cover_with};
pub use primal_dual::{primal_dual_vertex_cover, primal_dual_vertex_cover_with_duals};

use crate::error::{Error, Result};

/// Checks that the graph has at least one vertex and that every edge
/// endpoint lies in `0..num_vertices`.
pub(crate) fn validate_edge_list(edges: &[(usize, usize)], num_vertices: usize) -> Result<()> {
    if num_vertices == 0 {
        return Err(Error::InvalidInput("graph has no vertices".into()));
    }
    for &(u, v) in edges {
        if u >= num_vertices || v >= num_vertices {
            return Err(Error::InvalidInput(format!(
                "edge ({}, {}) references a vertex outside 0..{}",
                u, v, num_vertices
            )));
        }
    }
    Ok(())
}
