pub mod checks;
pub mod coloring;
pub mod hamiltonian;
pub mod isomorphism;
pub mod tsp;

pub use checks::{is_clique, is_independent_set, is_vertex_cover, verify_clique};
pub use coloring::{is_bipartite, is_k_colorable};
pub use hamiltonian::{find_hamiltonian_cycle, has_hamiltonian_cycle};
pub use isomorphism::{are_isomorphic, is_subgraph_isomorphic};
pub use tsp::tsp_brute_force;
