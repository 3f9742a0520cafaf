use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Returns true if every pair of the given vertices is adjacent. Vertices
/// missing from the graph fail the check.
pub fn is_clique<V>(graph: &HashMap<V, HashSet<V>>, vertices: &[V]) -> bool
where
    V: Eq + Hash,
{
    for (i, u) in vertices.iter().enumerate() {
        for v in &vertices[i + 1..] {
            if !adjacent(graph, u, v) {
                return false;
            }
        }
    }
    true
}

/// NP verifier for CLIQUE: the candidate must consist of exactly `k`
/// distinct vertices forming a clique.
pub fn verify_clique<V>(graph: &HashMap<V, HashSet<V>>, k: usize, subset: &[V]) -> bool
where
    V: Eq + Hash,
{
    if subset.len() != k {
        return false;
    }
    let distinct: HashSet<&V> = subset.iter().collect();
    distinct.len() == k && is_clique(graph, subset)
}

/// Returns true if every edge of the graph has at least one endpoint in
/// `cover`.
pub fn is_vertex_cover<V>(graph: &HashMap<V, HashSet<V>>, cover: &HashSet<V>) -> bool
where
    V: Eq + Hash,
{
    for (u, neighbors) in graph {
        for v in neighbors {
            if !cover.contains(u) && !cover.contains(v) {
                return false;
            }
        }
    }
    true
}

/// Returns true if no two of the given vertices are adjacent.
pub fn is_independent_set<V>(graph: &HashMap<V, HashSet<V>>, vertices: &[V]) -> bool
where
    V: Eq + Hash,
{
    for (i, u) in vertices.iter().enumerate() {
        for v in &vertices[i + 1..] {
            if adjacent(graph, u, v) {
                return false;
            }
        }
    }
    true
}

fn adjacent<V>(graph: &HashMap<V, HashSet<V>>, u: &V, v: &V) -> bool
where
    V: Eq + Hash,
{
    graph.get(u).map_or(false, |neighbors| neighbors.contains(v))
}
