use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Searches for a Hamiltonian cycle by backtracking from the smallest
/// vertex.
///
/// Returns the cycle as a vertex sequence whose last element is adjacent to
/// the first, or `None` when no such cycle exists. Graphs with fewer than
/// three vertices cannot carry a simple cycle and always return `None`.
/// Neighbor candidates are tried in sorted order, so the answer is
/// deterministic.
pub fn find_hamiltonian_cycle<V>(graph: &HashMap<V, HashSet<V>>) -> Option<Vec<V>>
where
    V: Clone + Eq + Hash + Ord,
{
    let n = graph.len();
    if n < 3 {
        return None;
    }

    let start = graph.keys().min()?;
    let mut path = vec![start.clone()];
    let mut visited = HashSet::from([start.clone()]);
    if extend_cycle(graph, start, start, &mut path, &mut visited, n) {
        Some(path)
    } else {
        None
    }
}

/// Returns true if the graph contains a Hamiltonian cycle.
pub fn has_hamiltonian_cycle<V>(graph: &HashMap<V, HashSet<V>>) -> bool
where
    V: Clone + Eq + Hash + Ord,
{
    find_hamiltonian_cycle(graph).is_some()
}

fn extend_cycle<V>(
    graph: &HashMap<V, HashSet<V>>,
    start: &V,
    current: &V,
    path: &mut Vec<V>,
    visited: &mut HashSet<V>,
    n: usize,
) -> bool
where
    V: Clone + Eq + Hash + Ord,
{
    let neighbors = match graph.get(current) {
        Some(neighbors) => neighbors,
        None => return false,
    };

    if path.len() == n {
        return neighbors.contains(start);
    }

    let mut candidates: Vec<&V> = neighbors
        .iter()
        .filter(|v| !visited.contains(*v))
        .collect();
    candidates.sort();

    for next in candidates {
        visited.insert(next.clone());
        path.push(next.clone());
        if extend_cycle(graph, start, next, path, visited, n) {
            return true;
        }
        path.pop();
        visited.remove(next);
    }
    false
}
