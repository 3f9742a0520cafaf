use std::collections::HashMap;
use std::hash::Hash;

use crate::combinatorial::permutations;

/// Exhaustive Travelling Salesman search over a weighted adjacency map.
///
/// Fixes the smallest vertex as the tour anchor and tries every permutation
/// of the remaining vertices, keeping the cheapest tour that closes back to
/// the anchor. Tours that hit a missing edge are discarded. Returns `None`
/// when no permutation yields a closed tour. Factorial running time; meant
/// for the small instances used in coursework.
pub fn tsp_brute_force<V>(graph: &HashMap<V, HashMap<V, f64>>) -> Option<(Vec<V>, f64)>
where
    V: Clone + Eq + Hash + Ord,
{
    if graph.is_empty() {
        return None;
    }

    let mut nodes: Vec<V> = graph.keys().cloned().collect();
    nodes.sort();
    let anchor = nodes.remove(0);

    if nodes.is_empty() {
        return Some((vec![anchor], 0.0));
    }

    let mut best: Option<(Vec<V>, f64)> = None;
    for perm in permutations(&nodes) {
        let mut tour = Vec::with_capacity(perm.len() + 1);
        tour.push(anchor.clone());
        tour.extend(perm);
        if let Some(cost) = tour_cost(graph, &tour) {
            match &best {
                Some((_, best_cost)) if *best_cost <= cost => {}
                _ => best = Some((tour, cost)),
            }
        }
    }
    best
}

fn tour_cost<V>(graph: &HashMap<V, HashMap<V, f64>>, tour: &[V]) -> Option<f64>
where
    V: Eq + Hash,
{
    let mut cost = 0.0;
    for i in 0..tour.len() {
        let from = &tour[i];
        let to = &tour[(i + 1) % tour.len()];
        cost += *graph.get(from)?.get(to)?;
    }
    Some(cost)
}
