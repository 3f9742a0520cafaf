use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};

/// Implements the single-flip local-search approximation for weighted
/// MAX-CUT.
///
/// Starting from a random bipartition of roughly half the vertices, every
/// pass visits the vertices in sorted order and immediately flips any vertex
/// whose move strictly increases the crossing weight. The search stops after
/// a full pass without an improving flip; any such local optimum cuts at
/// least half of the graph's total edge weight.
///
/// The graph is an adjacency map `vertex -> (neighbor -> weight)`. Edges are
/// expected in both directions with equal weight; this is assumed, not
/// enforced. For a fixed `seed` the result is reproducible. Different seeds
/// may reach different local optima.
///
/// # Arguments
///
/// * `graph` - The weighted adjacency map
/// * `seed` - Seed for the initial random partition
///
/// # Returns
///
/// * One side of the bipartition; the complement is the other side
///
/// # Errors
///
/// * `Error::InvalidInput` if the graph has no vertices or carries a
///   negative or non-finite edge weight
pub fn local_search_max_cut<V>(
    graph: &HashMap<V, HashMap<V, f64>>,
    seed: u64,
) -> Result<HashSet<V>>
where
    V: Clone + Eq + Hash + Ord,
{
    if graph.is_empty() {
        return Err(Error::InvalidInput("graph has no vertices".into()));
    }
    for neighbors in graph.values() {
        for &w in neighbors.values() {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "edge weight {} is negative or not finite",
                    w
                )));
            }
        }
    }

    // Sorted vertex order keeps both the sampling and the pass order
    // reproducible for a fixed seed.
    let mut nodes: Vec<&V> = graph.keys().collect();
    nodes.sort();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut partition: HashSet<V> = nodes
        .choose_multiple(&mut rng, nodes.len() / 2)
        .map(|&v| v.clone())
        .collect();

    let mut pass = 0;
    let mut improved = true;
    while improved {
        improved = false;
        pass += 1;
        for &node in &nodes {
            let side = partition.contains(node);
            let mut gain = 0.0;
            for (neighbor, &w) in &graph[node] {
                if partition.contains(neighbor) == side {
                    // Same side: flipping puts this edge into the cut.
                    gain += w;
                } else {
                    gain -= w;
                }
            }
            if gain > 0.0 {
                if side {
                    partition.remove(node);
                } else {
                    partition.insert(node.clone());
                }
                improved = true;
            }
        }
        debug!("max-cut pass {}: improved = {}", pass, improved);
    }

    Ok(partition)
}

/// Total weight of the edges crossing the given bipartition. The adjacency
/// map stores each undirected edge twice, so the directed sum is halved.
pub fn cut_weight<V>(graph: &HashMap<V, HashMap<V, f64>>, partition: &HashSet<V>) -> f64
where
    V: Eq + Hash,
{
    let mut total = 0.0;
    for (v, neighbors) in graph {
        for (u, &w) in neighbors {
            if partition.contains(v) != partition.contains(u) {
                total += w;
            }
        }
    }
    total / 2.0
}
