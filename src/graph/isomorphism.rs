use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Decides whether two graphs are isomorphic, by backtracking over
/// degree-compatible vertex assignments. Exponential worst case; meant for
/// the small instances used in coursework.
pub fn are_isomorphic<V>(g1: &HashMap<V, HashSet<V>>, g2: &HashMap<V, HashSet<V>>) -> bool
where
    V: Eq + Hash + Ord,
{
    g1.len() == g2.len() && degree_multiset(g1) == degree_multiset(g2) && embed(g1, g2)
}

/// Decides whether `host` contains an induced subgraph isomorphic to
/// `pattern`: an injective vertex mapping preserving both adjacency and
/// non-adjacency.
pub fn is_subgraph_isomorphic<V>(
    host: &HashMap<V, HashSet<V>>,
    pattern: &HashMap<V, HashSet<V>>,
) -> bool
where
    V: Eq + Hash + Ord,
{
    pattern.len() <= host.len() && embed(pattern, host)
}

fn degree_multiset<V>(graph: &HashMap<V, HashSet<V>>) -> Vec<usize>
where
    V: Eq + Hash,
{
    let mut degrees: Vec<usize> = graph.values().map(|n| n.len()).collect();
    degrees.sort_unstable();
    degrees
}

fn embed<V>(pattern: &HashMap<V, HashSet<V>>, host: &HashMap<V, HashSet<V>>) -> bool
where
    V: Eq + Hash + Ord,
{
    let mut pattern_nodes: Vec<&V> = pattern.keys().collect();
    pattern_nodes.sort();
    let mut host_nodes: Vec<&V> = host.keys().collect();
    host_nodes.sort();

    let mut mapping: HashMap<&V, &V> = HashMap::new();
    extend_embedding(pattern, host, &pattern_nodes, &host_nodes, 0, &mut mapping)
}

fn extend_embedding<'a, V>(
    pattern: &'a HashMap<V, HashSet<V>>,
    host: &'a HashMap<V, HashSet<V>>,
    pattern_nodes: &[&'a V],
    host_nodes: &[&'a V],
    i: usize,
    mapping: &mut HashMap<&'a V, &'a V>,
) -> bool
where
    V: Eq + Hash + Ord,
{
    if i == pattern_nodes.len() {
        return true;
    }
    let p = pattern_nodes[i];

    for &h in host_nodes {
        if mapping.values().any(|&mapped| mapped == h) {
            continue;
        }
        if pattern[p].len() > host[h].len() {
            continue;
        }

        let consistent = pattern_nodes[..i].iter().all(|&q| {
            let adjacent_in_pattern = pattern[p].contains(q);
            let adjacent_in_host = host[h].contains(mapping[q]);
            adjacent_in_pattern == adjacent_in_host
        });

        if consistent {
            mapping.insert(p, h);
            if extend_embedding(pattern, host, pattern_nodes, host_nodes, i + 1, mapping) {
                return true;
            }
            mapping.remove(p);
        }
    }
    false
}
