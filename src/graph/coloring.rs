use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Decides whether the graph admits a proper coloring with at most `k`
/// colors, by backtracking over the vertices in sorted order.
pub fn is_k_colorable<V>(graph: &HashMap<V, HashSet<V>>, k: usize) -> bool
where
    V: Eq + Hash + Ord,
{
    if graph.is_empty() {
        return true;
    }
    if k == 0 {
        return false;
    }
    let mut nodes: Vec<&V> = graph.keys().collect();
    nodes.sort();
    let mut colors: HashMap<&V, usize> = HashMap::new();
    assign_color(graph, &nodes, 0, k, &mut colors)
}

fn assign_color<'a, V>(
    graph: &'a HashMap<V, HashSet<V>>,
    nodes: &[&'a V],
    i: usize,
    k: usize,
    colors: &mut HashMap<&'a V, usize>,
) -> bool
where
    V: Eq + Hash + Ord,
{
    if i == nodes.len() {
        return true;
    }
    let node = nodes[i];
    let neighbors = &graph[node];
    for color in 0..k {
        if neighbors.iter().all(|n| colors.get(n) != Some(&color)) {
            colors.insert(node, color);
            if assign_color(graph, nodes, i + 1, k, colors) {
                return true;
            }
            colors.remove(node);
        }
    }
    false
}

/// Decides whether the vertex set splits into two sides with every edge
/// crossing between them, via iterative DFS 2-coloring.
pub fn is_bipartite<V>(graph: &HashMap<V, HashSet<V>>) -> bool
where
    V: Eq + Hash,
{
    let mut side: HashMap<&V, bool> = HashMap::new();
    for start in graph.keys() {
        if side.contains_key(start) {
            continue;
        }
        side.insert(start, false);
        let mut stack = vec![(start, false)];
        while let Some((u, color)) = stack.pop() {
            for v in graph.get(u).into_iter().flatten() {
                match side.get(v) {
                    Some(&c) if c == color => return false,
                    Some(_) => {}
                    None => {
                        side.insert(v, !color);
                        stack.push((v, !color));
                    }
                }
            }
        }
    }
    true
}
