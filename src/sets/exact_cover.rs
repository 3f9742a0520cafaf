use std::collections::HashSet;
use std::hash::Hash;

use crate::combinatorial::combinations;

/// Finds a smallest exact set cover by trying combinations of increasing
/// size. Returns indices into `subsets`, or `None` when no combination
/// covers the universe. Exponential; meant for the small instances used in
/// coursework.
pub fn exact_set_cover<T>(universe: &HashSet<T>, subsets: &[HashSet<T>]) -> Option<Vec<usize>>
where
    T: Clone + Eq + Hash,
{
    if universe.is_empty() {
        return Some(Vec::new());
    }

    let indices: Vec<usize> = (0..subsets.len()).collect();
    for size in 1..=subsets.len() {
        for combo in combinations(&indices, size) {
            let mut covered: HashSet<&T> = HashSet::new();
            for &idx in &combo {
                covered.extend(subsets[idx].iter());
            }
            if universe.iter().all(|e| covered.contains(e)) {
                return Some(combo);
            }
        }
    }
    None
}
