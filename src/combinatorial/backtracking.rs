/// Returns all permutations of the input slice, in lexicographic order of
/// the input indices.
///
/// # Example
/// ```
/// use np_algos::combinatorial::permutations;
///
/// let perms = permutations(&[1, 2, 3]);
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![1, 2, 3]);
/// ```
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(items.len());
    let mut used = vec![false; items.len()];
    extend_permutation(items, &mut used, &mut current, &mut results);
    results
}

fn extend_permutation<T: Clone>(
    items: &[T],
    used: &mut [bool],
    current: &mut Vec<T>,
    results: &mut Vec<Vec<T>>,
) {
    if current.len() == items.len() {
        results.push(current.clone());
        return;
    }
    for i in 0..items.len() {
        if !used[i] {
            used[i] = true;
            current.push(items[i].clone());
            extend_permutation(items, used, current, results);
            current.pop();
            used[i] = false;
        }
    }
}

/// Returns all `k`-element combinations of the input slice, in lexicographic
/// order of the input indices.
///
/// # Example
/// ```
/// use np_algos::combinatorial::combinations;
///
/// let combos = combinations(&[1, 2, 3, 4], 2);
/// assert_eq!(combos.len(), 6);
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    if k > items.len() {
        return results;
    }
    let mut chosen = Vec::with_capacity(k);
    extend_combination(items, 0, k, &mut chosen, &mut results);
    results
}

fn extend_combination<T: Clone>(
    items: &[T],
    start: usize,
    k: usize,
    chosen: &mut Vec<T>,
    results: &mut Vec<Vec<T>>,
) {
    if chosen.len() == k {
        results.push(chosen.clone());
        return;
    }
    if items.len() - start < k - chosen.len() {
        return;
    }
    for i in start..items.len() {
        chosen.push(items[i].clone());
        extend_combination(items, i + 1, k, chosen, results);
        chosen.pop();
    }
}
