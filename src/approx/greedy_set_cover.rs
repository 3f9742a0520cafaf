use std::collections::HashSet;
use std::hash::Hash;

use log::debug;

use crate::error::{Error, Result};

/// Implements the Greedy approximation algorithm for the Set Cover problem.
///
/// Each round re-examines the full collection and selects the subset that
/// covers the largest number of still-uncovered elements, breaking ties in
/// favor of the earliest subset in enumeration order. The selection is
/// within a ln(n) factor of the minimum number of subsets.
///
/// # Arguments
///
/// * `universe` - The elements that must be covered
/// * `subsets` - The candidate subsets, in tie-breaking priority order
///
/// # Returns
///
/// * The chosen subsets, in the order they were selected
///
/// # Errors
///
/// * `Error::InvalidInput` if the universe is empty
/// * `Error::Uncoverable` if some round covers no further element, i.e. the
///   subsets cannot cover the universe
pub fn greedy_set_cover<T>(
    universe: &HashSet<T>,
    subsets: &[HashSet<T>],
) -> Result<Vec<HashSet<T>>>
where
    T: Clone + Eq + Hash,
{
    if universe.is_empty() {
        return Err(Error::InvalidInput("universe is empty".into()));
    }

    let mut uncovered = universe.clone();
    let mut cover = Vec::new();

    while !uncovered.is_empty() {
        let mut best_idx = 0;
        let mut best_gain = 0;
        for (idx, set) in subsets.iter().enumerate() {
            let gain = set.intersection(&uncovered).count();
            if gain > best_gain {
                best_gain = gain;
                best_idx = idx;
            }
        }

        if best_gain == 0 {
            return Err(Error::Uncoverable);
        }

        debug!(
            "greedy set cover: set {} covers {} new elements",
            best_idx, best_gain
        );
        for e in &subsets[best_idx] {
            uncovered.remove(e);
        }
        cover.push(subsets[best_idx].clone());
    }

    Ok(cover)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elements: &[i32]) -> HashSet<i32> {
        elements.iter().cloned().collect()
    }

    #[test]
    fn test_course_example() {
        let universe: HashSet<_> = (1..=6).collect();
        let subsets = vec![set(&[1, 2, 3]), set(&[2, 4]), set(&[3, 4, 5]), set(&[5, 6])];

        let cover = greedy_set_cover(&universe, &subsets).unwrap();

        // Ties resolve to the earliest subset, so the selection is fixed.
        assert_eq!(
            cover,
            vec![set(&[1, 2, 3]), set(&[3, 4, 5]), set(&[5, 6])]
        );
    }

    #[test]
    fn test_cover_equals_universe() {
        let universe: HashSet<_> = (1..=8).collect();
        let subsets = vec![
            set(&[1, 2]),
            set(&[2, 3, 4, 5]),
            set(&[5, 6]),
            set(&[6, 7, 8]),
            set(&[1, 8]),
        ];

        let cover = greedy_set_cover(&universe, &subsets).unwrap();

        let mut covered = HashSet::new();
        for s in &cover {
            covered.extend(s.iter().cloned());
        }
        assert_eq!(covered, universe);
    }

    #[test]
    fn test_first_maximal_wins() {
        let universe: HashSet<_> = (1..=4).collect();
        let subsets = vec![set(&[1, 2]), set(&[3, 4])];

        let cover = greedy_set_cover(&universe, &subsets).unwrap();

        assert_eq!(cover, vec![set(&[1, 2]), set(&[3, 4])]);
    }

    #[test]
    fn test_uncoverable() {
        let universe = set(&[1, 2, 3]);
        let subsets = vec![set(&[1])];

        let err = greedy_set_cover(&universe, &subsets).unwrap_err();
        assert_eq!(err, Error::Uncoverable);
    }

    #[test]
    fn test_no_subsets() {
        let universe = set(&[1]);
        let subsets: Vec<HashSet<i32>> = Vec::new();

        let err = greedy_set_cover(&universe, &subsets).unwrap_err();
        assert_eq!(err, Error::Uncoverable);
    }

    #[test]
    fn test_empty_universe_rejected() {
        let universe: HashSet<i32> = HashSet::new();
        let subsets = vec![set(&[1])];

        let err = greedy_set_cover(&universe, &subsets).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_generic_elements() {
        let universe: HashSet<&str> = ["a", "b", "c"].into_iter().collect();
        let subsets = vec![
            ["a", "b"].into_iter().collect::<HashSet<_>>(),
            ["c"].into_iter().collect::<HashSet<_>>(),
        ];

        let cover = greedy_set_cover(&universe, &subsets).unwrap();
        assert_eq!(cover.len(), 2);
    }
}
