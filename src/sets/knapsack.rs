/// Maximum total value of a 0/1 knapsack, by the classic value table rolled
/// into a single row.
pub fn knapsack_max_value(values: &[usize], weights: &[usize], capacity: usize) -> usize {
    assert_eq!(
        values.len(),
        weights.len(),
        "Each item must have a value and a weight"
    );

    let mut best = vec![0usize; capacity + 1];
    for (i, &value) in values.iter().enumerate() {
        let weight = weights[i];
        if weight > capacity {
            continue;
        }
        for cap in (weight..=capacity).rev() {
            best[cap] = best[cap].max(best[cap - weight] + value);
        }
    }
    best[capacity]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_example() {
        let values = [60, 100, 120];
        let weights = [10, 20, 30];
        assert_eq!(knapsack_max_value(&values, &weights, 50), 220);
    }

    #[test]
    fn test_nothing_fits() {
        assert_eq!(knapsack_max_value(&[10, 20], &[5, 6], 4), 0);
    }

    #[test]
    fn test_everything_fits() {
        assert_eq!(knapsack_max_value(&[1, 2, 3], &[1, 1, 1], 10), 6);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(knapsack_max_value(&[5], &[1], 0), 0);
    }

    #[test]
    #[should_panic(expected = "Each item must have a value and a weight")]
    fn test_mismatched_lengths_panic() {
        knapsack_max_value(&[1, 2], &[1], 5);
    }
}
