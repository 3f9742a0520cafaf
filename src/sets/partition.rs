use crate::sets::subset_sum::has_subset_sum;

/// Decides whether `nums` can be split into two subsets of equal sum. An
/// odd total rules the split out immediately; otherwise this is subset sum
/// against half the total.
pub fn can_partition(nums: &[usize]) -> bool {
    let total: usize = nums.iter().sum();
    if total % 2 != 0 {
        return false;
    }
    has_subset_sum(nums, total / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_example() {
        assert!(can_partition(&[1, 5, 11, 5]));
    }

    #[test]
    fn test_odd_total() {
        assert!(!can_partition(&[1, 2, 4]));
    }

    #[test]
    fn test_even_total_without_partition() {
        assert!(!can_partition(&[1, 1, 4]));
    }

    #[test]
    fn test_empty() {
        assert!(can_partition(&[]));
    }
}
