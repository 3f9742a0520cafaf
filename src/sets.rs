pub mod exact_cover;
pub mod knapsack;
pub mod partition;
pub mod subset_sum;

pub use exact_cover::exact_set_cover;
pub use knapsack::knapsack_max_value;
pub use partition::can_partition;
pub use subset_sum::has_subset_sum;
