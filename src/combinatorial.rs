pub mod backtracking;

pub use backtracking::{combinations, permutations};
