use thiserror::Error;

/// Failure conditions shared by the algorithms in this crate.
///
/// Each variant is a distinct, inspectable condition so callers and test
/// harnesses can match on the specific kind of failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input failed validation before any algorithmic work began.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No combination of the given subsets covers the universe.
    #[error("universe cannot be covered by the given subsets")]
    Uncoverable,

    /// The LP solver failed to produce a usable fractional solution.
    #[error("LP solver failed: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
