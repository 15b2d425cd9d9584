//! Error type shared by the generator, the strategies and the selector.
//!
//! Every variant describes a caller-supplied argument that violates a
//! contract. Nothing here is transient: retrying with the same inputs
//! yields the same error.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SolveError>;

/// Invalid-argument conditions raised synchronously at the offending call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The selector was asked for a strategy it does not know.
    #[error("unknown strategy '{name}': expected one of {expected}")]
    InvalidStrategy { name: String, expected: String },

    #[error("vertex {vertex} is out of range for a graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("start and end must be distinct vertices (both are {0})")]
    SameEndpoints(usize),

    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("adjacency entry ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidEntry { row: usize, col: usize, value: u8 },

    /// The fixed-fraction search needs `N = 3n`.
    #[error("exhaustive search needs a vertex count divisible by 3, got {0}")]
    VertexCountNotDivisibleByThree(usize),

    #[error("block size must be at least 1")]
    EmptyBlock,

    /// The subset table would need more than `limit` mask bits.
    #[error("component of {size} vertices exceeds the subset DP limit of {limit}")]
    ComponentTooLarge { size: usize, limit: usize },
}

impl SolveError {
    /// All variants are invalid-argument conditions; callers matching on the
    /// coarse category can use this instead of listing variants.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }

    pub(crate) fn invalid_strategy<'a, I>(name: &str, known: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let expected = known.into_iter().collect::<Vec<_>>().join(", ");
        Self::InvalidStrategy {
            name: name.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolveError;

    #[test]
    fn invalid_strategy_lists_known_names() {
        let err = SolveError::invalid_strategy("greedy", ["component-pruned", "dp", "exhaustive"]);
        assert_eq!(
            err.to_string(),
            "unknown strategy 'greedy': expected one of component-pruned, dp, exhaustive"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = SolveError::VertexOutOfRange {
            vertex: 12,
            vertices: 9,
        };
        assert!(err.to_string().contains("12"));
        assert!(SolveError::SameEndpoints(4).to_string().contains('4'));
    }
}
