use thiserror::Error;

/// Why a sequence could not be turned into a [`Tree`][crate::Tree] by
/// [`Tree::try_from_sorted`][crate::Tree::try_from_sorted].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The value at `index` is not strictly greater than the one before it.
    /// This covers both unsorted input and duplicates.
    #[error("values are not strictly ascending at index {index}")]
    NotStrictlyAscending {
        /// Position of the first offending value.
        index: usize,
    },
}
