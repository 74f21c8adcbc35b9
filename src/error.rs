use thiserror::Error;

/// Errors surfaced by [`crate::OrderedSet`] operations.
///
/// Every other condition in the public API — an absent member, an empty or
/// inverted range, a no-op remove — is a sentinel return value, not an
/// error. See the ordered-set façade docs for the exact sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderedSetError {
    /// A caller-supplied argument violated a documented precondition
    /// (currently: a negative `offset` passed to `range_by_score`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The score capability's `sum` could not produce a value for the
    /// requested increment (e.g. the score type has no meaningful notion of
    /// subtraction and was asked to apply a negative delta).
    #[error("unsupported increment: {0}")]
    UnsupportedIncrement(String),
}
