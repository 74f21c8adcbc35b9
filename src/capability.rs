//! External collaborators the ordered set depends on: a total order plus
//! addition over scores, and a total order over members.
//!
//! Neither capability is a separate data structure — they're the contract
//! the skip list compares through, so callers with exotic score types
//! (money, vectors, anything with a caller-defined order) never have to
//! teach the core a new comparison rule.

use std::cmp::Ordering;
use std::ops::Add;

use crate::error::OrderedSetError;

/// Total order plus addition over a score type `S`.
///
/// The skip list never compares scores any other way than through
/// [`ScoreCapability::compare`] — there is no built-in float or integer
/// special-casing, per the "no type-specific score semantics" non-goal.
pub trait ScoreCapability<S> {
    /// Three-way comparison between two scores.
    fn compare(&self, a: &S, b: &S) -> Ordering;

    /// Produce a fresh score representing `a + b`, used only by
    /// `increment_by`. Scores are immutable once indexed, so this must
    /// never mutate `a` or `b` in place.
    ///
    /// Returns [`OrderedSetError::UnsupportedIncrement`] if this score type
    /// has no meaningful addition for the given operands (for example, a
    /// capability that only supports non-negative deltas asked to apply a
    /// negative one).
    fn sum(&self, a: &S, b: &S) -> Result<S, OrderedSetError>;
}

/// Total order over a member type `M`, used to break ties between members
/// sharing a score.
///
/// Equality under this order must coincide with the identity used by the
/// membership map (`M: Eq` for whatever `M` the caller picks).
pub trait MemberOrder<M> {
    /// Three-way comparison between two members.
    fn compare(&self, a: &M, b: &M) -> Ordering;
}

/// The natural ordering for any score type that already has one.
///
/// This is a convenience, not an alternate implementation: it's the same
/// generic [`crate::OrderedSet`] underneath, just instantiated with a
/// capability that defers to `PartialOrd`/`Add`. Comparisons that can't be
/// ordered (e.g. `NaN`) fall back to `Ordering::Equal` rather than panicking,
/// matching how the source treats unordered doubles as "caller's problem".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalScore;

impl<S> ScoreCapability<S> for NaturalScore
where
    S: PartialOrd + Add<Output = S> + Clone,
{
    fn compare(&self, a: &S, b: &S) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }

    fn sum(&self, a: &S, b: &S) -> Result<S, OrderedSetError> {
        Ok(a.clone() + b.clone())
    }
}

/// The natural ordering for any member type that already has one (`Ord`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<M> MemberOrder<M> for NaturalOrder
where
    M: Ord,
{
    fn compare(&self, a: &M, b: &M) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_score_orders_like_the_type() {
        let cap = NaturalScore;
        assert_eq!(ScoreCapability::<i64>::compare(&cap, &1, &2), Ordering::Less);
        assert_eq!(ScoreCapability::<i64>::compare(&cap, &2, &2), Ordering::Equal);
        assert_eq!(cap.sum(&2, &3).unwrap(), 5);
    }

    #[test]
    fn natural_score_treats_nan_as_equal() {
        let cap = NaturalScore;
        assert_eq!(cap.compare(&f64::NAN, &1.0), Ordering::Equal);
    }

    #[test]
    fn natural_order_matches_ord() {
        let ord = NaturalOrder;
        assert_eq!(ord.compare(&"a", &"b"), Ordering::Less);
    }
}
