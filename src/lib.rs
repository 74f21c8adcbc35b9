//! An in-memory ordered set index: a membership map paired with an
//! augmented skip list, giving O(log n) rank lookups and score-range scans
//! alongside O(1) membership and score checks.
//!
//! The core type is [`OrderedSet`]; score and member comparisons run
//! through the [`capability`] traits rather than requiring `S: Ord` or
//! `M: Ord` directly, so callers can plug in their own notion of order.

pub mod capability;
mod dump;
pub mod error;
pub mod ordered_set;
pub mod range;
mod skiplist;

pub use capability::{MemberOrder, NaturalOrder, NaturalScore, ScoreCapability};
pub use error::OrderedSetError;
pub use ordered_set::{Entry, OrderedSet};
pub use range::ScoreRange;
