//! Debug snapshotting: render the full ascending order as text.
//!
//! Kept separate from [`crate::ordered_set`] because it's the one place
//! this crate reaches for `Debug` bounds — every other operation works for
//! any `M`/`S` the capabilities accept.

use std::fmt::Write as _;

use crate::capability::{MemberOrder, ScoreCapability};
use crate::skiplist::SkipList;

/// Lines of the form `{rank:i, obj:m, score:s}`, one per member, in
/// ascending order. Diagnostic only — no format guarantee beyond that.
pub(crate) fn dump<M, S, C, O>(list: &SkipList<M, S, C, O>) -> String
where
    M: std::fmt::Debug,
    S: std::fmt::Debug,
    C: ScoreCapability<S>,
    O: MemberOrder<M>,
{
    let mut out = String::new();
    for (i, (member, score)) in list.iter().enumerate() {
        let _ = writeln!(out, "{{rank:{i}, obj:{member:?}, score:{score:?}}}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{NaturalOrder, NaturalScore};

    #[test]
    fn dump_preserves_ascending_order() {
        let mut list: SkipList<i64, i64, NaturalScore, NaturalOrder> =
            SkipList::with_seed(NaturalScore, NaturalOrder, 3);
        list.insert(3, 30);
        list.insert(1, 10);
        list.insert(2, 20);

        let rendered = dump(&list);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "{rank:0, obj:1, score:10}");
        assert_eq!(lines[1], "{rank:1, obj:2, score:20}");
        assert_eq!(lines[2], "{rank:2, obj:3, score:30}");
    }
}
