//! The augmented probabilistic order index.
//!
//! Nodes sorted by `(score, member)` under the caller-supplied capabilities
//! live in an index-addressed arena (`nodes: Vec<Option<Node<M, S>>>`) with a
//! free list for reclaiming deleted slots. A node is never referenced by
//! shared pointer — the arena owns every node exclusively, and the only way
//! to reach one is by `NodeId`. This keeps the structure free of reference
//! cycles and interior mutability without needing `unsafe`.
//!
//! Every forward pointer at every level carries a `span`: the number of
//! level-0 nodes it skips. Summed along the descent from the head, spans
//! give rank in O(log n) without a secondary index — the same walk answers
//! "what's the 500th element" and "how many elements come before X".

use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::capability::{MemberOrder, ScoreCapability};
use crate::range::ScoreRange;

const MAX_LEVEL: usize = 32;
const P: f64 = 0.5;

pub(crate) type NodeId = usize;

/// A cursor into the skip list: either the head sentinel or a live node.
///
/// Kept distinct from `Option<NodeId>` (which means "no next node" inside a
/// `Level`) so the two can't be confused at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Head,
    Node(NodeId),
}

#[derive(Debug, Clone, Copy)]
struct Level {
    forward: Option<NodeId>,
    span: usize,
}

impl Level {
    fn empty() -> Self {
        Level {
            forward: None,
            span: 0,
        }
    }
}

struct Node<M, S> {
    member: M,
    score: S,
    levels: Vec<Level>,
    back: Option<NodeId>,
}

pub(crate) struct SkipList<M, S, C, O> {
    /// The head sentinel's own level array, sized to `MAX_LEVEL`. Never
    /// counted in `length`, never freed.
    head_levels: Vec<Level>,
    nodes: Vec<Option<Node<M, S>>>,
    free: Vec<NodeId>,
    tail: Option<NodeId>,
    level: usize,
    length: usize,
    rng: SmallRng,
    score_cap: C,
    member_ord: O,
}

impl<M, S, C, O> SkipList<M, S, C, O>
where
    C: ScoreCapability<S>,
    O: MemberOrder<M>,
{
    pub(crate) fn new(score_cap: C, member_ord: O) -> Self {
        SkipList {
            head_levels: (0..MAX_LEVEL).map(|_| Level::empty()).collect(),
            nodes: Vec::new(),
            free: Vec::new(),
            tail: None,
            level: 1,
            length: 0,
            rng: SmallRng::from_entropy(),
            score_cap,
            member_ord,
        }
    }

    pub(crate) fn with_seed(score_cap: C, member_ord: O, seed: u64) -> Self {
        SkipList {
            head_levels: (0..MAX_LEVEL).map(|_| Level::empty()).collect(),
            nodes: Vec::new(),
            free: Vec::new(),
            tail: None,
            level: 1,
            length: 0,
            rng: SmallRng::seed_from_u64(seed),
            score_cap,
            member_ord,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.length
    }

    pub(crate) fn score_cap(&self) -> &C {
        &self.score_cap
    }

    pub(crate) fn member_score(&self, id: NodeId) -> (&M, &S) {
        let node = self.node(id);
        (&node.member, &node.score)
    }

    pub(crate) fn forward_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).levels[0].forward
    }

    pub(crate) fn back_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).back
    }

    pub(crate) fn iter(&self) -> Iter<'_, M, S, C, O> {
        Iter {
            list: self,
            current: self.head_levels[0].forward,
        }
    }

    // -- arena plumbing -----------------------------------------------

    fn node(&self, id: NodeId) -> &Node<M, S> {
        self.nodes[id]
            .as_ref()
            .expect("arena slot must be occupied for a live NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<M, S> {
        self.nodes[id]
            .as_mut()
            .expect("arena slot must be occupied for a live NodeId")
    }

    fn levels(&self, cur: Cursor) -> &[Level] {
        match cur {
            Cursor::Head => &self.head_levels,
            Cursor::Node(id) => &self.node(id).levels,
        }
    }

    fn levels_mut(&mut self, cur: Cursor) -> &mut [Level] {
        match cur {
            Cursor::Head => &mut self.head_levels,
            Cursor::Node(id) => &mut self.node_mut(id).levels,
        }
    }

    fn alloc_node(&mut self, member: M, score: S, height: usize) -> NodeId {
        let node = Node {
            member,
            score,
            levels: (0..height).map(|_| Level::empty()).collect(),
            back: None,
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id] = Some(node);
            id
        } else {
            let id = self.nodes.len();
            self.nodes.push(Some(node));
            id
        }
    }

    fn random_level(&mut self) -> usize {
        let mut level = 1;
        while level < MAX_LEVEL && self.rng.gen_bool(P) {
            level += 1;
        }
        level
    }

    /// Composite order: score first, member breaks ties.
    fn cmp_composite(&self, sa: &S, ma: &M, sb: &S, mb: &M) -> Ordering {
        match self.score_cap.compare(sa, sb) {
            Ordering::Equal => self.member_ord.compare(ma, mb),
            other => other,
        }
    }

    // -- mutation -------------------------------------------------------

    /// Insert `(score, member)`. The caller (the façade) must already have
    /// established that no node for `member` exists.
    pub(crate) fn insert(&mut self, member: M, score: S) -> NodeId {
        let new_level = self.random_level();
        let capacity = self.level.max(new_level);
        let mut update = vec![Cursor::Head; capacity];
        let mut rank = vec![0usize; capacity];

        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            rank[i] = if i == self.level - 1 { 0 } else { rank[i + 1] };
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                let fwd_node = self.node(fwd);
                if self.cmp_composite(&fwd_node.score, &fwd_node.member, &score, &member)
                    == Ordering::Less
                {
                    rank[i] += lv[i].span;
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
            update[i] = x;
        }

        if new_level > self.level {
            for i in self.level..new_level {
                rank[i] = 0;
                update[i] = Cursor::Head;
                self.head_levels[i].span = self.length;
            }
            self.level = new_level;
        }

        let new_id = self.alloc_node(member, score, new_level);

        for i in 0..new_level {
            let update_fwd = self.levels(update[i])[i].forward;
            let update_span = self.levels(update[i])[i].span;

            let new_levels = &mut self.node_mut(new_id).levels;
            new_levels[i].forward = update_fwd;
            new_levels[i].span = update_span - (rank[0] - rank[i]);

            let upd_levels = self.levels_mut(update[i]);
            upd_levels[i].forward = Some(new_id);
            upd_levels[i].span = (rank[0] - rank[i]) + 1;
        }

        for i in new_level..self.level {
            self.levels_mut(update[i])[i].span += 1;
        }

        let back = match update[0] {
            Cursor::Head => None,
            Cursor::Node(id) => Some(id),
        };
        self.node_mut(new_id).back = back;

        match self.node(new_id).levels[0].forward {
            Some(fwd) => self.node_mut(fwd).back = Some(new_id),
            None => self.tail = Some(new_id),
        }

        self.length += 1;
        log::trace!(
            "skiplist insert: height={new_level}, level={}, length={}",
            self.level,
            self.length
        );
        new_id
    }

    /// Delete the node matching `(score, member)` exactly. Returns whether a
    /// match was found.
    pub(crate) fn delete(&mut self, score: &S, member: &M) -> bool {
        let capacity = self.level;
        let mut update = vec![Cursor::Head; capacity];
        let x = self.walk_to_predecessor(score, member, &mut update);

        let candidate = self.levels(x)[0].forward;
        if let Some(id) = candidate {
            let node = self.node(id);
            if self.cmp_composite(&node.score, &node.member, score, member) == Ordering::Equal {
                self.unlink(id, &update);
                log::debug!("skiplist delete: length={}", self.length);
                return true;
            }
        }
        false
    }

    /// Shared walk used by `delete`/`rank_of`-adjacent callers: descend
    /// top-down, advancing while the forward node sorts strictly before
    /// `(score, member)`, recording the predecessor at each level.
    fn walk_to_predecessor(&self, score: &S, member: &M, update: &mut [Cursor]) -> Cursor {
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                let fwd_node = self.node(fwd);
                if self.cmp_composite(&fwd_node.score, &fwd_node.member, score, member)
                    == Ordering::Less
                {
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
            update[i] = x;
        }
        x
    }

    /// Unlink node `d` given the predecessor array captured by a prior walk,
    /// returning its (member, score) to the caller.
    fn unlink(&mut self, d: NodeId, update: &[Cursor]) -> (M, S) {
        let d_levels: Vec<Level> = self.node(d).levels.clone();
        for i in 0..self.level {
            let upd_fwd = self.levels(update[i])[i].forward;
            if upd_fwd == Some(d) {
                let lv = d_levels[i];
                let upd_levels = self.levels_mut(update[i]);
                upd_levels[i].span += lv.span - 1;
                upd_levels[i].forward = lv.forward;
            } else {
                self.levels_mut(update[i])[i].span -= 1;
            }
        }

        let d_back = self.node(d).back;
        match d_levels[0].forward {
            Some(fwd) => self.node_mut(fwd).back = d_back,
            None => self.tail = d_back,
        }

        while self.level > 1 && self.head_levels[self.level - 1].forward.is_none() {
            self.level -= 1;
        }

        let removed = self.nodes[d]
            .take()
            .expect("unlink target must still occupy its arena slot");
        self.free.push(d);
        self.length -= 1;
        (removed.member, removed.score)
    }

    // -- range queries ----------------------------------------------------

    fn intersects_range(&self, range: &ScoreRange<S>) -> bool {
        if range.is_empty(&self.score_cap) {
            return false;
        }
        let Some(tail_id) = self.tail else {
            return false;
        };
        if !range.gte_min(&self.score_cap, &self.node(tail_id).score) {
            return false;
        }
        match self.head_levels[0].forward {
            None => false,
            Some(first_id) => range.lte_max(&self.score_cap, &self.node(first_id).score),
        }
    }

    pub(crate) fn first_in_range(&self, range: &ScoreRange<S>) -> Option<NodeId> {
        if !self.intersects_range(range) {
            return None;
        }
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                let fwd_node = self.node(fwd);
                if !range.gte_min(&self.score_cap, &fwd_node.score) {
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
        }
        let candidate = self.levels(x)[0].forward?;
        let node = self.node(candidate);
        range
            .lte_max(&self.score_cap, &node.score)
            .then_some(candidate)
    }

    pub(crate) fn last_in_range(&self, range: &ScoreRange<S>) -> Option<NodeId> {
        if !self.intersects_range(range) {
            return None;
        }
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                let fwd_node = self.node(fwd);
                if range.lte_max(&self.score_cap, &fwd_node.score) {
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
        }
        match x {
            Cursor::Head => None,
            Cursor::Node(id) => {
                let node = self.node(id);
                range.gte_min(&self.score_cap, &node.score).then_some(id)
            }
        }
    }

    /// Delete every node whose score falls in `range`, returning the
    /// removed `(member, score)` pairs so the façade can scrub its dict.
    pub(crate) fn delete_range_by_score(&mut self, range: &ScoreRange<S>) -> Vec<(M, S)> {
        let capacity = self.level;
        let mut update = vec![Cursor::Head; capacity];
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                let fwd_node = self.node(fwd);
                if !range.gte_min(&self.score_cap, &fwd_node.score) {
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
            update[i] = x;
        }

        let mut removed = Vec::new();
        let mut current = self.levels(x)[0].forward;
        while let Some(id) = current {
            if !range.lte_max(&self.score_cap, &self.node(id).score) {
                break;
            }
            let next = self.node(id).levels[0].forward;
            removed.push(self.unlink(id, &update));
            current = next;
        }
        if !removed.is_empty() {
            log::debug!(
                "skiplist delete_range_by_score: removed={}, length={}",
                removed.len(),
                self.length
            );
        }
        removed
    }

    /// Delete ranks `[start, end]`, 1-based inclusive.
    pub(crate) fn delete_range_by_rank(&mut self, start: usize, end: usize) -> Vec<(M, S)> {
        let capacity = self.level;
        let mut update = vec![Cursor::Head; capacity];
        let mut traversed = 0usize;
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                if traversed + lv[i].span < start {
                    traversed += lv[i].span;
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
            update[i] = x;
        }

        let mut rank = traversed + 1;
        let mut removed = Vec::new();
        let mut current = self.levels(x)[0].forward;
        while let Some(id) = current {
            if rank > end {
                break;
            }
            let next = self.node(id).levels[0].forward;
            removed.push(self.unlink(id, &update));
            current = next;
            rank += 1;
        }
        if !removed.is_empty() {
            log::debug!(
                "skiplist delete_range_by_rank: removed={}, length={}",
                removed.len(),
                self.length
            );
        }
        removed
    }

    /// 0 if `(score, member)` is absent, else its 1-based rank.
    ///
    /// Checks for a match at every level descent rather than only at level
    /// 0, matching the source's `zslGetRank`; see `rank_of_descend_fully`
    /// below for the simpler alternative this was checked against.
    pub(crate) fn rank_of(&self, score: &S, member: &M) -> usize {
        let mut rank = 0usize;
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                let fwd_node = self.node(fwd);
                if self.cmp_composite(&fwd_node.score, &fwd_node.member, score, member)
                    != Ordering::Greater
                {
                    rank += lv[i].span;
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
            if let Cursor::Node(id) = x {
                let node = self.node(id);
                if self.cmp_composite(&node.score, &node.member, score, member) == Ordering::Equal
                {
                    return rank;
                }
            }
        }
        0
    }

    /// The node at 1-based `rank`, or `None` if out of bounds.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<NodeId> {
        if rank == 0 || rank > self.length {
            return None;
        }
        let mut traversed = 0usize;
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                if traversed + lv[i].span <= rank {
                    traversed += lv[i].span;
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
            if traversed == rank {
                return match x {
                    Cursor::Node(id) => Some(id),
                    Cursor::Head => None,
                };
            }
        }
        None
    }

    /// Descend fully to level 0 before checking for a match once, instead of
    /// checking at every level descent like [`Self::rank_of`]. Kept only to
    /// back a differential test proving the two agree on every input the
    /// suite exercises; see the open question in the design notes.
    #[cfg(test)]
    pub(crate) fn rank_of_descend_fully(&self, score: &S, member: &M) -> usize {
        let mut rank = 0usize;
        let mut x = Cursor::Head;
        for i in (0..self.level).rev() {
            loop {
                let lv = self.levels(x);
                let Some(fwd) = lv[i].forward else { break };
                let fwd_node = self.node(fwd);
                if self.cmp_composite(&fwd_node.score, &fwd_node.member, score, member)
                    != Ordering::Greater
                {
                    rank += lv[i].span;
                    x = Cursor::Node(fwd);
                } else {
                    break;
                }
            }
        }
        match x {
            Cursor::Node(id) => {
                let node = self.node(id);
                if self.cmp_composite(&node.score, &node.member, score, member) == Ordering::Equal
                {
                    rank
                } else {
                    0
                }
            }
            Cursor::Head => 0,
        }
    }

    /// Walk every node and recompute spans/order/back-pointers from
    /// scratch, panicking on the first mismatch. Used by tests only; not a
    /// public API since callers never get to observe internal structure.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self)
    where
        S: std::fmt::Debug,
        M: std::fmt::Debug,
    {
        let mut count = 0usize;
        let mut prev: Option<NodeId> = None;
        let mut current = self.head_levels[0].forward;
        while let Some(id) = current {
            let node = self.node(id);
            count += 1;
            if let Some(prev_id) = prev {
                let prev_node = self.node(prev_id);
                assert_eq!(
                    self.cmp_composite(&prev_node.score, &prev_node.member, &node.score, &node.member),
                    Ordering::Less,
                    "level-0 order violated around node {id}"
                );
            }
            assert_eq!(node.back, prev, "back pointer mismatch at node {id}");
            prev = Some(id);
            current = node.levels[0].forward;
        }
        assert_eq!(count, self.length, "length mismatch");
        assert_eq!(self.tail, prev, "tail mismatch");

        // span check: for every node (and the head) at every level, span
        // must equal the number of level-0 hops to its forward pointer, or
        // to the end of the list if this level entry has no forward (a
        // node can span "to the end" without a forward pointer, since
        // inserting shorter nodes beneath it keeps incrementing its span).
        let rank_of_cursor = |cur: Cursor| -> usize {
            let target = match cur {
                Cursor::Head => return 0,
                Cursor::Node(id) => id,
            };
            let mut rank = 0usize;
            let mut walker = self.head_levels[0].forward;
            loop {
                rank += 1;
                match walker {
                    Some(id) if id == target => break rank,
                    Some(id) => walker = self.node(id).levels[0].forward,
                    None => panic!("cursor unreachable from level-0 chain"),
                }
            }
        };

        let cursors: Vec<Cursor> = std::iter::once(Cursor::Head)
            .chain((0..self.nodes.len()).filter_map(|id| {
                self.nodes[id].as_ref().map(|_| Cursor::Node(id))
            }))
            .collect();
        for cur in cursors {
            let base_rank = rank_of_cursor(cur);
            for (i, lv) in self.levels(cur).iter().enumerate() {
                let expected = match lv.forward {
                    None => self.length - base_rank,
                    Some(target) => {
                        let mut hops = 0usize;
                        let mut walker = match cur {
                            Cursor::Head => self.head_levels[0].forward,
                            Cursor::Node(id) => self.node(id).levels[0].forward,
                        };
                        loop {
                            hops += 1;
                            match walker {
                                Some(id) if id == target => break,
                                Some(id) => walker = self.node(id).levels[0].forward,
                                None => panic!("forward target unreachable at level {i}"),
                            }
                        }
                        hops
                    }
                };
                assert_eq!(lv.span, expected, "span mismatch at level {i}");
            }
        }
    }
}

pub(crate) struct Iter<'a, M, S, C, O> {
    list: &'a SkipList<M, S, C, O>,
    current: Option<NodeId>,
}

impl<'a, M, S, C, O> Iterator for Iter<'a, M, S, C, O> {
    type Item = (&'a M, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.node(id);
        self.current = node.levels[0].forward;
        Some((&node.member, &node.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{NaturalOrder, NaturalScore};

    fn list() -> SkipList<i64, i64, NaturalScore, NaturalOrder> {
        SkipList::with_seed(NaturalScore, NaturalOrder, 42)
    }

    #[test]
    fn insert_keeps_ascending_order() {
        let mut l = list();
        l.insert(1, 10);
        l.insert(2, 20);
        l.insert(3, 15);
        l.assert_invariants();

        let order: Vec<_> = l.iter().map(|(m, s)| (*m, *s)).collect();
        assert_eq!(order, vec![(1, 10), (3, 15), (2, 20)]);
    }

    #[test]
    fn equal_scores_break_ties_by_member() {
        let mut l = list();
        l.insert(3, 5);
        l.insert(1, 5);
        l.insert(2, 5);
        l.assert_invariants();

        let order: Vec<_> = l.iter().map(|(m, _)| *m).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn delete_removes_exact_match_only() {
        let mut l = list();
        l.insert(1, 10);
        l.insert(2, 20);
        assert!(!l.delete(&99, &1));
        assert!(l.delete(&10, &1));
        l.assert_invariants();
        assert_eq!(l.len(), 1);
        assert!(!l.delete(&10, &1));
    }

    #[test]
    fn rank_and_get_by_rank_round_trip() {
        let mut l = list();
        for m in 1..=100i64 {
            l.insert(m, m);
        }
        l.assert_invariants();
        for m in 1..=100i64 {
            let rank = l.rank_of(&m, &m);
            assert_eq!(rank, m as usize);
            let id = l.get_by_rank(rank).unwrap();
            assert_eq!(*l.member_score(id).0, m);
        }
        assert_eq!(l.rank_of(&999, &999), 0);
    }

    #[test]
    fn rank_descend_fully_agrees_with_shipped_rank() {
        let mut l = list();
        for m in 1..=64i64 {
            l.insert(m, m * 3);
        }
        for m in 0..=70i64 {
            assert_eq!(
                l.rank_of(&(m * 3), &m),
                l.rank_of_descend_fully(&(m * 3), &m),
                "disagreement at member {m}"
            );
        }
        // absent members too, across a range of scores that never matched.
        for m in 1000..1010i64 {
            assert_eq!(
                l.rank_of(&m, &m),
                l.rank_of_descend_fully(&m, &m),
                "disagreement at absent member {m}"
            );
        }
    }

    #[test]
    fn range_by_score_bounds() {
        let mut l = list();
        for m in 1..=100i64 {
            l.insert(m, m);
        }
        let range = ScoreRange::new(40, 50);
        let first = l.first_in_range(&range).unwrap();
        let mut members = Vec::new();
        let mut cur = Some(first);
        while let Some(id) = cur {
            let (m, s) = l.member_score(id);
            if !range.lte_max(&NaturalScore, s) {
                break;
            }
            members.push(*m);
            cur = l.forward_of(id);
        }
        assert_eq!(members, (40..=50).collect::<Vec<_>>());
    }

    #[test]
    fn delete_range_by_score_removes_and_relinks() {
        let mut l = list();
        for m in 1..=100i64 {
            l.insert(m, m);
        }
        let removed = l.delete_range_by_score(&ScoreRange::new(10, 20));
        assert_eq!(removed.len(), 11);
        l.assert_invariants();
        assert_eq!(l.len(), 89);
        assert_eq!(l.rank_of(&9, &9), 9);
        assert_eq!(l.rank_of(&21, &21), 10);
    }

    #[test]
    fn delete_range_by_rank_removes_tail() {
        let mut l = list();
        for m in 1..=100i64 {
            l.insert(m, m);
        }
        let removed = l.delete_range_by_rank(98, 100);
        assert_eq!(removed.len(), 3);
        l.assert_invariants();
        assert_eq!(l.len(), 97);
        let tail = l.tail.unwrap();
        assert_eq!(*l.member_score(tail).0, 97);
    }

    #[test]
    fn remove_all_by_rank_empties_the_list() {
        let mut l = list();
        for m in 1..=37i64 {
            l.insert(m, m);
        }
        let removed = l.delete_range_by_rank(1, 37);
        assert_eq!(removed.len(), 37);
        assert_eq!(l.len(), 0);
        assert!(l.tail.is_none());
        assert_eq!(l.level, 1);
    }

    #[test]
    fn same_seed_yields_same_level_sequence() {
        let mut a = SkipList::with_seed(NaturalScore, NaturalOrder, 7);
        let mut b = SkipList::with_seed(NaturalScore, NaturalOrder, 7);
        let mut heights_a = Vec::new();
        let mut heights_b = Vec::new();
        for m in 0..50i64 {
            let id_a = a.insert(m, m);
            heights_a.push(a.node(id_a).levels.len());
            let id_b = b.insert(m, m);
            heights_b.push(b.node(id_b).levels.len());
        }
        assert_eq!(heights_a, heights_b);
    }
}
