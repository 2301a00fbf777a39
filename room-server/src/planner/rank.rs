//! Tie-break orderings for the planner.
//!
//! Every ranking rule the solver relies on lives here as a named comparison
//! function, so each rule is testable in isolation. Comparators order
//! candidates best-first: `Ordering::Less` means the left candidate wins,
//! and selecting with `Iterator::min_by` keeps the first of equals, which
//! keeps the solver deterministic over its (already deterministically
//! ordered) input.

use std::cmp::Ordering;

use crate::domain::{SlotRange, Vacancy};

/// Frontier-sweep order: start ascending, then end descending.
///
/// Both the feasibility gate and the dominance pruner scan intervals in this
/// order, so that at each start position the widest interval is seen first.
pub fn span_sweep_order(a: &SlotRange, b: &SlotRange) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| b.end().cmp(&a.end()))
}

/// Reporting order for zero-change options: start ascending, end
/// descending, then room id for a stable ordering among equal spans.
pub fn zero_change_order(a: &Vacancy, b: &Vacancy) -> Ordering {
    span_sweep_order(&a.span, &b.span).then_with(|| a.room_id.cmp(&b.room_id))
}

/// Left-anchor preference: maximal forward reach from the range start.
///
/// Ranks by end descending, then start ascending, so the winner reaches
/// furthest right and, among those, starts earliest.
pub fn left_anchor_order(a: &Vacancy, b: &Vacancy) -> Ordering {
    b.span
        .end()
        .cmp(&a.span.end())
        .then_with(|| a.span.start().cmp(&b.span.start()))
}

/// Right-anchor preference: earliest reach back from the range end.
///
/// Ranks by start ascending, then end descending, so the winner starts
/// earliest and, among those, reaches furthest right.
pub fn right_anchor_order(a: &Vacancy, b: &Vacancy) -> Ordering {
    a.span
        .start()
        .cmp(&b.span.start())
        .then_with(|| b.span.end().cmp(&a.span.end()))
}

/// Score for a middle segment between the two anchors; larger is better.
///
/// Ranks by the bottleneck overlap first (the tighter of the two switch
/// windows), then by total overlap, then by the middle's own duration —
/// always favoring the candidate with maximal slack on both sides.
pub fn middle_score(left: &Vacancy, middle: &Vacancy, right: &Vacancy) -> (u32, u32, u32) {
    let overlap_left = left.overlap_len(middle);
    let overlap_right = middle.overlap_len(right);
    (
        overlap_left.min(overlap_right),
        overlap_left + overlap_right,
        middle.duration(),
    )
}
