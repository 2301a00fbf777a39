//! Coverage feasibility gate and dominated-interval pruning.

use crate::domain::{SlotRange, Vacancy};

use super::rank::span_sweep_order;

/// Greedy test of whether `spans` can jointly cover `range`.
///
/// Sweeps the spans in frontier order, repeatedly extending the reachable
/// frontier to the furthest end among spans starting at or before it. This
/// is a cheap upstream gate for the solver, not the plan constructor.
/// O(n log n).
pub fn covers_range_greedy(spans: &[SlotRange], range: SlotRange) -> bool {
    let mut sorted = spans.to_vec();
    sorted.sort_by(span_sweep_order);

    let mut cur = range.start();
    let mut i = 0;
    while cur < range.end() {
        let mut reach = cur;
        while i < sorted.len() && sorted[i].start() <= cur {
            reach = reach.max(sorted[i].end());
            i += 1;
        }
        if reach == cur {
            return false;
        }
        cur = reach;
    }
    true
}

/// Remove vacancies dominated by an earlier-or-equal-start, wider one.
///
/// Sweeps in frontier order keeping a vacancy only when its end exceeds
/// every end seen so far. Survivors therefore have strictly increasing
/// starts and strictly increasing ends. This is deliberately not a full
/// pairwise dominance reduction: a redundant interval whose start is later
/// than a wider rival's may survive, and downstream selection is defined
/// over exactly this surviving set.
pub fn prune_dominated(mut vacancies: Vec<Vacancy>) -> Vec<Vacancy> {
    vacancies.sort_by(|a, b| span_sweep_order(&a.span, &b.span));

    let mut kept: Vec<Vacancy> = Vec::with_capacity(vacancies.len());
    let mut best_end: Option<u32> = None;
    for v in vacancies {
        if best_end.is_some_and(|end| v.span.end() <= end) {
            continue;
        }
        best_end = Some(v.span.end());
        kept.push(v);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::vacancy;

    fn range(s: u32, e: u32) -> SlotRange {
        SlotRange::new(s, e).unwrap()
    }

    fn spans(pairs: &[(u32, u32)]) -> Vec<SlotRange> {
        pairs.iter().map(|&(s, e)| range(s, e)).collect()
    }

    #[test]
    fn covers_chained_intervals() {
        let set = spans(&[(1, 5), (3, 10), (9, 12)]);
        assert!(covers_range_greedy(&set, range(1, 12)));
    }

    #[test]
    fn fails_once_bridge_is_removed() {
        let set = spans(&[(1, 5), (9, 12)]);
        assert!(!covers_range_greedy(&set, range(1, 12)));
    }

    #[test]
    fn fails_when_start_is_uncovered() {
        let set = spans(&[(2, 12)]);
        assert!(!covers_range_greedy(&set, range(1, 12)));
    }

    #[test]
    fn exact_touching_intervals_cover() {
        let set = spans(&[(1, 6), (6, 10)]);
        assert!(covers_range_greedy(&set, range(1, 10)));
    }

    #[test]
    fn empty_set_covers_nothing() {
        assert!(!covers_range_greedy(&[], range(1, 2)));
    }

    #[test]
    fn prune_removes_nested_intervals() {
        let kept = prune_dominated(vec![
            vacancy("R1", 1, 10),
            vacancy("R2", 2, 6),
            vacancy("R3", 3, 12),
        ]);
        let ids: Vec<&str> = kept.iter().map(|v| v.room_id.as_str()).collect();
        assert_eq!(ids, vec!["R1", "R3"]);
    }

    #[test]
    fn prune_keeps_widest_at_minimum_start() {
        // Among vacancies sharing the minimum start, the one with the
        // latest end always survives.
        let kept = prune_dominated(vec![
            vacancy("R1", 1, 4),
            vacancy("R2", 1, 9),
            vacancy("R3", 1, 6),
        ]);
        assert!(kept.iter().any(|v| v.room_id == "R2"));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn prune_keeps_later_intervals_with_new_reach() {
        // Intervals nested inside an earlier-or-equal-start, wider one go;
        // anything extending the furthest end seen so far stays, even when
        // it adds only one slot of new reach.
        let kept = prune_dominated(vec![
            vacancy("R1", 1, 12),
            vacancy("R2", 4, 8),
            vacancy("R3", 5, 13),
        ]);
        let ids: Vec<&str> = kept.iter().map(|v| v.room_id.as_str()).collect();
        assert_eq!(ids, vec!["R1", "R3"]);
    }

    #[test]
    fn prune_survivors_have_increasing_starts_and_ends() {
        let kept = prune_dominated(vec![
            vacancy("R1", 3, 10),
            vacancy("R2", 1, 5),
            vacancy("R3", 3, 12),
            vacancy("R4", 9, 12),
            vacancy("R5", 8, 14),
        ]);
        for pair in kept.windows(2) {
            assert!(pair[0].span.start() < pair[1].span.start());
            assert!(pair[0].span.end() < pair[1].span.end());
        }
    }
}
