//! Plan types.
//!
//! A `Plan` represents a booking itinerary for the requested range,
//! potentially moving between rooms. Each move is described by a
//! `SwitchWindow`: the span during which both the departing and the arriving
//! room are free, or a single boundary slot when they merely touch.

use std::fmt;

use super::{DomainError, SlotRange, Vacancy};

/// The slot span available for moving from one room to the next.
///
/// `start == end` denotes an exact-boundary switch: the departing room's
/// interval ends exactly where the arriving room's begins, so the move has
/// no slack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchWindow {
    start: u32,
    end: u32,
}

impl SwitchWindow {
    /// The overlap window between two vacancies that overlap or touch.
    ///
    /// Callers must have established `b.span.start() <= a.span.end()`;
    /// [`Plan::new`] re-validates the pairing.
    pub fn between(a: &Vacancy, b: &Vacancy) -> Self {
        let start = a.span.start().max(b.span.start());
        let end = a.span.end().min(b.span.end());
        debug_assert!(start <= end, "vacancies neither overlap nor touch");
        Self { start, end }
    }

    /// A zero-length window at a shared boundary slot.
    pub fn exact(boundary: u32) -> Self {
        Self {
            start: boundary,
            end: boundary,
        }
    }

    /// First slot of the window.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// End slot of the window.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Window length in slots; zero for an exact-boundary switch.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the switch must happen exactly at a slot boundary.
    pub fn is_exact(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for SwitchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            write!(f, "exact at slot {}", self.start)
        } else {
            write!(f, "[{}, {})", self.start, self.end)
        }
    }
}

/// A complete room plan for a requested range.
///
/// # Invariants
///
/// - 1 to 4 segments, in chronological order
/// - one switch window per change (`switches.len() == segments.len() - 1`)
/// - consecutive segments overlap or meet exactly at a boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    segments: Vec<Vacancy>,
    switches: Vec<SwitchWindow>,
}

impl Plan {
    /// Constructs a plan from ordered segments and their switch windows.
    pub fn new(segments: Vec<Vacancy>, switches: Vec<SwitchWindow>) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyPlan);
        }
        if segments.len() > 4 {
            return Err(DomainError::TooManySegments(segments.len()));
        }
        if switches.len() != segments.len() - 1 {
            return Err(DomainError::SwitchCountMismatch {
                segments: segments.len(),
                switches: switches.len(),
            });
        }
        for (i, pair) in segments.windows(2).enumerate() {
            if pair[1].span.start() > pair[0].span.end() {
                return Err(DomainError::DisconnectedSegments(i, i + 1));
            }
        }
        Ok(Self { segments, switches })
    }

    /// Number of room changes; zero for a single-segment plan.
    pub fn change_count(&self) -> usize {
        self.segments.len() - 1
    }

    /// Segments in chronological order.
    pub fn segments(&self) -> &[Vacancy] {
        &self.segments
    }

    /// Switch windows, one per change.
    pub fn switches(&self) -> &[SwitchWindow] {
        &self.switches
    }

    /// Whether the segments jointly cover `range`.
    ///
    /// Walks the ordered segments extending a reachability frontier, the
    /// same sweep the feasibility gate performs over the whole catalog.
    pub fn covers(&self, range: SlotRange) -> bool {
        let mut frontier = range.start();
        for seg in &self.segments {
            if seg.span.start() > frontier {
                return false;
            }
            frontier = frontier.max(seg.span.end());
        }
        frontier >= range.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::vacancy;

    fn range(s: u32, e: u32) -> SlotRange {
        SlotRange::new(s, e).unwrap()
    }

    #[test]
    fn between_overlapping_vacancies() {
        let a = vacancy("R1", 1, 5);
        let b = vacancy("R2", 3, 10);
        let w = SwitchWindow::between(&a, &b);
        assert_eq!((w.start(), w.end()), (3, 5));
        assert_eq!(w.len(), 2);
        assert!(!w.is_exact());
    }

    #[test]
    fn between_touching_vacancies_is_exact() {
        let a = vacancy("R1", 1, 6);
        let b = vacancy("R2", 6, 10);
        let w = SwitchWindow::between(&a, &b);
        assert_eq!((w.start(), w.end()), (6, 6));
        assert!(w.is_exact());
        assert_eq!(w, SwitchWindow::exact(6));
    }

    #[test]
    fn switch_window_display() {
        assert_eq!(SwitchWindow::exact(6).to_string(), "exact at slot 6");
        let a = vacancy("R1", 1, 5);
        let b = vacancy("R2", 3, 10);
        assert_eq!(SwitchWindow::between(&a, &b).to_string(), "[3, 5)");
    }

    #[test]
    fn plan_rejects_empty_segments() {
        assert_eq!(Plan::new(vec![], vec![]), Err(DomainError::EmptyPlan));
    }

    #[test]
    fn plan_rejects_switch_count_mismatch() {
        let segments = vec![vacancy("R1", 1, 5), vacancy("R2", 3, 10)];
        assert_eq!(
            Plan::new(segments, vec![]),
            Err(DomainError::SwitchCountMismatch {
                segments: 2,
                switches: 0,
            })
        );
    }

    #[test]
    fn plan_rejects_disconnected_segments() {
        let a = vacancy("R1", 1, 4);
        let b = vacancy("R2", 6, 10);
        let result = Plan::new(vec![a, b], vec![SwitchWindow::exact(5)]);
        assert_eq!(result, Err(DomainError::DisconnectedSegments(0, 1)));
    }

    #[test]
    fn plan_accepts_touching_segments() {
        let a = vacancy("R1", 1, 6);
        let b = vacancy("R2", 6, 10);
        let w = SwitchWindow::between(&a, &b);
        let plan = Plan::new(vec![a, b], vec![w]).unwrap();
        assert_eq!(plan.change_count(), 1);
        assert!(plan.covers(range(1, 10)));
        assert!(plan.switches()[0].is_exact());
    }

    #[test]
    fn covers_detects_shortfall() {
        let a = vacancy("R1", 1, 5);
        let b = vacancy("R2", 3, 9);
        let w = SwitchWindow::between(&a, &b);
        let plan = Plan::new(vec![a, b], vec![w]).unwrap();
        assert!(plan.covers(range(1, 9)));
        assert!(!plan.covers(range(1, 10)));
        assert!(!plan.covers(range(0, 9)));
    }
}
