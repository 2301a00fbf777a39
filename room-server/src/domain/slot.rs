//! Slot index types and wall-clock display mapping.
//!
//! The booking day is divided into fixed-width half-hour slots counted from
//! a fixed day-start reference. Slot 1 covers 08:00-08:30, slot 2 covers
//! 08:30-09:00, and so on. All ranges are half-open: `[start, end)`.

use std::fmt;

use chrono::NaiveTime;

use super::DomainError;

/// Minutes past midnight at which slot 1 begins (08:00).
const DAY_BASE_MINUTES: u32 = 8 * 60;

/// Width of one slot in minutes.
const SLOT_MINUTES: u32 = 30;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A non-empty half-open slot interval `[start, end)`.
///
/// This type guarantees `start < end` by construction. It is used both for
/// the caller's requested range and for solver sub-problems (gaps between
/// anchor segments).
///
/// # Examples
///
/// ```
/// use room_server::domain::SlotRange;
///
/// let range = SlotRange::new(3, 7).unwrap();
/// assert_eq!(range.len(), 4);
///
/// // Empty and inverted ranges are rejected
/// assert!(SlotRange::new(5, 5).is_err());
/// assert!(SlotRange::new(7, 3).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRange {
    start: u32,
    end: u32,
}

impl SlotRange {
    /// Create a range, rejecting empty or inverted bounds.
    pub fn new(start: u32, end: u32) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First slot covered by the range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// One past the last slot covered by the range.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of slots covered. Always at least 1.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether `slot` falls inside the half-open range.
    pub fn contains(&self, slot: u32) -> bool {
        self.start <= slot && slot < self.end
    }

    /// Length of the overlap with another range, zero when disjoint.
    pub fn overlap_len(&self, other: SlotRange) -> u32 {
        let lo = self.start.max(other.start);
        let hi = self.end.min(other.end);
        hi.saturating_sub(lo)
    }

    /// Whether this range fully contains `other`.
    pub fn covers(&self, other: SlotRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Debug for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotRange[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Wall-clock time at a slot boundary.
///
/// Slot indices below 1 are clamped to the day base; times wrap modulo one
/// day, matching the upstream schedule convention.
pub fn slot_wall_time(slot: u32) -> NaiveTime {
    let minutes = (DAY_BASE_MINUTES + slot.saturating_sub(1) * SLOT_MINUTES) % MINUTES_PER_DAY;
    // Modulo arithmetic keeps this in-range for NaiveTime.
    NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0)
        .expect("minutes reduced modulo one day")
}

/// `HH:MM` label for a slot boundary, for human-readable output.
pub fn slot_label(slot: u32) -> String {
    slot_wall_time(slot).format("%H:%M").to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn range_strategy() -> impl Strategy<Value = SlotRange> {
        (0u32..200, 1u32..48)
            .prop_map(|(start, len)| SlotRange::new(start, start + len).unwrap())
    }

    proptest! {
        /// Overlap length is symmetric.
        #[test]
        fn overlap_symmetric(a in range_strategy(), b in range_strategy()) {
            prop_assert_eq!(a.overlap_len(b), b.overlap_len(a));
        }

        /// Overlap never exceeds either operand's length.
        #[test]
        fn overlap_bounded(a in range_strategy(), b in range_strategy()) {
            let ov = a.overlap_len(b);
            prop_assert!(ov <= a.len());
            prop_assert!(ov <= b.len());
        }

        /// A range always covers itself and overlaps itself fully.
        #[test]
        fn self_cover(a in range_strategy()) {
            prop_assert!(a.covers(a));
            prop_assert_eq!(a.overlap_len(a), a.len());
        }

        /// Covering implies overlap equal to the covered range's length.
        #[test]
        fn cover_implies_full_overlap(a in range_strategy(), b in range_strategy()) {
            if a.covers(b) {
                prop_assert_eq!(a.overlap_len(b), b.len());
            }
        }
    }
}
