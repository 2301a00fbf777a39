//! Room vacancy records.

use super::SlotRange;

/// A contiguous interval during which one room is free.
///
/// Vacancies are produced by the catalog loader from the upstream compressed
/// schedule records and are never mutated afterwards; the planner only
/// filters and reorders views over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    /// Booking-system room identifier.
    pub room_id: String,

    /// Human-readable room name.
    pub room_name: String,

    /// Seating capacity.
    pub capacity: u32,

    /// Facility tags, trimmed but in their original case. Matching is
    /// case-insensitive.
    pub facilities: Vec<String>,

    /// Identifier of the area (building/floor group) the room belongs to.
    pub area_id: String,

    /// Human-readable area name.
    pub area_name: String,

    /// The free interval, in slot indices.
    pub span: SlotRange,

    /// Wall-clock label for the interval start, when the upstream record
    /// carried one.
    pub start_time: Option<String>,

    /// Wall-clock label for the interval end.
    pub end_time: Option<String>,

    /// Name of the catalog file this record came from.
    pub source: Option<String>,
}

impl Vacancy {
    /// Interval length in slots.
    pub fn duration(&self) -> u32 {
        self.span.len()
    }

    /// Length of the overlap with another vacancy's interval.
    pub fn overlap_len(&self, other: &Vacancy) -> u32 {
        self.span.overlap_len(other.span)
    }

    /// Whether this vacancy's interval fully contains `range`.
    pub fn covers(&self, range: SlotRange) -> bool {
        self.span.covers(range)
    }

    /// Case-insensitive facility membership test.
    pub fn has_facility(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.facilities
            .iter()
            .any(|f| f.trim().to_lowercase() == needle)
    }
}
