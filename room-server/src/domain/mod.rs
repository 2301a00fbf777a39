//! Domain types for the room availability planner.
//!
//! This module contains the core domain model types that represent
//! validated availability data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod plan;
mod slot;
mod vacancy;

pub use error::DomainError;
pub use plan::{Plan, SwitchWindow};
pub use slot::{SlotRange, slot_label};
pub use vacancy::Vacancy;

#[cfg(test)]
pub(crate) mod test_support {
    use super::{SlotRange, Vacancy};

    /// Build a bare vacancy for solver and filter tests.
    pub(crate) fn vacancy(room_id: &str, start: u32, end: u32) -> Vacancy {
        Vacancy {
            room_id: room_id.to_string(),
            room_name: format!("Room {room_id}"),
            capacity: 8,
            facilities: Vec::new(),
            area_id: "A1".to_string(),
            area_name: "Central Building".to_string(),
            span: SlotRange::new(start, end).unwrap(),
            start_time: None,
            end_time: None,
            source: None,
        }
    }

    /// Like [`vacancy`], with facility tags.
    pub(crate) fn vacancy_with_facilities(
        room_id: &str,
        start: u32,
        end: u32,
        facilities: &[&str],
    ) -> Vacancy {
        Vacancy {
            facilities: facilities.iter().map(|f| f.to_string()).collect(),
            ..vacancy(room_id, start, end)
        }
    }
}
