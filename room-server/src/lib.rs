//! Room availability planner server.
//!
//! A web application that answers: "between these two times, which meeting
//! rooms can host us — and if no single room can, what is the plan with the
//! fewest room changes?"

pub mod catalog;
pub mod domain;
pub mod planner;
pub mod sweep;
pub mod web;
