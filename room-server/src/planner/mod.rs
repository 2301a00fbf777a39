//! The room-change planner.
//!
//! This module implements the core solver that answers: "which sequence of
//! room vacancies covers the requested slot range with the fewest changes?"
//!
//! The solver is a bounded multi-tier search: it tries 0-change, 1-change,
//! 2-change and (optionally) 3-change plans in strict order and returns the
//! first tier that succeeds. Before searching it runs a cheap greedy
//! feasibility gate and prunes dominated intervals.

mod config;
mod cover;
mod rank;
mod solve;

pub use config::SolveConfig;
pub use cover::{covers_range_greedy, prune_dominated};
pub use solve::{Infeasibility, SolveOutcome, Solver};
