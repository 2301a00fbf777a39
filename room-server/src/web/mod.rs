//! Web layer for the room availability planner.
//!
//! Provides HTTP endpoints for inspecting the catalog and requesting
//! room-change plans.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
