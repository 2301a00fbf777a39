//! Vacancy catalog: loading and filtering.
//!
//! The upstream schedule pipeline compresses each room's per-slot
//! availability grid into interval ("vector") records and writes them as
//! JSON files, one per room page. This module materializes those files into
//! [`Vacancy`](crate::domain::Vacancy) values and provides the pure filters
//! the planner runs before solving.

mod error;
mod filters;
mod load;

pub use error::CatalogError;
pub use filters::{filter_by_area_name, filter_by_facilities};
pub use load::{AreaInfo, Catalog};
