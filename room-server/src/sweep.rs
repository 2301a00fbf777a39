//! Multi-area sweep.
//!
//! One solver invocation per requested area, run as concurrent in-process
//! tasks over the shared catalog. Solves are independent and side-effect
//! free, so the only coordination is the final join.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error};

use crate::catalog::{Catalog, filter_by_area_name, filter_by_facilities};
use crate::domain::SlotRange;
use crate::planner::{Infeasibility, SolveConfig, SolveOutcome, Solver};

/// A sweep request: the target range plus the optional filters applied to
/// every area's vacancy set before solving.
#[derive(Debug, Clone)]
pub struct PlanQuery {
    /// Requested half-open slot range.
    pub range: SlotRange,

    /// Facilities every room in the plan must have.
    pub required_facilities: Vec<String>,

    /// Facilities no room in the plan may have.
    pub forbidden_facilities: Vec<String>,

    /// Substrings the area name must contain.
    pub require_area_names: Vec<String>,

    /// Substrings the area name must not contain.
    pub forbid_area_names: Vec<String>,
}

impl PlanQuery {
    /// A query for `range` with no filters.
    pub fn for_range(range: SlotRange) -> Self {
        Self {
            range,
            required_facilities: Vec::new(),
            forbidden_facilities: Vec::new(),
            require_area_names: Vec::new(),
            forbid_area_names: Vec::new(),
        }
    }
}

/// Typed per-area result record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaReport {
    pub area_id: String,
    pub outcome: SolveOutcome,
}

/// Solve one area synchronously: filter its vacancies, then plan.
pub fn solve_area(
    catalog: &Catalog,
    area_id: &str,
    query: &PlanQuery,
    config: &SolveConfig,
) -> SolveOutcome {
    let vacancies = catalog.for_area(area_id);
    if vacancies.is_empty() {
        return SolveOutcome::Infeasible(Infeasibility::NoVacancies);
    }

    let mut vacancies = filter_by_facilities(
        &vacancies,
        &query.required_facilities,
        &query.forbidden_facilities,
    );
    if !query.require_area_names.is_empty() || !query.forbid_area_names.is_empty() {
        vacancies = filter_by_area_name(
            &vacancies,
            &query.require_area_names,
            &query.forbid_area_names,
        );
    }
    debug!(area_id, candidates = vacancies.len(), "filters applied");

    Solver::new(&vacancies, config).solve(query.range)
}

/// Solve every requested area concurrently.
///
/// Spawns one task per area and preserves the caller's area order in the
/// returned reports. A panicked task (which a well-formed catalog never
/// produces) is reported as its area having no vacancies rather than
/// poisoning the whole sweep.
pub async fn sweep(
    catalog: Arc<Catalog>,
    area_ids: Vec<String>,
    query: PlanQuery,
    config: SolveConfig,
) -> Vec<AreaReport> {
    let query = Arc::new(query);
    let config = Arc::new(config);

    let handles: Vec<_> = area_ids
        .iter()
        .map(|area_id| {
            let catalog = Arc::clone(&catalog);
            let query = Arc::clone(&query);
            let config = Arc::clone(&config);
            let area_id = area_id.clone();
            tokio::spawn(async move {
                let outcome = solve_area(&catalog, &area_id, &query, &config);
                AreaReport { area_id, outcome }
            })
        })
        .collect();

    area_ids
        .into_iter()
        .zip(join_all(handles).await)
        .map(|(area_id, joined)| match joined {
            Ok(report) => report,
            Err(err) => {
                error!(%area_id, "area solve task failed: {err}");
                AreaReport {
                    area_id,
                    outcome: SolveOutcome::Infeasible(Infeasibility::NoVacancies),
                }
            }
        })
        .collect()
}
