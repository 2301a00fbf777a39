//! Data transfer objects for web requests and responses.
//!
//! The response shape mirrors the result data model directly: one record
//! per area with `ok`, the change count, ordered segments, switch windows
//! as slot pairs (equal endpoints denote an exact-boundary switch), and any
//! alternative plans.

use serde::{Deserialize, Serialize};

use crate::catalog::AreaInfo;
use crate::domain::{Plan, Vacancy, slot_label};
use crate::planner::SolveOutcome;
use crate::sweep::AreaReport;

fn default_top_k() -> usize {
    50
}

/// Request to plan across one or more areas.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Areas to sweep, in reporting order
    pub area_ids: Vec<String>,

    /// First slot of the requested range (inclusive)
    pub start_slot: u32,

    /// End slot of the requested range (exclusive)
    pub end_slot: u32,

    /// Facilities every room must have
    #[serde(default)]
    pub required_facilities: Vec<String>,

    /// Facilities no room may have
    #[serde(default)]
    pub forbidden_facilities: Vec<String>,

    /// Substrings the area name must contain
    #[serde(default)]
    pub require_area_names: Vec<String>,

    /// Substrings the area name must not contain
    #[serde(default)]
    pub forbid_area_names: Vec<String>,

    /// Allow 3-change plans when 0/1/2 changes fail
    #[serde(default)]
    pub allow_three_changes: bool,

    /// Cap on reported zero-change options
    #[serde(default = "default_top_k")]
    pub top_k_zero_change: usize,
}

/// Response for a plan request.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// One record per requested area, in request order
    pub areas: Vec<AreaSummary>,
}

/// Per-area planning result.
#[derive(Debug, Serialize)]
pub struct AreaSummary {
    /// The area this record describes
    pub area_id: String,

    /// Whether a plan (or zero-change option) was found
    pub ok: bool,

    /// Change count of the winning tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<usize>,

    /// Plan segments; for a zero-change result, each segment is one
    /// complete single-room option
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentResult>,

    /// Switch windows as `[start, end]` slot pairs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub switches: Vec<[u32; 2]>,

    /// Alternative plans with equal or fewer changes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<AlternativeResult>,

    /// Diagnostic when `ok` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One room interval in a plan.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub room_id: String,
    pub room_name: String,
    pub capacity: u32,
    pub area_id: String,
    pub area_name: String,

    /// First slot of the interval
    pub start: u32,

    /// One past the last slot of the interval
    pub end: u32,

    /// Wall-clock label for the interval start
    pub start_time: String,

    /// Wall-clock label for the interval end
    pub end_time: String,

    /// Catalog file the record came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SegmentResult {
    /// Build from a vacancy, deriving display times from the slot grid
    /// when the upstream record carried none.
    pub fn from_vacancy(v: &Vacancy) -> Self {
        Self {
            room_id: v.room_id.clone(),
            room_name: v.room_name.clone(),
            capacity: v.capacity,
            area_id: v.area_id.clone(),
            area_name: v.area_name.clone(),
            start: v.span.start(),
            end: v.span.end(),
            start_time: v
                .start_time
                .clone()
                .unwrap_or_else(|| slot_label(v.span.start())),
            end_time: v
                .end_time
                .clone()
                .unwrap_or_else(|| slot_label(v.span.end())),
            source: v.source.clone(),
        }
    }
}

/// An alternative plan with equal or fewer changes.
#[derive(Debug, Serialize)]
pub struct AlternativeResult {
    pub changes: usize,
    pub segments: Vec<SegmentResult>,
    pub switches: Vec<[u32; 2]>,

    /// The boundary slot, when the single switch is exact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_point: Option<u32>,
}

impl AlternativeResult {
    fn from_plan(plan: &Plan) -> Self {
        let switch_point = match plan.switches() {
            [w] if w.is_exact() => Some(w.start()),
            _ => None,
        };
        Self {
            changes: plan.change_count(),
            segments: plan.segments().iter().map(SegmentResult::from_vacancy).collect(),
            switches: switch_pairs(plan),
            switch_point,
        }
    }
}

fn switch_pairs(plan: &Plan) -> Vec<[u32; 2]> {
    plan.switches().iter().map(|w| [w.start(), w.end()]).collect()
}

impl AreaSummary {
    /// Flatten a typed report into the wire record.
    pub fn from_report(report: AreaReport) -> Self {
        let AreaReport { area_id, outcome } = report;
        match outcome {
            SolveOutcome::NoChange(options) => Self {
                area_id,
                ok: true,
                changes: Some(0),
                segments: options.iter().map(SegmentResult::from_vacancy).collect(),
                switches: Vec::new(),
                alternatives: Vec::new(),
                message: None,
            },
            SolveOutcome::Switched { plan, alternatives } => Self {
                area_id,
                ok: true,
                changes: Some(plan.change_count()),
                segments: plan.segments().iter().map(SegmentResult::from_vacancy).collect(),
                switches: switch_pairs(&plan),
                alternatives: alternatives.iter().map(AlternativeResult::from_plan).collect(),
                message: None,
            },
            SolveOutcome::Infeasible(reason) => Self {
                area_id,
                ok: false,
                changes: None,
                segments: Vec::new(),
                switches: Vec::new(),
                alternatives: Vec::new(),
                message: Some(reason.to_string()),
            },
        }
    }
}

/// Response for the area listing.
#[derive(Debug, Serialize)]
pub struct AreasResponse {
    pub areas: Vec<AreaResult>,
}

/// One loaded area.
#[derive(Debug, Serialize)]
pub struct AreaResult {
    pub area_id: String,
    pub area_name: String,
    pub vacancy_count: usize,
}

impl AreaResult {
    pub fn from_info(info: AreaInfo) -> Self {
        Self {
            area_id: info.area_id,
            area_name: info.area_name,
            vacancy_count: info.vacancy_count,
        }
    }
}

/// Error body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::vacancy;
    use crate::domain::{SlotRange, SwitchWindow};
    use crate::planner::Infeasibility;

    fn range(s: u32, e: u32) -> SlotRange {
        SlotRange::new(s, e).unwrap()
    }

    #[test]
    fn segment_derives_display_times_from_slots() {
        let v = vacancy("R1", 1, 3);
        let seg = SegmentResult::from_vacancy(&v);
        assert_eq!(seg.start_time, "08:00");
        assert_eq!(seg.end_time, "09:00");
    }

    #[test]
    fn segment_prefers_upstream_display_times() {
        let mut v = vacancy("R1", 1, 3);
        v.start_time = Some("08:05".to_string());
        v.end_time = Some("09:10".to_string());
        let seg = SegmentResult::from_vacancy(&v);
        assert_eq!(seg.start_time, "08:05");
        assert_eq!(seg.end_time, "09:10");
    }

    #[test]
    fn switched_report_flattens_plan() {
        let a = vacancy("A", 1, 5);
        let b = vacancy("B", 3, 10);
        let w = SwitchWindow::between(&a, &b);
        let plan = Plan::new(vec![a, b], vec![w]).unwrap();

        let summary = AreaSummary::from_report(AreaReport {
            area_id: "north".to_string(),
            outcome: SolveOutcome::Switched {
                plan,
                alternatives: Vec::new(),
            },
        });

        assert!(summary.ok);
        assert_eq!(summary.changes, Some(1));
        assert_eq!(summary.switches, vec![[3, 5]]);
        assert_eq!(summary.segments.len(), 2);
        assert!(summary.message.is_none());
    }

    #[test]
    fn exact_boundary_alternative_carries_switch_point() {
        let a = vacancy("A", 1, 6);
        let b = vacancy("B", 6, 10);
        let alt = Plan::new(
            vec![a.clone(), b.clone()],
            vec![SwitchWindow::exact(6)],
        )
        .unwrap();
        let m = vacancy("M", 4, 8);
        let plan = Plan::new(
            vec![a.clone(), m.clone(), b.clone()],
            vec![SwitchWindow::between(&a, &m), SwitchWindow::between(&m, &b)],
        )
        .unwrap();

        let summary = AreaSummary::from_report(AreaReport {
            area_id: "north".to_string(),
            outcome: SolveOutcome::Switched {
                plan,
                alternatives: vec![alt],
            },
        });

        assert_eq!(summary.alternatives.len(), 1);
        let alt = &summary.alternatives[0];
        assert_eq!(alt.changes, 1);
        assert_eq!(alt.switches, vec![[6, 6]]);
        assert_eq!(alt.switch_point, Some(6));
    }

    #[test]
    fn infeasible_report_carries_diagnostic_only() {
        let summary = AreaSummary::from_report(AreaReport {
            area_id: "west".to_string(),
            outcome: SolveOutcome::Infeasible(Infeasibility::Uncoverable { range: range(1, 9) }),
        });

        assert!(!summary.ok);
        assert_eq!(summary.changes, None);
        assert!(summary.segments.is_empty());
        assert_eq!(
            summary.message.as_deref(),
            Some("combined rooms cannot cover [1, 9)")
        );

        // Empty collections and absent fields stay off the wire
        let json = serde_json::to_value(&summary).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("segments"));
        assert!(!obj.contains_key("switches"));
        assert!(!obj.contains_key("changes"));
    }

    #[test]
    fn plan_request_defaults() {
        let req: PlanRequest = serde_json::from_str(
            r#"{"area_ids": ["1"], "start_slot": 2, "end_slot": 8}"#,
        )
        .unwrap();
        assert!(req.required_facilities.is_empty());
        assert!(req.forbidden_facilities.is_empty());
        assert!(!req.allow_three_changes);
        assert_eq!(req.top_k_zero_change, 50);
    }
}
