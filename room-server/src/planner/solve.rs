//! The multi-tier switch planner.
//!
//! Tiers are tried in strict order — 0, 1, 2, optionally 3 changes — and
//! the first success wins. Anchors always take the candidate with maximal
//! reach toward the far side of the range, which maximizes the chance that
//! the remaining gap is empty or coverable.

use tracing::debug;

use crate::domain::{Plan, SlotRange, SwitchWindow, Vacancy};

use super::config::SolveConfig;
use super::cover::{covers_range_greedy, prune_dominated};
use super::rank::{left_anchor_order, middle_score, right_anchor_order, zero_change_order};

/// Why a solve produced no plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Infeasibility {
    /// Nothing to plan over: the area is unknown, or the filters removed
    /// every vacancy
    #[error("no vacancies to plan over under the current filters")]
    NoVacancies,

    /// Even the union of all vacancies cannot cover the range
    #[error("combined rooms cannot cover {range}")]
    Uncoverable { range: SlotRange },

    /// No plan within 0/1/2 changes and the fallback tier was off
    #[error(
        "no feasible combination under 0/1/2 changes; relax the range or enable the three-change fallback"
    )]
    NoPlanWithinBudget,

    /// No plan even with the three-change fallback enabled
    #[error("no feasible combination under 0/1/2/3 changes; relax the range or the filters")]
    NoPlanWithFallback,
}

/// Outcome of one solve.
///
/// Always a structured value: the solver never raises for well-formed,
/// non-empty input, and infeasibility is data, not an error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Single rooms that each cover the whole range, best-first, capped at
    /// the configured top-K.
    NoChange(Vec<Vacancy>),

    /// A plan with at least one change, plus zero or more alternative
    /// plans with equal or fewer changes.
    Switched { plan: Plan, alternatives: Vec<Plan> },

    /// No plan within the change budget.
    Infeasible(Infeasibility),
}

impl SolveOutcome {
    /// Whether a plan (or zero-change option) was found.
    pub fn is_feasible(&self) -> bool {
        !matches!(self, SolveOutcome::Infeasible(_))
    }

    /// Change count of the winning tier, `None` when infeasible.
    pub fn change_count(&self) -> Option<usize> {
        match self {
            SolveOutcome::NoChange(_) => Some(0),
            SolveOutcome::Switched { plan, .. } => Some(plan.change_count()),
            SolveOutcome::Infeasible(_) => None,
        }
    }
}

/// The room-change solver for one filtered vacancy set.
///
/// Holds only borrowed input; solving is synchronous, allocation-light and
/// free of side effects, so independent solves can run in parallel without
/// coordination.
pub struct Solver<'a> {
    vacancies: &'a [Vacancy],
    config: &'a SolveConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over an already-filtered vacancy set.
    pub fn new(vacancies: &'a [Vacancy], config: &'a SolveConfig) -> Self {
        Self { vacancies, config }
    }

    /// Find the minimum-change plan covering `range`.
    pub fn solve(&self, range: SlotRange) -> SolveOutcome {
        if self.vacancies.is_empty() {
            return SolveOutcome::Infeasible(Infeasibility::NoVacancies);
        }

        let spans: Vec<SlotRange> = self.vacancies.iter().map(|v| v.span).collect();
        if !covers_range_greedy(&spans, range) {
            return SolveOutcome::Infeasible(Infeasibility::Uncoverable { range });
        }

        let pruned = prune_dominated(self.vacancies.to_vec());
        debug!(
            candidates = self.vacancies.len(),
            pruned = pruned.len(),
            %range,
            "feasibility gate passed"
        );

        if let Some(options) = self.zero_change(&pruned, range) {
            return SolveOutcome::NoChange(options);
        }
        if let Some(plan) = self.one_change(&pruned, range) {
            return SolveOutcome::Switched {
                plan,
                alternatives: Vec::new(),
            };
        }
        if let Some((plan, alternatives)) = self.two_change(&pruned, range) {
            return SolveOutcome::Switched { plan, alternatives };
        }

        SolveOutcome::Infeasible(if self.config.allow_three_changes {
            Infeasibility::NoPlanWithFallback
        } else {
            Infeasibility::NoPlanWithinBudget
        })
    }

    /// Tier 0: every pruned vacancy covering the whole range.
    fn zero_change(&self, pruned: &[Vacancy], range: SlotRange) -> Option<Vec<Vacancy>> {
        let mut hits: Vec<Vacancy> = pruned
            .iter()
            .filter(|v| v.covers(range))
            .cloned()
            .collect();
        if hits.is_empty() {
            return None;
        }
        hits.sort_by(zero_change_order);
        hits.truncate(self.config.top_k_zero_change);
        Some(hits)
    }

    /// Best vacancy holding the range start: maximal forward reach.
    fn best_left<'v>(pruned: &'v [Vacancy], at: u32) -> Option<&'v Vacancy> {
        pruned
            .iter()
            .filter(|v| v.span.contains(at))
            .min_by(|a, b| left_anchor_order(a, b))
    }

    /// Best vacancy holding the range end: earliest reach back.
    fn best_right<'v>(pruned: &'v [Vacancy], at: u32) -> Option<&'v Vacancy> {
        pruned
            .iter()
            .filter(|v| v.span.start() < at && at <= v.span.end())
            .min_by(|a, b| right_anchor_order(a, b))
    }

    /// Tier 1: the two anchors overlap, so one switch suffices.
    fn one_change(&self, pruned: &[Vacancy], range: SlotRange) -> Option<Plan> {
        let left = Self::best_left(pruned, range.start())?;
        let right = Self::best_right(pruned, range.end())?;
        if left.overlap_len(right) == 0 {
            return None;
        }
        let window = SwitchWindow::between(left, right);
        Plan::new(vec![left.clone(), right.clone()], vec![window]).ok()
    }

    /// Tier 2, and the optional 3-change fallback for an unbridgeable gap.
    fn two_change(&self, pruned: &[Vacancy], range: SlotRange) -> Option<(Plan, Vec<Plan>)> {
        let left = Self::best_left(pruned, range.start())?;
        let right = Self::best_right(pruned, range.end())?;

        let gap_start = left.span.end();
        let gap_end = right.span.start();

        if gap_start >= gap_end {
            // The anchors meet at a boundary; they cannot overlap here or
            // the one-change tier would already have taken them.
            let boundary = gap_start;
            if let Some(middle) = Self::best_straddling_middle(pruned, left, right, boundary) {
                let plan = Plan::new(
                    vec![left.clone(), middle.clone(), right.clone()],
                    vec![
                        SwitchWindow::between(left, middle),
                        SwitchWindow::between(middle, right),
                    ],
                )
                .ok()?;
                let alternatives = exact_boundary_alternatives(&plan);
                return Some((plan, alternatives));
            }
            let plan = Plan::new(
                vec![left.clone(), right.clone()],
                vec![SwitchWindow::exact(boundary)],
            )
            .ok()?;
            return Some((plan, Vec::new()));
        }

        let gap = SlotRange::new(gap_start, gap_end).ok()?;

        if let Some(middle) = Self::best_covering_middle(pruned, left, right, gap) {
            let plan = Plan::new(
                vec![left.clone(), middle.clone(), right.clone()],
                vec![
                    SwitchWindow::between(left, middle),
                    SwitchWindow::between(middle, right),
                ],
            )
            .ok()?;
            return Some((plan, Vec::new()));
        }

        let bridge = Self::bridge(pruned, gap, self.config.gap_budget())?;
        debug!(%gap, segments = bridge.len(), "gap bridged by fallback tier");

        let mut segments = Vec::with_capacity(bridge.len() + 2);
        segments.push(left.clone());
        segments.extend(bridge.into_iter().cloned());
        segments.push(right.clone());
        let switches = adjacent_windows(&segments);
        let plan = Plan::new(segments, switches).ok()?;
        Some((plan, Vec::new()))
    }

    /// Best middle crossing an exact boundary with slack on both sides.
    fn best_straddling_middle<'v>(
        pruned: &'v [Vacancy],
        left: &Vacancy,
        right: &Vacancy,
        boundary: u32,
    ) -> Option<&'v Vacancy> {
        let mut best: Option<(&Vacancy, (u32, u32, u32))> = None;
        for m in pruned {
            if m == left || m == right {
                continue;
            }
            if !(m.span.start() < boundary && boundary < m.span.end()) {
                continue;
            }
            if left.overlap_len(m) == 0 || m.overlap_len(right) == 0 {
                continue;
            }
            let score = middle_score(left, m, right);
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((m, score));
            }
        }
        best.map(|(m, _)| m)
    }

    /// Best middle fully covering the gap between the anchors.
    fn best_covering_middle<'v>(
        pruned: &'v [Vacancy],
        left: &Vacancy,
        right: &Vacancy,
        gap: SlotRange,
    ) -> Option<&'v Vacancy> {
        let mut best: Option<(&Vacancy, (u32, u32, u32))> = None;
        for m in pruned {
            if !m.covers(gap) {
                continue;
            }
            let score = middle_score(left, m, right);
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                best = Some((m, score));
            }
        }
        best.map(|(m, _)| m)
    }

    /// Cover `range` with at most `budget` changes, returning the covering
    /// segments in order.
    ///
    /// The two-change tier calls this for the gap between its anchors after
    /// single-middle coverage has been ruled out. The budget bounds the
    /// recursion depth, keeping the fallback symmetric with the outer tiers:
    /// a deeper change budget is a parameter change, not new logic.
    fn bridge<'v>(
        pruned: &'v [Vacancy],
        range: SlotRange,
        budget: usize,
    ) -> Option<Vec<&'v Vacancy>> {
        // Zero-change sub-tier. The first call never hits this (the caller
        // has already ruled out a single covering middle); it keeps the
        // recursion well-defined for deeper budgets.
        if let Some(single) = pruned
            .iter()
            .filter(|v| v.covers(range))
            .min_by(|a, b| zero_change_order(a, b))
        {
            return Some(vec![single]);
        }
        if budget == 0 {
            return None;
        }
        let left = Self::best_left(pruned, range.start())?;
        let right = Self::best_right(pruned, range.end())?;
        if left.overlap_len(right) > 0 {
            return Some(vec![left, right]);
        }
        if budget >= 2 && left.span.end() < right.span.start() {
            let inner = SlotRange::new(left.span.end(), right.span.start()).ok()?;
            let mut segments = vec![left];
            segments.extend(Self::bridge(pruned, inner, budget - 2)?);
            segments.push(right);
            return Some(segments);
        }
        None
    }
}

/// Switch windows between consecutive segments of an ordered chain.
fn adjacent_windows(segments: &[Vacancy]) -> Vec<SwitchWindow> {
    segments
        .windows(2)
        .map(|pair| SwitchWindow::between(&pair[0], &pair[1]))
        .collect()
}

/// When a three-segment plan's outer rooms meet exactly at a boundary, the
/// middle only buys slack: surface the exact-boundary one-change plan as an
/// alternative alongside it.
fn exact_boundary_alternatives(plan: &Plan) -> Vec<Plan> {
    let segments = plan.segments();
    if segments.len() != 3 {
        return Vec::new();
    }
    let (first, last) = (&segments[0], &segments[2]);
    if first.span.end() != last.span.start() {
        return Vec::new();
    }
    Plan::new(
        vec![first.clone(), last.clone()],
        vec![SwitchWindow::exact(first.span.end())],
    )
    .ok()
    .into_iter()
    .collect()
}
