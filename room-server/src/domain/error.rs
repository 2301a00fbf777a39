//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from catalog/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A half-open slot range must have its start before its end
    #[error("empty slot range: start {start} must precede end {end}")]
    EmptyRange { start: u32, end: u32 },

    /// Plan has no segments
    #[error("plan must have at least one segment")]
    EmptyPlan,

    /// Plan has more segments than the change budget ever allows
    #[error("plan has {0} segments, at most 4 are allowed")]
    TooManySegments(usize),

    /// Switch window count does not match the segment count
    #[error("plan with {segments} segments has {switches} switch windows, expected one per change")]
    SwitchCountMismatch { segments: usize, switches: usize },

    /// Consecutive plan segments neither overlap nor meet at a boundary
    #[error("segments {0} and {1} neither overlap nor meet at a boundary")]
    DisconnectedSegments(usize, usize),
}
