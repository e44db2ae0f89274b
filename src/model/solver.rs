//! Constrained resize solver
//!
//! One pointer coordinate becomes one scalar delta, applied with opposite
//! signs to the leading and trailing panels. The most constrained panel on
//! either side limits the whole step, so no panel crosses its minimum and no
//! space is created or lost.

/// A panel's geometry along the drag axis, captured before the step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSample {
    /// Leading edge coordinate
    pub start: f32,
    /// Trailing edge coordinate
    pub end: f32,
    /// Current size
    pub size: f32,
    /// Minimum size
    pub min: f32,
}

impl EdgeSample {
    /// Room to shrink before hitting the minimum
    pub fn available(&self) -> f32 {
        (self.size - self.min).max(0.0)
    }
}

/// Result of one solver step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveStep {
    /// Delta the leading side asked for
    pub requested: f32,
    /// Delta actually applied (+ to leading, - to trailing)
    pub applied: f32,
}

impl SolveStep {
    pub const NONE: SolveStep = SolveStep {
        requested: 0.0,
        applied: 0.0,
    };

    /// A minimum size stopped the divider short of the pointer
    pub fn is_clamped(&self) -> bool {
        self.requested != self.applied
    }
}

/// Delta a leading panel needs so its boundary edge reaches `pointer`.
///
/// The far edge stays put; the candidate size is clamped to the minimum
/// before the delta is taken.
pub fn leading_delta(sample: &EdgeSample, pointer: f32, reversed: bool) -> f32 {
    let reach = if reversed {
        sample.end - pointer
    } else {
        pointer - sample.start
    };
    reach.max(sample.min) - sample.size
}

/// Compute the delta to apply for a drag to `pointer`.
///
/// `reversed` is set when the divider's group lays out in reverse visual
/// order, so leading panels sit after the boundary on screen.
pub fn solve(
    leading: &[EdgeSample],
    trailing: &[EdgeSample],
    pointer: f32,
    reversed: bool,
) -> SolveStep {
    if !pointer.is_finite() || leading.is_empty() || trailing.is_empty() {
        return SolveStep::NONE;
    }

    let requested = leading
        .iter()
        .map(|s| leading_delta(s, pointer, reversed))
        .fold(f32::INFINITY, f32::min);

    // Growth is bounded by the trailing side's room to shrink, shrinkage by
    // the leading side's.
    let trailing_room = trailing
        .iter()
        .map(EdgeSample::available)
        .fold(f32::INFINITY, f32::min);
    let leading_room = leading
        .iter()
        .map(EdgeSample::available)
        .fold(f32::INFINITY, f32::min);

    SolveStep {
        requested,
        applied: requested.min(trailing_room).max(-leading_room),
    }
}

/// New size after applying `delta`, with a final clamp to the minimum
pub fn apply(size: f32, min: f32, delta: f32) -> f32 {
    (size + delta).max(min)
}
