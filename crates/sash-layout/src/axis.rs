// ──────────────────────────────────────────────
// AxisResizer: shared 1-D resize primitive
// ──────────────────────────────────────────────

/// Outcome of one move frame through a resizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeUpdate {
    /// Store the value; `collapsed` reports a floor snap.
    Apply { value: f32, collapsed: bool },
    /// Out-of-range or non-finite candidate: keep the previous value.
    Hold,
}

/// How a resizer treats candidates outside its domain.
///
/// The two call sites deliberately differ: the horizontal split rejects the
/// frame and sticks at the last valid value, while the bottom panel resolves
/// a low candidate to its floor and flips the collapsed flag. Unifying the
/// two would change observable drag behavior at the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsPolicy {
    /// Discard candidates outside `[min, max]` (inclusive).
    Reject { min: f32, max: f32 },
    /// Snap candidates below `min` to exactly `min`, reporting collapse.
    /// Candidates at or above `max` are ignored, not clamped.
    SnapToFloor { min: f32, max: f32 },
}

impl BoundsPolicy {
    fn resolve(&self, candidate: f32) -> ResizeUpdate {
        match *self {
            BoundsPolicy::Reject { min, max } => {
                // NaN fails both comparisons and holds.
                if candidate >= min && candidate <= max {
                    ResizeUpdate::Apply {
                        value: candidate,
                        collapsed: false,
                    }
                } else {
                    ResizeUpdate::Hold
                }
            }
            BoundsPolicy::SnapToFloor { min, max } => {
                if candidate.is_nan() {
                    ResizeUpdate::Hold
                } else if candidate < min {
                    ResizeUpdate::Apply {
                        value: min,
                        collapsed: true,
                    }
                } else if candidate < max {
                    ResizeUpdate::Apply {
                        value: candidate,
                        collapsed: false,
                    }
                } else {
                    ResizeUpdate::Hold
                }
            }
        }
    }
}

/// Axis-agnostic resize primitive: applies the caller's mapping from a raw
/// pointer reading to a candidate value, then resolves the candidate against
/// the bounds policy. The mapping encodes the axis sign convention (the
/// vertical caller inverts its delta, since dragging upward grows the
/// panel); the resizer itself knows nothing beyond the numbers it is given.
#[derive(Debug, Clone, Copy)]
pub struct AxisResizer {
    policy: BoundsPolicy,
}

impl AxisResizer {
    pub fn new(policy: BoundsPolicy) -> Self {
        Self { policy }
    }

    pub fn resize(&self, raw: f32, map: impl FnOnce(f32) -> f32) -> ResizeUpdate {
        self.policy.resolve(map(raw))
    }
}
