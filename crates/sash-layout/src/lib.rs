// Resize and collapse state for the statement/editor split view.
// The split divider and the bottom panel share one primitive (AxisResizer)
// and differ only in their mapping functions and bounds policies.

mod axis;
mod panel;

pub use axis::{AxisResizer, BoundsPolicy, ResizeUpdate};
pub use panel::{
    default_height, BottomPanel, PANEL_DEFAULT_NARROW, PANEL_DEFAULT_WIDE, PANEL_MAX_HEIGHT,
    PANEL_MIN_HEIGHT,
};

use sash_core::Rect;

// ──────────────────────────────────────────────
// SplitLayout
// ──────────────────────────────────────────────

/// Default left-pane share of the split, in percent.
pub const DEFAULT_SPLIT_PCT: f32 = 50.0;

/// Below this share the left pane counts as tucked away. Offset from 0/100
/// to give a small dead zone, so the flag does not flicker exactly at the
/// boundary.
pub const LEFT_COLLAPSE_PCT: f32 = 2.0;

/// Above this share the right pane counts as tucked away.
pub const RIGHT_COLLAPSE_PCT: f32 = 98.0;

/// Horizontal two-pane split: the left pane's width as a percentage of the
/// container.
///
/// The percentage is recomputed from the pointer's *absolute* position
/// within the container's current bounds on every move, not accumulated
/// from deltas, so a container reflow mid-drag cannot skew the split.
pub struct SplitLayout {
    left_pct: f32,
    resizer: AxisResizer,
}

impl SplitLayout {
    pub fn new() -> Self {
        Self {
            left_pct: DEFAULT_SPLIT_PCT,
            resizer: AxisResizer::new(BoundsPolicy::Reject {
                min: 0.0,
                max: 100.0,
            }),
        }
    }

    pub fn left_percentage(&self) -> f32 {
        self.left_pct
    }

    pub fn is_left_collapsed(&self) -> bool {
        self.left_pct < LEFT_COLLAPSE_PCT
    }

    pub fn is_right_collapsed(&self) -> bool {
        self.left_pct > RIGHT_COLLAPSE_PCT
    }

    /// Apply one move at the pointer's absolute x within `bounds`. Returns
    /// whether the stored percentage changed.
    ///
    /// A candidate outside [0, 100] is rejected for the frame, so dragging
    /// past the container edge sticks at the last valid value instead of
    /// snapping to the boundary. A zero-width container makes the frame a
    /// no-op rather than a division fault.
    pub fn drag_to(&mut self, pointer_x: f32, bounds: Rect) -> bool {
        if bounds.width <= 0.0 {
            log::warn!("split container has no width; move ignored");
            return false;
        }

        let update = self
            .resizer
            .resize(pointer_x, |x| (x - bounds.x) / bounds.width * 100.0);
        match update {
            ResizeUpdate::Apply { value, .. } => {
                let changed = value != self.left_pct;
                self.left_pct = value;
                changed
            }
            ResizeUpdate::Hold => false,
        }
    }

    /// Reset to the midpoint. Both restore actions share this regardless of
    /// which side was collapsed.
    pub fn restore_left(&mut self) {
        self.left_pct = DEFAULT_SPLIT_PCT;
    }

    pub fn restore_right(&mut self) {
        self.left_pct = DEFAULT_SPLIT_PCT;
    }
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self::new()
    }
}
