use sash_core::ViewportClass;

use crate::axis::{AxisResizer, BoundsPolicy, ResizeUpdate};

// ──────────────────────────────────────────────
// BottomPanel
// ──────────────────────────────────────────────

/// Collapse floor: the height of the bare panel header.
pub const PANEL_MIN_HEIGHT: f32 = 30.0;

/// Heights at or above this are ignored, not clamped.
pub const PANEL_MAX_HEIGHT: f32 = 600.0;

/// Default expanded height on narrow viewports.
pub const PANEL_DEFAULT_NARROW: f32 = 240.0;

/// Default expanded height on wide viewports.
pub const PANEL_DEFAULT_WIDE: f32 = 120.0;

/// Device-appropriate default expanded height.
pub fn default_height(viewport: ViewportClass) -> f32 {
    if viewport.is_narrow() {
        PANEL_DEFAULT_NARROW
    } else {
        PANEL_DEFAULT_WIDE
    }
}

/// Bottom options panel: absolute height with a hard collapse floor.
///
/// The collapsed flag is stored explicitly rather than derived from the
/// height, so toggling keeps its restore memory independent of whatever the
/// height happens to be.
#[derive(Debug)]
pub struct BottomPanel {
    height: f32,
    collapsed: bool,
    /// Set once the user drags to an in-range height. A custom height
    /// survives a breakpoint crossing; the default height does not.
    custom: bool,
    /// What toggle-expand restores to. Tracks the viewport class, never the
    /// last dragged height.
    restore_height: f32,
    resizer: AxisResizer,
}

impl BottomPanel {
    pub fn new(viewport: ViewportClass) -> Self {
        let height = default_height(viewport);
        Self {
            height,
            collapsed: false,
            custom: false,
            restore_height: height,
            resizer: AxisResizer::new(BoundsPolicy::SnapToFloor {
                min: PANEL_MIN_HEIGHT,
                max: PANEL_MAX_HEIGHT,
            }),
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Apply one move. `start_height` is the height captured at gesture
    /// start and `delta_y` the raw downward-positive pointer delta, so
    /// dragging upward grows the panel.
    ///
    /// Below the floor the height snaps to exactly the floor and the panel
    /// collapses; at or above the ceiling the frame is ignored and the
    /// panel holds its current height. Returns whether state changed.
    pub fn drag_by(&mut self, start_height: f32, delta_y: f32) -> bool {
        match self.resizer.resize(delta_y, |d| start_height - d) {
            ResizeUpdate::Apply { value, collapsed } => {
                self.height = value;
                self.collapsed = collapsed;
                self.custom = !collapsed;
                true
            }
            ResizeUpdate::Hold => false,
        }
    }

    /// Flip between collapsed and the stored device default. Expanding
    /// always returns to the default, never the last dragged height; that
    /// keeps the toggle predictable.
    pub fn toggle(&mut self) {
        if self.collapsed {
            self.height = self.restore_height;
            self.collapsed = false;
        } else {
            self.height = PANEL_MIN_HEIGHT;
            self.collapsed = true;
        }
        self.custom = false;
    }

    /// Re-evaluate the device default on a viewport class change.
    ///
    /// An expanded panel still at its non-custom default follows the new
    /// default; a custom or collapsed height stays put. The restore target
    /// always follows the device.
    pub fn viewport_changed(&mut self, viewport: ViewportClass) {
        let new_default = default_height(viewport);
        if !self.custom && !self.collapsed {
            self.height = new_default;
        }
        self.restore_height = new_default;
    }
}
