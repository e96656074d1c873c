// Shared vocabulary for the Sash layout engine: geometry, the normalized
// pointer event stream, viewport classification, and the seams through which
// the rendering layer feeds measurements in.

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// The axis a resizer tracks. A split divider moves along X, the bottom
/// panel divider along Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Project a point onto this axis.
    pub fn coordinate(&self, point: Vec2) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }
}

// ──────────────────────────────────────────────
// Pointer input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// One active touch contact, already in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub position: Vec2,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

/// Raw occurrences from the host input surface, mouse and touch unified.
///
/// Down/start events target the divider element and carry the platform's
/// cancelable flag; move and end events arrive through the global listener
/// families a drag session registers for.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    MouseDown { position: Vec2, cancelable: bool },
    MouseMove { position: Vec2 },
    MouseUp { position: Vec2 },
    TouchStart { touches: Vec<TouchPoint>, cancelable: bool },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd { touches: Vec<TouchPoint> },
}

impl PointerEvent {
    /// The single tracked contact: the mouse position, or the first active
    /// touch. `None` when a touch frame carries no contacts, which end
    /// events legitimately do.
    pub fn contact(&self) -> Option<Vec2> {
        match self {
            PointerEvent::MouseDown { position, .. }
            | PointerEvent::MouseMove { position }
            | PointerEvent::MouseUp { position } => Some(*position),
            PointerEvent::TouchStart { touches, .. }
            | PointerEvent::TouchMove { touches }
            | PointerEvent::TouchEnd { touches } => touches.first().map(|t| t.position),
        }
    }

    /// Pointer kind for gesture-start events; `None` for move/end events.
    pub fn start_kind(&self) -> Option<PointerKind> {
        match self {
            PointerEvent::MouseDown { .. } => Some(PointerKind::Mouse),
            PointerEvent::TouchStart { .. } => Some(PointerKind::Touch),
            _ => None,
        }
    }

    /// Whether the source event's default action may be suppressed.
    pub fn cancelable(&self) -> bool {
        match self {
            PointerEvent::MouseDown { cancelable, .. }
            | PointerEvent::TouchStart { cancelable, .. } => *cancelable,
            _ => false,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(
            self,
            PointerEvent::MouseMove { .. } | PointerEvent::TouchMove { .. }
        )
    }

    pub fn is_end(&self) -> bool {
        matches!(
            self,
            PointerEvent::MouseUp { .. } | PointerEvent::TouchEnd { .. }
        )
    }
}

// ──────────────────────────────────────────────
// Viewport classification
// ──────────────────────────────────────────────

/// Width class supplied by the environment and re-evaluated on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Desktop/tablet width: two resizable panes.
    Wide,
    /// Narrow desktop: single pane plus the bottom panel.
    Narrow,
    /// Mobile: full-screen overlay, no drag affordance.
    Phone,
}

impl ViewportClass {
    /// Narrow for the purpose of the bottom panel's default height.
    pub fn is_narrow(&self) -> bool {
        matches!(self, ViewportClass::Narrow | ViewportClass::Phone)
    }
}

/// Width thresholds separating the three viewport classes.
///
/// The engine never measures the viewport itself; the embedder classifies
/// its width with these and pushes the result in on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Widths at or below this are `Phone`.
    pub phone_max: f32,
    /// Widths at or below this (and above `phone_max`) are `Narrow`.
    pub narrow_max: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            phone_max: 640.0,
            narrow_max: 1024.0,
        }
    }
}

impl Breakpoints {
    pub fn classify(&self, width: f32) -> ViewportClass {
        if width <= self.phone_max {
            ViewportClass::Phone
        } else if width <= self.narrow_max {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

// ──────────────────────────────────────────────
// Presentation mode
// ──────────────────────────────────────────────

/// How the workspace presents its panes at the current viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Two resizable horizontal panes, each collapsible and restorable.
    Split,
    /// One primary pane plus the resizable/collapsible bottom panel.
    Sidebar,
    /// Secondary content behind an explicit open/close action.
    Overlay,
}

impl PresentationMode {
    pub fn from_viewport(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Wide => PresentationMode::Split,
            ViewportClass::Narrow => PresentationMode::Sidebar,
            ViewportClass::Phone => PresentationMode::Overlay,
        }
    }
}

// ──────────────────────────────────────────────
// Trait: BoundsProbe
// ──────────────────────────────────────────────

/// Live geometry the rendering layer exposes to the engine.
///
/// The split percentage is recomputed from the container's *current*
/// bounding box on every move, so the probe is consulted per event rather
/// than captured once at drag start. That keeps a drag correct while the
/// container itself reflows.
pub trait BoundsProbe {
    /// Bounding box of the element containing the two split panes.
    fn split_bounds(&self) -> Rect;
}
