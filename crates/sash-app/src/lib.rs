// Responsive layout host: composes the split, the bottom panel, and the
// drag-session machinery under a viewport-driven presentation mode.
// The rendering layer forwards raw pointer occurrences here and reads the
// resulting geometry back; nothing in this crate touches a real window.

mod settings;

pub use settings::{load_settings, save_settings, BreakpointSettings, Settings};

use sash_core::{Axis, BoundsProbe, PointerEvent, PresentationMode, ViewportClass};
use sash_input::{DragSession, ListenerTable};
use sash_layout::{BottomPanel, SplitLayout};

// ──────────────────────────────────────────────
// Input response
// ──────────────────────────────────────────────

/// What the embedder should do with the platform event it just forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    /// Not consumed: wrong presentation mode, a session already active, or
    /// a start event with no usable contact.
    Ignored,
    /// Gesture captured. `suppress_default` asks the embedder to prevent
    /// the platform's default action, which keeps a touch drag from
    /// scrolling the page.
    Captured { suppress_default: bool },
}

/// Which divider the active session is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    SplitDivider,
    PanelDivider,
}

struct ActiveDrag {
    session: DragSession,
    target: DragTarget,
}

// ──────────────────────────────────────────────
// Workspace
// ──────────────────────────────────────────────

/// Top-level layout host for one mounted view.
///
/// Owns the whole panel layout state plus the global listener table, and is
/// the single place drag sessions are started, fed, and released. Created
/// with defaults at mount; `teardown` is the unmount hook and the state is
/// discarded with the host, never persisted.
pub struct Workspace {
    viewport: ViewportClass,
    mode: PresentationMode,
    split: SplitLayout,
    panel: BottomPanel,
    listeners: ListenerTable,
    drag: Option<ActiveDrag>,
    overlay_open: bool,
}

impl Workspace {
    pub fn new(viewport: ViewportClass) -> Self {
        Self {
            viewport,
            mode: PresentationMode::from_viewport(viewport),
            split: SplitLayout::new(),
            panel: BottomPanel::new(viewport),
            listeners: ListenerTable::new(),
            drag: None,
            overlay_open: false,
        }
    }

    // ── Reads ───────────────────────────────────

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn left_percentage(&self) -> f32 {
        self.split.left_percentage()
    }

    pub fn is_left_collapsed(&self) -> bool {
        self.split.is_left_collapsed()
    }

    pub fn is_right_collapsed(&self) -> bool {
        self.split.is_right_collapsed()
    }

    pub fn bottom_height(&self) -> f32 {
        self.panel.height()
    }

    pub fn is_bottom_collapsed(&self) -> bool {
        self.panel.is_collapsed()
    }

    /// True only while a split divider drag is live. Derived from the
    /// session slot, so no end path can leave it stuck on.
    pub fn is_resizing_split(&self) -> bool {
        matches!(
            self.drag,
            Some(ActiveDrag {
                target: DragTarget::SplitDivider,
                ..
            })
        )
    }

    pub fn is_resizing_panel(&self) -> bool {
        matches!(
            self.drag,
            Some(ActiveDrag {
                target: DragTarget::PanelDivider,
                ..
            })
        )
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Live registrations on the global input surface. Zero whenever no
    /// drag is active; exposed so embedders and tests can assert the
    /// no-leak contract.
    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    // ── Drag entry points ───────────────────────

    /// Begin a split divider drag from a mouse-down or touch-start on the
    /// divider. Only available in `Split` mode, and a no-op while another
    /// session is active.
    pub fn start_split_resize(&mut self, event: &PointerEvent) -> InputResponse {
        if self.mode != PresentationMode::Split || self.drag.is_some() {
            return InputResponse::Ignored;
        }
        let start = self.split.left_percentage();
        self.begin_drag(event, Axis::Horizontal, start, DragTarget::SplitDivider)
    }

    /// Begin a bottom panel drag. Only available in `Sidebar` mode, and a
    /// no-op while another session is active.
    pub fn start_panel_resize(&mut self, event: &PointerEvent) -> InputResponse {
        if self.mode != PresentationMode::Sidebar || self.drag.is_some() {
            return InputResponse::Ignored;
        }
        let start = self.panel.height();
        self.begin_drag(event, Axis::Vertical, start, DragTarget::PanelDivider)
    }

    fn begin_drag(
        &mut self,
        event: &PointerEvent,
        axis: Axis,
        start_value: f32,
        target: DragTarget,
    ) -> InputResponse {
        match DragSession::begin(&mut self.listeners, event, axis, start_value) {
            Some(session) => {
                let suppress_default = event.cancelable();
                self.drag = Some(ActiveDrag { session, target });
                InputResponse::Captured { suppress_default }
            }
            None => InputResponse::Ignored,
        }
    }

    /// Route a global move or end occurrence to the active session.
    ///
    /// Events whose family holds no live registration are not observed at
    /// all, which is exactly the global-listener contract: after a session
    /// ends (or the host is torn down) further moves change nothing.
    ///
    /// The split path re-reads the container bounds from `probe` on every
    /// move; the panel path works on the session delta alone.
    pub fn handle_pointer(&mut self, event: &PointerEvent, probe: &dyn BoundsProbe) {
        if !self.listeners.accepts(event) {
            return;
        }
        let active = match self.drag.as_mut() {
            Some(a) => a,
            None => return,
        };

        if event.is_end() {
            active.session.end(&mut self.listeners);
            self.drag = None;
            return;
        }

        match active.target {
            DragTarget::SplitDivider => {
                if let Some(x) = active.session.position(event) {
                    self.split.drag_to(x, probe.split_bounds());
                }
            }
            DragTarget::PanelDivider => {
                if let Some(delta) = active.session.delta(event) {
                    self.panel.drag_by(active.session.start_value(), delta);
                }
            }
        }
    }

    // ── Explicit actions ────────────────────────

    pub fn restore_left(&mut self) {
        self.split.restore_left();
    }

    pub fn restore_right(&mut self) {
        self.split.restore_right();
    }

    pub fn toggle_bottom_panel(&mut self) {
        self.panel.toggle();
    }

    /// Open the full-screen editor overlay. Only meaningful in `Overlay`
    /// mode, where no drag affordance exists.
    pub fn open_editor(&mut self) {
        if self.mode == PresentationMode::Overlay {
            self.overlay_open = true;
        }
    }

    pub fn close_editor(&mut self) {
        self.overlay_open = false;
    }

    // ── Viewport ────────────────────────────────

    /// Re-classify on viewport resize.
    ///
    /// A presentation-mode change first terminates any active drag session
    /// (the divider being dragged may no longer exist) and closes the
    /// overlay. The bottom panel re-evaluates its device default; split and
    /// panel values otherwise survive mode flips for the life of the host.
    pub fn viewport_resized(&mut self, viewport: ViewportClass) {
        let new_mode = PresentationMode::from_viewport(viewport);
        if new_mode != self.mode {
            self.cancel_drag();
            self.overlay_open = false;
        }
        self.viewport = viewport;
        self.mode = new_mode;
        self.panel.viewport_changed(viewport);
    }

    // ── Teardown ────────────────────────────────

    fn cancel_drag(&mut self) {
        if let Some(mut active) = self.drag.take() {
            active.session.end(&mut self.listeners);
        }
    }

    /// Unmount hook: unconditionally releases any live drag session and its
    /// global listeners, covering gestures whose end event never arrives.
    /// Safe to call any number of times.
    pub fn teardown(&mut self) {
        self.cancel_drag();
    }
}
