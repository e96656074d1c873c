// Drag session lifecycle: one gesture from pointer-down to release,
// tracked through listeners registered on the host's global input surface.

use sash_core::{Axis, PointerEvent, PointerKind};

mod tests;

// ──────────────────────────────────────────────
// Global listener bookkeeping
// ──────────────────────────────────────────────

pub type ListenerId = u64;

/// The global event families a drag session listens on. A gesture started
/// with one pointer kind must stay trackable if the platform reports motion
/// through the other family, so a session always holds the full union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    MouseMove,
    MouseUp,
    TouchMove,
    TouchEnd,
}

pub const GLOBAL_LISTENER_KINDS: [ListenerKind; 4] = [
    ListenerKind::MouseMove,
    ListenerKind::MouseUp,
    ListenerKind::TouchMove,
    ListenerKind::TouchEnd,
];

impl ListenerKind {
    /// Whether an event belongs to this listener's family.
    pub fn matches(&self, event: &PointerEvent) -> bool {
        matches!(
            (self, event),
            (ListenerKind::MouseMove, PointerEvent::MouseMove { .. })
                | (ListenerKind::MouseUp, PointerEvent::MouseUp { .. })
                | (ListenerKind::TouchMove, PointerEvent::TouchMove { .. })
                | (ListenerKind::TouchEnd, PointerEvent::TouchEnd { .. })
        )
    }
}

/// Registry standing in for the global input surface: who is currently
/// listening, by id. The host owns one table for its whole lifetime and
/// dispatches an event only when some registration accepts it.
pub struct ListenerTable {
    next_id: ListenerId,
    active: Vec<(ListenerId, ListenerKind)>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            active: Vec::new(),
        }
    }

    pub fn register(&mut self, kind: ListenerKind) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push((id, kind));
        id
    }

    /// Remove a registration. Returns false if the id was already gone, so
    /// double-removal is observable in tests but never a fault.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|(lid, _)| *lid != id);
        self.active.len() != before
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether any live registration covers this event's family.
    pub fn accepts(&self, event: &PointerEvent) -> bool {
        self.active.iter().any(|(_, kind)| kind.matches(event))
    }
}

impl Default for ListenerTable {
    fn default() -> Self {
        Self::new()
    }
}

// ──────────────────────────────────────────────
// DragSession
// ──────────────────────────────────────────────

/// One drag gesture: created on pointer-down, destroyed on release or host
/// teardown, whichever comes first. Owns the four global listener
/// registrations for the duration of the gesture.
#[derive(Debug)]
pub struct DragSession {
    kind: PointerKind,
    axis: Axis,
    origin: f32,
    start_value: f32,
    active: bool,
    listeners: Vec<ListenerId>,
}

impl DragSession {
    /// Start a session from a mouse-down or touch-start occurrence.
    ///
    /// Registers the full listener union in `table` and captures the origin
    /// coordinate on `axis` plus the value in effect when the gesture
    /// started. Returns `None` (nothing registered) for events that cannot
    /// start a gesture: move/end events, or a touch-start with no contacts.
    pub fn begin(
        table: &mut ListenerTable,
        event: &PointerEvent,
        axis: Axis,
        start_value: f32,
    ) -> Option<Self> {
        let kind = event.start_kind()?;
        let contact = match event.contact() {
            Some(p) => p,
            None => {
                log::warn!("gesture start without a contact point ignored");
                return None;
            }
        };

        let listeners = GLOBAL_LISTENER_KINDS
            .iter()
            .map(|&k| table.register(k))
            .collect();

        Some(Self {
            kind,
            axis,
            origin: axis.coordinate(contact),
            start_value,
            active: true,
            listeners,
        })
    }

    pub fn pointer_kind(&self) -> PointerKind {
        self.kind
    }

    pub fn origin(&self) -> f32 {
        self.origin
    }

    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Absolute coordinate of a move event on the session axis.
    ///
    /// Only the move path reads coordinates; end events terminate the
    /// session without being dereferenced, so an empty touch list on a move
    /// frame simply skips that frame.
    pub fn position(&self, event: &PointerEvent) -> Option<f32> {
        if !self.active || !event.is_move() {
            return None;
        }
        Some(self.axis.coordinate(event.contact()?))
    }

    /// Raw delta (current minus origin) of a move event.
    pub fn delta(&self, event: &PointerEvent) -> Option<f32> {
        Some(self.position(event)? - self.origin)
    }

    /// Terminate the session and release the whole listener union.
    ///
    /// Idempotent: the ids are drained on the first call, so calling this
    /// again (release event after an unmount teardown, say) removes nothing
    /// twice and touches no other state.
    pub fn end(&mut self, table: &mut ListenerTable) {
        self.active = false;
        for id in self.listeners.drain(..) {
            table.remove(id);
        }
    }
}
