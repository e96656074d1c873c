#[cfg(test)]
mod tests {
    use crate::{DragSession, ListenerTable, GLOBAL_LISTENER_KINDS};
    use sash_core::{Axis, PointerEvent, PointerKind, TouchPoint, Vec2};

    fn mouse_down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::MouseDown {
            position: Vec2::new(x, y),
            cancelable: true,
        }
    }

    fn mouse_move(x: f32, y: f32) -> PointerEvent {
        PointerEvent::MouseMove {
            position: Vec2::new(x, y),
        }
    }

    fn touch_start(x: f32, y: f32) -> PointerEvent {
        PointerEvent::TouchStart {
            touches: vec![TouchPoint::new(x, y)],
            cancelable: true,
        }
    }

    fn touch_move(x: f32, y: f32) -> PointerEvent {
        PointerEvent::TouchMove {
            touches: vec![TouchPoint::new(x, y)],
        }
    }

    // ──────────────────────────────────────────
    // Session start
    // ──────────────────────────────────────────

    #[test]
    fn test_begin_mouse_registers_listener_union() {
        let mut table = ListenerTable::new();
        let session =
            DragSession::begin(&mut table, &mouse_down(500.0, 10.0), Axis::Horizontal, 50.0)
                .unwrap();

        assert_eq!(table.len(), GLOBAL_LISTENER_KINDS.len());
        assert_eq!(session.pointer_kind(), PointerKind::Mouse);
        assert_eq!(session.origin(), 500.0);
        assert_eq!(session.start_value(), 50.0);
        assert!(session.is_active());
    }

    #[test]
    fn test_begin_touch_reads_first_contact() {
        let mut table = ListenerTable::new();
        let event = PointerEvent::TouchStart {
            touches: vec![TouchPoint::new(120.0, 300.0), TouchPoint::new(400.0, 9.0)],
            cancelable: false,
        };
        let session = DragSession::begin(&mut table, &event, Axis::Vertical, 120.0).unwrap();

        assert_eq!(session.pointer_kind(), PointerKind::Touch);
        assert_eq!(session.origin(), 300.0);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_begin_empty_touch_list_registers_nothing() {
        let mut table = ListenerTable::new();
        let event = PointerEvent::TouchStart {
            touches: Vec::new(),
            cancelable: true,
        };
        assert!(DragSession::begin(&mut table, &event, Axis::Vertical, 0.0).is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_begin_rejects_non_start_events() {
        let mut table = ListenerTable::new();
        assert!(DragSession::begin(&mut table, &mouse_move(1.0, 1.0), Axis::Horizontal, 0.0)
            .is_none());
        assert!(DragSession::begin(
            &mut table,
            &PointerEvent::MouseUp {
                position: Vec2::new(1.0, 1.0)
            },
            Axis::Horizontal,
            0.0
        )
        .is_none());
        assert!(table.is_empty());
    }

    // ──────────────────────────────────────────
    // Move tracking across both families
    // ──────────────────────────────────────────

    #[test]
    fn test_touch_session_tracks_mouse_moves() {
        // A touch-started gesture still listens on the mouse family.
        let mut table = ListenerTable::new();
        let session =
            DragSession::begin(&mut table, &touch_start(0.0, 300.0), Axis::Vertical, 120.0)
                .unwrap();

        assert_eq!(session.delta(&touch_move(0.0, 250.0)), Some(-50.0));
        assert_eq!(session.delta(&mouse_move(0.0, 250.0)), Some(-50.0));
        assert!(table.accepts(&mouse_move(0.0, 250.0)));
        assert!(table.accepts(&touch_move(0.0, 250.0)));
    }

    #[test]
    fn test_axis_projection() {
        let mut table = ListenerTable::new();
        let horizontal =
            DragSession::begin(&mut table, &mouse_down(100.0, 7.0), Axis::Horizontal, 0.0)
                .unwrap();
        let vertical = DragSession::begin(&mut table, &mouse_down(7.0, 100.0), Axis::Vertical, 0.0)
            .unwrap();

        assert_eq!(horizontal.position(&mouse_move(160.0, 999.0)), Some(160.0));
        assert_eq!(vertical.position(&mouse_move(999.0, 160.0)), Some(160.0));
    }

    #[test]
    fn test_empty_touch_move_skips_frame() {
        let mut table = ListenerTable::new();
        let session =
            DragSession::begin(&mut table, &touch_start(0.0, 300.0), Axis::Vertical, 120.0)
                .unwrap();

        let empty = PointerEvent::TouchMove { touches: Vec::new() };
        assert_eq!(session.delta(&empty), None);
        assert!(session.is_active());
    }

    #[test]
    fn test_end_events_are_never_dereferenced_for_coordinates() {
        let mut table = ListenerTable::new();
        let session =
            DragSession::begin(&mut table, &touch_start(0.0, 300.0), Axis::Vertical, 120.0)
                .unwrap();

        let end = PointerEvent::TouchEnd { touches: Vec::new() };
        assert_eq!(session.position(&end), None);
        assert_eq!(session.delta(&end), None);
    }

    // ──────────────────────────────────────────
    // End / idempotence
    // ──────────────────────────────────────────

    #[test]
    fn test_end_releases_whole_union() {
        let mut table = ListenerTable::new();
        let mut session =
            DragSession::begin(&mut table, &mouse_down(0.0, 0.0), Axis::Horizontal, 50.0)
                .unwrap();

        session.end(&mut table);
        assert!(table.is_empty());
        assert!(!session.is_active());
        assert!(!table.accepts(&mouse_move(1.0, 1.0)));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut table = ListenerTable::new();
        let mut session =
            DragSession::begin(&mut table, &mouse_down(0.0, 0.0), Axis::Horizontal, 50.0)
                .unwrap();

        session.end(&mut table);
        session.end(&mut table);
        session.end(&mut table);
        assert!(table.is_empty());
    }

    #[test]
    fn test_ended_session_ignores_moves() {
        let mut table = ListenerTable::new();
        let mut session =
            DragSession::begin(&mut table, &mouse_down(100.0, 0.0), Axis::Horizontal, 50.0)
                .unwrap();
        session.end(&mut table);

        assert_eq!(session.position(&mouse_move(700.0, 0.0)), None);
        assert_eq!(session.delta(&mouse_move(700.0, 0.0)), None);
    }

    // ──────────────────────────────────────────
    // ListenerTable
    // ──────────────────────────────────────────

    #[test]
    fn test_remove_reports_stale_ids() {
        let mut table = ListenerTable::new();
        let id = table.register(crate::ListenerKind::MouseMove);

        assert!(table.remove(id));
        assert!(!table.remove(id));
        assert!(table.is_empty());
    }

    #[test]
    fn test_accepts_only_registered_families() {
        let mut table = ListenerTable::new();
        table.register(crate::ListenerKind::MouseMove);

        assert!(table.accepts(&mouse_move(0.0, 0.0)));
        assert!(!table.accepts(&touch_move(0.0, 0.0)));
        assert!(!table.accepts(&PointerEvent::MouseUp {
            position: Vec2::new(0.0, 0.0)
        }));
    }

    #[test]
    fn test_concurrent_sessions_keep_distinct_ids() {
        // Two hosts sharing one surface release only their own union.
        let mut table = ListenerTable::new();
        let mut a = DragSession::begin(&mut table, &mouse_down(0.0, 0.0), Axis::Horizontal, 0.0)
            .unwrap();
        let mut b = DragSession::begin(&mut table, &touch_start(0.0, 0.0), Axis::Vertical, 0.0)
            .unwrap();
        assert_eq!(table.len(), 8);

        a.end(&mut table);
        assert_eq!(table.len(), 4);
        assert!(table.accepts(&mouse_move(0.0, 0.0)));

        b.end(&mut table);
        assert!(table.is_empty());
    }
}
