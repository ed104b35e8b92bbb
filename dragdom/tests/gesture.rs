use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
};
use dragdom::{pointer_event, GestureEvent, MouseButton, PanRecognizer, PointerEvent, Rect};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn down(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Down {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn up(x: u16, y: u16) -> PointerEvent {
    PointerEvent::Up {
        x,
        y,
        button: MouseButton::Left,
    }
}

const HANDLE: Rect = Rect::new(10, 5, 2, 1);

// ============================================================================
// Pointer conversion
// ============================================================================

#[test]
fn test_pointer_event_from_mouse() {
    let raw = mouse(MouseEventKind::Down(CtButton::Left), 3, 4);
    assert_eq!(pointer_event(&raw), Some(down(3, 4)));

    let raw = mouse(MouseEventKind::Drag(CtButton::Left), 5, 6);
    assert_eq!(pointer_event(&raw), Some(PointerEvent::Move { x: 5, y: 6 }));

    let raw = mouse(MouseEventKind::Up(CtButton::Left), 7, 8);
    assert_eq!(pointer_event(&raw), Some(up(7, 8)));
}

#[test]
fn test_hover_is_not_a_pointer_event() {
    let raw = mouse(MouseEventKind::Moved, 3, 4);
    assert_eq!(pointer_event(&raw), None);

    let raw = mouse(MouseEventKind::ScrollDown, 3, 4);
    assert_eq!(pointer_event(&raw), None);
}

// ============================================================================
// Pan recognition
// ============================================================================

#[test]
fn test_press_inside_starts_pan_silently() {
    let mut pan = PanRecognizer::new("handle");
    assert!(!pan.is_panning());

    assert_eq!(pan.process(down(10, 5), HANDLE), None);
    assert!(pan.is_panning());
}

#[test]
fn test_press_outside_starts_nothing() {
    let mut pan = PanRecognizer::new("handle");

    assert_eq!(pan.process(down(0, 0), HANDLE), None);
    assert!(!pan.is_panning());

    // Movement afterwards is ignored
    assert_eq!(pan.process(PointerEvent::Move { x: 5, y: 0 }, HANDLE), None);
}

#[test]
fn test_right_button_does_not_pan() {
    let mut pan = PanRecognizer::new("handle");
    let press = PointerEvent::Down {
        x: 10,
        y: 5,
        button: MouseButton::Right,
    };

    assert_eq!(pan.process(press, HANDLE), None);
    assert!(!pan.is_panning());
}

#[test]
fn test_deltas_are_cumulative_from_press() {
    let mut pan = PanRecognizer::new("handle");
    pan.process(down(11, 5), HANDLE);

    let first = pan.process(PointerEvent::Move { x: 14, y: 5 }, HANDLE);
    assert_eq!(
        first,
        Some(GestureEvent::Pan {
            target: "handle".to_string(),
            delta_x: 3.0,
            delta_y: 0.0,
        })
    );

    let second = pan.process(PointerEvent::Move { x: 9, y: 2 }, HANDLE);
    assert_eq!(
        second,
        Some(GestureEvent::Pan {
            target: "handle".to_string(),
            delta_x: -2.0,
            delta_y: -3.0,
        })
    );
}

#[test]
fn test_release_emits_single_pan_end() {
    let mut pan = PanRecognizer::new("handle");
    pan.process(down(10, 5), HANDLE);
    pan.process(PointerEvent::Move { x: 20, y: 5 }, HANDLE);

    let end = pan.process(up(20, 5), HANDLE);
    assert_eq!(
        end,
        Some(GestureEvent::PanEnd {
            target: "handle".to_string(),
            delta_x: 10.0,
            delta_y: 0.0,
        })
    );
    assert!(!pan.is_panning());

    // A second release has nothing to end
    assert_eq!(pan.process(up(20, 5), HANDLE), None);
}

#[test]
fn test_other_button_release_does_not_end_pan() {
    let mut pan = PanRecognizer::new("handle");
    pan.process(down(10, 5), HANDLE);
    pan.process(PointerEvent::Move { x: 14, y: 5 }, HANDLE);

    let right_up = PointerEvent::Up {
        x: 14,
        y: 5,
        button: MouseButton::Right,
    };
    assert_eq!(pan.process(right_up, HANDLE), None);
    assert!(pan.is_panning());

    assert!(matches!(
        pan.process(up(14, 5), HANDLE),
        Some(GestureEvent::PanEnd { delta_x, .. }) if delta_x == 4.0
    ));
}

#[test]
fn test_tap_is_not_a_pan() {
    let mut pan = PanRecognizer::new("handle");
    pan.process(down(10, 5), HANDLE);

    assert_eq!(pan.process(up(10, 5), HANDLE), None);
    assert!(!pan.is_panning());
}

#[test]
fn test_cancel_reports_last_deltas() {
    let mut pan = PanRecognizer::new("handle");
    assert_eq!(pan.cancel(), None);

    pan.process(down(10, 5), HANDLE);
    pan.process(PointerEvent::Move { x: 16, y: 1 }, HANDLE);

    assert_eq!(
        pan.cancel(),
        Some(GestureEvent::PanEnd {
            target: "handle".to_string(),
            delta_x: 6.0,
            delta_y: -4.0,
        })
    );
    assert!(!pan.is_panning());
}

#[test]
fn test_process_events_keeps_arrival_order() {
    let mut pan = PanRecognizer::new("handle");
    let raw = vec![
        mouse(MouseEventKind::Moved, 0, 0),
        mouse(MouseEventKind::Down(CtButton::Left), 10, 5),
        mouse(MouseEventKind::Drag(CtButton::Left), 12, 5),
        mouse(MouseEventKind::Drag(CtButton::Left), 15, 5),
        mouse(MouseEventKind::Up(CtButton::Left), 15, 5),
    ];

    let events = pan.process_events(&raw, HANDLE);

    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], GestureEvent::Pan { delta_x, .. } if delta_x == 2.0));
    assert!(matches!(events[1], GestureEvent::Pan { delta_x, .. } if delta_x == 5.0));
    assert!(matches!(events[2], GestureEvent::PanEnd { delta_x, .. } if delta_x == 5.0));
    assert!(events.iter().all(|e| e.target() == "handle"));
}
