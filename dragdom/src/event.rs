use crossterm::event::{Event as CrosstermEvent, MouseEventKind};

/// Low-level pointer input, in screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed
    Down { x: u16, y: u16, button: MouseButton },
    /// Pointer moved with a button held
    Move { x: u16, y: u16 },
    /// Button released
    Up { x: u16, y: u16, button: MouseButton },
}

impl PointerEvent {
    pub fn position(&self) -> (u16, u16) {
        match *self {
            PointerEvent::Down { x, y, .. }
            | PointerEvent::Move { x, y }
            | PointerEvent::Up { x, y, .. } => (x, y),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Extract a pointer event from a raw terminal event.
///
/// Hover movement and wheel scrolling are not pointer events.
pub fn pointer_event(raw: &CrosstermEvent) -> Option<PointerEvent> {
    let CrosstermEvent::Mouse(mouse) = raw else {
        return None;
    };
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(button) => Some(PointerEvent::Down {
            x,
            y,
            button: button.into(),
        }),
        MouseEventKind::Drag(_) => Some(PointerEvent::Move { x, y }),
        MouseEventKind::Up(button) => Some(PointerEvent::Up {
            x,
            y,
            button: button.into(),
        }),
        _ => None,
    }
}
