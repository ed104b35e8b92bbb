//! Pan gesture recognition.
//!
//! A [`PanRecognizer`] is bound to a single element. A left-button press
//! inside the element's rectangle starts a pan; every following move reports
//! the cumulative displacement from the press point, and the release ends it.
//! A press and release with no movement in between is a tap, not a pan, and
//! produces no events.

use crossterm::event::Event as CrosstermEvent;

use crate::event::{pointer_event, MouseButton, PointerEvent};
use crate::layout::Rect;

/// High-level gesture events, addressed to the bound element.
///
/// Deltas are in screen coordinates: +x is right, +y is down.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    /// Pointer moved during a pan
    Pan {
        target: String,
        delta_x: f64,
        delta_y: f64,
    },
    /// Pan finished (release or cancel)
    PanEnd {
        target: String,
        delta_x: f64,
        delta_y: f64,
    },
}

impl GestureEvent {
    pub fn target(&self) -> &str {
        match self {
            GestureEvent::Pan { target, .. } | GestureEvent::PanEnd { target, .. } => target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum PanPhase {
    #[default]
    Idle,
    Panning {
        origin: (u16, u16),
        last: (f64, f64),
        moved: bool,
    },
}

/// Recognizes pan gestures on one element.
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    target: String,
    phase: PanPhase,
}

impl PanRecognizer {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            phase: PanPhase::Idle,
        }
    }

    /// ID of the element this recognizer is bound to.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.phase, PanPhase::Panning { .. })
    }

    /// Feed one pointer event. `rect` is where the bound element currently
    /// sits on screen (after transforms).
    pub fn process(&mut self, event: PointerEvent, rect: Rect) -> Option<GestureEvent> {
        match (self.phase, event) {
            (PanPhase::Idle, PointerEvent::Down { x, y, button }) => {
                if button == MouseButton::Left && rect.contains(x, y) {
                    log::debug!("[pan] start target={} at ({x}, {y})", self.target);
                    self.phase = PanPhase::Panning {
                        origin: (x, y),
                        last: (0.0, 0.0),
                        moved: false,
                    };
                }
                None
            }
            (PanPhase::Panning { origin, .. }, PointerEvent::Move { x, y }) => {
                let delta = displacement(origin, (x, y));
                self.phase = PanPhase::Panning {
                    origin,
                    last: delta,
                    moved: true,
                };
                log::trace!(
                    "[pan] move target={} delta=({}, {})",
                    self.target,
                    delta.0,
                    delta.1
                );
                Some(GestureEvent::Pan {
                    target: self.target.clone(),
                    delta_x: delta.0,
                    delta_y: delta.1,
                })
            }
            (
                PanPhase::Panning { origin, moved, .. },
                PointerEvent::Up {
                    x,
                    y,
                    button: MouseButton::Left,
                },
            ) => {
                self.phase = PanPhase::Idle;
                if !moved {
                    log::debug!("[pan] tap target={}, no pan", self.target);
                    return None;
                }
                let (delta_x, delta_y) = displacement(origin, (x, y));
                log::debug!(
                    "[pan] end target={} delta=({delta_x}, {delta_y})",
                    self.target
                );
                Some(GestureEvent::PanEnd {
                    target: self.target.clone(),
                    delta_x,
                    delta_y,
                })
            }
            // A second press or another button's release mid-pan, or movement
            // with no pan in progress
            _ => None,
        }
    }

    /// Abort an active pan. Returns the closing `PanEnd`, carrying the last
    /// reported deltas, or `None` when no pan movement was reported.
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        let PanPhase::Panning { last, moved, .. } = self.phase else {
            return None;
        };
        self.phase = PanPhase::Idle;
        if !moved {
            return None;
        }
        log::debug!("[pan] cancel target={}", self.target);
        Some(GestureEvent::PanEnd {
            target: self.target.clone(),
            delta_x: last.0,
            delta_y: last.1,
        })
    }

    /// Process raw terminal events in arrival order and produce gesture events.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], rect: Rect) -> Vec<GestureEvent> {
        raw.iter()
            .filter_map(pointer_event)
            .filter_map(|event| self.process(event, rect))
            .collect()
    }
}

fn displacement(origin: (u16, u16), current: (u16, u16)) -> (f64, f64) {
    (
        current.0 as f64 - origin.0 as f64,
        current.1 as f64 - origin.1 as f64,
    )
}
