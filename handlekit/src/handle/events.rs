//! Gesture interpretation.
//!
//! A pan moves the handle live but leaves the committed shift alone; the
//! pan end commits. Snapping works in progress space and only affects what
//! is displayed and reported: the delta stored for the commit is the raw,
//! unsnapped one, so releasing near the snap point can move the handle off it
//! on the next gesture.

use crossterm::event::Event as CrosstermEvent;
use dragdom::{pointer_event, GestureEvent, LayoutResult, Rect};

use super::{DragPhase, Handle};
use crate::props::Direction;

impl Handle {
    /// Apply one pan movement. Deltas are cumulative since the gesture
    /// started, in screen coordinates.
    pub fn on_pan(&mut self, delta_x: f64, delta_y: f64) {
        self.state.phase = DragPhase::Dragging;
        self.state.delta = match self.config.direction {
            Direction::X => delta_x,
            Direction::Y => -delta_y,
        };

        let shift = self.state.shift + self.state.delta;
        let mut progress = self.track.shift_to_progress(shift);
        if (progress - self.config.snap_point).abs() < self.config.snap_strength {
            progress = self.config.snap_point;
        }
        log::trace!(
            "[handle {}] pan delta={} progress={}",
            self.el.id,
            self.state.delta,
            progress
        );

        let shift = self.track.progress_to_shift(progress);
        self.set_shift(shift, true);
    }

    /// Finish the gesture, committing the last raw delta.
    ///
    /// Ignored when no pan is in progress, so a stray end cannot add the
    /// previous delta twice.
    pub fn on_pan_end(&mut self) {
        if self.state.phase != DragPhase::Dragging {
            log::debug!("[handle {}] pan end without pan, ignored", self.el.id);
            return;
        }
        self.state.phase = DragPhase::Idle;
        self.commit_delta();
    }

    pub fn is_dragging(&self) -> bool {
        self.state.phase == DragPhase::Dragging
    }

    /// Route a recognizer event to this handle.
    /// Returns false if the event is addressed to another element.
    pub fn handle_gesture(&mut self, event: &GestureEvent) -> bool {
        if event.target() != self.el.id {
            return false;
        }
        match *event {
            GestureEvent::Pan {
                delta_x, delta_y, ..
            } => self.on_pan(delta_x, delta_y),
            GestureEvent::PanEnd { .. } => self.on_pan_end(),
        }
        true
    }

    /// Run raw terminal events through this handle's recognizer.
    ///
    /// `layout` gives the element's untransformed rectangle; the current
    /// transform is applied on top for hit testing, and re-applied after
    /// every gesture so a press later in the same batch finds the handle
    /// where it was moved to. Returns true if any gesture reached the handle.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], layout: &LayoutResult) -> bool {
        let Some(&base) = layout.get(&self.el.id) else {
            return false;
        };
        if self.recognizer.is_none() {
            return false;
        }

        let mut rect = self.hit_rect(base);
        let mut handled = false;
        for event in raw.iter().filter_map(pointer_event) {
            let Some(gesture) = self.recognizer.as_mut().and_then(|r| r.process(event, rect))
            else {
                continue;
            };
            handled |= self.handle_gesture(&gesture);
            rect = self.hit_rect(base);
        }
        handled
    }

    fn hit_rect(&self, base: Rect) -> Rect {
        let (dx, dy) = self.el.transform().map(|t| t.offset()).unwrap_or((0, 0));
        base.translate(dx, dy)
    }

    /// Abort an in-progress drag through the recognizer's cancel signal.
    pub fn cancel_drag(&mut self) {
        if let Some(event) = self.recognizer.as_mut().and_then(|r| r.cancel()) {
            self.handle_gesture(&event);
        }
    }
}
