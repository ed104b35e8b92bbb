//! The draggable handle component.
//!
//! Three concerns live here:
//! - bounds and configuration (this file)
//! - the shift/progress mapping ([`Track`])
//! - the gesture interpreter (`events.rs`)
//!
//! Progress is reported through [`ProgressObservers`] only when the value
//! actually changes.

mod events;
mod state;
mod track;

pub use state::{Bounds, DragPhase, HandleState};
pub use track::{clamp, Track};

use dragdom::{Element, PanRecognizer, Transform};

use crate::classes;
use crate::module::{self, Module, ModuleContext};
use crate::observer::{ProgressObserver, ProgressObservers, SubscriptionId};
use crate::props::{Direction, HandleConfig, HandleOptions};
use crate::HandleError;

pub struct Handle {
    config: HandleConfig,
    state: HandleState,
    track: Track,
    el: Element,
    observers: ProgressObservers,
    recognizer: Option<PanRecognizer>,
}

impl Handle {
    /// Build a handle and run it through its lifecycle (`init`, then `render`).
    ///
    /// Fails only if `options.parent` names an element missing from the
    /// document.
    pub fn new(mut options: HandleOptions, cx: &ModuleContext) -> Result<Self, HandleError> {
        let config = HandleConfig::from_options(&options);
        let mut observers = ProgressObservers::new();
        if let Some(on_progress) = options.on_progress.take() {
            observers.subscribe_boxed(on_progress);
        }

        let mut handle = Self {
            state: HandleState::new(Bounds {
                min: config.min_bound,
                max: config.max_bound,
            }),
            config,
            track: Track::default(),
            el: cx.create_element("div"),
            observers,
            recognizer: None,
        };
        module::mount(&mut handle, cx)?;
        Ok(handle)
    }

    // -------------------------------------------------------------------------
    // Public API
    // -------------------------------------------------------------------------

    /// Move the handle to `progress` and commit the move immediately.
    ///
    /// The target is clamped to the current bounds. When `is_callback` is
    /// set, observers hear about the new progress if it changed.
    pub fn set_progress(&mut self, progress: f64, is_callback: bool) -> &mut Self {
        let shift = self.track.progress_to_shift(progress);
        let shift = self.set_shift(shift, is_callback);
        self.state.delta = shift - self.state.shift;
        self.commit_delta();
        self
    }

    /// Set both bounds: the minimum first, then the maximum.
    ///
    /// No check is made that `min <= max`; each setter applies its own clamp
    /// in turn.
    pub fn set_bounds(&mut self, min: f64, max: f64) -> &mut Self {
        self.set_min_bound(min);
        self.set_max_bound(max);
        self
    }

    /// Set the lower bound, floored at 0. Pulls the handle up to `min` if it
    /// currently sits below it.
    pub fn set_min_bound(&mut self, min: f64) -> &mut Self {
        self.state.bounds.min = min.max(0.0);
        log::debug!("[handle {}] min bound -> {}", self.el.id, self.state.bounds.min);
        if self.state.progress < min {
            self.set_progress(min, true);
        }
        self
    }

    /// Set the upper bound, capped at 1. Pulls the handle down to `max` if it
    /// currently sits above it.
    pub fn set_max_bound(&mut self, max: f64) -> &mut Self {
        self.state.bounds.max = max.min(1.0);
        log::debug!("[handle {}] max bound -> {}", self.el.id, self.state.bounds.max);
        if self.state.progress > max {
            self.set_progress(max, true);
        }
        self
    }

    /// Add a progress observer.
    pub fn subscribe(&mut self, observer: impl ProgressObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove a progress observer. Returns true if it was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Last reported progress.
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Committed shift in pixels.
    pub fn shift(&self) -> f64 {
        self.state.shift
    }

    /// Pixel offset of the current or last gesture.
    pub fn delta(&self) -> f64 {
        self.state.delta
    }

    pub fn bounds(&self) -> Bounds {
        self.state.bounds
    }

    pub fn max_width(&self) -> f64 {
        self.track.max_width()
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    pub fn state(&self) -> &HandleState {
        &self.state
    }

    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    /// Transform currently applied to the root element.
    pub fn transform(&self) -> Option<Transform> {
        self.el.transform()
    }

    // -------------------------------------------------------------------------
    // Shift application
    // -------------------------------------------------------------------------

    /// Clamp `shift` to the bounds, move the element there and, when
    /// `is_callback` is set, report the resulting progress.
    /// Returns the clamped shift.
    pub fn set_shift(&mut self, shift: f64, is_callback: bool) -> f64 {
        let shift = self.track.clamp_shift(shift, self.state.bounds);
        self.apply_shift(shift);
        if is_callback {
            self.notify_progress(shift);
        }
        shift
    }

    fn apply_shift(&mut self, shift: f64) {
        let direction = self.config.direction;
        self.el
            .set_transform(Transform::translate(direction.axis(), direction.sign() * shift));
    }

    /// Report the progress at `shift` if it differs from the last one.
    fn notify_progress(&mut self, shift: f64) {
        let progress = self.track.shift_to_progress(shift);
        if self.state.progress != progress {
            self.state.progress = progress;
            self.observers.notify(progress);
        }
    }

    fn commit_delta(&mut self) {
        self.state.shift += self.state.delta;
        log::debug!(
            "[handle {}] committed shift={} (delta={})",
            self.el.id,
            self.state.shift,
            self.state.delta
        );
    }
}

impl Module for Handle {
    fn init(&mut self, cx: &ModuleContext) -> Result<(), HandleError> {
        let (width, height) = cx.measure(self.config.parent.as_deref())?;
        let max_width = match self.config.direction {
            Direction::X => width,
            Direction::Y => height,
        };
        self.track = Track::new(max_width);
        self.state.progress = 0.0;
        self.state.shift = 0.0;
        self.state.delta = 0.0;
        log::debug!(
            "[handle {}] measured max_width={} direction={}",
            self.el.id,
            max_width,
            self.config.direction
        );
        Ok(())
    }

    fn render(&mut self, cx: &ModuleContext) {
        let mut main = vec![classes::HANDLE, self.config.class_name.as_str()];
        if self.config.is_bound {
            main.push(classes::IS_BOUND);
        }
        if self.config.is_inversed {
            main.push(classes::IS_INVERSED);
        }
        cx.add_classes(&mut self.el, &main);

        let mut inner = cx.create_element("div");
        let mut shadow = cx.create_element("div");
        cx.add_classes(&mut inner, &[classes::INNER]);
        cx.add_classes(&mut shadow, &[classes::SHADOW]);
        self.el.append_child(shadow);
        self.el.append_child(inner);

        self.recognizer = Some(PanRecognizer::new(self.el.id.clone()));
    }

    fn destroy(&mut self) {
        self.cancel_drag();
        self.recognizer = None;
        self.observers.clear();
        self.el = Element::div().id(self.el.id.clone());
        log::debug!("[handle {}] destroyed", self.el.id);
    }

    fn el(&self) -> &Element {
        &self.el
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.el.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("track", &self.track)
            .field("observers", &self.observers)
            .finish()
    }
}
