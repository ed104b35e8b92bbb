/// Inclusive progress range the handle is restricted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Mutable state of a handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandleState {
    /// Last reported progress, after clamping to bounds.
    pub progress: f64,
    /// Committed pixel offset, the baseline for new gestures.
    pub shift: f64,
    /// Pixel offset of the current (or last) gesture relative to `shift`.
    pub delta: f64,
    pub bounds: Bounds,
    pub phase: DragPhase,
}

impl HandleState {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }
}
