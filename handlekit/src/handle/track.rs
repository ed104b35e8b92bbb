//! Pixel shift <-> progress mapping.

use super::Bounds;

/// The measured extent a handle travels along.
///
/// The extent is measured once; resizing the container afterwards is not
/// picked up. A zero extent makes [`shift_to_progress`](Track::shift_to_progress)
/// return NaN or infinity, which then flows through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    max_width: f64,
}

impl Track {
    pub const fn new(max_width: f64) -> Self {
        Self { max_width }
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    pub fn progress_to_shift(&self, progress: f64) -> f64 {
        progress * self.max_width
    }

    pub fn shift_to_progress(&self, shift: f64) -> f64 {
        shift / self.max_width
    }

    /// Clamp a shift into the pixel range covered by `bounds`.
    pub fn clamp_shift(&self, shift: f64, bounds: Bounds) -> f64 {
        clamp(
            shift,
            self.progress_to_shift(bounds.min),
            self.progress_to_shift(bounds.max),
        )
    }
}

/// Clamp without the panics of [`f64::clamp`].
///
/// The lower limit is checked first, so an inverted range yields `min`, and a
/// NaN value passes through.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
