use std::fmt;

/// Screen axis an element moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
}

/// A single-axis translation in pixels (cells, in the terminal backend).
///
/// The string form always carries a zero Z translate, which keeps the element
/// on its own compositing layer in a browser renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub axis: Axis,
    pub distance: f64,
}

impl Transform {
    pub fn translate(axis: Axis, distance: f64) -> Self {
        Self { axis, distance }
    }

    pub fn translate_x(distance: f64) -> Self {
        Self::translate(Axis::X, distance)
    }

    pub fn translate_y(distance: f64) -> Self {
        Self::translate(Axis::Y, distance)
    }

    /// Integer `(dx, dy)` cell offset, rounded to nearest.
    ///
    /// Non-finite distances map to no offset.
    pub fn offset(&self) -> (i32, i32) {
        let cells = if self.distance.is_finite() {
            self.distance.round() as i32
        } else {
            0
        };
        match self.axis {
            Axis::X => (cells, 0),
            Axis::Y => (0, cells),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 would print as "-0"
        let distance = if self.distance == 0.0 { 0.0 } else { self.distance };
        match self.axis {
            Axis::X => write!(f, "translateX( {distance}px ) translateZ(0)"),
            Axis::Y => write!(f, "translateY( {distance}px ) translateZ(0)"),
        }
    }
}
