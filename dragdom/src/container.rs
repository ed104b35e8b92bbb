//! Measurable containers.

/// Anything that can report its inner extent.
pub trait Container {
    fn client_width(&self) -> f64;
    fn client_height(&self) -> f64;
}

/// The document root: the full drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Container for Viewport {
    fn client_width(&self) -> f64 {
        self.width
    }

    fn client_height(&self) -> f64 {
        self.height
    }
}
