use super::{Rgb, Transform};

/// Visual properties of an element.
///
/// Class-level styles come from a [`Stylesheet`](crate::render::Stylesheet);
/// the inline style on the element wins over them field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    /// Character painted over the element's area.
    pub fill: Option<char>,
    pub transform: Option<Transform>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn fill(mut self, fill: char) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Layer `self` over `base`: every field set here replaces the base one.
    pub fn over(&self, base: &Style) -> Style {
        Style {
            background: self.background.or(base.background),
            foreground: self.foreground.or(base.foreground),
            fill: self.fill.or(base.fill),
            transform: self.transform.or(base.transform),
        }
    }
}
