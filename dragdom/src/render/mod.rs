//! Painting an element tree into a [`Buffer`].
//!
//! Elements are placed by the [`LayoutResult`] and then moved by their
//! transform. Children are painted after their parent, so they sit on top.

use std::collections::HashMap;

use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::types::{Rgb, Style};

/// Class name to style, applied in class-list order.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: HashMap<String, Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, class: impl Into<String>, style: Style) -> Self {
        self.rules.insert(class.into(), style);
        self
    }

    /// Effective style of an element: class rules layered in order, then the
    /// inline style on top.
    pub fn resolve(&self, element: &Element) -> Style {
        let from_classes = element
            .class_list
            .iter()
            .filter_map(|class| self.rules.get(class))
            .fold(Style::default(), |acc, rule| rule.over(&acc));
        element.style.over(&from_classes)
    }
}

pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    stylesheet: &Stylesheet,
    buf: &mut Buffer,
) {
    render_element(element, layout, stylesheet, (0, 0), buf);
}

/// `offset` is the accumulated transform of the ancestors.
fn render_element(
    element: &Element,
    layout: &LayoutResult,
    stylesheet: &Stylesheet,
    offset: (i32, i32),
    buf: &mut Buffer,
) {
    let style = stylesheet.resolve(element);
    let (dx, dy) = style.transform.map(|t| t.offset()).unwrap_or((0, 0));
    let offset = (offset.0.saturating_add(dx), offset.1.saturating_add(dy));

    if let Some(rect) = layout.get(&element.id) {
        let rect = rect.translate(offset.0, offset.1);
        paint(buf, rect, &style);

        if let Content::Text(text) = &element.content {
            render_text(text, rect, &style, buf);
        }
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            render_element(child, layout, stylesheet, offset, buf);
        }
    }
}

fn paint(buf: &mut Buffer, rect: Rect, style: &Style) {
    if style.background.is_none() && style.fill.is_none() {
        return;
    }
    let fg = style.foreground.unwrap_or(Rgb::WHITE);
    buf.fill_with(rect, |cell| {
        if let Some(bg) = style.background {
            cell.bg = bg;
        }
        if let Some(fill) = style.fill {
            cell.char = fill;
            cell.fg = fg;
        }
    });
}

fn render_text(text: &str, rect: Rect, style: &Style, buf: &mut Buffer) {
    let fg = style.foreground.unwrap_or(Rgb::WHITE);
    let mut chars = text.chars();
    buf.fill_with(Rect::new(rect.x, rect.y, rect.width, 1), |cell| {
        if let Some(ch) = chars.next() {
            cell.char = ch;
            cell.fg = fg;
        }
    });
}
