use std::sync::atomic::{AtomicU64, Ordering};

use super::{ClassList, Content};
use crate::container::Container;
use crate::types::{Style, Transform};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Visual
    pub class_list: ClassList,
    pub style: Style,

    // Measured extent, as reported by layout
    pub client_width: f64,
    pub client_height: f64,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            class_list: ClassList::new(),
            style: Style::default(),
            client_width: 0.0,
            client_height: 0.0,
        }
    }
}

impl Element {
    /// Create an element with the given tag. The ID is derived from the tag.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, names: &str) -> Self {
        self.class_list.add(names);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn client_size(mut self, width: f64, height: f64) -> Self {
        self.client_width = width;
        self.client_height = height;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.append_child(child);
        }
        self
    }

    /// Append a child in place.
    pub fn append_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Remove the direct child with the given ID, returning it.
    pub fn remove_child(&mut self, id: &str) -> Option<Element> {
        let Content::Children(children) = &mut self.content else {
            return None;
        };
        let idx = children.iter().position(|c| c.id == id)?;
        Some(children.remove(idx))
    }

    /// Direct children, empty for leaf elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.style.transform = Some(transform);
    }

    pub fn transform(&self) -> Option<Transform> {
        self.style.transform
    }
}

impl Container for Element {
    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }
}
