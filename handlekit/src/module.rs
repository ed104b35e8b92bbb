//! Component lifecycle.
//!
//! Components do not inherit from a base type. They implement [`Module`] and
//! receive the capabilities they need (element creation, class utilities,
//! container measurement) through a [`ModuleContext`].

use dragdom::{find_element, find_element_mut, remove_element, Container, Element, Viewport};

use crate::HandleError;

/// Lifecycle of a component that owns one root element.
pub trait Module {
    /// Set up state and take measurements. Runs once, before [`render`].
    ///
    /// [`render`]: Module::render
    fn init(&mut self, cx: &ModuleContext) -> Result<(), HandleError>;

    /// Build the element subtree and wire input. Runs once, after [`init`].
    ///
    /// [`init`]: Module::init
    fn render(&mut self, cx: &ModuleContext);

    /// Tear the component down. The root element is left empty.
    fn destroy(&mut self);

    /// The component's root element.
    fn el(&self) -> &Element;
}

/// Run a freshly constructed module through `init` then `render`.
pub fn mount<M: Module + ?Sized>(module: &mut M, cx: &ModuleContext) -> Result<(), HandleError> {
    module.init(cx)?;
    module.render(cx);
    log::debug!("[module] mounted {}", module.el().id);
    Ok(())
}

/// Capabilities handed to modules during their lifecycle.
///
/// Holds the document tree, used to look up containers by ID, and the
/// viewport, which stands in for the document root.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    document: Element,
    viewport: Viewport,
}

impl ModuleContext {
    pub fn new(document: Element, viewport: Viewport) -> Self {
        Self { document, viewport }
    }

    pub fn document(&self) -> &Element {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Element {
        &mut self.document
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Create a new, detached element.
    pub fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }

    /// Add each of `classes` to the element's class list.
    /// Empty names are skipped.
    pub fn add_classes(&self, el: &mut Element, classes: &[&str]) {
        for class in classes {
            el.class_list.add(class);
        }
    }

    /// Attach `el` as the last child of the element `parent_id` in the
    /// document.
    pub fn attach(&mut self, parent_id: &str, el: Element) -> Result<(), HandleError> {
        let parent = find_element_mut(&mut self.document, parent_id)
            .ok_or_else(|| HandleError::ContainerNotFound(parent_id.to_string()))?;
        log::debug!("[module] attached {} to {}", el.id, parent_id);
        parent.append_child(el);
        Ok(())
    }

    /// Detach an element from the document, returning it.
    pub fn detach(&mut self, id: &str) -> Option<Element> {
        remove_element(&mut self.document, id)
    }

    /// Measure a container: the element with the given ID, or the viewport
    /// when no ID is given. Returns `(width, height)`.
    pub fn measure(&self, container: Option<&str>) -> Result<(f64, f64), HandleError> {
        match container {
            None => Ok((self.viewport.client_width(), self.viewport.client_height())),
            Some(id) => {
                let el = find_element(&self.document, id)
                    .ok_or_else(|| HandleError::ContainerNotFound(id.to_string()))?;
                Ok((el.client_width(), el.client_height()))
            }
        }
    }
}

impl Default for ModuleContext {
    fn default() -> Self {
        Self::new(Element::div().id("document"), Viewport::default())
    }
}
