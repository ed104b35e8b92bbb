mod class_list;
mod content;
mod node;

pub use class_list::ClassList;
pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Detach the element with the given ID from wherever it sits below `root`.
/// The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    if let Some(removed) = root.remove_child(id) {
        return Some(removed);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(removed) = remove_element(child, id) {
                return Some(removed);
            }
        }
    }

    None
}
