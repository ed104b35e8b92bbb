mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Element ID to on-screen rectangle, before transforms.
pub type LayoutResult = HashMap<String, Rect>;
