pub mod buffer;
pub mod container;
pub mod element;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use container::{Container, Viewport};
pub use element::{find_element, find_element_mut, remove_element, ClassList, Content, Element};
pub use event::{pointer_event, MouseButton, PointerEvent};
pub use gesture::{GestureEvent, PanRecognizer};
pub use layout::{LayoutResult, Rect};
pub use render::{render_to_buffer, Stylesheet};
pub use terminal::Terminal;
pub use types::*;
