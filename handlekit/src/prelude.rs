//! Common imports for building with handles.

pub use crate::handle::{Bounds, DragPhase, Handle};
pub use crate::module::{Module, ModuleContext};
pub use crate::observer::{channel, ProgressObserver, SubscriptionId};
pub use crate::props::{Direction, HandleOptions};
pub use crate::HandleError;

pub use dragdom::{Element, GestureEvent, LayoutResult, Rect, Viewport};
