//! Draggable handle component.
//!
//! A [`Handle`] is a screen element the user drags along one axis. Its pixel
//! position is translated into a progress value in `[0, 1]`, restricted to a
//! sub-range, optionally snapped to a target point, and reported to
//! [observers](observer::ProgressObserver) whenever it changes.

pub mod classes;
pub mod error;
pub mod handle;
pub mod module;
pub mod observer;
pub mod prelude;
pub mod props;

pub use error::HandleError;
pub use handle::{Bounds, DragPhase, Handle, HandleState, Track};
pub use module::{mount, Module, ModuleContext};
pub use observer::{ChannelObserver, ProgressObserver, ProgressObservers, SubscriptionId};
pub use props::{Direction, HandleConfig, HandleOptions};
