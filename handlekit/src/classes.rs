//! Class names applied to the handle's elements.

/// Root element of every handle.
pub const HANDLE: &str = "handle";
/// Added when the handle is in bounded mode.
pub const IS_BOUND: &str = "is-bound";
/// Added when the handle is drawn inversed.
pub const IS_INVERSED: &str = "is-inversed";
/// The visible knob.
pub const INNER: &str = "handle__inner";
/// Drop shadow under the knob.
pub const SHADOW: &str = "handle__shadow";
