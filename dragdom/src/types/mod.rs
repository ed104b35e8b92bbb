mod color;
mod style;
mod transform;

pub use color::Rgb;
pub use style::Style;
pub use transform::{Axis, Transform};
