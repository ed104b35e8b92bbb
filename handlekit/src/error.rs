//! Handle error types.
//!
//! Only construction can fail. Once built, a handle clamps or propagates odd
//! numeric input instead of returning errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandleError {
    /// `direction` was neither `"x"` nor `"y"`.
    #[error("Invalid direction '{0}', expected 'x' or 'y'")]
    InvalidDirection(String),

    /// The `parent` option named an element that is not in the document.
    #[error("Container element '{0}' not found")]
    ContainerNotFound(String),

    /// Options could not be parsed.
    #[error("Invalid handle options: {0}")]
    Options(#[from] serde_json::Error),
}
