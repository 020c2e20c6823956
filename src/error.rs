//! @ai:module:intent Define error types for the number processing terminal
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use thiserror::Error;

/// @ai:intent Unified error type for input collection and rendering
#[derive(Error, Debug)]
pub enum Error {
    /// Text entered in place of an integer could not be parsed.
    #[error("Invalid integer input: {input:?}")]
    InvalidIntegerInput { input: String },

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
