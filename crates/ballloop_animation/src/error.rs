//! Loader error types

use thiserror::Error;

/// Errors raised while configuring the loader
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoaderError {
    /// Ball numbers are 1-based and there are exactly five balls
    #[error("Ball number out of range: {0} (expected 1..=5)")]
    BallOutOfRange(u8),

    /// Viewport must be finite with positive width and height
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Animation duration must be finite and positive
    #[error("Invalid animation duration: {0}s")]
    InvalidDuration(f32),
}

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;
