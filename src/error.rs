use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the paint engine
#[derive(Debug, Error)]
pub enum PaintError {
    /// A pixel coordinate fell outside the buffer. Never clamped: callers
    /// that consume rasterizer output are expected to clip before writing.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    /// An operation was invoked on a buffer with no pixels
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Writing the exported image failed; buffer and history are untouched
    #[error("failed to save image to {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, PaintError>;
