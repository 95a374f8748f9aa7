//! Rasterizer error types.

use thiserror::Error;

/// Result type for rasterization operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors that can occur while rasterizing a capture.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The crop rectangle has zero, negative, or non-finite dimensions.
    #[error("Invalid crop rectangle: {width}x{height}")]
    InvalidCrop {
        /// Requested crop width.
        width: f32,
        /// Requested crop height.
        height: f32,
    },

    /// The pixel buffer could not be allocated.
    #[error("Failed to allocate {width}x{height} pixel buffer")]
    Allocation {
        /// Buffer width in pixels.
        width: u32,
        /// Buffer height in pixels.
        height: u32,
    },

    /// Bitmap encoding failed.
    #[error("Encoding error: {0}")]
    Encode(String),
}
