//! Capture session error types.

use signature_raster::RasterError;
use thiserror::Error;

/// Result type for capture session operations.
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Errors surfaced by `commit`. On any of these the session stays
/// uncommitted (strokes are not cleared) so the host can re-prompt and the
/// user can retry.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Whitespace trimming was requested but nothing was ever drawn, so no
    /// crop rectangle exists.
    #[error("Nothing drawn: cannot trim an empty capture")]
    EmptyCapture,

    /// Trimming is disabled and the widget bounds have no usable area.
    #[error("Degenerate capture surface: {width}x{height}")]
    DegenerateSurface {
        /// Reported surface width.
        width: f32,
        /// Reported surface height.
        height: f32,
    },

    /// Rasterization failed.
    #[error("Rasterization failed: {0}")]
    Raster(#[from] RasterError),
}
