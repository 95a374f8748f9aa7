//! # Signature Raster
//!
//! Stateless conversion of a captured stroke collection into a cropped
//! bitmap: allocate a pixel buffer for the crop rectangle, fill the
//! background, stroke every line segment, hand back the finished image.
//!
//! ```text
//! StrokeCollection + crop rect ──► Rasterizer ──► CapturedImage
//!                                                 (PNG / JPEG bytes)
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod image;
pub mod raster;

pub use error::{RasterError, RasterResult};
pub use raster::Rasterizer;
pub use self::image::CapturedImage;

/// Configuration for stroke rasterization.
#[derive(Debug, Clone)]
pub struct RasterConfig {
    /// Stroke paint color as RGBA bytes.
    pub stroke_color: [u8; 4],
    /// Background fill color as RGBA bytes.
    pub background: [u8; 4],
    /// Stroke thickness in surface units.
    pub line_width: f32,
    /// Output scale factor (e.g. 2.0 for retina).
    pub scale: f32,
    /// Enable anti-aliasing. Disable for bit-exact output.
    pub anti_alias: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            stroke_color: [0, 0, 0, 255],
            background: [255, 255, 255, 255],
            line_width: 3.0,
            scale: 1.0,
            anti_alias: true,
        }
    }
}
