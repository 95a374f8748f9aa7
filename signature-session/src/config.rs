//! Capture session configuration.

use signature_raster::RasterConfig;

/// Configuration for a capture session.
///
/// The paint options (stroke color, line width, background) live in the
/// embedded [`RasterConfig`]; this layer adds the commit-time cropping
/// policy.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Rasterization options applied at commit.
    pub raster: RasterConfig,
    /// Shrink the crop rectangle to the drawn strokes' bounding box
    /// instead of using the full widget bounds.
    pub whitespace_trim: bool,
    /// Minimum crop width when trimming.
    pub min_crop_width: f32,
    /// Minimum crop height when trimming.
    pub min_crop_height: f32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            raster: RasterConfig::default(),
            whitespace_trim: true,
            min_crop_width: 100.0,
            min_crop_height: 100.0,
        }
    }
}

impl CaptureConfig {
    /// Set the whitespace trimming policy.
    #[must_use]
    pub fn with_whitespace_trim(mut self, trim: bool) -> Self {
        self.whitespace_trim = trim;
        self
    }

    /// Set the minimum crop size floor used when trimming.
    #[must_use]
    pub fn with_min_crop_size(mut self, width: f32, height: f32) -> Self {
        self.min_crop_width = width;
        self.min_crop_height = height;
        self
    }

    /// Set the rasterization options.
    #[must_use]
    pub fn with_raster(mut self, raster: RasterConfig) -> Self {
        self.raster = raster;
        self
    }
}
