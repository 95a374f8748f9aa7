//! Stroke collection to bitmap conversion.

use signature_core::{CaptureBounds, StrokeCollection};
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{RasterError, RasterResult};
use crate::image::CapturedImage;
use crate::RasterConfig;

/// Rasterizes a stroke collection into a cropped bitmap.
///
/// Stateless apart from its configuration: identical strokes, crop
/// rectangle, and colors produce identical pixels (disable
/// [`RasterConfig::anti_alias`] where bit-exactness matters).
pub struct Rasterizer {
    config: RasterConfig,
}

impl Rasterizer {
    /// Create a rasterizer with the given configuration.
    #[must_use]
    pub fn new(config: RasterConfig) -> Self {
        Self { config }
    }

    /// Create a rasterizer with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RasterConfig::default())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Render every stroke of `strokes` into a bitmap covering `crop`.
    ///
    /// The buffer is `crop.width * scale` by `crop.height * scale` pixels
    /// (floored at 1), filled with the background color; stroke points are
    /// translated by `-crop.origin` so the crop's top-left becomes pixel
    /// (0, 0), then stroked as straight segments at the configured width.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidCrop`] for zero, negative, or
    /// non-finite crop dimensions, and [`RasterError::Allocation`] if the
    /// pixel buffer cannot be created.
    pub fn rasterize(
        &self,
        strokes: &StrokeCollection,
        crop: CaptureBounds,
    ) -> RasterResult<CapturedImage> {
        if crop.is_degenerate() {
            return Err(RasterError::InvalidCrop {
                width: crop.width,
                height: crop.height,
            });
        }

        let (px_w, px_h) = self.buffer_dimensions(crop);
        tracing::debug!(
            width = px_w,
            height = px_h,
            strokes = strokes.stroke_count(),
            "rasterizing capture"
        );

        let mut pixmap = Pixmap::new(px_w, px_h).ok_or(RasterError::Allocation {
            width: px_w,
            height: px_h,
        })?;

        let bg = self.config.background;
        pixmap.fill(Color::from_rgba8(bg[0], bg[1], bg[2], bg[3]));

        let mut paint = Paint::default();
        let fg = self.config.stroke_color;
        paint.set_color(Color::from_rgba8(fg[0], fg[1], fg[2], fg[3]));
        paint.anti_alias = self.config.anti_alias;

        let pen = tiny_skia::Stroke {
            width: self.config.line_width,
            ..tiny_skia::Stroke::default()
        };

        let transform = Transform::from_translate(-crop.x, -crop.y)
            .post_scale(self.config.scale, self.config.scale);

        for stroke in strokes.iter() {
            let Some(path) = segment_path(stroke) else {
                continue;
            };
            pixmap.stroke_path(&path, &paint, &pen, transform, None);
        }

        Ok(CapturedImage::from_pixmap(pixmap))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn buffer_dimensions(&self, crop: CaptureBounds) -> (u32, u32) {
        let width = (crop.width * self.config.scale) as u32;
        let height = (crop.height * self.config.scale) as u32;
        (width.max(1), height.max(1))
    }
}

/// Build a per-pair move/line path for one stroke, matching the live
/// render contract: disconnected straight segments, not a joined polyline.
/// `None` for strokes with no drawable segments.
fn segment_path(stroke: &signature_core::Stroke) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for segment in stroke.segments() {
        builder.move_to(segment.from.x, segment.from.y);
        builder.line_to(segment.to.x, segment.to.y);
    }
    builder.finish()
}
