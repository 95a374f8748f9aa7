//! The capture session controller.

use signature_core::{CaptureBounds, CapturePad, DragEvent};
use signature_raster::Rasterizer;
use uuid::Uuid;

use crate::config::CaptureConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::sink::ImageSink;

/// Orchestrates one signature-capture session: owns the pad, tracks the
/// widget's latest layout bounds, and on commit crops, rasterizes, and
/// hands the bitmap to the image sink.
pub struct CaptureController {
    pad: CapturePad,
    bounds: CaptureBounds,
    config: CaptureConfig,
    rasterizer: Rasterizer,
    sink: Option<Box<dyn ImageSink>>,
    session: Uuid,
}

impl CaptureController {
    /// Create a controller for a widget at `bounds` (ancestor-space
    /// rectangle; its size doubles as the pad's local surface size).
    #[must_use]
    pub fn new(config: CaptureConfig, bounds: CaptureBounds) -> Self {
        let rasterizer = Rasterizer::new(config.raster.clone());
        Self {
            pad: CapturePad::new(bounds.width, bounds.height),
            bounds,
            config,
            rasterizer,
            sink: None,
            session: Uuid::new_v4(),
        }
    }

    /// Attach the image sink receiving committed captures.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn ImageSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the image sink.
    pub fn set_sink(&mut self, sink: Box<dyn ImageSink>) {
        self.sink = Some(sink);
    }

    /// Apply a layout update. Last write wins; only read at commit time.
    pub fn set_bounds(&mut self, bounds: CaptureBounds) {
        self.bounds = bounds;
        self.pad.set_surface_size(bounds.width, bounds.height);
    }

    /// The widget bounds currently in effect.
    #[must_use]
    pub fn bounds(&self) -> CaptureBounds {
        self.bounds
    }

    /// The interactive pad.
    #[must_use]
    pub fn pad(&self) -> &CapturePad {
        &self.pad
    }

    /// The session correlation id, rotated on clear and after each commit.
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session
    }

    /// Forward a drag event to the pad.
    pub fn handle_event(&mut self, event: &DragEvent) {
        self.pad.handle_event(event);
    }

    /// Discard all strokes and start a fresh session.
    pub fn clear(&mut self) {
        tracing::debug!(session = %self.session, "capture session cleared");
        self.pad.clear();
        self.session = Uuid::new_v4();
    }

    /// The crop rectangle `commit` would rasterize right now.
    ///
    /// With trimming on, this is the strokes' bounding box floored at the
    /// configured minimum size, its origin at `bounds.origin + extent.min`:
    /// the trim offset is applied in the ancestor coordinate space, so the
    /// rectangle lines up with the rendered widget when the pad's local
    /// origin coincides with `bounds.origin`. With trimming off, it is the
    /// widget bounds verbatim.
    ///
    /// # Errors
    ///
    /// [`CaptureError::EmptyCapture`] if trimming is on and nothing was
    /// drawn; [`CaptureError::DegenerateSurface`] if trimming is off and
    /// the bounds have no usable area.
    pub fn crop_rect(&self) -> CaptureResult<CaptureBounds> {
        if self.config.whitespace_trim {
            let extent = self
                .pad
                .strokes()
                .aggregate_extent()
                .ok_or(CaptureError::EmptyCapture)?;
            let width = extent.width().max(self.config.min_crop_width);
            let height = extent.height().max(self.config.min_crop_height);
            Ok(CaptureBounds::new(
                self.bounds.x + extent.min_x,
                self.bounds.y + extent.min_y,
                width,
                height,
            ))
        } else if self.bounds.is_degenerate() {
            Err(CaptureError::DegenerateSurface {
                width: self.bounds.width,
                height: self.bounds.height,
            })
        } else {
            Ok(self.bounds)
        }
    }

    /// Commit the session: crop, rasterize, hand the bitmap to the sink,
    /// then reset for the next capture.
    ///
    /// The sink handoff is fire-and-forget: a missing sink or a sink
    /// error is logged and the commit still succeeds and resets. Errors
    /// raised before the handoff leave the strokes untouched so the user
    /// can retry.
    ///
    /// # Errors
    ///
    /// See [`crop_rect`](Self::crop_rect); plus
    /// [`CaptureError::Raster`] if bitmap production fails.
    pub fn commit(&mut self) -> CaptureResult<()> {
        let crop = self.crop_rect()?;
        let image = self.rasterizer.rasterize(self.pad.strokes(), crop)?;
        let (width, height) = (image.width(), image.height());

        match self.sink.as_mut() {
            Some(sink) => match sink.store(image) {
                Ok(()) => {
                    tracing::info!(session = %self.session, width, height, "capture committed");
                }
                Err(error) => {
                    tracing::warn!(session = %self.session, %error, "image sink rejected capture");
                }
            },
            None => {
                tracing::warn!(session = %self.session, "no image sink attached, capture dropped");
            }
        }

        self.pad.clear();
        self.session = Uuid::new_v4();
        Ok(())
    }
}
