//! The finished capture bitmap.

#[cfg(feature = "jpeg")]
use image::ImageEncoder;
use tiny_skia::Pixmap;

use crate::error::{RasterError, RasterResult};

/// A rasterized capture: fixed-size RGBA pixel buffer plus dimensions.
///
/// Produced by [`Rasterizer::rasterize`](crate::Rasterizer::rasterize) and
/// handed off to the host's image sink; the capture core keeps no reference
/// after handoff.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pixmap: Pixmap,
}

impl CapturedImage {
    pub(crate) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA bytes, row-major, 4 bytes per pixel. With an
    /// opaque background fill this equals straight RGBA.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight (demultiplied) RGBA of one pixel, or `None` outside the
    /// buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Consume the image, returning the premultiplied RGBA buffer.
    #[must_use]
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixmap.take()
    }

    /// Encode the image as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn encode_png(&self) -> RasterResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(format!("PNG encoding failed: {e}")))
    }

    /// Encode the image as JPEG bytes at the given quality (1-100).
    ///
    /// # Errors
    ///
    /// Returns an error if JPEG encoding fails.
    #[cfg(feature = "jpeg")]
    pub fn encode_jpeg(&self, quality: u8) -> RasterResult<Vec<u8>> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut rgb_data = Vec::with_capacity((width * height * 3) as usize);
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            rgb_data.extend_from_slice(&[color.red(), color.green(), color.blue()]);
        }

        let mut buf = std::io::Cursor::new(Vec::new());
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
        encoder
            .write_image(&rgb_data, width, height, image::ColorType::Rgb8.into())
            .map_err(|e| RasterError::Encode(format!("JPEG encoding failed: {e}")))?;

        Ok(buf.into_inner())
    }
}
