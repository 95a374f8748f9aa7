//! The image-sink collaborator boundary.
//!
//! The sink is injected, never a process-wide singleton, so capture
//! sessions stay deterministic under test. The session model is
//! single-threaded, hence plain `Rc` sharing in [`MemorySink`].

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use signature_raster::CapturedImage;

/// A sink-side failure. Swallowed at the commit boundary (logged, never
/// fatal to the session).
#[derive(Debug, Error)]
#[error("Image sink failure: {0}")]
pub struct SinkError(String);

impl SinkError {
    /// Create a sink error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// External collaborator that persists or otherwise consumes finished
/// capture bitmaps. Ownership of each image transfers on `store`; the
/// session keeps no reference afterwards.
pub trait ImageSink {
    /// Accept one finished capture.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot take the image. The capture
    /// session logs and continues; persistence failures are the sink's own
    /// concern.
    fn store(&mut self, image: CapturedImage) -> Result<(), SinkError>;
}

/// In-memory sink with shared storage: clones observe the same buffer, so
/// a test or buffering host can hand one clone to the controller and
/// inspect stored images through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    images: Rc<RefCell<Vec<CapturedImage>>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.borrow().len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.borrow().is_empty()
    }

    /// Drain and return all stored images, oldest first.
    #[must_use]
    pub fn take(&self) -> Vec<CapturedImage> {
        self.images.borrow_mut().drain(..).collect()
    }
}

impl ImageSink for MemorySink {
    fn store(&mut self, image: CapturedImage) -> Result<(), SinkError> {
        self.images.borrow_mut().push(image);
        Ok(())
    }
}
