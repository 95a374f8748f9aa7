//! # Signature Session
//!
//! Orchestrates a signature-capture session: pointer events flow into the
//! pad, `clear` discards the session, and `commit` crops the drawn strokes,
//! rasterizes them, and hands the finished bitmap to an injected image
//! sink.
//!
//! ```text
//! drag events ──► CaptureController ──► CapturePad ──► StrokeCollection
//!                        │ commit
//!                        ▼
//!                crop rect + strokes ──► Rasterizer ──► ImageSink
//! ```
//!
//! Sink failures are the sink's own concern: they are logged and never
//! unwind into the capture session.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod controller;
pub mod error;
pub mod sink;

pub use config::CaptureConfig;
pub use controller::CaptureController;
pub use error::{CaptureError, CaptureResult};
pub use sink::{ImageSink, MemorySink, SinkError};
