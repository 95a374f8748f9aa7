//! End-to-end capture session tests (signature-session).
//!
//! Drives full sessions through drag events, commits, and inspects what
//! arrives at the image sink, down to the pixels.

use signature_core::{CaptureBounds, DragEvent};
use signature_raster::RasterConfig;
use signature_session::{CaptureConfig, CaptureController, CaptureError, MemorySink};

/// Drive one full gesture through the controller.
fn draw(controller: &mut CaptureController, points: &[(f32, f32)]) {
    let mut iter = points.iter().copied();
    if let Some((x, y)) = iter.next() {
        controller.handle_event(&DragEvent::Start { x, y });
    }
    for (x, y) in iter {
        controller.handle_event(&DragEvent::Move { x, y });
    }
    controller.handle_event(&DragEvent::End);
}

/// Trim-enabled config with anti-aliasing off for exact pixel checks.
fn exact_config() -> CaptureConfig {
    CaptureConfig::default().with_raster(RasterConfig {
        anti_alias: false,
        line_width: 4.0,
        ..RasterConfig::default()
    })
}

// ==========================================================================
// Happy path
// ==========================================================================

#[test]
fn test_committed_bitmap_contains_translated_strokes() {
    let sink = MemorySink::new();
    let mut controller = CaptureController::new(
        exact_config(),
        CaptureBounds::new(0.0, 0.0, 300.0, 200.0),
    )
    .with_sink(Box::new(sink.clone()));

    // A tap widens the extent upward; taps are stored, never discarded.
    draw(&mut controller, &[(20.0, 5.0)]);
    draw(&mut controller, &[(10.0, 20.0), (90.0, 20.0)]);
    controller.commit().expect("commit");

    let images = sink.take();
    assert_eq!(images.len(), 1);
    let image = &images[0];

    // 80x15 extent floored to the 100x100 minimum.
    assert_eq!(image.width(), 100);
    assert_eq!(image.height(), 100);

    // The line's midpoint (50, 20) lands at (40, 15) after the trim
    // translation by the extent minimum (10, 5).
    assert_eq!(image.pixel(40, 15), Some([0, 0, 0, 255]));
    // Trimmed whitespace stays background.
    assert_eq!(image.pixel(99, 99), Some([255, 255, 255, 255]));
}

#[test]
fn test_session_is_reusable_after_commit() {
    let sink = MemorySink::new();
    let mut controller = CaptureController::new(
        exact_config(),
        CaptureBounds::new(0.0, 0.0, 300.0, 200.0),
    )
    .with_sink(Box::new(sink.clone()));

    draw(&mut controller, &[(10.0, 10.0), (50.0, 50.0)]);
    controller.commit().expect("first commit");

    assert!(controller.pad().strokes().is_blank());

    draw(&mut controller, &[(20.0, 20.0), (60.0, 60.0)]);
    controller.commit().expect("second commit");

    assert_eq!(sink.len(), 2);
}

#[test]
fn test_in_flight_stroke_is_committed() {
    let sink = MemorySink::new();
    let mut controller = CaptureController::new(
        exact_config(),
        CaptureBounds::new(0.0, 0.0, 300.0, 200.0),
    )
    .with_sink(Box::new(sink.clone()));

    // Drag never ends before the user hits Done. The line sits on the
    // crop's top edge, so it paints the first buffer rows.
    controller.handle_event(&DragEvent::Start { x: 10.0, y: 20.0 });
    controller.handle_event(&DragEvent::Move { x: 90.0, y: 20.0 });
    controller.commit().expect("commit mid-gesture");

    let images = sink.take();
    assert_eq!(images[0].pixel(40, 1), Some([0, 0, 0, 255]));
}

// ==========================================================================
// Failure and retry
// ==========================================================================

#[test]
fn test_degenerate_bounds_then_layout_fix_then_retry() {
    let sink = MemorySink::new();
    let config = exact_config().with_whitespace_trim(false);
    let mut controller =
        CaptureController::new(config, CaptureBounds::new(0.0, 0.0, 0.0, 0.0))
            .with_sink(Box::new(sink.clone()));

    // Layout hasn't arrived yet: the pad accepts nothing and commit fails.
    let err = controller.commit().expect_err("degenerate bounds");
    assert!(matches!(err, CaptureError::DegenerateSurface { .. }));
    assert!(sink.is_empty());

    // Layout arrives; the session was never reset, so the retry works.
    controller.set_bounds(CaptureBounds::new(0.0, 0.0, 120.0, 90.0));
    draw(&mut controller, &[(10.0, 10.0), (40.0, 40.0)]);
    controller.commit().expect("retry after layout");

    let images = sink.take();
    assert_eq!(images[0].width(), 120);
    assert_eq!(images[0].height(), 90);
}

#[test]
fn test_empty_commit_leaves_later_strokes_unaffected() {
    let sink = MemorySink::new();
    let mut controller = CaptureController::new(
        exact_config(),
        CaptureBounds::new(0.0, 0.0, 300.0, 200.0),
    )
    .with_sink(Box::new(sink.clone()));

    assert!(matches!(
        controller.commit(),
        Err(CaptureError::EmptyCapture)
    ));

    draw(&mut controller, &[(10.0, 10.0), (30.0, 30.0)]);
    controller.commit().expect("commit after failed attempt");
    assert_eq!(sink.len(), 1);
}

// ==========================================================================
// Configuration surface
// ==========================================================================

#[test]
fn test_custom_stroke_and_background_colors_reach_the_bitmap() {
    let sink = MemorySink::new();
    let config = CaptureConfig::default().with_raster(RasterConfig {
        stroke_color: [200, 0, 0, 255],
        background: [0, 0, 50, 255],
        anti_alias: false,
        line_width: 4.0,
        ..RasterConfig::default()
    });
    let mut controller =
        CaptureController::new(config, CaptureBounds::new(0.0, 0.0, 300.0, 200.0))
            .with_sink(Box::new(sink.clone()));

    draw(&mut controller, &[(20.0, 5.0)]);
    draw(&mut controller, &[(10.0, 20.0), (90.0, 20.0)]);
    controller.commit().expect("commit");

    let images = sink.take();
    assert_eq!(images[0].pixel(40, 15), Some([200, 0, 0, 255]));
    assert_eq!(images[0].pixel(99, 99), Some([0, 0, 50, 255]));
}

#[test]
fn test_min_crop_floor_is_configurable() {
    let sink = MemorySink::new();
    let config = exact_config().with_min_crop_size(40.0, 40.0);
    let mut controller =
        CaptureController::new(config, CaptureBounds::new(0.0, 0.0, 300.0, 200.0))
            .with_sink(Box::new(sink.clone()));

    draw(&mut controller, &[(10.0, 10.0), (20.0, 20.0)]);
    controller.commit().expect("commit");

    let images = sink.take();
    assert_eq!(images[0].width(), 40);
    assert_eq!(images[0].height(), 40);
}
