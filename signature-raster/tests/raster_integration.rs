//! Rasterization integration tests (signature-raster).
//!
//! Pixel-level checks across crop translation, scaling, determinism, and
//! encoding of full capture sessions.

use signature_core::{CaptureBounds, Point, StrokeCollection};
use signature_raster::{RasterConfig, Rasterizer};

/// Build a collection from completed strokes given as point lists.
fn collection_of(strokes: &[&[(f32, f32)]]) -> StrokeCollection {
    let mut collection = StrokeCollection::new();
    for stroke in strokes {
        for &(x, y) in *stroke {
            collection.append_point(Point::new(x, y));
        }
        collection.end_stroke();
    }
    collection
}

fn exact_config() -> RasterConfig {
    RasterConfig {
        anti_alias: false,
        line_width: 4.0,
        ..RasterConfig::default()
    }
}

// ==========================================================================
// Determinism
// ==========================================================================

#[test]
fn test_identical_inputs_produce_identical_pixels() {
    let strokes = collection_of(&[
        &[(10.0, 10.0), (40.0, 12.0), (42.0, 30.0)],
        &[(5.0, 35.0), (45.0, 35.0)],
    ]);
    let crop = CaptureBounds::new(0.0, 0.0, 50.0, 40.0);

    let rasterizer = Rasterizer::new(exact_config());
    let first = rasterizer.rasterize(&strokes, crop).expect("first pass");
    let second = rasterizer.rasterize(&strokes, crop).expect("second pass");

    assert_eq!(first.data(), second.data());
}

// ==========================================================================
// Crop and scale behavior
// ==========================================================================

#[test]
fn test_scaled_output_keeps_stroke_placement() {
    let strokes = collection_of(&[&[(2.0, 5.0), (8.0, 5.0)]]);
    let rasterizer = Rasterizer::new(RasterConfig {
        scale: 2.0,
        ..exact_config()
    });
    let image = rasterizer
        .rasterize(&strokes, CaptureBounds::new(0.0, 0.0, 10.0, 10.0))
        .expect("raster");

    assert_eq!(image.width(), 20);
    assert_eq!(image.height(), 20);
    // (5, 5) in stroke space lands at (10, 10) after the 2x scale.
    assert_eq!(image.pixel(10, 10), Some([0, 0, 0, 255]));
}

#[test]
fn test_strokes_outside_crop_do_not_paint() {
    let strokes = collection_of(&[&[(100.0, 100.0), (120.0, 100.0)]]);
    let rasterizer = Rasterizer::new(exact_config());
    let image = rasterizer
        .rasterize(&strokes, CaptureBounds::new(0.0, 0.0, 20.0, 20.0))
        .expect("raster");

    for y in 0..20 {
        for x in 0..20 {
            assert_eq!(image.pixel(x, y), Some([255, 255, 255, 255]));
        }
    }
}

#[test]
fn test_active_stroke_is_rendered_too() {
    let mut strokes = StrokeCollection::new();
    strokes.append_point(Point::new(2.0, 10.0));
    strokes.append_point(Point::new(18.0, 10.0));
    // No end_stroke: the gesture is still in flight at commit time.

    let rasterizer = Rasterizer::new(exact_config());
    let image = rasterizer
        .rasterize(&strokes, CaptureBounds::new(0.0, 0.0, 20.0, 20.0))
        .expect("raster");

    assert_eq!(image.pixel(10, 10), Some([0, 0, 0, 255]));
}

#[test]
fn test_custom_colors() {
    let strokes = collection_of(&[&[(2.0, 5.0), (8.0, 5.0)]]);
    let rasterizer = Rasterizer::new(RasterConfig {
        stroke_color: [0, 0, 255, 255],
        background: [255, 0, 0, 255],
        ..exact_config()
    });
    let image = rasterizer
        .rasterize(&strokes, CaptureBounds::new(0.0, 0.0, 10.0, 10.0))
        .expect("raster");

    assert_eq!(image.pixel(5, 5), Some([0, 0, 255, 255]));
    assert_eq!(image.pixel(9, 0), Some([255, 0, 0, 255]));
}

// ==========================================================================
// Encoding
// ==========================================================================

#[test]
fn test_capture_encodes_to_png() {
    let strokes = collection_of(&[&[(10.0, 10.0), (30.0, 30.0)]]);
    let rasterizer = Rasterizer::with_defaults();
    let image = rasterizer
        .rasterize(&strokes, CaptureBounds::new(0.0, 0.0, 40.0, 40.0))
        .expect("raster");

    let png = image.encode_png().expect("png");
    assert_eq!(&png[0..4], &[137, 80, 78, 71]);
}

#[cfg(feature = "jpeg")]
#[test]
fn test_capture_encodes_to_jpeg() {
    let strokes = collection_of(&[&[(10.0, 10.0), (30.0, 30.0)]]);
    let rasterizer = Rasterizer::with_defaults();
    let image = rasterizer
        .rasterize(&strokes, CaptureBounds::new(0.0, 0.0, 40.0, 40.0))
        .expect("raster");

    let jpeg = image.encode_jpeg(85).expect("jpeg");
    assert_eq!(jpeg[0], 0xFF);
    assert_eq!(jpeg[1], 0xD8);
}
