//! Strokes and the per-session stroke collection.

use serde::{Deserialize, Serialize};

use crate::geometry::{Extent, Point, Segment};

/// One continuous drag gesture's recorded points, in gesture-temporal
/// order. A stroke with fewer than two points renders nothing but is still
/// a valid, stored stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Create an empty stroke.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. No validation beyond the point being finite is
    /// expected of callers; ordering is the caller's responsibility.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The recorded points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinate-wise extrema over the points, or `None` for an empty
    /// stroke. Single linear scan; called at gesture end and commit, not
    /// per frame.
    #[must_use]
    pub fn extent(&self) -> Option<Extent> {
        let mut points = self.points.iter();
        let mut extent = Extent::from_point(*points.next()?);
        for point in points {
            extent.include(*point);
        }
        Some(extent)
    }

    /// Straight line segments between consecutive points, in order.
    /// Yields nothing for strokes with fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|pair| Segment {
            from: pair[0],
            to: pair[1],
        })
    }
}

/// All strokes in the current capture session: the append-only list of
/// completed strokes plus the single in-progress one.
///
/// Exactly one active stroke exists at all times; it is absorbed into the
/// completed list when the gesture ends, whatever its point count. A tap
/// is never discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeCollection {
    completed: Vec<Stroke>,
    active: Stroke,
}

impl StrokeCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new gesture: the active stroke is replaced with a fresh
    /// empty one. This never conditionally pushes to the completed list;
    /// only [`end_stroke`](Self::end_stroke) does that.
    pub fn begin_stroke(&mut self) {
        self.active = Stroke::new();
    }

    /// Append a point to the active stroke.
    pub fn append_point(&mut self, point: Point) {
        self.active.append(point);
    }

    /// End the gesture: the active stroke moves into the completed list
    /// regardless of point count, and a fresh empty stroke becomes active.
    pub fn end_stroke(&mut self) {
        self.completed.push(std::mem::take(&mut self.active));
    }

    /// The completed strokes, in the order they were drawn.
    #[must_use]
    pub fn completed(&self) -> &[Stroke] {
        &self.completed
    }

    /// The in-progress stroke (possibly empty).
    #[must_use]
    pub fn active(&self) -> &Stroke {
        &self.active
    }

    /// All strokes in draw order: completed first, then the active one.
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.completed.iter().chain(std::iter::once(&self.active))
    }

    /// The render path description: every stroke's consecutive-pair
    /// segments in draw order. Later strokes draw over earlier ones; no
    /// z-reordering. Pure function of the current contents.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.iter().flat_map(Stroke::segments)
    }

    /// Extrema over every non-empty stroke, active included. `None` iff
    /// the entire collection is empty of points.
    #[must_use]
    pub fn aggregate_extent(&self) -> Option<Extent> {
        self.iter().filter_map(Stroke::extent).reduce(Extent::union)
    }

    /// Number of completed strokes.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.completed.len()
    }

    /// Total recorded points across all strokes, active included.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.iter().map(Stroke::len).sum()
    }

    /// Whether no points have been recorded anywhere.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.iter().all(Stroke::is_empty)
    }

    /// Discard everything: completed strokes and the active one.
    /// Idempotent.
    pub fn clear(&mut self) {
        self.completed.clear();
        self.active = Stroke::new();
    }
}
