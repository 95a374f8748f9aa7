//! The interactive capture surface.

use crate::event::DragEvent;
use crate::geometry::{Point, Segment};
use crate::stroke::StrokeCollection;

/// Drag gesture state of the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A drag gesture is accumulating points.
    Dragging,
}

/// The interactive surface: translates drag events into stroke points,
/// filtering against the surface's local bounds, and produces the path
/// description the host redraws every frame.
///
/// Points outside the surface are dropped, not clamped; the stroke simply
/// has a gap.
#[derive(Debug, Clone)]
pub struct CapturePad {
    strokes: StrokeCollection,
    width: f32,
    height: f32,
    state: DragState,
}

impl CapturePad {
    /// Create a pad with the given surface size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            strokes: StrokeCollection::new(),
            width,
            height,
            state: DragState::Idle,
        }
    }

    /// Dispatch a drag event.
    pub fn handle_event(&mut self, event: &DragEvent) {
        match *event {
            DragEvent::Start { x, y } => self.drag_start(Point::new(x, y)),
            DragEvent::Move { x, y } => self.drag_move(Point::new(x, y)),
            DragEvent::End => self.drag_end(),
        }
    }

    /// Begin a drag gesture. Starts a fresh active stroke; the start point
    /// goes through the same bounds filter as every move point.
    pub fn drag_start(&mut self, point: Point) {
        self.state = DragState::Dragging;
        self.strokes.begin_stroke();
        self.accept(point);
    }

    /// Extend the drag gesture. Ignored while idle.
    pub fn drag_move(&mut self, point: Point) {
        if self.state != DragState::Dragging {
            tracing::debug!(x = point.x, y = point.y, "drag move while idle, ignored");
            return;
        }
        self.accept(point);
    }

    /// End the drag gesture. Always deliverable: the active stroke is
    /// committed whatever its point count, and the pad returns to idle.
    pub fn drag_end(&mut self) {
        self.strokes.end_stroke();
        self.state = DragState::Idle;
    }

    /// Append the point to the active stroke iff it lies on the surface:
    /// `0 <= x <= width` and `0 <= y < height`. The half-open Y range and
    /// closed X range are deliberate and load-bearing for edge taps.
    fn accept(&mut self, point: Point) {
        let on_surface =
            point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y < self.height;
        if on_surface {
            self.strokes.append_point(point);
        } else {
            tracing::debug!(x = point.x, y = point.y, "point outside surface, dropped");
        }
    }

    /// The render path description for the current frame. See
    /// [`StrokeCollection::segments`].
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.strokes.segments()
    }

    /// The session's strokes.
    #[must_use]
    pub fn strokes(&self) -> &StrokeCollection {
        &self.strokes
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The surface size used for bounds filtering.
    #[must_use]
    pub fn surface_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Update the surface size after a layout pass. Last write wins;
    /// already-recorded points are not re-filtered.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Discard all strokes and return to idle.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.state = DragState::Idle;
    }
}
