//! Drag events driving the capture pad.
//!
//! The host toolkit's gesture layer delivers these already filtered by its
//! minimum-motion threshold; the pad never sees sub-threshold jitter.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A pointer drag event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "lowercase")]
pub enum DragEvent {
    /// Drag began (pointer down, motion threshold crossed).
    Start {
        /// X position in surface-local space.
        x: f32,
        /// Y position in surface-local space.
        y: f32,
    },
    /// Drag moved while down.
    Move {
        /// X position in surface-local space.
        x: f32,
        /// Y position in surface-local space.
        y: f32,
    },
    /// Drag ended (pointer up). Carries no position.
    End,
}

impl DragEvent {
    /// A start event at the given point.
    #[must_use]
    pub fn start(point: Point) -> Self {
        Self::Start {
            x: point.x,
            y: point.y,
        }
    }

    /// A move event at the given point.
    #[must_use]
    pub fn moved(point: Point) -> Self {
        Self::Move {
            x: point.x,
            y: point.y,
        }
    }

    /// The event's position, if it carries one.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match *self {
            Self::Start { x, y } | Self::Move { x, y } => Some(Point::new(x, y)),
            Self::End => None,
        }
    }
}
