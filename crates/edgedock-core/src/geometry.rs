//! Edge geometry for the docked panel.
//!
//! Pure functions over the screen size, the panel's current rectangle
//! and the sliver offset. Nothing here talks to the OS, so every rule
//! is unit-tested directly.
//!
//! Docking only ever changes the coordinate on the snapped axis; the
//! other coordinate is whatever the panel currently has.

use crate::{Edge, Point, Rect, Size};

/// Default distance in pixels within which a dropped panel snaps.
pub const DEFAULT_SNAP_THRESHOLD: i32 = 50;

/// Rectangle math for one screen and one sliver width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeGeometry {
    pub screen: Size,
    /// Pixels of the panel that stay on-screen while hidden.
    pub offset: i32,
}

impl EdgeGeometry {
    pub fn new(screen: Size, offset: i32) -> Self {
        Self { screen, offset }
    }

    /// Top-left position that puts the panel flush against `edge`.
    pub fn docked_visible_origin(&self, edge: Edge, panel: Rect) -> Point {
        match edge {
            Edge::Left => Point::new(0, panel.y),
            Edge::Right => Point::new(self.screen.width - panel.width, panel.y),
            Edge::Top => Point::new(panel.x, 0),
            Edge::Bottom => Point::new(panel.x, self.screen.height - panel.height),
        }
    }

    /// Top-left position that leaves only `offset` pixels on-screen.
    pub fn docked_hidden_origin(&self, edge: Edge, panel: Rect) -> Point {
        match edge {
            Edge::Left => Point::new(-panel.width + self.offset, panel.y),
            Edge::Right => Point::new(self.screen.width - self.offset, panel.y),
            Edge::Top => Point::new(panel.x, -panel.height + self.offset),
            Edge::Bottom => Point::new(panel.x, self.screen.height - self.offset),
        }
    }

    /// Whether the pointer should reveal a panel hidden at `edge`.
    ///
    /// The pointer must be within `offset` pixels of the screen edge and
    /// inside the panel's span on the other axis, so touching the edge
    /// far away from the sliver does nothing.
    pub fn trigger_zone(&self, edge: Edge, panel: Rect, pointer: Point) -> bool {
        match edge {
            Edge::Left => pointer.x < self.offset && panel.spans_y(pointer.y),
            Edge::Right => {
                pointer.x >= self.screen.width - self.offset && panel.spans_y(pointer.y)
            }
            Edge::Top => pointer.y < self.offset && panel.spans_x(pointer.x),
            Edge::Bottom => {
                pointer.y >= self.screen.height - self.offset && panel.spans_x(pointer.x)
            }
        }
    }

    /// The strip of a panel docked at `edge` that remains visible while
    /// hidden. This is where the indicator is drawn.
    pub fn sliver_rect(&self, edge: Edge, panel: Rect) -> Rect {
        match edge {
            Edge::Left => Rect::new(0, panel.y, self.offset, panel.height),
            Edge::Right => Rect::new(
                self.screen.width - self.offset,
                panel.y,
                self.offset,
                panel.height,
            ),
            Edge::Top => Rect::new(panel.x, 0, panel.width, self.offset),
            Edge::Bottom => Rect::new(
                panel.x,
                self.screen.height - self.offset,
                panel.width,
                self.offset,
            ),
        }
    }
}

/// Whether the pointer has left the visible panel.
pub fn exit_zone(panel: Rect, pointer: Point) -> bool {
    !panel.contains(pointer)
}

/// Picks the edge a dropped panel should snap to, if any.
///
/// Checked in order left, right, top; the first edge within `threshold`
/// pixels wins. The bottom edge is never a drop target.
pub fn snap_candidate(panel: Rect, screen: Size, threshold: i32) -> Option<Edge> {
    if panel.x <= threshold {
        Some(Edge::Left)
    } else if panel.right() >= screen.width - threshold {
        Some(Edge::Right)
    } else if panel.y <= threshold {
        Some(Edge::Top)
    } else {
        None
    }
}
