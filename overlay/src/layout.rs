//! Layout and clamping of anchored boxes
//!
//! Boxes sit just below their anchor. World-space boxes are pushed out by
//! [`EXAMINE_PADDING`] so they do not cover the entity. Clamping needs the
//! box size, which is only known after drawing, so callers pass the size the
//! same record rendered at on the previous cycle.

use crate::geometry::{Point, Rect, Size};
use crate::scene::SceneQuery;

/// Gap kept between a clamped box and the edge of its container
pub const SCREEN_PADDING: i32 = 5;

/// Offset of world-space boxes from their anchor
pub const EXAMINE_PADDING: i32 = 10;

/// Unclamped top-left corner for a box anchored to `anchor`
pub fn initial_position(anchor: Rect, interface: bool) -> Point {
    if interface {
        Point::new(anchor.x, anchor.bottom())
    } else {
        Point::new(anchor.x - EXAMINE_PADDING, anchor.bottom() + EXAMINE_PADDING)
    }
}

/// Area a box must stay inside: the whole canvas for interface items, the
/// game viewport for everything else, both inset by [`SCREEN_PADDING`]
pub fn clamp_container(scene: &dyn SceneQuery, interface: bool) -> Rect {
    let area = if interface {
        scene.canvas()
    } else {
        scene.viewport()
    };
    area.inset(SCREEN_PADDING)
}

/// Shift `position` the least amount needed to keep a box of `size` inside
/// `container`. The leading edge wins when the box is larger than the container.
pub fn clamp_position(position: Point, size: Size, container: Rect) -> Point {
    Point::new(
        clamp_axis(position.x, size.width, container.x, container.right()),
        clamp_axis(position.y, size.height, container.y, container.bottom()),
    )
}

fn clamp_axis(pos: i32, extent: i32, min: i32, max: i32) -> i32 {
    if pos < min {
        min
    } else if pos + extent > max {
        max - extent
    } else {
        pos
    }
}
