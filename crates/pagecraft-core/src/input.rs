//! Canvas events and the geometry query the canvas surface answers.

use crate::element::{ElementId, ElementKind};
use kurbo::{Point, Rect};

/// What a drag carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    /// A palette item: a new element of this kind.
    NewElement(ElementKind),
    /// An element already on the canvas.
    Existing(ElementId),
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Element(ElementId),
    /// Empty canvas space.
    Background,
    /// Host did not resolve the target; hit test at the pointer.
    HitTest,
}

/// Event emitted by the canvas surface or the palette.
///
/// Pointer positions are in the same coordinate space as
/// [`CanvasGeometry::bounding_rect`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    DragStart { pointer: Point, payload: DragPayload },
    DragOver { pointer: Point },
    /// Drag released over the canvas surface.
    Drop { pointer: Point },
    /// Drag released anywhere else.
    DragEnd { pointer: Point },
    Click { pointer: Point, target: ClickTarget },
    /// The delete control on an element was pressed.
    DeleteRequested { id: ElementId },
}

impl CanvasEvent {
    /// Pointer position carried by the event, if any.
    pub fn pointer(&self) -> Option<Point> {
        match self {
            CanvasEvent::DragStart { pointer, .. }
            | CanvasEvent::DragOver { pointer }
            | CanvasEvent::Drop { pointer }
            | CanvasEvent::DragEnd { pointer }
            | CanvasEvent::Click { pointer, .. } => Some(*pointer),
            CanvasEvent::DeleteRequested { .. } => None,
        }
    }
}

/// Synchronous geometry query answered by the canvas surface.
pub trait CanvasGeometry {
    /// Current bounding rectangle of the canvas (left, top, right, bottom),
    /// or `None` when it cannot be resolved.
    fn bounding_rect(&self) -> Option<Rect>;
}

impl CanvasGeometry for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl CanvasGeometry for Option<Rect> {
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}

/// Build a canvas rectangle from `{left, top, width, height}`.
pub fn canvas_rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::new(left, top, left + width, top + height)
}

/// Convert a pointer position to canvas-local coordinates.
pub fn to_canvas_local(pointer: Point, rect: Rect) -> Point {
    Point::new(pointer.x - rect.x0, pointer.y - rect.y0)
}
