//! Drag-and-drop placement and repositioning.
//!
//! One interaction at a time: `Idle -> Dragging -> Idle`. A drop over a
//! resolvable canvas yields a [`DropCommand`]; anything else returns to idle
//! without a command.

use crate::element::{ElementId, ElementKind};
use crate::error::{EditError, EditResult};
use crate::input::{CanvasGeometry, DragPayload, to_canvas_local};
use kurbo::Point;

/// Origin of a drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// Dragged out of the palette; creates a new element.
    Palette(ElementKind),
    /// Dragged from the canvas; repositions an existing element.
    Element(ElementId),
}

impl From<DragPayload> for DragSource {
    fn from(payload: DragPayload) -> Self {
        match payload {
            DragPayload::NewElement(kind) => DragSource::Palette(kind),
            DragPayload::Existing(id) => DragSource::Element(id),
        }
    }
}

/// State of a drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Waiting for a drag to begin.
    #[default]
    Idle,
    /// A drag is in flight.
    Dragging {
        source: DragSource,
        /// Last known pointer position.
        pointer: Point,
        /// Whether the pointer is currently over the canvas.
        over_canvas: bool,
    },
}

/// Mutation produced by a successful drop, in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropCommand {
    Create { kind: ElementKind, position: Point },
    Move { id: ElementId, position: Point },
}

/// Converts drag events into create/move commands.
#[derive(Debug, Clone, Default)]
pub struct DragDropController {
    state: DragState,
}

impl DragDropController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Check if a drag is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Source of the active drag, if any.
    pub fn source(&self) -> Option<DragSource> {
        match self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    /// Whether the active drag is hovering the canvas (drop highlight).
    pub fn is_over_canvas(&self) -> bool {
        matches!(self.state, DragState::Dragging { over_canvas: true, .. })
    }

    /// Begin a drag. Fails if one is already in flight.
    pub fn begin(&mut self, source: DragSource, pointer: Point) -> EditResult<()> {
        if self.is_active() {
            return Err(EditError::DragInProgress);
        }
        log::debug!("Drag started from {:?}", source);
        self.state = DragState::Dragging {
            source,
            pointer,
            over_canvas: false,
        };
        Ok(())
    }

    /// Track the pointer during a drag.
    pub fn drag_over(&mut self, point: Point, geometry: &dyn CanvasGeometry) {
        if let DragState::Dragging {
            pointer,
            over_canvas,
            ..
        } = &mut self.state
        {
            *pointer = point;
            *over_canvas = geometry
                .bounding_rect()
                .is_some_and(|rect| rect.contains(point));
            log::trace!("Drag over {:?} (over canvas: {})", point, over_canvas);
        }
    }

    /// Finish the drag over the canvas surface.
    ///
    /// Always returns to idle. Yields a command only when the canvas
    /// geometry can be resolved.
    pub fn drop(&mut self, pointer: Point, geometry: &dyn CanvasGeometry) -> EditResult<DropCommand> {
        let DragState::Dragging { source, .. } = std::mem::take(&mut self.state) else {
            return Err(EditError::NoDragActive);
        };
        let rect = geometry.bounding_rect().ok_or(EditError::InvalidDropTarget)?;
        let position = to_canvas_local(pointer, rect);

        Ok(match source {
            DragSource::Palette(kind) => DropCommand::Create { kind, position },
            DragSource::Element(id) => DropCommand::Move { id, position },
        })
    }

    /// Release the drag outside any drop target. Returns the abandoned source.
    pub fn release(&mut self) -> EditResult<DragSource> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { source, .. } => {
                log::debug!("Drag from {:?} released without drop", source);
                Ok(source)
            }
            DragState::Idle => Err(EditError::NoDragActive),
        }
    }
}
