//! Editing session: the one owner of elements, selection and drag state.
//!
//! Every mutation goes through a [`Command`]. Canvas events are translated to
//! commands and applied synchronously, so the order of mutations is the order
//! in which events arrive. Failures are logged and swallowed; a bad command
//! leaves the session as it was.

use crate::config::EditorConfig;
use crate::dragdrop::{DragDropController, DragSource, DropCommand};
use crate::element::{Element, ElementId, ElementKind, ElementPatch};
use crate::error::{EditError, EditResult};
use crate::input::{CanvasEvent, CanvasGeometry, ClickTarget, to_canvas_local};
use crate::selection::{ElementState, SelectionManager};
use crate::store::ElementStore;
use kurbo::Point;

/// Named mutations of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddElement { kind: ElementKind, position: Point },
    UpdateElement { id: ElementId, patch: ElementPatch },
    DeleteElement { id: ElementId },
    /// Replace the selection, or clear it with `None`.
    Select(Option<ElementId>),
}

impl From<DropCommand> for Command {
    fn from(command: DropCommand) -> Self {
        match command {
            DropCommand::Create { kind, position } => Command::AddElement { kind, position },
            DropCommand::Move { id, position } => Command::UpdateElement {
                id,
                patch: ElementPatch::position(position),
            },
        }
    }
}

/// What applying a command or event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(ElementId),
    Updated(ElementId),
    Deleted(ElementId),
    SelectionChanged(Option<ElementId>),
    DragStarted(DragSource),
    DragCancelled,
    /// Nothing changed.
    Unchanged,
}

impl CommandOutcome {
    /// Whether the element collection changed.
    pub fn mutated_document(&self) -> bool {
        matches!(
            self,
            CommandOutcome::Created(_) | CommandOutcome::Updated(_) | CommandOutcome::Deleted(_)
        )
    }
}

/// Live editing state for one canvas.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    store: ElementStore,
    selection: SelectionManager,
    drag: DragDropController,
}

impl EditorSession {
    /// Create an empty session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            store: ElementStore::with_config(config),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        self.store.config()
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn drag(&self) -> &DragDropController {
        &self.drag
    }

    /// Apply a command.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        let outcome = match command {
            Command::AddElement { kind, position } => {
                return CommandOutcome::Created(self.insert(kind, position).id());
            }
            Command::UpdateElement { id, patch } => match self.store.try_update(id, patch) {
                Ok(()) => CommandOutcome::Updated(id),
                Err(err) => Self::swallow(err),
            },
            Command::DeleteElement { id } => match self.store.try_delete(id) {
                Ok(_) => CommandOutcome::Deleted(id),
                Err(err) => Self::swallow(err),
            },
            Command::Select(id) => {
                let before = self.selection.selected();
                self.selection.set(id);
                self.selection.reconcile(&self.store);
                let after = self.selection.selected();
                if before == after {
                    CommandOutcome::Unchanged
                } else {
                    CommandOutcome::SelectionChanged(after)
                }
            }
        };

        if self.selection.reconcile(&self.store) && outcome == CommandOutcome::Unchanged {
            return CommandOutcome::SelectionChanged(None);
        }
        outcome
    }

    /// Handler for [`Command::AddElement`].
    fn insert(&mut self, kind: ElementKind, position: Point) -> Element {
        let element = self.store.create(kind, position.x, position.y);
        self.selection.reconcile(&self.store);
        element
    }

    /// Translate a canvas event into a command and apply it.
    pub fn handle_event(
        &mut self,
        event: CanvasEvent,
        geometry: &dyn CanvasGeometry,
    ) -> CommandOutcome {
        match self.dispatch(event, geometry) {
            Ok(outcome) => outcome,
            Err(err) => Self::swallow(err),
        }
    }

    fn dispatch(
        &mut self,
        event: CanvasEvent,
        geometry: &dyn CanvasGeometry,
    ) -> EditResult<CommandOutcome> {
        match event {
            CanvasEvent::DragStart { pointer, payload } => {
                let source = DragSource::from(payload);
                match source {
                    DragSource::Element(id) if !self.store.contains(id) => {
                        return Err(EditError::UnknownElementId(id));
                    }
                    _ => {}
                }
                self.drag.begin(source, pointer)?;
                if let DragSource::Element(id) = source {
                    self.selection.select(id);
                }
                Ok(CommandOutcome::DragStarted(source))
            }
            CanvasEvent::DragOver { pointer } => {
                self.drag.drag_over(pointer, geometry);
                Ok(CommandOutcome::Unchanged)
            }
            CanvasEvent::Drop { pointer } => {
                let command = self.drag.drop(pointer, geometry)?;
                Ok(self.apply(command.into()))
            }
            CanvasEvent::DragEnd { .. } => {
                self.drag.release()?;
                Ok(CommandOutcome::DragCancelled)
            }
            CanvasEvent::Click { pointer, target } => {
                let id = match target {
                    ClickTarget::Element(id) => Some(id),
                    ClickTarget::Background => None,
                    ClickTarget::HitTest => {
                        let rect = geometry.bounding_rect().ok_or(EditError::InvalidDropTarget)?;
                        self.element_at(to_canvas_local(pointer, rect))
                    }
                };
                Ok(self.apply(Command::Select(id)))
            }
            CanvasEvent::DeleteRequested { id } => Ok(self.apply(Command::DeleteElement { id })),
        }
    }

    fn swallow(err: EditError) -> CommandOutcome {
        log::debug!("Command ignored: {}", err);
        CommandOutcome::Unchanged
    }

    /// Abandon the active drag, if any.
    pub fn cancel_drag(&mut self) -> CommandOutcome {
        match self.drag.release() {
            Ok(_) => CommandOutcome::DragCancelled,
            Err(err) => Self::swallow(err),
        }
    }

    /// Topmost element under a canvas-local point.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.store.elements_at_point(point).first().copied()
    }

    /// Create an element at canvas-local `(x, y)` (palette factory call).
    /// Runs the same handler as [`Command::AddElement`].
    pub fn add_element(&mut self, kind: ElementKind, x: f64, y: f64) -> Element {
        self.insert(kind, Point::new(x, y))
    }

    /// Merge `patch` into an element. Unknown ids are ignored.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) {
        self.apply(Command::UpdateElement { id, patch });
    }

    /// Delete an element, clearing the selection if it pointed there.
    pub fn delete_element(&mut self, id: ElementId) {
        self.apply(Command::DeleteElement { id });
    }

    /// Delete the selected element, if any.
    pub fn delete_selected(&mut self) -> CommandOutcome {
        match self.selection.selected() {
            Some(id) => self.apply(Command::DeleteElement { id }),
            None => CommandOutcome::Unchanged,
        }
    }

    /// Select an element, or clear the selection with `None`.
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.apply(Command::Select(id));
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selection.selected()
    }

    /// Snapshot of the selected element.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.selected().and_then(|id| self.store.get(id))
    }

    /// Merge `patch` into the selected element.
    pub fn update_selected(&mut self, patch: ElementPatch) -> CommandOutcome {
        match self.selection.selected() {
            Some(id) => self.apply(Command::UpdateElement { id, patch }),
            None => Self::swallow(EditError::NothingSelected),
        }
    }

    /// All elements in insertion (stacking) order.
    pub fn all_elements(&self) -> Vec<&Element> {
        self.store.all().collect()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    pub fn element_state(&self, id: ElementId) -> ElementState {
        self.selection.state(id)
    }
}
