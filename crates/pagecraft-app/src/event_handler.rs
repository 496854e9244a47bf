//! Routing of host events to the editing session and property editor.

use crate::panel::PanelTab;
use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use kurbo::Rect;
use pagecraft_core::{
    CanvasEvent, CanvasGeometry, Command, CommandOutcome, CommitTiming, EditResult, EditorField,
    EditorSession, PropertyEditor,
};

/// Events delivered by the host surface.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Pointer or drag event on the canvas.
    Canvas(CanvasEvent),
    /// The canvas was laid out at a new viewport rectangle, or detached.
    CanvasLayout(Option<Rect>),
    /// A property panel control changed.
    PanelInput { field: EditorField, value: String },
    /// The focused panel control lost focus.
    PanelBlur,
    /// A property panel tab was chosen.
    SelectTab(PanelTab),
    /// A key was pressed outside of any canvas drag.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
    },
}

/// Handles high-level events and translates them to session operations.
#[derive(Debug, Default)]
pub struct EventHandler {
    editor: PropertyEditor,
    /// Panel control holding keyboard focus.
    focused: Option<EditorField>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor(&self) -> &PropertyEditor {
        &self.editor
    }

    /// Check if a panel control has keyboard focus.
    pub fn is_editing_text(&self) -> bool {
        self.focused.is_some()
    }

    /// Handle a canvas event. Pressing on the canvas takes focus away from the
    /// panel, so a pending content draft is committed first.
    pub fn handle_canvas(
        &mut self,
        session: &mut EditorSession,
        event: CanvasEvent,
        geometry: &dyn CanvasGeometry,
    ) -> CommandOutcome {
        if matches!(
            event,
            CanvasEvent::Click { .. } | CanvasEvent::DragStart { .. }
        ) {
            self.handle_blur(session);
        }
        session.handle_event(event, geometry)
    }

    /// Handle a panel control change.
    pub fn handle_input(
        &mut self,
        session: &mut EditorSession,
        field: EditorField,
        raw: &str,
    ) -> EditResult<CommandOutcome> {
        self.focused = Some(field);
        self.editor.input(session, field, raw)?;
        Ok(match (field.commit_timing(), session.selected_id()) {
            (CommitTiming::Immediate, Some(id)) => CommandOutcome::Updated(id),
            _ => CommandOutcome::Unchanged,
        })
    }

    /// Handle focus leaving the panel. Returns true if a draft was committed.
    pub fn handle_blur(&mut self, session: &mut EditorSession) -> bool {
        self.focused = None;
        self.editor.blur(session)
    }

    /// Handle a key press. Keys go to the focused panel control, if any.
    pub fn handle_key(
        &mut self,
        session: &mut EditorSession,
        key: &str,
        ctrl: bool,
        shift: bool,
    ) -> CommandOutcome {
        if self.is_editing_text() {
            return CommandOutcome::Unchanged;
        }
        match ShortcutRegistry::action_for(key, ctrl, shift) {
            Some(ShortcutAction::DeleteSelected) => {
                self.editor.discard();
                session.delete_selected()
            }
            Some(ShortcutAction::Cancel) => {
                if session.drag().is_active() {
                    session.cancel_drag()
                } else {
                    session.apply(Command::Select(None))
                }
            }
            None => {
                log::trace!("Unbound key {:?}", key);
                CommandOutcome::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use pagecraft_core::{ClickTarget, DragPayload, ElementKind, canvas_rect};

    fn setup(kind: ElementKind) -> (EditorSession, EventHandler, pagecraft_core::ElementId) {
        let mut session = EditorSession::new();
        let id = session.add_element(kind, 0.0, 0.0).id();
        session.select_element(Some(id));
        (session, EventHandler::new(), id)
    }

    #[test]
    fn test_canvas_click_commits_draft() {
        let (mut session, mut handler, id) = setup(ElementKind::Heading);
        let rect = canvas_rect(0.0, 0.0, 800.0, 600.0);

        handler
            .handle_input(&mut session, EditorField::Content, "Welcome")
            .unwrap();
        assert!(handler.is_editing_text());
        assert_eq!(session.element(id).unwrap().content, "Heading Text");

        handler.handle_canvas(
            &mut session,
            CanvasEvent::Click {
                pointer: Point::new(700.0, 500.0),
                target: ClickTarget::Background,
            },
            &rect,
        );
        assert!(!handler.is_editing_text());
        assert_eq!(session.element(id).unwrap().content, "Welcome");
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn test_immediate_input_reports_update() {
        let (mut session, mut handler, id) = setup(ElementKind::Button);
        let outcome = handler
            .handle_input(&mut session, EditorField::Width, "320")
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Updated(id));
        assert_eq!(session.element(id).unwrap().width, 320.0);

        let outcome = handler
            .handle_input(&mut session, EditorField::Content, "Buy")
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Unchanged);
    }

    #[test]
    fn test_delete_key_ignored_while_typing() {
        let (mut session, mut handler, id) = setup(ElementKind::Paragraph);
        handler
            .handle_input(&mut session, EditorField::Content, "abc")
            .unwrap();

        let outcome = handler.handle_key(&mut session, "Backspace", false, false);
        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert!(session.element(id).is_some());

        handler.handle_blur(&mut session);
        let outcome = handler.handle_key(&mut session, "Delete", false, false);
        assert_eq!(outcome, CommandOutcome::Deleted(id));
        assert!(session.all_elements().is_empty());
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn test_escape_cancels_drag_then_clears_selection() {
        let (mut session, mut handler, id) = setup(ElementKind::Image);
        let rect = canvas_rect(0.0, 0.0, 800.0, 600.0);
        handler.handle_canvas(
            &mut session,
            CanvasEvent::DragStart {
                pointer: Point::ZERO,
                payload: DragPayload::NewElement(ElementKind::Heading),
            },
            &rect,
        );
        assert!(session.drag().is_active());

        handler.handle_key(&mut session, "Escape", false, false);
        assert!(!session.drag().is_active());
        assert_eq!(session.selected_id(), Some(id));

        let outcome = handler.handle_key(&mut session, "Escape", false, false);
        assert_eq!(outcome, CommandOutcome::SelectionChanged(None));
        assert_eq!(session.all_elements().len(), 1);
    }

    #[test]
    fn test_unbound_key() {
        let (mut session, mut handler, _) = setup(ElementKind::Heading);
        assert_eq!(
            handler.handle_key(&mut session, "q", false, false),
            CommandOutcome::Unchanged
        );
    }
}
