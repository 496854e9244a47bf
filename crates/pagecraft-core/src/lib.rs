//! PageCraft Core Library
//!
//! Platform-agnostic element model and canvas editing logic for the PageCraft
//! page builder: the element store, single selection, drag-and-drop placement,
//! and the property editor contract.

pub mod color;
pub mod config;
pub mod dragdrop;
pub mod editor;
pub mod element;
pub mod error;
pub mod input;
pub mod selection;
pub mod session;
pub mod store;

pub use color::{Rgba, parse_css_length};
pub use config::{EditorConfig, ViewMode, DEFAULT_ELEMENT_HEIGHT, DEFAULT_ELEMENT_WIDTH};
pub use dragdrop::{DragDropController, DragSource, DragState, DropCommand};
pub use editor::{CommitTiming, EditorField, PropertyEditor, coerce_numeric, fields_for};
pub use element::{Element, ElementId, ElementKind, ElementPatch, ElementProperties, FontWeight};
pub use error::{ConfigError, EditError, EditResult};
pub use input::{CanvasEvent, CanvasGeometry, ClickTarget, DragPayload, canvas_rect};
pub use selection::{ElementState, SelectionManager};
pub use session::{Command, CommandOutcome, EditorSession};
pub use store::ElementStore;
