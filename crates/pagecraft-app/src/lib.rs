//! PageCraft Application
//!
//! Host shell for the page builder: element palette, property panel,
//! keyboard shortcuts and routing of host events into an editing session.

mod app;
mod event_handler;
pub mod palette;
pub mod panel;
mod shortcuts;

pub use app::{App, AppConfig};
pub use event_handler::{EventHandler, HostEvent};
pub use palette::{Palette, PaletteEntry};
pub use panel::{FieldWidget, PanelRow, PanelTab, PropertyPanel};
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
