//! Application shell tying the session, panel, palette and renderer together.

use crate::event_handler::{EventHandler, HostEvent};
use crate::palette::Palette;
use crate::panel::{PanelRow, PropertyPanel};
use kurbo::Rect;
use pagecraft_core::{CommandOutcome, ConfigError, EditorConfig, EditorSession};
use pagecraft_render::{HtmlRenderer, RenderContext, RenderResult, Renderer, project};
use peniko::Color;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub background_color: Color,
    /// Offer containers in the palette.
    pub show_containers: bool,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PageCraft".to_string(),
            background_color: Color::from_rgba8(255, 255, 255, 255),
            show_containers: false,
            editor: EditorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default app configuration with the editor section parsed from JSON.
    pub fn from_editor_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            editor: EditorConfig::from_json(json)?,
            ..Self::default()
        })
    }
}

/// The page builder application.
pub struct App {
    config: AppConfig,
    session: EditorSession,
    events: EventHandler,
    panel: PropertyPanel,
    palette: Palette,
    /// Canvas viewport rectangle; `None` until the host lays it out.
    canvas_rect: Option<Rect>,
    renderer: HtmlRenderer,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let palette = if config.show_containers {
            Palette::new().with_containers()
        } else {
            Palette::new()
        };
        Self {
            session: EditorSession::with_config(config.editor.clone()),
            config,
            events: EventHandler::new(),
            panel: PropertyPanel::new(),
            palette,
            canvas_rect: None,
            renderer: HtmlRenderer::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn panel(&self) -> &PropertyPanel {
        &self.panel
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    /// Controls of the active panel tab for the current selection.
    pub fn panel_rows(&self) -> Vec<PanelRow> {
        self.panel.rows(&self.session, self.events.editor())
    }

    /// Route one host event.
    pub fn handle(&mut self, event: HostEvent) -> CommandOutcome {
        match event {
            HostEvent::Canvas(event) => {
                self.events
                    .handle_canvas(&mut self.session, event, &self.canvas_rect)
            }
            HostEvent::CanvasLayout(rect) => {
                self.canvas_rect = rect;
                CommandOutcome::Unchanged
            }
            HostEvent::PanelInput { field, value } => {
                match self.events.handle_input(&mut self.session, field, &value) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        log::debug!("Rejected {:?} input {:?}: {}", field, value, err);
                        CommandOutcome::Unchanged
                    }
                }
            }
            HostEvent::PanelBlur => match self.session.selected_id() {
                Some(id) if self.events.handle_blur(&mut self.session) => {
                    CommandOutcome::Updated(id)
                }
                _ => CommandOutcome::Unchanged,
            },
            HostEvent::SelectTab(tab) => {
                self.panel.set_tab(tab);
                CommandOutcome::Unchanged
            }
            HostEvent::Key { key, ctrl, shift } => {
                self.events.handle_key(&mut self.session, &key, ctrl, shift)
            }
        }
    }

    /// Render the canvas and return its markup.
    pub fn render(&mut self) -> RenderResult<&str> {
        let scene = project(&self.session);
        let ctx = RenderContext::new(&scene).with_background(self.config.background_color);
        self.renderer.build_scene(&ctx)?;
        Ok(self.renderer.output())
    }
}
