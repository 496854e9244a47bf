//! PageCraft Render Library
//!
//! Projects an editing session into a scene with every style default
//! resolved, and renders scenes through the [`Renderer`] trait. The bundled
//! implementation emits HTML markup.

pub mod projection;
mod renderer;

pub use projection::{NodeBody, RenderNode, Scene, TextStyle, project, resolve_body, to_color};
pub use renderer::{HtmlRenderer, RenderContext, RenderResult, Renderer, RendererError};
