//! Renderer trait abstraction and the HTML markup renderer.

use crate::projection::{NodeBody, RenderNode, Scene, TextStyle, from_color};
use html_escape::{encode_double_quoted_attribute, encode_text};
use peniko::Color;
use std::fmt::Write;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The projected scene to render.
    pub scene: &'a Scene,
    /// Canvas background color.
    pub background_color: Color,
    /// Outline color for the selected element.
    pub selection_color: Color,
    /// Outline color for the canvas while a drag hovers it.
    pub drop_highlight_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
            drop_highlight_color: Color::from_rgba8(147, 197, 253, 255),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection outline color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the output for a frame, replacing the previous one.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

/// Renders a scene as absolutely positioned HTML markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    output: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup produced by the last [`Renderer::build_scene`] call.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take the markup, leaving the renderer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn write_node(&mut self, node: &RenderNode, ctx: &RenderContext) -> RenderResult<()> {
        let out = &mut self.output;
        let bounds = node.bounds;
        let class = if node.state.is_selected() {
            "canvas-element selected"
        } else {
            "canvas-element"
        };
        write!(
            out,
            r#"<div class="{}" data-id="{}" data-kind="{}" style="position:absolute;left:{}px;top:{}px;width:{}px;height:{}px"#,
            class,
            node.id,
            node.kind,
            bounds.x0,
            bounds.y0,
            bounds.width(),
            bounds.height(),
        )?;
        if node.state.is_selected() {
            write!(out, ";outline:2px solid {}", css_color(ctx.selection_color))?;
        }
        out.push_str(r#"">"#);

        match &node.body {
            NodeBody::Heading { text, style } => {
                write!(out, r#"<h2 style="{}">{}</h2>"#, text_css(style), encode_text(text))?;
            }
            NodeBody::Paragraph { text, style } => {
                write!(out, r#"<p style="{}">{}</p>"#, text_css(style), encode_text(text))?;
            }
            NodeBody::Button {
                label,
                style,
                background,
                border_radius,
            } => {
                write!(
                    out,
                    r#"<button style="{};background-color:{};border-radius:{}px;padding:8px 16px;border:none;width:100%;height:100%">{}</button>"#,
                    text_css(style),
                    background,
                    border_radius,
                    encode_text(label),
                )?;
            }
            NodeBody::Image { src, alt } => {
                write!(
                    out,
                    r#"<img src="{}" alt="{}" style="width:100%;height:100%;object-fit:cover">"#,
                    encode_double_quoted_attribute(src),
                    encode_double_quoted_attribute(alt),
                )?;
            }
            NodeBody::Container {
                label,
                background,
                border,
                border_radius,
            } => {
                write!(
                    out,
                    r#"<div style="background-color:{};border:{};border-radius:{}px;width:100%;height:100%">{}</div>"#,
                    background,
                    encode_double_quoted_attribute(border),
                    border_radius,
                    encode_text(label),
                )?;
            }
        }

        if node.controls_visible {
            out.push_str(
                r#"<div class="element-controls"><button class="delete-button">Delete</button></div>"#,
            );
        }
        out.push_str("</div>");
        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.output.clear();
        let scene = ctx.scene;

        let width = match scene.canvas_width {
            Some(width) => format!("{}px", width),
            None => "100%".to_string(),
        };
        let class = if scene.drop_active {
            "canvas canvas-drop-active"
        } else {
            "canvas"
        };
        write!(
            self.output,
            r#"<div id="canvas-container" class="{}" style="position:relative;width:{};background-color:{}"#,
            class,
            width,
            css_color(ctx.background_color),
        )?;
        if scene.drop_active {
            write!(
                self.output,
                ";outline:2px dashed {}",
                css_color(ctx.drop_highlight_color)
            )?;
        }
        self.output.push_str(r#"">"#);

        for node in &scene.nodes {
            self.write_node(node, ctx)?;
        }
        self.output.push_str("</div>");
        Ok(())
    }
}

fn text_css(style: &TextStyle) -> String {
    format!(
        "font-size:{}px;font-weight:{};color:{}",
        style.font_size,
        style.font_weight.css(),
        style.color
    )
}

fn css_color(color: Color) -> String {
    from_color(color).to_string()
}
