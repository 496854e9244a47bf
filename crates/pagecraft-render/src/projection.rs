//! Read-only projection of an editing session into renderable nodes.
//!
//! Resolves type-specific defaults for every unset property so renderers only
//! deal with concrete values.

use kurbo::Rect;
use pagecraft_core::{
    Element, ElementId, ElementKind, ElementState, EditorSession, FontWeight, Rgba,
};
use peniko::Color;

/// Placeholder shown for images without a source.
pub const DEFAULT_IMAGE_SRC: &str = "/placeholder.svg?height=200&width=200";
/// Alt text for images without one.
pub const DEFAULT_IMAGE_ALT: &str = "Image";
/// Border drawn around containers without one.
pub const DEFAULT_CONTAINER_BORDER: &str = "1px dashed #ccc";
/// Label shown in empty containers.
pub const DEFAULT_CONTAINER_LABEL: &str = "Container";
/// Button fill (blue-500).
pub const DEFAULT_BUTTON_BACKGROUND: Rgba = Rgba::rgb(59, 130, 246);
/// Corner radius for buttons and containers.
pub const DEFAULT_CORNER_RADIUS: f64 = 4.0;

/// Resolved text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: Rgba,
}

/// Type-specific content of a node with all defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    Heading {
        text: String,
        style: TextStyle,
    },
    Paragraph {
        text: String,
        style: TextStyle,
    },
    Button {
        label: String,
        style: TextStyle,
        background: Rgba,
        border_radius: f64,
    },
    Image {
        src: String,
        alt: String,
    },
    Container {
        label: String,
        background: Rgba,
        border: String,
        border_radius: f64,
    },
}

/// One element, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Canvas-local bounds.
    pub bounds: Rect,
    pub state: ElementState,
    /// Whether the delete control is shown.
    pub controls_visible: bool,
    pub body: NodeBody,
}

/// Everything needed to draw one frame, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<RenderNode>,
    /// Fixed canvas width, or `None` to fill the host.
    pub canvas_width: Option<f64>,
    /// A drag is hovering the canvas.
    pub drop_active: bool,
}

impl Scene {
    pub fn node(&self, id: ElementId) -> Option<&RenderNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn selected(&self) -> Option<&RenderNode> {
        self.nodes.iter().find(|node| node.state.is_selected())
    }
}

/// Project the session into a scene. Never mutates the session.
pub fn project(session: &EditorSession) -> Scene {
    let selection = session.selection();
    let nodes = session
        .all_elements()
        .into_iter()
        .map(|element| RenderNode {
            id: element.id(),
            kind: element.kind(),
            bounds: element.bounds(),
            state: selection.state(element.id()),
            controls_visible: selection.controls_visible(element.id()),
            body: resolve_body(element),
        })
        .collect();

    Scene {
        nodes,
        canvas_width: session.config().view_mode.canvas_width(),
        drop_active: session.drag().is_over_canvas(),
    }
}

/// Resolve an element's body, filling unset properties with kind defaults.
pub fn resolve_body(element: &Element) -> NodeBody {
    let props = &element.properties;
    let text = |font_size: f64, font_weight: FontWeight, color: Rgba| TextStyle {
        font_size: props.font_size.unwrap_or(font_size),
        font_weight: props.font_weight.unwrap_or(font_weight),
        color: props.color.unwrap_or(color),
    };
    let radius = props.border_radius.unwrap_or(DEFAULT_CORNER_RADIUS);

    match element.kind() {
        ElementKind::Heading => NodeBody::Heading {
            text: element.content.clone(),
            style: text(24.0, FontWeight::Bold, Rgba::black()),
        },
        ElementKind::Paragraph => NodeBody::Paragraph {
            text: element.content.clone(),
            style: text(16.0, FontWeight::Normal, Rgba::black()),
        },
        ElementKind::Button => NodeBody::Button {
            label: element.content.clone(),
            style: text(16.0, FontWeight::Normal, Rgba::white()),
            background: props.background_color.unwrap_or(DEFAULT_BUTTON_BACKGROUND),
            border_radius: radius,
        },
        ElementKind::Image => NodeBody::Image {
            src: props.src.clone().unwrap_or_else(|| DEFAULT_IMAGE_SRC.to_string()),
            alt: props.alt.clone().unwrap_or_else(|| DEFAULT_IMAGE_ALT.to_string()),
        },
        ElementKind::Container => NodeBody::Container {
            label: if element.content.is_empty() {
                DEFAULT_CONTAINER_LABEL.to_string()
            } else {
                element.content.clone()
            },
            background: props.background_color.unwrap_or(Rgba::transparent()),
            border: props
                .border
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTAINER_BORDER.to_string()),
            border_radius: radius,
        },
    }
}

/// Convert a stored color to a peniko color.
pub fn to_color(color: Rgba) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Convert a peniko color back to a stored color.
pub fn from_color(color: Color) -> Rgba {
    let rgba = color.to_rgba8();
    Rgba::new(rgba.r, rgba.g, rgba.b, rgba.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_core::{EditorConfig, ElementPatch, ElementProperties, ViewMode};

    #[test]
    fn test_heading_defaults() {
        let mut session = EditorSession::new();
        let id = session.add_element(ElementKind::Heading, 100.0, 60.0).id();
        let scene = project(&session);

        let node = scene.node(id).unwrap();
        assert_eq!(node.bounds, Rect::new(100.0, 60.0, 300.0, 140.0));
        assert_eq!(
            node.body,
            NodeBody::Heading {
                text: "Heading Text".to_string(),
                style: TextStyle {
                    font_size: 24.0,
                    font_weight: FontWeight::Bold,
                    color: Rgba::black(),
                },
            }
        );
        assert!(!node.controls_visible);
    }

    #[test]
    fn test_overrides_win() {
        let mut session = EditorSession::new();
        let id = session.add_element(ElementKind::Button, 0.0, 0.0).id();
        session.update_element(
            id,
            ElementPatch::properties(
                ElementProperties::new()
                    .with_background_color(Rgba::rgb(16, 185, 129))
                    .with_border_radius(9999.0),
            ),
        );

        let scene = project(&session);
        let NodeBody::Button {
            label,
            style,
            background,
            border_radius,
        } = &scene.node(id).unwrap().body
        else {
            panic!("expected a button body");
        };
        assert_eq!(label, "Click Me");
        assert_eq!(style.color, Rgba::white());
        assert_eq!(*background, Rgba::rgb(16, 185, 129));
        assert_eq!(*border_radius, 9999.0);
    }

    #[test]
    fn test_image_and_container_defaults() {
        let mut session = EditorSession::new();
        let image = session.add_element(ElementKind::Image, 0.0, 0.0).id();
        let container = session.add_element(ElementKind::Container, 0.0, 0.0).id();
        let scene = project(&session);

        assert_eq!(
            scene.node(image).unwrap().body,
            NodeBody::Image {
                src: DEFAULT_IMAGE_SRC.to_string(),
                alt: "Image".to_string(),
            }
        );
        assert_eq!(
            scene.node(container).unwrap().body,
            NodeBody::Container {
                label: "Container".to_string(),
                background: Rgba::transparent(),
                border: "1px dashed #ccc".to_string(),
                border_radius: 4.0,
            }
        );
    }

    #[test]
    fn test_selection_projection() {
        let mut session = EditorSession::new();
        let a = session.add_element(ElementKind::Paragraph, 0.0, 0.0).id();
        let b = session.add_element(ElementKind::Heading, 0.0, 0.0).id();
        session.select_element(Some(b));

        let scene = project(&session);
        assert_eq!(scene.nodes.len(), 2);
        assert_eq!(scene.nodes[0].id, a);
        assert_eq!(scene.selected().map(|n| n.id), Some(b));
        assert!(scene.node(b).unwrap().controls_visible);
        assert!(!scene.node(a).unwrap().controls_visible);
    }

    #[test]
    fn test_canvas_width_from_view_mode() {
        let session = EditorSession::with_config(EditorConfig {
            view_mode: ViewMode::Tablet,
            ..EditorConfig::default()
        });
        assert_eq!(project(&session).canvas_width, Some(768.0));
        assert_eq!(project(&EditorSession::new()).canvas_width, None);
    }

    #[test]
    fn test_color_conversion() {
        let blue = Rgba::rgb(59, 130, 246);
        assert_eq!(from_color(to_color(blue)), blue);
    }
}
