//! Element definitions for the page canvas.

use crate::color::Rgba;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// The closed set of content blocks that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Button,
    Image,
    /// Visual grouping box. Not a layout node: it never owns other elements.
    Container,
}

impl ElementKind {
    /// Get all element kinds.
    pub fn all() -> &'static [ElementKind] {
        &[
            ElementKind::Heading,
            ElementKind::Paragraph,
            ElementKind::Button,
            ElementKind::Image,
            ElementKind::Container,
        ]
    }

    /// Identifier used in drag payloads and config keys.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Heading => "heading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Button => "button",
            ElementKind::Image => "image",
            ElementKind::Container => "container",
        }
    }

    /// Get display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            ElementKind::Heading => "Heading",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::Button => "Button",
            ElementKind::Image => "Image",
            ElementKind::Container => "Container",
        }
    }

    /// Content given to a freshly created element.
    pub fn default_content(self) -> &'static str {
        match self {
            ElementKind::Heading => "Heading Text",
            ElementKind::Paragraph => "Paragraph text",
            ElementKind::Button => "Click Me",
            ElementKind::Image | ElementKind::Container => "",
        }
    }

    /// Kinds whose text color and font size can be styled.
    pub fn is_text_bearing(self) -> bool {
        matches!(
            self,
            ElementKind::Heading | ElementKind::Paragraph | ElementKind::Button
        )
    }

    /// Kinds with an editable content field.
    pub fn has_content(self) -> bool {
        self != ElementKind::Image
    }

    /// Kinds with a background fill and rounded corners.
    pub fn has_fill(self) -> bool {
        matches!(self, ElementKind::Button | ElementKind::Container)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a drag payload names no known element kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element kind: {0:?}")]
pub struct UnknownElementKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownElementKind(s.to_string()))
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// CSS keyword for this weight.
    pub fn css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Style and metadata for an element.
///
/// Every field is optional; an unset field falls back to the renderer's
/// default for the element kind. Keys the editor does not know about live in
/// `extra` and are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementProperties {
    /// Font size in pixels.
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    /// Text color.
    pub color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    /// Corner radius in pixels.
    pub border_radius: Option<f64>,
    /// CSS border shorthand, e.g. `"1px dashed #ccc"`.
    pub border: Option<String>,
    /// Image source URL.
    pub src: Option<String>,
    /// Image alternative text.
    pub alt: Option<String>,
    /// Open extension map.
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ElementProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Rgba) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn with_border(mut self, border: impl Into<String>) -> Self {
        self.border = Some(border.into());
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge `other` into `self`. Set fields overwrite, unset fields are kept.
    pub fn merge(&mut self, other: ElementProperties) {
        fn take<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        take(&mut self.font_size, other.font_size);
        take(&mut self.font_weight, other.font_weight);
        take(&mut self.color, other.color);
        take(&mut self.background_color, other.background_color);
        take(&mut self.border_radius, other.border_radius);
        take(&mut self.border, other.border);
        take(&mut self.src, other.src);
        take(&mut self.alt, other.alt);
        self.extra.extend(other.extra);
    }
}

/// A partial update to an element. Only fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Option<String>,
    pub properties: Option<ElementProperties>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that moves an element and touches nothing else.
    pub fn position(point: Point) -> Self {
        Self {
            x: Some(point.x),
            y: Some(point.y),
            ..Self::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn properties(properties: ElementProperties) -> Self {
        Self {
            properties: Some(properties),
            ..Self::default()
        }
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.content.is_none()
            && self.properties.as_ref().is_none_or(ElementProperties::is_empty)
    }
}

/// A content block placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: ElementKind,
    /// Top-left corner in canvas-local coordinates.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Text payload. Empty means no content.
    pub content: String,
    pub properties: ElementProperties,
}

impl Element {
    /// Create a new element with a fresh id.
    pub fn new(kind: ElementKind, position: Point, size: Size, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            width: size.width,
            height: size.height,
            content: content.into(),
            properties: ElementProperties::default(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding box in canvas-local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size())
    }

    /// Check if a canvas-local point falls inside the element. The right and
    /// bottom edges are exclusive.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Apply a patch in place. Id and kind are never touched.
    pub(crate) fn apply(&mut self, patch: ElementPatch) {
        fn set_finite(slot: &mut f64, value: Option<f64>) {
            match value {
                Some(v) if v.is_finite() => *slot = v,
                Some(v) => log::debug!("Ignoring non-finite geometry value {}", v),
                None => {}
            }
        }

        set_finite(&mut self.position.x, patch.x);
        set_finite(&mut self.position.y, patch.y);
        set_finite(&mut self.width, patch.width);
        set_finite(&mut self.height, patch.height);
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(properties) = patch.properties {
            self.properties.merge(properties);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn heading() -> Element {
        Element::new(
            ElementKind::Heading,
            Point::new(10.0, 20.0),
            Size::new(200.0, 80.0),
            "Heading Text",
        )
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("heading".parse::<ElementKind>(), Ok(ElementKind::Heading));
        assert_eq!("Button".parse::<ElementKind>(), Ok(ElementKind::Button));
        assert!("video".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_kind_capabilities() {
        assert!(!ElementKind::Image.has_content());
        assert!(ElementKind::Container.has_content());
        assert!(ElementKind::Button.is_text_bearing());
        assert!(!ElementKind::Container.is_text_bearing());
        assert!(ElementKind::Container.has_fill());
        assert!(!ElementKind::Heading.has_fill());
    }

    #[test]
    fn test_move_patch_touches_position_only() {
        let mut element = heading();
        let before = element.clone();

        element.apply(ElementPatch::position(Point::new(-5.0, 300.0)));

        assert_eq!(element.position, Point::new(-5.0, 300.0));
        assert_eq!(element.id, before.id);
        assert_eq!(element.kind, before.kind);
        assert_eq!(element.width, before.width);
        assert_eq!(element.height, before.height);
        assert_eq!(element.content, before.content);
        assert_eq!(element.properties, before.properties);
    }

    #[test]
    fn test_properties_merge_keeps_existing_keys() {
        let mut element = heading();
        element.apply(ElementPatch::properties(
            ElementProperties::new()
                .with_font_size(32.0)
                .with_extra("data-test", json!("hero")),
        ));
        element.apply(ElementPatch::properties(
            ElementProperties::new().with_color(Rgba::rgb(255, 0, 0)),
        ));

        assert_eq!(element.properties.font_size, Some(32.0));
        assert_eq!(element.properties.color, Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(element.properties.extra.get("data-test"), Some(&json!("hero")));
    }

    #[test]
    fn test_extra_merge_is_per_key() {
        let mut props = ElementProperties::new()
            .with_extra("a", json!(1))
            .with_extra("b", json!(2));
        props.merge(ElementProperties::new().with_extra("b", json!(3)));

        assert_eq!(props.extra.get("a"), Some(&json!(1)));
        assert_eq!(props.extra.get("b"), Some(&json!(3)));
    }

    #[test]
    fn test_non_finite_geometry_ignored() {
        let mut element = heading();
        element.apply(ElementPatch::new().with_width(f64::NAN).with_height(40.0));
        assert_eq!(element.width, 200.0);
        assert_eq!(element.height, 40.0);
    }

    #[test]
    fn test_bounds_and_contains() {
        let element = heading();
        assert_eq!(element.bounds(), Rect::new(10.0, 20.0, 210.0, 100.0));
        assert!(element.contains(Point::new(10.0, 20.0)));
        assert!(element.contains(Point::new(100.0, 50.0)));
        assert!(!element.contains(Point::new(211.0, 50.0)));
        assert!(element.contains(Point::new(209.5, 99.5)));
        assert!(!element.contains(Point::new(210.0, 50.0)));
        assert!(!element.contains(Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ElementPatch::new().is_empty());
        assert!(ElementPatch::properties(ElementProperties::new()).is_empty());
        assert!(!ElementPatch::content("").is_empty());
        assert!(!ElementPatch::new().with_x(0.0).is_empty());
    }
}
