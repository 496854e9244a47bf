//! Property editor contract.
//!
//! Fields are offered per element kind. Free text (`content`) is buffered as a
//! draft and only committed when the field loses focus; every other field
//! commits on each change so the canvas previews it live.

use crate::color::{Rgba, parse_css_length};
use crate::element::{Element, ElementId, ElementKind, ElementPatch, ElementProperties};
use crate::error::{EditError, EditResult};
use crate::session::EditorSession;

/// Editable field in the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorField {
    Content,
    Alt,
    Src,
    FontSize,
    Color,
    BackgroundColor,
    BorderRadius,
    Width,
    Height,
    X,
    Y,
}

/// When an edit reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTiming {
    /// On loss of focus.
    OnBlur,
    /// On every change.
    Immediate,
}

impl EditorField {
    /// Get all fields in panel order.
    pub fn all() -> &'static [EditorField] {
        &[
            EditorField::Content,
            EditorField::Alt,
            EditorField::Src,
            EditorField::FontSize,
            EditorField::Color,
            EditorField::BackgroundColor,
            EditorField::BorderRadius,
            EditorField::Width,
            EditorField::Height,
            EditorField::X,
            EditorField::Y,
        ]
    }

    /// Get display name for UI.
    pub fn label(self) -> &'static str {
        match self {
            EditorField::Content => "Content",
            EditorField::Alt => "Alt Text",
            EditorField::Src => "Image URL",
            EditorField::FontSize => "Font Size",
            EditorField::Color => "Text Color",
            EditorField::BackgroundColor => "Background",
            EditorField::BorderRadius => "Border Radius",
            EditorField::Width => "Width (px)",
            EditorField::Height => "Height (px)",
            EditorField::X => "X Position (px)",
            EditorField::Y => "Y Position (px)",
        }
    }

    pub fn applies_to(self, kind: ElementKind) -> bool {
        match self {
            EditorField::Content => kind.has_content(),
            EditorField::Alt | EditorField::Src => kind == ElementKind::Image,
            EditorField::FontSize | EditorField::Color => kind.is_text_bearing(),
            EditorField::BackgroundColor | EditorField::BorderRadius => kind.has_fill(),
            EditorField::Width | EditorField::Height | EditorField::X | EditorField::Y => true,
        }
    }

    pub fn commit_timing(self) -> CommitTiming {
        match self {
            EditorField::Content => CommitTiming::OnBlur,
            _ => CommitTiming::Immediate,
        }
    }

    /// Geometry fields, which coerce bad input to 0.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            EditorField::Width | EditorField::Height | EditorField::X | EditorField::Y
        )
    }

    /// Current value of the field on `element`, formatted for display.
    /// `None` when the property is unset.
    pub fn current_value(self, element: &Element) -> Option<String> {
        let props = &element.properties;
        match self {
            EditorField::Content => Some(element.content.clone()),
            EditorField::Alt => props.alt.clone(),
            EditorField::Src => props.src.clone(),
            EditorField::FontSize => props.font_size.map(|v| format!("{}px", v)),
            EditorField::Color => props.color.map(|c| c.to_string()),
            EditorField::BackgroundColor => props.background_color.map(|c| c.to_string()),
            EditorField::BorderRadius => props.border_radius.map(|v| format!("{}px", v)),
            EditorField::Width => Some(element.width.to_string()),
            EditorField::Height => Some(element.height.to_string()),
            EditorField::X => Some(element.x().to_string()),
            EditorField::Y => Some(element.y().to_string()),
        }
    }

    /// Turn raw input into a patch for this field.
    pub fn patch(self, raw: &str) -> EditResult<ElementPatch> {
        let invalid = || EditError::InvalidStyleValue {
            field: self,
            raw: raw.to_string(),
        };
        let props = |p: ElementProperties| Ok(ElementPatch::properties(p));

        match self {
            EditorField::Content => Ok(ElementPatch::content(raw)),
            EditorField::Alt => props(ElementProperties::new().with_alt(raw)),
            EditorField::Src => props(ElementProperties::new().with_src(raw)),
            EditorField::FontSize => {
                let size = parse_css_length(raw).filter(|v| *v > 0.0).ok_or_else(invalid)?;
                props(ElementProperties::new().with_font_size(size))
            }
            EditorField::Color => {
                let color = Rgba::parse(raw).ok_or_else(invalid)?;
                props(ElementProperties::new().with_color(color))
            }
            EditorField::BackgroundColor => {
                let color = Rgba::parse(raw).ok_or_else(invalid)?;
                props(ElementProperties::new().with_background_color(color))
            }
            EditorField::BorderRadius => {
                let radius = parse_css_length(raw).filter(|v| *v >= 0.0).ok_or_else(invalid)?;
                props(ElementProperties::new().with_border_radius(radius))
            }
            EditorField::Width => Ok(ElementPatch::new().with_width(coerce_numeric(raw))),
            EditorField::Height => Ok(ElementPatch::new().with_height(coerce_numeric(raw))),
            EditorField::X => Ok(ElementPatch::new().with_x(coerce_numeric(raw))),
            EditorField::Y => Ok(ElementPatch::new().with_y(coerce_numeric(raw))),
        }
    }
}

/// Fields offered for an element kind, in panel order.
pub fn fields_for(kind: ElementKind) -> Vec<EditorField> {
    EditorField::all()
        .iter()
        .copied()
        .filter(|field| field.applies_to(kind))
        .collect()
}

/// Parse the leading integer of `raw`, like a browser number input.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit (`"12.7"` is 12, `"42px"` is 42).
pub fn parse_numeric(raw: &str) -> EditResult<f64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(EditError::InvalidNumericInput(raw.to_string()));
    }
    trimmed[..sign_len + digits_len]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EditError::InvalidNumericInput(raw.to_string()))
}

/// Numeric input with anything unparseable (or zero) collapsed to 0.
pub fn coerce_numeric(raw: &str) -> f64 {
    match parse_numeric(raw) {
        Ok(value) if value != 0.0 => value,
        Ok(_) => 0.0,
        Err(err) => {
            log::debug!("{}", err);
            0.0
        }
    }
}

/// Uncommitted content text for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ContentDraft {
    id: ElementId,
    text: String,
}

/// Panel-side state: the pending content draft.
#[derive(Debug, Clone, Default)]
pub struct PropertyEditor {
    draft: Option<ContentDraft>,
}

impl PropertyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields to show for the current selection.
    pub fn fields(&self, session: &EditorSession) -> Vec<EditorField> {
        session
            .selected_element()
            .map(|element| fields_for(element.kind()))
            .unwrap_or_default()
    }

    /// Text to display in `field` for the current selection. A content draft
    /// for the selected element takes precedence over the stored value.
    pub fn display_value(&self, session: &EditorSession, field: EditorField) -> Option<String> {
        let element = session.selected_element()?;
        let draft = self
            .draft
            .as_ref()
            .filter(|d| field == EditorField::Content && d.id == element.id());
        match draft {
            Some(draft) => Some(draft.text.clone()),
            None => field.current_value(element),
        }
    }

    /// Whether an uncommitted content draft exists.
    pub fn has_pending(&self) -> bool {
        self.draft.is_some()
    }

    /// Handle a change to `field` on the selected element.
    ///
    /// Content is buffered; everything else is written straight through.
    pub fn input(
        &mut self,
        session: &mut EditorSession,
        field: EditorField,
        raw: &str,
    ) -> EditResult<()> {
        let element = session.selected_element().ok_or(EditError::NothingSelected)?;
        let (id, kind) = (element.id(), element.kind());
        if !field.applies_to(kind) {
            return Err(EditError::FieldNotApplicable { field, kind });
        }

        match field.commit_timing() {
            CommitTiming::OnBlur => {
                if self.draft.as_ref().is_some_and(|d| d.id != id) {
                    // Focus moved without a blur; keep the earlier edit.
                    self.blur(session);
                }
                self.draft = Some(ContentDraft {
                    id,
                    text: raw.to_string(),
                });
                Ok(())
            }
            CommitTiming::Immediate => {
                let patch = field.patch(raw)?;
                session.update_element(id, patch);
                Ok(())
            }
        }
    }

    /// Commit the content draft to the element it was started on.
    /// Returns true if a draft was committed.
    pub fn blur(&mut self, session: &mut EditorSession) -> bool {
        match self.draft.take() {
            Some(ContentDraft { id, text }) => {
                session.update_element(id, ElementPatch::content(text));
                true
            }
            None => false,
        }
    }

    /// Throw away the content draft.
    pub fn discard(&mut self) {
        self.draft = None;
    }
}
