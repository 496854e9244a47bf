//! Property panel layout: tabs, widgets and select options.

use pagecraft_core::{EditorField, EditorSession, ElementKind, PropertyEditor};

/// Font sizes offered in the style tab.
pub const FONT_SIZE_OPTIONS: [&str; 8] = [
    "12px", "14px", "16px", "18px", "20px", "24px", "32px", "48px",
];

/// Border radius presets as (label, value).
pub const BORDER_RADIUS_OPTIONS: [(&str, &str); 5] = [
    ("None", "0px"),
    ("Small", "4px"),
    ("Medium", "8px"),
    ("Large", "16px"),
    ("Full", "9999px"),
];

/// Shown when nothing is selected.
pub const EMPTY_PANEL_MESSAGE: &str = "Select an element to edit its properties";

/// Property panel tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTab {
    #[default]
    Content,
    Style,
    Advanced,
}

impl PanelTab {
    pub fn all() -> &'static [PanelTab] {
        &[PanelTab::Content, PanelTab::Style, PanelTab::Advanced]
    }

    /// Get display name for UI.
    pub fn name(self) -> &'static str {
        match self {
            PanelTab::Content => "Content",
            PanelTab::Style => "Style",
            PanelTab::Advanced => "Advanced",
        }
    }

    fn candidates(self) -> &'static [EditorField] {
        match self {
            PanelTab::Content => &[EditorField::Content, EditorField::Alt, EditorField::Src],
            PanelTab::Style => &[
                EditorField::FontSize,
                EditorField::Color,
                EditorField::BackgroundColor,
                EditorField::BorderRadius,
            ],
            PanelTab::Advanced => &[
                EditorField::Width,
                EditorField::Height,
                EditorField::X,
                EditorField::Y,
            ],
        }
    }

    /// Fields this tab shows for `kind`.
    pub fn fields(self, kind: ElementKind) -> Vec<EditorField> {
        self.candidates()
            .iter()
            .copied()
            .filter(|field| field.applies_to(kind))
            .collect()
    }
}

/// Input control used for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWidget {
    Text,
    /// Multi-line text.
    TextArea,
    /// Color picker paired with a text input.
    Color,
    Select(Vec<(&'static str, &'static str)>),
    Number,
}

impl FieldWidget {
    pub fn for_field(field: EditorField, kind: ElementKind) -> Self {
        match field {
            EditorField::Content if kind == ElementKind::Paragraph => FieldWidget::TextArea,
            EditorField::Content | EditorField::Alt | EditorField::Src => FieldWidget::Text,
            EditorField::FontSize => {
                FieldWidget::Select(FONT_SIZE_OPTIONS.iter().map(|&v| (v, v)).collect())
            }
            EditorField::BorderRadius => FieldWidget::Select(BORDER_RADIUS_OPTIONS.to_vec()),
            EditorField::Color | EditorField::BackgroundColor => FieldWidget::Color,
            EditorField::Width | EditorField::Height | EditorField::X | EditorField::Y => {
                FieldWidget::Number
            }
        }
    }
}

/// Value shown in a control whose property is unset.
pub fn placeholder(field: EditorField) -> &'static str {
    match field {
        EditorField::FontSize => "16px",
        EditorField::Color => "#000000",
        EditorField::BackgroundColor => "#3b82f6",
        EditorField::BorderRadius => "4px",
        _ => "",
    }
}

/// One labelled control in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub field: EditorField,
    pub label: &'static str,
    pub widget: FieldWidget,
    pub value: String,
}

/// Tab state of the property panel.
#[derive(Debug, Clone, Default)]
pub struct PropertyPanel {
    active_tab: PanelTab,
}

impl PropertyPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> PanelTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: PanelTab) {
        self.active_tab = tab;
    }

    /// Rows of the active tab for the current selection. Empty when nothing
    /// is selected.
    pub fn rows(&self, session: &EditorSession, editor: &PropertyEditor) -> Vec<PanelRow> {
        let Some(element) = session.selected_element() else {
            return Vec::new();
        };
        let kind = element.kind();

        self.active_tab
            .fields(kind)
            .into_iter()
            .map(|field| PanelRow {
                field,
                label: field.label(),
                widget: FieldWidget::for_field(field, kind),
                value: editor
                    .display_value(session, field)
                    .unwrap_or_else(|| placeholder(field).to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_fields() {
        assert_eq!(
            PanelTab::Content.fields(ElementKind::Image),
            vec![EditorField::Alt, EditorField::Src]
        );
        assert_eq!(
            PanelTab::Content.fields(ElementKind::Heading),
            vec![EditorField::Content]
        );
        assert_eq!(
            PanelTab::Style.fields(ElementKind::Container),
            vec![EditorField::BackgroundColor, EditorField::BorderRadius]
        );
        assert!(PanelTab::Style.fields(ElementKind::Image).is_empty());
        assert_eq!(PanelTab::Advanced.fields(ElementKind::Image).len(), 4);
    }

    #[test]
    fn test_widgets() {
        assert_eq!(
            FieldWidget::for_field(EditorField::Content, ElementKind::Paragraph),
            FieldWidget::TextArea
        );
        assert_eq!(
            FieldWidget::for_field(EditorField::Content, ElementKind::Button),
            FieldWidget::Text
        );
        assert_eq!(
            FieldWidget::for_field(EditorField::X, ElementKind::Button),
            FieldWidget::Number
        );
        let FieldWidget::Select(options) =
            FieldWidget::for_field(EditorField::BorderRadius, ElementKind::Button)
        else {
            panic!("border radius should be a select");
        };
        assert_eq!(options.last(), Some(&("Full", "9999px")));
    }

    #[test]
    fn test_rows_show_values_and_placeholders() {
        let mut session = EditorSession::new();
        let editor = PropertyEditor::new();
        let mut panel = PropertyPanel::new();
        assert!(panel.rows(&session, &editor).is_empty());

        let id = session.add_element(ElementKind::Button, 12.0, 34.0).id();
        session.select_element(Some(id));

        let rows = panel.rows(&session, &editor);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, "Click Me");

        panel.set_tab(PanelTab::Style);
        let rows = panel.rows(&session, &editor);
        let values: Vec<_> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["16px", "#000000", "#3b82f6", "4px"]);

        panel.set_tab(PanelTab::Advanced);
        let rows = panel.rows(&session, &editor);
        let values: Vec<_> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["200", "80", "12", "34"]);
    }
}
