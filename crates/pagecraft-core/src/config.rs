//! Editor configuration.

use crate::element::ElementKind;
use crate::error::ConfigError;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default element width in pixels.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 200.0;
/// Default element height in pixels.
pub const DEFAULT_ELEMENT_HEIGHT: f64 = 80.0;

/// Canvas width preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Canvas fills the available width.
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewMode {
    /// Fixed canvas width in pixels, or `None` to fill the host.
    pub fn canvas_width(self) -> Option<f64> {
        match self {
            ViewMode::Desktop => None,
            ViewMode::Tablet => Some(768.0),
            ViewMode::Mobile => Some(375.0),
        }
    }

    /// Get display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            ViewMode::Desktop => "Desktop",
            ViewMode::Tablet => "Tablet",
            ViewMode::Mobile => "Mobile",
        }
    }

    /// Cycle to the next view mode.
    pub fn next(self) -> Self {
        match self {
            ViewMode::Desktop => ViewMode::Tablet,
            ViewMode::Tablet => ViewMode::Mobile,
            ViewMode::Mobile => ViewMode::Desktop,
        }
    }
}

/// Settings that shape newly created elements and the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width given to new elements.
    pub default_width: f64,
    /// Height given to new elements.
    pub default_height: f64,
    /// Initial content per element kind. Kinds not listed start empty.
    pub default_content: BTreeMap<ElementKind, String>,
    /// Canvas width preset.
    pub view_mode: ViewMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let default_content = ElementKind::all()
            .iter()
            .filter_map(|&kind| {
                let text = kind.default_content();
                (!text.is_empty()).then(|| (kind, text.to_string()))
            })
            .collect();

        Self {
            default_width: DEFAULT_ELEMENT_WIDTH,
            default_height: DEFAULT_ELEMENT_HEIGHT,
            default_content,
            view_mode: ViewMode::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes that could never be rendered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(self.default_width) && valid(self.default_height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDefaultSize {
                width: self.default_width,
                height: self.default_height,
            })
        }
    }

    /// Size given to new elements.
    pub fn default_size(&self) -> Size {
        Size::new(self.default_width, self.default_height)
    }

    /// Initial content for a new element of `kind`.
    pub fn content_for(&self, kind: ElementKind) -> String {
        self.default_content.get(&kind).cloned().unwrap_or_default()
    }
}
