//! Element palette: the draggable list of element kinds.

use kurbo::Point;
use pagecraft_core::{CanvasEvent, DragPayload, ElementKind};

/// A palette item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub kind: ElementKind,
    pub label: &'static str,
    /// Icon name in the host's icon set.
    pub icon: &'static str,
}

impl PaletteEntry {
    pub const fn new(kind: ElementKind, label: &'static str, icon: &'static str) -> Self {
        Self { kind, label, icon }
    }

    /// Event that starts dragging this entry towards the canvas.
    pub fn begin_drag(&self, pointer: Point) -> CanvasEvent {
        CanvasEvent::DragStart {
            pointer,
            payload: DragPayload::NewElement(self.kind),
        }
    }
}

const DEFAULT_ENTRIES: [PaletteEntry; 4] = [
    PaletteEntry::new(ElementKind::Heading, "Heading", "heading"),
    PaletteEntry::new(ElementKind::Paragraph, "Paragraph", "align-left"),
    PaletteEntry::new(ElementKind::Button, "Button", "square"),
    PaletteEntry::new(ElementKind::Image, "Image", "image"),
];

/// Ordered palette entries.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES.to_vec(),
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette that also offers containers.
    pub fn with_containers(mut self) -> Self {
        if !self.entries.iter().any(|e| e.kind == ElementKind::Container) {
            self.entries
                .push(PaletteEntry::new(ElementKind::Container, "Container", "box"));
        }
        self
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn entry(&self, kind: ElementKind) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::new();
        let kinds: Vec<_> = palette.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Heading,
                ElementKind::Paragraph,
                ElementKind::Button,
                ElementKind::Image,
            ]
        );
        assert!(palette.entry(ElementKind::Container).is_none());
    }

    #[test]
    fn test_with_containers() {
        let palette = Palette::new().with_containers().with_containers();
        assert_eq!(palette.entries().len(), 5);
        assert_eq!(palette.entry(ElementKind::Container).unwrap().label, "Container");
    }

    #[test]
    fn test_begin_drag() {
        let palette = Palette::new();
        let event = palette
            .entry(ElementKind::Button)
            .unwrap()
            .begin_drag(Point::new(5.0, 6.0));
        assert_eq!(
            event,
            CanvasEvent::DragStart {
                pointer: Point::new(5.0, 6.0),
                payload: DragPayload::NewElement(ElementKind::Button),
            }
        );
    }
}
