//! The element store: authoritative, insertion-ordered collection of elements.

use crate::config::EditorConfig;
use crate::element::{Element, ElementId, ElementKind, ElementPatch};
use crate::error::{EditError, EditResult};
use kurbo::Point;
use std::collections::HashMap;

/// Owns every element on the canvas.
///
/// Elements are kept in insertion order, which is also their stacking order:
/// later elements draw on top of earlier ones. Updates mutate in place and
/// never reorder.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    /// All elements, keyed by ID.
    elements: HashMap<ElementId, Element>,
    /// Insertion order (back to front).
    order: Vec<ElementId>,
    /// Defaults applied on creation.
    config: EditorConfig,
}

impl ElementStore {
    /// Create a new empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that applies `config` to new elements.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Create an element of `kind` at canvas-local `(x, y)` with the
    /// configured size and content defaults, and append it.
    pub fn create(&mut self, kind: ElementKind, x: f64, y: f64) -> Element {
        let element = Element::new(
            kind,
            Point::new(x, y),
            self.config.default_size(),
            self.config.content_for(kind),
        );
        let id = element.id();
        self.order.push(id);
        self.elements.insert(id, element.clone());
        log::info!("Created {} element {} at ({}, {})", kind, id, x, y);
        element
    }

    /// Merge `patch` into the element with `id`. Missing ids are ignored.
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) {
        if let Err(err) = self.try_update(id, patch) {
            log::debug!("Update skipped: {}", err);
        }
    }

    /// Like [`update`](Self::update), but reports a missing id.
    pub fn try_update(&mut self, id: ElementId, patch: ElementPatch) -> EditResult<()> {
        let element = self
            .elements
            .get_mut(&id)
            .ok_or(EditError::UnknownElementId(id))?;
        element.apply(patch);
        Ok(())
    }

    /// Remove the element with `id`. Missing ids are ignored.
    pub fn delete(&mut self, id: ElementId) {
        if let Err(err) = self.try_delete(id) {
            log::debug!("Delete skipped: {}", err);
        }
    }

    /// Like [`delete`](Self::delete), but returns the removed element.
    pub fn try_delete(&mut self, id: ElementId) -> EditResult<Element> {
        let element = self
            .elements
            .remove(&id)
            .ok_or(EditError::UnknownElementId(id))?;
        self.order.retain(|&element_id| element_id != id);
        log::info!("Deleted {} element {}", element.kind(), id);
        Ok(element)
    }

    /// Elements in insertion order (back to front).
    pub fn all(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Owned copy of every element, in insertion order.
    pub fn snapshot(&self) -> Vec<Element> {
        self.all().cloned().collect()
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Find elements under a canvas-local point, front to back.
    pub fn elements_at_point(&self, point: Point) -> Vec<ElementId> {
        self.order
            .iter()
            .rev()
            .filter(|id| self.elements.get(id).is_some_and(|e| e.contains(point)))
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::element::ElementProperties;
    use kurbo::Size;
    use std::collections::HashSet;

    #[test]
    fn test_store_creation() {
        let store = ElementStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_create_applies_defaults() {
        let mut store = ElementStore::new();
        let heading = store.create(ElementKind::Heading, 100.0, 60.0);

        assert_eq!(heading.kind(), ElementKind::Heading);
        assert_eq!(heading.position, Point::new(100.0, 60.0));
        assert_eq!(heading.size(), Size::new(200.0, 80.0));
        assert_eq!(heading.content, "Heading Text");
        assert!(heading.properties.is_empty());
        assert_eq!(store.get(heading.id()), Some(&heading));

        assert_eq!(store.create(ElementKind::Paragraph, 0.0, 0.0).content, "Paragraph text");
        assert_eq!(store.create(ElementKind::Button, 0.0, 0.0).content, "Click Me");
        assert_eq!(store.create(ElementKind::Image, 0.0, 0.0).content, "");
        assert_eq!(store.create(ElementKind::Container, 0.0, 0.0).content, "");
    }

    #[test]
    fn test_create_uses_config() {
        let config = EditorConfig {
            default_width: 120.0,
            default_height: 40.0,
            ..EditorConfig::default()
        };
        let mut store = ElementStore::with_config(config);
        let element = store.create(ElementKind::Button, -10.0, 5.0);
        assert_eq!(element.size(), Size::new(120.0, 40.0));
        assert_eq!(element.position, Point::new(-10.0, 5.0));
    }

    #[test]
    fn test_ids_unique() {
        let mut store = ElementStore::new();
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = store.create(ElementKind::Paragraph, 0.0, 0.0).id();
            assert!(ids.insert(id));
        }
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_update_preserves_order() {
        let mut store = ElementStore::new();
        let a = store.create(ElementKind::Heading, 0.0, 0.0).id();
        let b = store.create(ElementKind::Button, 0.0, 0.0).id();
        let c = store.create(ElementKind::Image, 0.0, 0.0).id();

        store.update(a, ElementPatch::position(Point::new(500.0, 500.0)));
        store.update(b, ElementPatch::content("Buy"));

        let ids: Vec<_> = store.all().map(Element::id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(store.get(b).unwrap().content, "Buy");
    }

    #[test]
    fn test_update_never_changes_identity() {
        let mut store = ElementStore::new();
        let element = store.create(ElementKind::Image, 0.0, 0.0);
        store.update(
            element.id(),
            ElementPatch::properties(ElementProperties::new().with_src("/a.png")),
        );
        let updated = store.get(element.id()).unwrap();
        assert_eq!(updated.id(), element.id());
        assert_eq!(updated.kind(), ElementKind::Image);
    }

    #[test]
    fn test_property_update_merges() {
        let mut store = ElementStore::new();
        let id = store.create(ElementKind::Paragraph, 0.0, 0.0).id();
        store.update(id, ElementPatch::properties(ElementProperties::new().with_font_size(18.0)));
        store.update(
            id,
            ElementPatch::properties(ElementProperties::new().with_color(Rgba::rgb(0, 128, 0))),
        );

        let props = &store.get(id).unwrap().properties;
        assert_eq!(props.font_size, Some(18.0));
        assert_eq!(props.color, Some(Rgba::rgb(0, 128, 0)));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = ElementStore::new();
        let id = store.create(ElementKind::Heading, 1.0, 2.0).id();
        let before = store.snapshot();
        let missing = uuid::Uuid::new_v4();

        store.update(missing, ElementPatch::content("ghost"));
        store.delete(missing);

        assert_eq!(store.snapshot(), before);
        assert_eq!(
            store.try_update(missing, ElementPatch::new()),
            Err(EditError::UnknownElementId(missing))
        );
        assert!(store.contains(id));
    }

    #[test]
    fn test_delete() {
        let mut store = ElementStore::new();
        let a = store.create(ElementKind::Heading, 0.0, 0.0).id();
        let b = store.create(ElementKind::Button, 0.0, 0.0).id();

        let removed = store.try_delete(a).unwrap();
        assert_eq!(removed.id(), a);
        assert!(!store.contains(a));
        assert_eq!(store.all().map(Element::id).collect::<Vec<_>>(), vec![b]);

        // Second delete is a no-op.
        store.delete(a);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_elements_at_point() {
        let mut store = ElementStore::new();
        let back = store.create(ElementKind::Container, 0.0, 0.0).id();
        let front = store.create(ElementKind::Button, 100.0, 40.0).id();

        // Point in both elements: front first
        let hits = store.elements_at_point(Point::new(150.0, 60.0));
        assert_eq!(hits, vec![front, back]);

        // Point only in the back element
        let hits = store.elements_at_point(Point::new(20.0, 20.0));
        assert_eq!(hits, vec![back]);

        assert!(store.elements_at_point(Point::new(-1.0, -1.0)).is_empty());
    }
}
