use crate::{core::map::Map, QuakeMapError, Result};

/// Corner of the map a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone)]
struct BaseLayerEntry {
    label: String,
    layer_id: String,
}

/// The base-layer switcher: a mutually-exclusive choice among the
/// registered tile layers. No overlay entries are offered. Selecting an
/// entry flips layer visibility through the map so that exactly one
/// base layer is visible afterwards.
pub struct LayersControl {
    position: ControlPosition,
    base_layers: Vec<BaseLayerEntry>,
    active: Option<String>,
}

impl LayersControl {
    pub fn new() -> Self {
        Self {
            position: ControlPosition::TopRight,
            base_layers: Vec::new(),
            active: None,
        }
    }

    pub fn with_position(mut self, position: ControlPosition) -> Self {
        self.position = position;
        self
    }

    /// Registers a base layer under a display label.
    pub fn add_base_layer(&mut self, label: impl Into<String>, layer_id: impl Into<String>) {
        self.base_layers.push(BaseLayerEntry {
            label: label.into(),
            layer_id: layer_id.into(),
        });
    }

    /// Makes `label` the visible base layer and hides the others.
    pub fn select(&mut self, label: &str, map: &mut Map) -> Result<()> {
        if !self.base_layers.iter().any(|entry| entry.label == label) {
            return Err(QuakeMapError::Layer(format!(
                "unknown base layer: {}",
                label
            )));
        }

        for entry in &self.base_layers {
            let visible = entry.label == label;
            map.with_layer_mut(&entry.layer_id, |layer| layer.set_visible(visible));
        }

        log::debug!("base layer switched to {}", label);
        self.active = Some(label.to_string());
        Ok(())
    }

    /// Label of the currently selected base layer.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.base_layers
            .iter()
            .map(|entry| entry.label.as_str())
            .collect()
    }

    pub fn position(&self) -> ControlPosition {
        self.position
    }

    pub fn len(&self) -> usize {
        self.base_layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_layers.is_empty()
    }
}

impl Default for LayersControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::layers::tile::TileLayer;

    fn scene() -> (Map, LayersControl) {
        let mut map = Map::new(LatLng::new(40.7128, -74.0059), 5.0);
        map.add_layer(Box::new(TileLayer::satellite())).unwrap();
        map.add_layer(Box::new(TileLayer::grayscale())).unwrap();
        map.add_layer(Box::new(TileLayer::outdoors())).unwrap();

        let mut control = LayersControl::new();
        control.add_base_layer("Satellite", "satellite");
        control.add_base_layer("Grayscale", "grayscale");
        control.add_base_layer("Outdoors", "outdoors");

        (map, control)
    }

    #[test]
    fn test_selection_is_exclusive() {
        let (mut map, mut control) = scene();

        control.select("Satellite", &mut map).unwrap();
        assert_eq!(map.visible_base_layers(), vec!["satellite".to_string()]);
        assert_eq!(control.active(), Some("Satellite"));

        control.select("Outdoors", &mut map).unwrap();
        assert_eq!(map.visible_base_layers(), vec!["outdoors".to_string()]);
    }

    #[test]
    fn test_exclusivity_holds_for_any_sequence() {
        let (mut map, mut control) = scene();

        for label in ["Grayscale", "Satellite", "Satellite", "Outdoors", "Grayscale"] {
            control.select(label, &mut map).unwrap();
            assert_eq!(map.visible_base_layers().len(), 1);
        }
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let (mut map, mut control) = scene();
        let result = control.select("Watercolor", &mut map);
        assert!(matches!(result, Err(QuakeMapError::Layer(_))));
    }

    #[test]
    fn test_labels() {
        let (_, control) = scene();
        assert_eq!(control.labels(), vec!["Satellite", "Grayscale", "Outdoors"]);
        assert_eq!(control.len(), 3);
    }
}
