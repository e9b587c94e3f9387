use crate::{core::geo::LatLngBounds, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Tile,
    CircleMarker,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::CircleMarker => write!(f, "circle-marker"),
        }
    }
}

/// Common trait implemented by everything that can be mounted into the
/// map's layer set.
pub trait LayerTrait {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn layer_type(&self) -> LayerType;
    fn z_index(&self) -> i32;
    fn set_z_index(&mut self, z_index: i32);
    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, opacity: f32);
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    fn options(&self) -> serde_json::Value;
    fn set_options(&mut self, options: serde_json::Value) -> Result<()>;

    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
    pub interactive: bool,
    pub options: serde_json::Value,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            z_index: 0,
            opacity: 1.0,
            visible: true,
            interactive: true,
            options: serde_json::Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new(
            "quakes".to_string(),
            "Earthquakes".to_string(),
            LayerType::CircleMarker,
        );

        assert_eq!(props.id, "quakes");
        assert_eq!(props.name, "Earthquakes");
        assert_eq!(props.layer_type, LayerType::CircleMarker);
        assert_eq!(props.z_index, 0);
        assert_eq!(props.opacity, 1.0);
        assert!(props.visible);
    }

    #[test]
    fn test_layer_type_display() {
        assert_eq!(LayerType::Tile.to_string(), "tile");
        assert_eq!(LayerType::CircleMarker.to_string(), "circle-marker");
    }
}
