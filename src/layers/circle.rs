use crate::{
    core::{
        constants::{
            MARKER_FILL_OPACITY, MARKER_STROKE_COLOR, MARKER_STROKE_OPACITY, MARKER_STROKE_WEIGHT,
        },
        geo::{LatLng, LatLngBounds},
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
    Result,
};
use serde::{Deserialize, Serialize};

/// Stroke and fill styling for a circle marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            color: MARKER_STROKE_COLOR.to_string(),
            weight: MARKER_STROKE_WEIGHT,
            opacity: MARKER_STROKE_OPACITY,
            fill_color: "#3388ff".to_string(),
            fill_opacity: MARKER_FILL_OPACITY,
        }
    }
}

/// A circle drawn at a geographic position with a radius in meters.
/// Earthquake markers are circles sized by magnitude and filled by
/// depth color, with an optional popup bound to them.
pub struct CircleMarker {
    properties: LayerProperties,
    center: LatLng,
    radius: f64,
    style: CircleStyle,
    popup: Option<String>,
}

impl CircleMarker {
    pub fn new(id: String, center: LatLng, radius: f64) -> Self {
        let name = id.clone();
        let mut properties = LayerProperties::new(id, name, LayerType::CircleMarker);
        // Markers sit above the base tile layers.
        properties.z_index = 1;

        Self {
            properties,
            center,
            radius,
            style: CircleStyle::default(),
            popup: None,
        }
    }

    pub fn with_style(mut self, style: CircleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bind_popup(mut self, content: String) -> Self {
        self.popup = Some(content);
        self
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn style(&self) -> &CircleStyle {
        &self.style
    }

    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }
}

impl LayerTrait for CircleMarker {
    crate::impl_layer_trait!(CircleMarker, properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.center, self.center))
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "center": { "lat": self.center.lat, "lng": self.center.lng },
            "radius": self.radius,
            "style": self.style,
            "popup": self.popup,
        })
    }

    fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        self.properties.options = options;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_marker_creation() {
        let marker = CircleMarker::new("quake-0".to_string(), LatLng::new(38.2, -120.5), 90000.0);

        assert_eq!(marker.id(), "quake-0");
        assert_eq!(marker.layer_type(), LayerType::CircleMarker);
        assert_eq!(marker.center(), LatLng::new(38.2, -120.5));
        assert_eq!(marker.radius(), 90000.0);
        assert!(marker.popup().is_none());
        assert_eq!(marker.z_index(), 1);
    }

    #[test]
    fn test_default_style() {
        let style = CircleStyle::default();
        assert_eq!(style.color, "#000");
        assert_eq!(style.weight, 1.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_opacity, 0.8);
    }

    #[test]
    fn test_popup_binding() {
        let marker = CircleMarker::new("quake-1".to_string(), LatLng::new(0.0, 0.0), 1000.0)
            .bind_popup("<h3>Somewhere</h3>".to_string());

        assert_eq!(marker.popup(), Some("<h3>Somewhere</h3>"));
    }

    #[test]
    fn test_point_bounds() {
        let center = LatLng::new(10.0, 20.0);
        let marker = CircleMarker::new("quake-2".to_string(), center, 500.0);
        let bounds = marker.bounds().unwrap();

        assert_eq!(bounds.south_west, center);
        assert_eq!(bounds.north_east, center);
    }
}
