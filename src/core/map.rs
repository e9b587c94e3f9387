use crate::{
    core::geo::LatLng,
    layers::{base::LayerTrait, manager::LayerManager},
    QuakeMapError, Result,
};

/// Interaction switches the mounted widget honors. The view itself only
/// changes through direct user interaction with the widget; the scene
/// code never moves it after construction.
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub attribution_control: bool,
    pub zoom_control: bool,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            attribution_control: true,
            zoom_control: true,
            min_zoom: None,
            max_zoom: None,
        }
    }
}

/// A single map viewport: center, zoom, and the set of layers mounted
/// into it. Constructed exactly once per application context.
pub struct Map {
    center: LatLng,
    zoom: f64,
    layers: LayerManager,
    options: MapOptions,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self::with_options(center, zoom, MapOptions::default())
    }

    pub fn with_options(center: LatLng, zoom: f64, options: MapOptions) -> Self {
        Self {
            center,
            zoom,
            layers: LayerManager::new(),
            options,
        }
    }

    /// Moves the view to a new center and zoom.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) -> Result<()> {
        if !center.is_valid() {
            return Err(QuakeMapError::InvalidCoordinates(format!(
                "({}, {})",
                center.lat, center.lng
            )));
        }

        self.center = center;
        self.zoom = match (self.options.min_zoom, self.options.max_zoom) {
            (Some(min), Some(max)) => zoom.clamp(min, max),
            (Some(min), None) => zoom.max(min),
            (None, Some(max)) => zoom.min(max),
            (None, None) => zoom,
        };
        Ok(())
    }

    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Result<Option<Box<dyn LayerTrait>>> {
        self.layers.remove_layer(layer_id)
    }

    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get_layer(layer_id)
    }

    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.with_layer_mut(layer_id, f)
    }

    pub fn for_each_layer<F>(&self, f: F)
    where
        F: FnMut(&dyn LayerTrait),
    {
        self.layers.for_each_layer(f);
    }

    pub fn list_layers(&self) -> Vec<String> {
        self.layers.list_layers()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Ids of the tile layers that are currently visible. Exactly one
    /// entry once the scene is assembled (radio exclusivity).
    pub fn visible_base_layers(&self) -> Vec<String> {
        let mut visible = Vec::new();
        self.layers.for_each_layer(|layer| {
            if layer.layer_type() == crate::layers::base::LayerType::Tile && layer.is_visible() {
                visible.push(layer.id().to_string());
            }
        });
        visible
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }
}
