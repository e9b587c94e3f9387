use crate::{
    core::{constants::TILE_SIZE, geo::TileCoord},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    Result,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayerOptions {
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub subdomains: Vec<String>,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            min_zoom: 0,
            max_zoom: 18,
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }
}

/// A base tile layer: a URL template plus the attribution owed to the
/// tile provider. Templates use the `{s}`/`{z}`/`{x}`/`{y}` placeholders.
pub struct TileLayer {
    properties: LayerProperties,
    url_template: String,
    attribution: Option<String>,
    options: TileLayerOptions,
}

impl TileLayer {
    pub fn new(
        id: String,
        name: String,
        url_template: String,
        attribution: Option<String>,
        options: TileLayerOptions,
    ) -> Self {
        let properties = LayerProperties::new(id, name, LayerType::Tile);
        Self {
            properties,
            url_template,
            attribution,
            options,
        }
    }

    /// Esri World Imagery base layer
    pub fn satellite() -> Self {
        Self::new(
            "satellite".to_string(),
            "Satellite".to_string(),
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
                .to_string(),
            Some(
                "Tiles © Esri &mdash; Source: Esri, Maxar, GeoEye, Earthstar Geographics, CNES/Airbus DS, USDA, USGS, AeroGRID, IGN, and the GIS User Community"
                    .to_string(),
            ),
            TileLayerOptions::default(),
        )
    }

    /// CartoDB light base layer
    pub fn grayscale() -> Self {
        Self::new(
            "grayscale".to_string(),
            "Grayscale".to_string(),
            "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png".to_string(),
            Some("© CartoDB contributors".to_string()),
            TileLayerOptions::default(),
        )
    }

    /// OpenTopoMap base layer
    pub fn outdoors() -> Self {
        Self::new(
            "outdoors".to_string(),
            "Outdoors".to_string(),
            "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
            Some("Map data © OpenTopoMap contributors".to_string()),
            TileLayerOptions::default(),
        )
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn attribution(&self) -> Option<&str> {
        self.attribution.as_deref()
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }

    /// Expands the template into a concrete URL for `coord`. The `{s}`
    /// placeholder rotates through the configured subdomains on
    /// `x + y` so the choice stays deterministic for a given tile.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        let mut url = self
            .url_template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());

        if url.contains("{s}") {
            let subdomains = &self.options.subdomains;
            if subdomains.is_empty() {
                url = url.replace("{s}.", "");
            } else {
                let idx = ((coord.x + coord.y) % subdomains.len() as u32) as usize;
                url = url.replace("{s}", &subdomains[idx]);
            }
        }

        url
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "url_template": self.url_template,
            "attribution": self.attribution,
            "tile_size": self.options.tile_size,
            "min_zoom": self.options.min_zoom,
            "max_zoom": self.options.max_zoom,
        })
    }

    fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        self.properties.options = options;
        Ok(())
    }
}
