//! The application context: one object owning the map, the controls,
//! and the feed client, built once at startup and handed to whoever
//! mounts the view. No module-level state.

use crate::{
    core::{
        constants::{ALL_WEEK_FEED_URL, DEFAULT_CENTER, DEFAULT_ZOOM},
        geo::LatLng,
        map::Map,
    },
    data::{client::FeedClient, feed::EarthquakeFeed},
    layers::tile::TileLayer,
    render::render_features,
    ui::{controls::LayersControl, legend::Legend},
    Result,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub center: LatLng,
    pub zoom: f64,
    pub feed_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let (lat, lng) = DEFAULT_CENTER;
        Self {
            center: LatLng::new(lat, lng),
            zoom: DEFAULT_ZOOM,
            feed_url: ALL_WEEK_FEED_URL.to_string(),
        }
    }
}

/// Summary of a completed mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountReport {
    pub markers_added: usize,
}

/// The assembled scene: map with base layers, layer switcher, depth
/// legend, and the feed client that populates the markers.
pub struct App {
    map: Map,
    switcher: LayersControl,
    legend: Legend,
    client: FeedClient,
}

impl App {
    /// Builds the static scene: the three base layers (grayscale
    /// visible by default, the others hidden), the switcher, and the
    /// legend. Runs synchronously; nothing here depends on the feed.
    pub fn new(config: AppConfig) -> Result<Self> {
        let mut map = Map::new(config.center, config.zoom);

        map.add_layer(Box::new(TileLayer::satellite()))?;
        map.add_layer(Box::new(TileLayer::grayscale()))?;
        map.add_layer(Box::new(TileLayer::outdoors()))?;

        let mut switcher = LayersControl::new();
        switcher.add_base_layer("Satellite", "satellite");
        switcher.add_base_layer("Grayscale", "grayscale");
        switcher.add_base_layer("Outdoors", "outdoors");
        switcher.select("Grayscale", &mut map)?;

        Ok(Self {
            map,
            switcher,
            legend: Legend::depth_legend(),
            client: FeedClient::with_url(config.feed_url),
        })
    }

    /// Fetches the feed and renders its features into the map. The
    /// static scene is already complete when this runs, so a fetch
    /// failure leaves base layers, switcher, and legend intact and
    /// propagates to the caller.
    pub async fn mount(&mut self) -> Result<MountReport> {
        let feed = self.client.fetch().await.map_err(|e| {
            log::warn!("earthquake feed fetch failed: {}", e);
            e
        })?;

        self.render_feed(&feed)
    }

    /// Renders an already-fetched collection; the offline half of
    /// [`App::mount`].
    pub fn render_feed(&mut self, feed: &EarthquakeFeed) -> Result<MountReport> {
        let markers_added = render_features(&mut self.map, feed)?;
        Ok(MountReport { markers_added })
    }

    /// Switches the visible base layer by label.
    pub fn select_base_layer(&mut self, label: &str) -> Result<()> {
        self.switcher.select(label, &mut self.map)
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn switcher(&self) -> &LayersControl {
        &self.switcher
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }
}
