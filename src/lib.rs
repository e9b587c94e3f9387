//! # quakemap
//!
//! A Leaflet-style earthquake map scene in Rust.
//!
//! The library models a single map view of recent seismic activity:
//! three selectable base tile layers, one circle marker per earthquake
//! in the USGS all-week GeoJSON feed (sized by magnitude, colored by
//! depth) with a descriptive popup, and a static depth legend. The
//! whole scene is assembled through an explicit [`app::App`] context
//! rather than module-level state.

pub mod app;
pub mod core;
pub mod data;
pub mod layers;
pub mod render;
pub mod style;
pub mod ui;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, MapOptions},
};

pub use crate::layers::{
    base::LayerTrait, circle::CircleMarker, manager::LayerManager, tile::TileLayer,
};

pub use crate::data::{client::FeedClient, feed::EarthquakeFeed};

pub use crate::ui::{controls::LayersControl, legend::Legend};

pub use crate::app::{App, AppConfig};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, QuakeMapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum QuakeMapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = QuakeMapError;
