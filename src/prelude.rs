//! Prelude module for common quakemap types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for
//! easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, MapOptions},
};

pub use crate::layers::{
    base::{LayerProperties, LayerTrait, LayerType},
    circle::{CircleMarker, CircleStyle},
    manager::LayerManager,
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::data::{
    client::FeedClient,
    feed::{EarthquakeFeature, EarthquakeFeed},
};

pub use crate::render::render_features;

pub use crate::style::{depth_color, magnitude_radius, DEPTH_BREAKS};

pub use crate::ui::{
    controls::{ControlPosition, LayersControl},
    legend::{Legend, LegendEntry},
    popup::quake_popup,
};

pub use crate::app::{App, AppConfig, MountReport};

pub use crate::{Error as QuakeMapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
