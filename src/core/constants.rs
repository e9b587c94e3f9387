//! Engine-wide constants derived from the USGS feed conventions and
//! common web-map defaults. Keeping them in a single place makes it
//! easier to tweak scene-wide magic numbers.

/// USGS GeoJSON summary feed covering all earthquakes of the past week.
pub const ALL_WEEK_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// Default view center (lat, lng) when none is configured.
pub const DEFAULT_CENTER: (f64, f64) = (40.7128, -74.0059);

/// Default zoom level when none is configured.
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Meters of marker radius per unit of magnitude.
pub const MAGNITUDE_RADIUS_SCALE: f64 = 20000.0;

/// Circle marker stroke color.
pub const MARKER_STROKE_COLOR: &str = "#000";

/// Circle marker stroke weight in pixels.
pub const MARKER_STROKE_WEIGHT: f64 = 1.0;

/// Circle marker stroke opacity.
pub const MARKER_STROKE_OPACITY: f64 = 1.0;

/// Circle marker fill opacity.
pub const MARKER_FILL_OPACITY: f64 = 0.8;
