//! Typed models for the USGS GeoJSON earthquake summary feed.
//!
//! The feed is taken verbatim: optional fields stay optional (USGS
//! emits `null` magnitudes on occasion) and the accessors surface
//! missing numerics as NaN so the derivation pipeline stays permissive
//! instead of failing the whole collection.

use crate::{core::geo::LatLng, Error, Result};
use serde::{Deserialize, Serialize};

/// Root object of a summary feed: a GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeed {
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
    pub features: Vec<EarthquakeFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeedMetadata {
    #[serde(default)]
    pub generated: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// One earthquake record in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    #[serde(default)]
    pub id: Option<String>,
    pub properties: QuakeProperties,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuakeProperties {
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
    /// Event time in epoch milliseconds.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Point geometry with `[longitude, latitude, depth_km]` coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

impl EarthquakeFeed {
    /// Parses a feed from raw GeoJSON text.
    pub fn from_str(feed_str: &str) -> Result<Self> {
        serde_json::from_str(feed_str)
            .map_err(|e| Error::ParseError(format!("invalid earthquake feed: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl EarthquakeFeature {
    /// Magnitude, or NaN when the feed carried none.
    pub fn magnitude(&self) -> f64 {
        self.properties.mag.unwrap_or(f64::NAN)
    }

    pub fn place(&self) -> &str {
        self.properties.place.as_deref().unwrap_or("Unknown location")
    }

    pub fn time_millis(&self) -> Option<i64> {
        self.properties.time
    }

    /// Geographic position, `(lat, lng) = (coordinates[1], coordinates[0])`.
    pub fn lat_lng(&self) -> LatLng {
        match &self.geometry {
            Some(geometry) if geometry.coordinates.len() >= 2 => {
                LatLng::new(geometry.coordinates[1], geometry.coordinates[0])
            }
            _ => LatLng::new(f64::NAN, f64::NAN),
        }
    }

    /// Hypocenter depth in kilometers (third coordinate), or NaN.
    pub fn depth_km(&self) -> f64 {
        self.geometry
            .as_ref()
            .and_then(|g| g.coordinates.get(2))
            .copied()
            .unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"
    {
        "type": "FeatureCollection",
        "metadata": {
            "generated": 1700000060000,
            "title": "USGS All Earthquakes, Past Week",
            "count": 2
        },
        "features": [
            {
                "type": "Feature",
                "id": "nc73999999",
                "properties": {
                    "mag": 4.5,
                    "place": "10km N of Testville",
                    "time": 1700000000000,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/nc73999999"
                },
                "geometry": {
                    "type": "Point",
                    "coordinates": [-120.5, 38.2, 12]
                }
            },
            {
                "type": "Feature",
                "id": "us7000aaaa",
                "properties": {
                    "mag": null,
                    "place": null,
                    "time": null
                },
                "geometry": {
                    "type": "Point",
                    "coordinates": [142.3, 37.1]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_feed_parsing() {
        let feed = EarthquakeFeed::from_str(SAMPLE_FEED).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(
            feed.metadata.as_ref().unwrap().title.as_deref(),
            Some("USGS All Earthquakes, Past Week")
        );
    }

    #[test]
    fn test_feature_accessors() {
        let feed = EarthquakeFeed::from_str(SAMPLE_FEED).unwrap();
        let quake = &feed.features[0];

        assert_eq!(quake.magnitude(), 4.5);
        assert_eq!(quake.place(), "10km N of Testville");
        assert_eq!(quake.time_millis(), Some(1700000000000));
        assert_eq!(quake.lat_lng(), LatLng::new(38.2, -120.5));
        assert_eq!(quake.depth_km(), 12.0);
    }

    #[test]
    fn test_null_fields_stay_permissive() {
        let feed = EarthquakeFeed::from_str(SAMPLE_FEED).unwrap();
        let quake = &feed.features[1];

        assert!(quake.magnitude().is_nan());
        assert_eq!(quake.place(), "Unknown location");
        assert_eq!(quake.time_millis(), None);
        // Two coordinates only: position resolves, depth does not.
        assert_eq!(quake.lat_lng(), LatLng::new(37.1, 142.3));
        assert!(quake.depth_km().is_nan());
    }

    #[test]
    fn test_invalid_feed_is_a_parse_error() {
        let result = EarthquakeFeed::from_str("{ not geojson");
        assert!(matches!(result, Err(Error::ParseError(_))));
    }

    #[test]
    fn test_empty_feature_collection() {
        let feed = EarthquakeFeed::from_str(r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap();
        assert!(feed.is_empty());
    }
}
