//! Turns a fetched feature collection into circle-marker layers.

use crate::{
    core::map::Map,
    data::feed::EarthquakeFeed,
    layers::circle::{CircleMarker, CircleStyle},
    style::{depth_color, magnitude_radius},
    ui::popup::quake_popup,
    Result,
};

/// Adds one circle marker per feature to the map, in feed order.
///
/// Radius comes from the magnitude, fill color from the hypocenter
/// depth; the stroke is the fixed marker stroke. Markers are only ever
/// appended — nothing is removed or refreshed after the initial render.
/// Returns the number of markers added; an empty feed adds zero and is
/// not an error.
pub fn render_features(map: &mut Map, feed: &EarthquakeFeed) -> Result<usize> {
    let mut added = 0;

    for (index, feature) in feed.features.iter().enumerate() {
        let id = feature
            .id
            .clone()
            .unwrap_or_else(|| format!("quake-{}", index));

        let style = CircleStyle {
            fill_color: depth_color(feature.depth_km()).to_string(),
            ..CircleStyle::default()
        };

        let marker = CircleMarker::new(id, feature.lat_lng(), magnitude_radius(feature.magnitude()))
            .with_style(style)
            .bind_popup(quake_popup(feature));

        map.add_layer(Box::new(marker))?;
        added += 1;
    }

    log::info!("rendered {} earthquake markers", added);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::layers::base::{LayerTrait, LayerType};

    fn feed(json: &str) -> EarthquakeFeed {
        EarthquakeFeed::from_str(json).unwrap()
    }

    #[test]
    fn test_renders_one_marker_per_feature() {
        let mut map = Map::new(LatLng::new(40.7128, -74.0059), 5.0);
        let feed = feed(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","id":"a","properties":{"mag":2.0,"time":0},
                 "geometry":{"type":"Point","coordinates":[10.0,20.0,5.0]}},
                {"type":"Feature","id":"b","properties":{"mag":6.1,"time":0},
                 "geometry":{"type":"Point","coordinates":[30.0,40.0,95.0]}}
            ]}"#,
        );

        let added = render_features(&mut map, &feed).unwrap();
        assert_eq!(added, 2);
        assert_eq!(map.layer_count(), 2);
        assert!(map.get_layer("a").is_some());
        assert!(map.get_layer("b").is_some());
    }

    #[test]
    fn test_marker_visuals_are_derived() {
        let mut map = Map::new(LatLng::new(40.7128, -74.0059), 5.0);
        let feed = feed(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","id":"deep","properties":{"mag":6.1,"time":0},
                 "geometry":{"type":"Point","coordinates":[30.0,40.0,95.0]}}
            ]}"#,
        );
        render_features(&mut map, &feed).unwrap();

        let layer = map.get_layer("deep").unwrap();
        assert_eq!(layer.layer_type(), LayerType::CircleMarker);

        let marker = layer.as_any().downcast_ref::<CircleMarker>().unwrap();
        assert_eq!(marker.center(), LatLng::new(40.0, 30.0));
        assert_eq!(marker.radius(), 122000.0);
        assert_eq!(marker.style().fill_color, "#ff3333");
        assert_eq!(marker.style().color, "#000");
        assert_eq!(marker.style().weight, 1.0);
        assert_eq!(marker.style().fill_opacity, 0.8);
    }

    #[test]
    fn test_empty_feed_adds_nothing() {
        let mut map = Map::new(LatLng::new(40.7128, -74.0059), 5.0);
        let feed = feed(r#"{"type":"FeatureCollection","features":[]}"#);

        let added = render_features(&mut map, &feed).unwrap();
        assert_eq!(added, 0);
        assert_eq!(map.layer_count(), 0);
    }

    #[test]
    fn test_features_without_ids_get_indexed_ids() {
        let mut map = Map::new(LatLng::new(40.7128, -74.0059), 5.0);
        let feed = feed(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"mag":1.0,"time":0},
                 "geometry":{"type":"Point","coordinates":[0.0,0.0,0.0]}}
            ]}"#,
        );
        render_features(&mut map, &feed).unwrap();

        assert!(map.get_layer("quake-0").is_some());
    }
}
