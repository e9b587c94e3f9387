use crate::data::feed::EarthquakeFeature;
use chrono::{LocalResult, TimeZone, Utc};

/// Renders epoch milliseconds as a human-readable UTC timestamp.
/// Out-of-range values fall back to the raw integer.
pub fn format_event_time(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis) {
        LocalResult::Single(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        _ => millis.to_string(),
    }
}

/// Builds the popup body for one earthquake: place, event time,
/// magnitude, and depth with its unit.
pub fn quake_popup(feature: &EarthquakeFeature) -> String {
    let time = feature
        .time_millis()
        .map(format_event_time)
        .unwrap_or_else(|| "Unknown time".to_string());

    format!(
        "<h3>{}</h3><hr><p>{}</p><p>Magnitude: {}</p><p>Depth: {} km</p>",
        feature.place(),
        time,
        feature.magnitude(),
        feature.depth_km()
    )
}
