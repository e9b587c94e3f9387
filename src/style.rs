//! Marker derivation functions.
//!
//! Pure mappings from feed values to visuals: magnitude to circle
//! radius, depth to fill color. The color chain is an ordered
//! `(threshold, color)` ramp walked top-down with a shallow default,
//! which makes it total over the reals (NaN falls through to the
//! default). Codes and breakpoints are fixed for compatibility with the
//! published depth scale.

use crate::core::constants::MAGNITUDE_RADIUS_SCALE;

/// Depth bucket boundaries, in kilometers, shared by the color ramp and
/// the legend.
pub const DEPTH_BREAKS: [f64; 6] = [-10.0, 10.0, 30.0, 50.0, 70.0, 90.0];

/// Ordered depth ramp; the first threshold the depth exceeds wins.
const DEPTH_COLOR_RAMP: [(f64, &str); 5] = [
    (90.0, "#ff3333"),
    (70.0, "#ff6633"),
    (50.0, "#ff9933"),
    (30.0, "#ffcc33"),
    (10.0, "#ffff33"),
];

/// Color for depths at or below the lowest threshold.
const SHALLOW_COLOR: &str = "#ccff33";

/// Marker radius in meters for a given magnitude. No bounds checking:
/// negative or NaN magnitudes pass straight through.
pub fn magnitude_radius(magnitude: f64) -> f64 {
    magnitude * MAGNITUDE_RADIUS_SCALE
}

/// Fill color for a given hypocenter depth in kilometers.
pub fn depth_color(depth: f64) -> &'static str {
    for (threshold, color) in DEPTH_COLOR_RAMP {
        if depth > threshold {
            return color;
        }
    }
    SHALLOW_COLOR
}
