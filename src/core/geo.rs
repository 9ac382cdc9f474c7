//! Great-circle distance and map links for the clock-in/clock-out
//! coordinates the terminals attach to each event.

use crate::models::geo::{GeoPoint, MapLink};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two coordinate pairs.
pub fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Build the map hyperlink for one endpoint: `{base}?q={lat},{lon}`
/// with the label the renderers show in place of the raw URL.
pub fn map_link(base_url: &str, p: GeoPoint, label: &str) -> MapLink {
    MapLink {
        url: format!("{}{},{}", base_url, p.lat, p.lon),
        label: label.to_string(),
    }
}
