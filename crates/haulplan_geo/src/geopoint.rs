use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// A vertex of a routed path. Serializes as a `[lon, lat]` pair, matching
/// the LineString coordinate order routing providers emit.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        GeoPoint { lon, lat }
    }

    pub fn haversine_distance_miles(&self, other: &GeoPoint) -> f64 {
        haversine_distance_miles(self.lat, self.lon, other.lat, other.lon)
    }

    /// Linear interpolation in lon/lat space, `t` in `[0, 1]`. Adequate for
    /// the short legs of a road polyline; on a long leg the result drifts
    /// off the great circle.
    pub fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }
}

// The derive cannot see through the `[f64; 2]` serde representation, so the
// schema delegates to it by hand.
impl JsonSchema for GeoPoint {
    fn schema_name() -> Cow<'static, str> {
        "GeoPoint".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <[f64; 2]>::json_schema(generator)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from(coords: [f64; 2]) -> Self {
        GeoPoint {
            lon: coords[0],
            lat: coords[1],
        }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lon, point.lat]
    }
}

/// Great-circle distance in miles on a sphere of Earth mean radius.
pub fn haversine_distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lon1_rad = lon1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lon2_rad = lon2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_between_identical_points() {
        let p = GeoPoint::new(-94.5786, 39.0997);
        assert_eq!(p.haversine_distance_miles(&p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let expected = EARTH_RADIUS_MILES * 1.0_f64.to_radians();
        assert!((a.haversine_distance_miles(&b) - expected).abs() < 1e-9);
    }

    #[test]
    fn kansas_city_to_chicago_great_circle() {
        let kc = GeoPoint::new(-94.5786, 39.0997);
        let chi = GeoPoint::new(-87.6298, 41.8781);
        let d = kc.haversine_distance_miles(&chi);
        assert!((d - 412.3).abs() < 5.0, "got {d}");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(-10.0, 40.0);
        let b = GeoPoint::new(-8.0, 42.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), GeoPoint::new(-9.0, 41.0));
    }

    #[test]
    fn serializes_as_lon_lat_array() {
        let p = GeoPoint::new(-87.6298, 41.8781);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[-87.6298,41.8781]");

        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn schema_matches_the_coordinate_pair_representation() {
        let schema = schemars::schema_for!(GeoPoint);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["type"], "array");
        assert_eq!(json["minItems"], 2);
        assert_eq!(json["maxItems"], 2);
    }
}
