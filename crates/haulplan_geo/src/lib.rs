pub mod fuel_stops;
pub mod geopoint;
pub mod polyline;
pub mod units;
