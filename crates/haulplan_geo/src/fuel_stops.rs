use crate::{geopoint::GeoPoint, polyline};

/// Spaces fuel stops along a routed polyline by distance, not by vertex
/// index. Stops land at whole multiples of `interval_miles` from the route
/// start, never at the first or the final vertex. Returns an empty vec when
/// the route is shorter than one interval or the geometry is unusable.
pub fn place_along(
    line: &[GeoPoint],
    total_distance_miles: f64,
    interval_miles: f64,
) -> Vec<GeoPoint> {
    if line.len() < 2 || total_distance_miles <= 0.0 || interval_miles <= 0.0 {
        return Vec::new();
    }

    let num_stops = (total_distance_miles / interval_miles).floor() as usize;
    if num_stops == 0 {
        return Vec::new();
    }

    let cum = polyline::cumulative_miles(line);
    let total_len = cum.last().copied().unwrap_or(0.0);
    if total_len <= 0.0 {
        return Vec::new();
    }

    let targets = (1..=num_stops)
        .map(|k| k as f64 * interval_miles)
        .take_while(|target| *target < total_len)
        .collect::<Vec<_>>();

    // Targets are increasing, so one forward cursor pass over the legs
    // covers them all.
    let mut stops = Vec::with_capacity(targets.len());
    let mut leg = 0;
    for target in targets {
        while leg < line.len() - 2 && cum[leg + 1] < target {
            leg += 1;
        }

        let leg_start = cum[leg];
        let leg_len = cum[leg + 1] - leg_start;
        if leg_len <= 0.0 {
            // Duplicate consecutive vertices; emit the leg start as-is.
            stops.push(line[leg]);
            continue;
        }

        let t = (target - leg_start) / leg_len;
        stops.push(line[leg].lerp(&line[leg + 1], t));
    }

    stops
}
