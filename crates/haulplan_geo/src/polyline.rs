use crate::geopoint::GeoPoint;

/// Total great-circle length of a polyline in miles.
pub fn total_miles(line: &[GeoPoint]) -> f64 {
    line.windows(2)
        .map(|leg| leg[0].haversine_distance_miles(&leg[1]))
        .sum()
}

/// Prefix sums of the per-leg distances, aligned with vertex indices:
/// `cum[i]` is the distance in miles from the first vertex to vertex `i`,
/// with `cum[0] == 0`. Empty input yields an empty vec.
pub fn cumulative_miles(line: &[GeoPoint]) -> Vec<f64> {
    if line.is_empty() {
        return Vec::new();
    }

    let mut cum = Vec::with_capacity(line.len());
    let mut total = 0.0;
    cum.push(total);
    for leg in line.windows(2) {
        total += leg[0].haversine_distance_miles(&leg[1]);
        cum.push(total);
    }

    cum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_vertex_lines() {
        assert!(cumulative_miles(&[]).is_empty());
        assert_eq!(cumulative_miles(&[GeoPoint::new(0.0, 0.0)]), vec![0.0]);
        assert_eq!(total_miles(&[GeoPoint::new(0.0, 0.0)]), 0.0);
    }

    #[test]
    fn prefix_sums_align_with_vertices() {
        let line = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(3.0, 0.0),
        ];
        let cum = cumulative_miles(&line);
        assert_eq!(cum.len(), line.len());
        assert_eq!(cum[0], 0.0);

        let first_leg = line[0].haversine_distance_miles(&line[1]);
        let second_leg = line[1].haversine_distance_miles(&line[2]);
        assert!((cum[1] - first_leg).abs() < 1e-12);
        assert!((cum[2] - (first_leg + second_leg)).abs() < 1e-12);
        assert!((total_miles(&line) - cum[2]).abs() < 1e-12);
    }

    #[test]
    fn duplicate_vertices_add_zero_length_legs() {
        let line = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 0.0),
        ];
        let cum = cumulative_miles(&line);
        assert_eq!(cum[1], cum[2]);
        assert!(cum[3] > cum[2]);
    }
}
