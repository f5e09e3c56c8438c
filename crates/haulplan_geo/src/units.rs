pub const METERS_PER_MILE: f64 = 1609.344;

pub fn miles_from_meters(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_meters_to_miles() {
        assert_eq!(miles_from_meters(1609.344), 1.0);
        assert!((miles_from_meters(100_000.0) - 62.137).abs() < 1e-3);
    }
}
