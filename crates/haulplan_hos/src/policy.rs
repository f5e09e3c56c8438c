/// Scheduling rules for property-carrying drivers on the 70-hour / 8-day
/// cycle, no adverse-conditions exceptions.
///
/// The regulatory limits live next to the scheduling heuristics
/// (`prefer_fuel_as_break`, the even fuel pacing derived from
/// `fuel_every_miles`) so either can be tuned without touching the
/// simulation itself.
#[derive(Debug, Clone, PartialEq)]
pub struct HosPolicy {
    /// Maximum driving hours per day.
    pub daily_drive_max: f64,
    /// Maximum on-duty window per day (driving + on-duty-not-driving).
    pub daily_duty_max: f64,
    /// Cumulative driving hours after which a break is required.
    pub break_after_driving: f64,
    pub break_duration: f64,
    /// Minimum overnight off-duty period.
    pub off_duty_min: f64,
    /// On-duty hours allowed inside the rolling 8-day cycle.
    pub cycle_max: f64,
    pub pickup_hours: f64,
    pub dropoff_hours: f64,
    pub fuel_every_miles: f64,
    /// Fueling counts as on-duty-not-driving and can double as the break.
    pub fuel_duration: f64,
    pub prefer_fuel_as_break: bool,
    /// Tolerance for the cycle-limit comparison, guarding against
    /// accumulated floating-point error.
    pub cycle_epsilon: f64,
}

impl Default for HosPolicy {
    fn default() -> Self {
        HosPolicy {
            daily_drive_max: 11.0,
            daily_duty_max: 14.0,
            break_after_driving: 8.0,
            break_duration: 0.5,
            off_duty_min: 10.0,
            cycle_max: 70.0,
            pickup_hours: 1.0,
            dropoff_hours: 1.0,
            fuel_every_miles: 1000.0,
            fuel_duration: 0.5,
            prefer_fuel_as_break: true,
            cycle_epsilon: 1e-9,
        }
    }
}

impl HosPolicy {
    pub fn cycle_exhausted(&self, cycle_used_hours: f64) -> bool {
        cycle_used_hours >= self.cycle_max - self.cycle_epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_check_uses_epsilon() {
        let policy = HosPolicy::default();
        assert!(policy.cycle_exhausted(70.0));
        assert!(policy.cycle_exhausted(70.0 - 1e-12));
        assert!(!policy.cycle_exhausted(69.99));
    }
}
