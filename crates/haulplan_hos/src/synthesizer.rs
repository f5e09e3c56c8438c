use tracing::debug;

use crate::{
    log::DayLog,
    policy::HosPolicy,
    state::{DayState, TripState},
};

/// Expands a routed trip (total distance, total drive time, cycle hours
/// already used) into day-by-day duty logs that respect the policy's
/// driving, duty-window, break, rest and cycle limits.
///
/// Fuel events are paced evenly by drive time (`drive_hours / (stops + 1)`),
/// while the geometric placer spaces stops by route distance; under
/// non-uniform speeds the two views can disagree. That asymmetry is
/// inherited from the trip planner this models and is left as-is.
///
/// Inputs are assumed pre-validated (see `TripParams`); pathological values
/// degrade to a minimal pickup + dropoff + rest log instead of failing.
pub fn synthesize_daily_logs(
    distance_miles: f64,
    drive_seconds: f64,
    cycle_used_hours: f64,
    policy: &HosPolicy,
) -> Vec<DayLog> {
    let mut trip = TripState::new(distance_miles, drive_seconds, cycle_used_hours, policy);
    let mut logs = Vec::new();

    while !trip.done() {
        let mut day = DayState::new(trip.day, policy);

        if trip.day == 1 {
            day.take_pickup(&mut trip, policy);
        }

        while day.duty_left > 0.0 && trip.remaining_drive_hours > 0.0 {
            if day.break_due(policy) {
                if !day.take_break(&mut trip, policy) {
                    // No room left for a break; the day is over for
                    // productive work.
                    break;
                }
                continue;
            }

            // A fuel stop carried over from a day whose window could not
            // absorb it fires before any further driving.
            if day.fuel_due(&trip, policy) {
                day.take_fuel_stop(&mut trip, policy);
                continue;
            }

            let chunk = day.drive_chunk_hours(&trip, policy);
            if chunk <= 0.0 {
                break;
            }
            day.drive(&mut trip, chunk);

            if day.fuel_due(&trip, policy) {
                day.take_fuel_stop(&mut trip, policy);
            }

            if day.driving_today >= policy.daily_drive_max {
                break;
            }
        }

        if trip.remaining_drive_hours <= 0.0 && trip.dropoff_pending && day.duty_left > 0.0 {
            day.take_dropoff(&mut trip, policy);
        }

        let log = day.close_day(policy);
        debug!(
            day = log.day,
            driving = log.driving_hours(),
            cycle_used = trip.cycle_used_hours,
            "closed duty day"
        );
        logs.push(log);
        trip.day += 1;

        if trip.remaining_drive_hours > 0.0 && policy.cycle_exhausted(trip.cycle_used_hours) {
            debug!(day = trip.day, "cycle exhausted, inserting 34h reset");
            logs.extend(trip.take_cycle_reset(policy));
        }
    }

    logs
}
