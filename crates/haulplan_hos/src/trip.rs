use haulplan_geo::{fuel_stops, geopoint::GeoPoint};
use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{log::DayLog, policy::HosPolicy, synthesizer::synthesize_daily_logs};

#[derive(Error, Debug, PartialEq)]
pub enum TripParamsError {
    #[error("route distance must be non-negative, got {0} miles")]
    NegativeDistance(f64),
    #[error("route drive time must be non-negative, got {0}")]
    NegativeDriveTime(SignedDuration),
    #[error("cycle hours used must be within 0..={max}, got {got}")]
    CycleOutOfRange { got: f64, max: f64 },
}

/// Trip inputs as handed over by the routing layer, validated once here so
/// the planning passes never have to re-check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripParams {
    distance_miles: f64,
    drive_time: SignedDuration,
    cycle_used_hours: f64,
}

impl TripParams {
    pub fn new(
        distance_miles: f64,
        drive_time: SignedDuration,
        cycle_used_hours: f64,
        policy: &HosPolicy,
    ) -> Result<Self, TripParamsError> {
        if distance_miles < 0.0 || distance_miles.is_nan() {
            return Err(TripParamsError::NegativeDistance(distance_miles));
        }
        if drive_time.is_negative() {
            return Err(TripParamsError::NegativeDriveTime(drive_time));
        }
        if !(0.0..=policy.cycle_max).contains(&cycle_used_hours) {
            return Err(TripParamsError::CycleOutOfRange {
                got: cycle_used_hours,
                max: policy.cycle_max,
            });
        }

        Ok(TripParams {
            distance_miles,
            drive_time,
            cycle_used_hours,
        })
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    pub fn drive_time(&self) -> SignedDuration {
        self.drive_time
    }

    pub fn drive_seconds(&self) -> f64 {
        self.drive_time.as_secs_f64()
    }

    pub fn cycle_used_hours(&self) -> f64 {
        self.cycle_used_hours
    }
}

/// The plan handed back to the caller: where to fuel along the routed line,
/// and the day-by-day duty logs.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TripPlan {
    pub fuel_stops: Vec<GeoPoint>,
    pub logs: Vec<DayLog>,
}

/// Runs the two planning passes in the order the trip endpoint invokes
/// them: fuel stops placed along the routed line by distance, then the HOS
/// day logs from distance, drive time and cycle hours used. Pure; no I/O.
pub fn plan_trip(route_line: &[GeoPoint], params: &TripParams, policy: &HosPolicy) -> TripPlan {
    let fuel_stops =
        fuel_stops::place_along(route_line, params.distance_miles(), policy.fuel_every_miles);
    let logs = synthesize_daily_logs(
        params.distance_miles(),
        params.drive_seconds(),
        params.cycle_used_hours(),
        policy,
    );

    TripPlan { fuel_stops, logs }
}
