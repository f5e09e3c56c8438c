use crate::{
    log::{DayLog, DutyStatus},
    policy::HosPolicy,
};

pub const HOURS_PER_DAY: f64 = 24.0;

/// Counters that survive across simulated days. Created once per synthesis
/// call, stack-local, discarded with the result.
#[derive(Debug, Clone, PartialEq)]
pub struct TripState {
    pub remaining_drive_hours: f64,
    pub remaining_fuel_stops: u32,
    /// Drive hours between consecutive fuel events, chosen so the stops
    /// spread evenly over the whole trip's drive time.
    pub fuel_interval_hours: f64,
    pub hours_since_last_fuel: f64,
    pub cycle_used_hours: f64,
    pub dropoff_pending: bool,
    pub day: u32,
}

impl TripState {
    pub fn new(
        distance_miles: f64,
        drive_seconds: f64,
        cycle_used_hours: f64,
        policy: &HosPolicy,
    ) -> Self {
        let drive_hours_total = (drive_seconds / 3600.0).max(0.0);
        let fuel_stops = (distance_miles / policy.fuel_every_miles).floor().max(0.0) as u32;

        TripState {
            remaining_drive_hours: drive_hours_total,
            remaining_fuel_stops: fuel_stops,
            fuel_interval_hours: drive_hours_total / (fuel_stops as f64 + 1.0),
            hours_since_last_fuel: 0.0,
            cycle_used_hours: cycle_used_hours.max(0.0),
            dropoff_pending: true,
            day: 1,
        }
    }

    pub fn done(&self) -> bool {
        self.remaining_drive_hours <= 0.0 && !self.dropoff_pending
    }

    /// 34-hour restart: a full day off, then a 10-hour off-duty period
    /// opening the following day. Zeroes the cycle accumulator and advances
    /// the day counter past both reset days.
    pub fn take_cycle_reset(&mut self, policy: &HosPolicy) -> [DayLog; 2] {
        let mut first = DayLog::new(self.day);
        first.push_segment(
            DutyStatus::OffDuty,
            HOURS_PER_DAY,
            Some("34h reset (part 1/2)"),
        );
        self.day += 1;

        let mut second = DayLog::new(self.day);
        second.push_segment(
            DutyStatus::OffDuty,
            policy.off_duty_min,
            Some("34h reset (part 2/2)"),
        );
        self.day += 1;

        self.cycle_used_hours = 0.0;
        [first, second]
    }
}

/// One day's duty window. The synthesizer creates a fresh one per simulated
/// day and folds it into a `DayLog` with `close_day`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayState {
    pub log: DayLog,
    pub duty_left: f64,
    pub driving_today: f64,
    pub break_done: bool,
}

impl DayState {
    pub fn new(day: u32, policy: &HosPolicy) -> Self {
        DayState {
            log: DayLog::new(day),
            duty_left: policy.daily_duty_max,
            driving_today: 0.0,
            break_done: false,
        }
    }

    pub fn take_pickup(&mut self, trip: &mut TripState, policy: &HosPolicy) {
        let need = policy.pickup_hours.min(self.duty_left);
        self.log
            .push_segment(DutyStatus::OnDutyNotDriving, need, Some("Pickup"));
        trip.cycle_used_hours += need;
        self.duty_left -= need;
    }

    pub fn break_due(&self, policy: &HosPolicy) -> bool {
        self.driving_today >= policy.break_after_driving && !self.break_done
    }

    /// Places the required break, preferring a pending fuel stop when the
    /// policy allows it (the driver has to fuel anyway). Returns `false`
    /// when no break fits the remaining duty window, which ends productive
    /// work for the day.
    pub fn take_break(&mut self, trip: &mut TripState, policy: &HosPolicy) -> bool {
        if policy.prefer_fuel_as_break
            && trip.remaining_fuel_stops > 0
            && self.duty_left >= policy.fuel_duration
        {
            self.log.push_segment(
                DutyStatus::OnDutyNotDriving,
                policy.fuel_duration,
                Some("Fuel (break)"),
            );
            trip.cycle_used_hours += policy.fuel_duration;
            self.duty_left -= policy.fuel_duration;
            trip.remaining_fuel_stops -= 1;
            trip.hours_since_last_fuel = 0.0;
            self.break_done = true;
            return true;
        }

        if self.duty_left >= policy.break_duration {
            self.log.push_segment(
                DutyStatus::OffDuty,
                policy.break_duration,
                Some("30-min break"),
            );
            self.duty_left -= policy.break_duration;
            self.break_done = true;
            return true;
        }

        false
    }

    /// Longest chunk drivable right now. Whichever bound binds first wins:
    /// daily driving cap, duty window, remaining trip driving, or the next
    /// scheduled fuel event (unbounded once no stops remain).
    pub fn drive_chunk_hours(&self, trip: &TripState, policy: &HosPolicy) -> f64 {
        let by_daily_cap = policy.daily_drive_max - self.driving_today;
        let by_window = self.duty_left;
        let by_remaining = trip.remaining_drive_hours;
        let by_next_fuel = if trip.remaining_fuel_stops > 0 {
            trip.fuel_interval_hours - trip.hours_since_last_fuel
        } else {
            by_remaining
        };

        by_daily_cap
            .min(by_window)
            .min(by_remaining)
            .min(by_next_fuel)
            .max(0.0)
    }

    pub fn drive(&mut self, trip: &mut TripState, hours: f64) {
        self.log.push_segment(DutyStatus::Driving, hours, None);
        trip.remaining_drive_hours -= hours;
        self.driving_today += hours;
        self.duty_left -= hours;
        trip.cycle_used_hours += hours;
        trip.hours_since_last_fuel += hours;
    }

    pub fn fuel_due(&self, trip: &TripState, policy: &HosPolicy) -> bool {
        trip.remaining_fuel_stops > 0
            && trip.hours_since_last_fuel >= trip.fuel_interval_hours
            && self.duty_left >= policy.fuel_duration
    }

    pub fn take_fuel_stop(&mut self, trip: &mut TripState, policy: &HosPolicy) {
        self.log
            .push_segment(DutyStatus::OnDutyNotDriving, policy.fuel_duration, Some("Fuel"));
        trip.cycle_used_hours += policy.fuel_duration;
        self.duty_left -= policy.fuel_duration;
        trip.remaining_fuel_stops -= 1;
        trip.hours_since_last_fuel = 0.0;

        if !self.break_done
            && self.driving_today >= policy.break_after_driving
            && policy.fuel_duration >= policy.break_duration
        {
            self.break_done = true;
        }
    }

    pub fn take_dropoff(&mut self, trip: &mut TripState, policy: &HosPolicy) {
        let need = policy.dropoff_hours.min(self.duty_left);
        self.log
            .push_segment(DutyStatus::OnDutyNotDriving, need, Some("Drop-off"));
        trip.cycle_used_hours += need;
        self.duty_left -= need;
        trip.dropoff_pending = false;
    }

    /// Overnight rest covering at least the 10-hour minimum and whatever
    /// remains of the 24-hour wall-clock day.
    pub fn close_day(mut self, policy: &HosPolicy) -> DayLog {
        let used_today = self.log.total_hours();
        let off_needed = policy.off_duty_min.max(HOURS_PER_DAY - used_today);
        self.log
            .push_segment(DutyStatus::OffDuty, off_needed, Some("Rest"));
        self.log
    }
}
