use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Driving,
    OnDutyNotDriving,
    OffDuty,
}

/// One entry of a driver's daily record of duty status. `hours` is always
/// strictly positive and rounded to 0.01.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DutySegment {
    pub status: DutyStatus,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DayLog {
    pub day: u32,
    pub segments: Vec<DutySegment>,
}

impl DayLog {
    pub fn new(day: u32) -> Self {
        DayLog {
            day,
            segments: Vec::new(),
        }
    }

    /// Appends a segment with its hours rounded to 0.01. Non-positive
    /// durations, and durations that round below 1e-6, are dropped and
    /// never stored.
    pub fn push_segment(&mut self, status: DutyStatus, hours: f64, note: Option<&str>) {
        if hours <= 0.0 {
            return;
        }
        let rounded = round_hours(hours);
        if rounded.abs() < 1e-6 {
            return;
        }
        self.segments.push(DutySegment {
            status,
            hours: rounded,
            note: note.map(str::to_owned),
        });
    }

    pub fn driving_hours(&self) -> f64 {
        self.hours_in(DutyStatus::Driving)
    }

    /// Driving plus on-duty-not-driving, the hours counted against the
    /// 14-hour window and the 70-hour cycle.
    pub fn on_duty_hours(&self) -> f64 {
        self.hours_in(DutyStatus::Driving) + self.hours_in(DutyStatus::OnDutyNotDriving)
    }

    pub fn off_duty_hours(&self) -> f64 {
        self.hours_in(DutyStatus::OffDuty)
    }

    pub fn total_hours(&self) -> f64 {
        self.segments.iter().map(|s| s.hours).sum()
    }

    fn hours_in(&self, status: DutyStatus) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.status == status)
            .map(|s| s.hours)
            .sum()
    }
}

pub(crate) fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
