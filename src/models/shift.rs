use serde::{Deserialize, Serialize};

use super::Record;

pub const MILLIS_PER_HOUR: f64 = 1000.0 * 60.0 * 60.0;

/// One clock-in/clock-out interval. Timestamps are epoch milliseconds and
/// `clock_out >= clock_in` is expected of the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub employee_id: String,
    pub clock_in: i64,
    pub clock_out: i64,
    #[serde(default)]
    pub total_clock_in_time: f64,
}

impl Shift {
    pub fn duration_millis(&self) -> i64 {
        self.clock_out - self.clock_in
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_millis() as f64 / MILLIS_PER_HOUR
    }

    pub fn apply(&mut self, patch: &ShiftPatch) {
        if let Some(employee_id) = &patch.employee_id {
            self.employee_id = employee_id.clone();
        }
        if let Some(clock_in) = patch.clock_in {
            self.clock_in = clock_in;
        }
        if let Some(clock_out) = patch.clock_out {
            self.clock_out = clock_out;
        }
    }
}

impl Record for Shift {
    type Patch = ShiftPatch;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial shift update. `employee_id` is carried along so the dashboard can
/// route a successful update back to the owning employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<i64>,
}

impl ShiftPatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}
