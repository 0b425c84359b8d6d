use serde::{Deserialize, Serialize};

use super::{Record, Shift};

/// Milliseconds worked per calendar day, keyed by `YYYY-M-D` (no zero padding).
pub type TimeByDay = std::collections::BTreeMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub hourly_rate: f64,
    pub hourly_rate_overtime: f64,
}

impl Employee {
    /// Overwrites every field the patch carries. The identifier is never touched.
    pub fn apply(&mut self, patch: &EmployeePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(rate) = patch.hourly_rate {
            self.hourly_rate = rate;
        }
        if let Some(rate) = patch.hourly_rate_overtime {
            self.hourly_rate_overtime = rate;
        }
    }
}

impl Record for Employee {
    type Patch = EmployeePatch;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial employee update as sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate_overtime: Option<f64>,
}

impl EmployeePatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.hourly_rate.is_none()
            && self.hourly_rate_overtime.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub regular_working_hours: f64,
    pub overtime_working_hours: f64,
}

/// Employee joined with its shifts and every derived aggregate.
///
/// Never persisted and never patched in place: rebuild it with
/// [`map_shifts_to_employee`](crate::services::employee_mapper::map_shifts_to_employee)
/// whenever the employee or one of its shifts changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithShifts {
    #[serde(flatten)]
    pub employee: Employee,
    pub shifts: Vec<Shift>,
    pub total_clocked_in_time: f64,
    pub time_by_day: TimeByDay,
    pub regular_working_hours: f64,
    pub overtime_working_hours: f64,
    pub regular_hours_paid: f64,
    pub overtime_hours_paid: f64,
}

impl EmployeeWithShifts {
    pub fn id(&self) -> &str {
        &self.employee.id
    }

    pub fn has_shift(&self, shift_id: &str) -> bool {
        self.shifts.iter().any(|s| s.id == shift_id)
    }
}
