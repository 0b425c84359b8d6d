use serde::{Deserialize, Serialize};

use super::{EmployeePatch, ShiftPatch};

/// Result of persisting one record. Both variants carry the payload that was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum UpdateOutcome<T> {
    Success(T),
    Fail(T),
}

impl<T> UpdateOutcome<T> {
    pub fn payload(&self) -> &T {
        match self {
            UpdateOutcome::Success(payload) | UpdateOutcome::Fail(payload) => payload,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            UpdateOutcome::Success(payload) => Some(payload),
            UpdateOutcome::Fail(_) => None,
        }
    }
}

pub type UpdateEmployeeResponse = UpdateOutcome<EmployeePatch>;
pub type UpdateShiftResponse = UpdateOutcome<ShiftPatch>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateRequest {
    pub employees: Vec<EmployeePatch>,
    pub shifts: Vec<ShiftPatch>,
}

impl BulkUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.shifts.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    pub employees: Vec<UpdateEmployeeResponse>,
    pub shifts: Vec<UpdateShiftResponse>,
}

impl BulkUpdateResponse {
    pub fn successful_employees(&self) -> Vec<&EmployeePatch> {
        self.employees.iter().filter_map(UpdateOutcome::success).collect()
    }

    pub fn successful_shifts(&self) -> Vec<&ShiftPatch> {
        self.shifts.iter().filter_map(UpdateOutcome::success).collect()
    }
}

/// What an edit dialog hands back when it closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum ModalPayload<T> {
    Action(T),
    Cancel,
}
