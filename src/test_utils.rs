use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::api::DashboardApi;
use crate::error::{AppError, Result};
use crate::models::{Employee, EmployeePatch, Shift, ShiftPatch};

pub fn employee(id: &str, hourly_rate: f64, hourly_rate_overtime: f64) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {}", id),
        email: format!("{}@example.com", id),
        hourly_rate,
        hourly_rate_overtime,
    }
}

pub fn shift(id: &str, employee_id: &str, clock_in: i64, clock_out: i64) -> Shift {
    Shift {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        clock_in,
        clock_out,
        total_clock_in_time: 0.0,
    }
}

/// In-memory backend. Patches for ids in `failing` are rejected.
#[derive(Default)]
pub struct MockApi {
    pub employees: Vec<Employee>,
    pub shifts: Vec<Shift>,
    pub failing: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new(employees: Vec<Employee>, shifts: Vec<Shift>) -> Self {
        Self {
            employees,
            shifts,
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String, id: &str) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(id) {
            return Err(AppError::UnknownRecord(id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for MockApi {
    async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    async fn fetch_shifts(&self) -> Result<Vec<Shift>> {
        Ok(self.shifts.clone())
    }

    async fn patch_employee(&self, patch: &EmployeePatch) -> Result<()> {
        self.record(format!("employees/{}", patch.id), &patch.id)
    }

    async fn patch_shift(&self, patch: &ShiftPatch) -> Result<()> {
        self.record(format!("shifts/{}", patch.id), &patch.id)
    }
}
