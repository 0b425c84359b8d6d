use chrono::{NaiveDate, TimeZone};

use crate::error::{AppError, Result};
use crate::models::{
    BulkUpdateRequest, Employee, EmployeeWithShifts, ModalPayload, Shift,
};
use crate::services::edit_tracker::{EditTracker, FieldMap};
use crate::services::time_aggregator::start_of_day;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// State of the bulk-edit dialog for a selection of employees.
///
/// Employee and shift edits are tracked separately and only turned into
/// update payloads on [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct BulkEditSession {
    selected: Vec<EmployeeWithShifts>,
    employees: EditTracker<Employee>,
    shifts: EditTracker<Shift>,
}

impl BulkEditSession {
    pub fn open(selected: Vec<EmployeeWithShifts>) -> Result<Self> {
        let employees = EditTracker::new(selected.iter().map(|e| e.employee.clone()).collect())?;
        let shifts = EditTracker::for_shifts(
            selected
                .iter()
                .flat_map(|e| e.shifts.iter().cloned())
                .collect(),
        )?;
        log::debug!(
            "Bulk edit opened for {} employees ({} shifts)",
            selected.len(),
            shifts.rows().count()
        );

        Ok(Self {
            selected,
            employees,
            shifts,
        })
    }

    pub fn selected(&self) -> &[EmployeeWithShifts] {
        &self.selected
    }

    pub fn edit_employee(&mut self, edited: &Employee) -> Result<bool> {
        self.employees.record_edit(edited)
    }

    pub fn edit_employee_fields(&mut self, employee_id: &str, fields: FieldMap) -> Result<bool> {
        self.employees.record_field_edits(employee_id, fields)
    }

    pub fn edit_shift(&mut self, edited: &Shift) -> Result<bool> {
        self.shifts.record_edit(edited)
    }

    pub fn edit_shift_fields(&mut self, shift_id: &str, fields: FieldMap) -> Result<bool> {
        self.shifts.record_field_edits(shift_id, fields)
    }

    pub fn employee_edits(&self) -> &EditTracker<Employee> {
        &self.employees
    }

    pub fn shift_edits(&self) -> &EditTracker<Shift> {
        &self.shifts
    }

    pub fn is_dirty(&self) -> bool {
        self.employees.has_changes() || self.shifts.has_changes()
    }

    /// Shifts of one selected employee clocked in during `date`.
    pub fn shifts_on<Tz: TimeZone>(
        &self,
        tz: &Tz,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<&Shift>> {
        let employee = self
            .selected
            .iter()
            .find(|e| e.id() == employee_id)
            .ok_or_else(|| AppError::UnknownRecord(employee_id.to_string()))?;
        let Some(day_start) = start_of_day(tz, date) else {
            return Ok(Vec::new());
        };
        let day_end = day_start + DAY_MILLIS;

        Ok(employee
            .shifts
            .iter()
            .filter(|s| s.clock_in >= day_start && s.clock_in < day_end)
            .collect())
    }

    pub fn save(self) -> Result<ModalPayload<BulkUpdateRequest>> {
        let request = BulkUpdateRequest {
            employees: self.employees.patches()?,
            shifts: self.shifts.patches()?,
        };
        log::debug!(
            "Bulk edit saved with {} employee and {} shift changes",
            request.employees.len(),
            request.shifts.len()
        );
        Ok(ModalPayload::Action(request))
    }

    pub fn cancel(self) -> ModalPayload<BulkUpdateRequest> {
        ModalPayload::Cancel
    }
}
