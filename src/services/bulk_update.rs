use chrono::TimeZone;
use futures::future::join_all;

use crate::api::DashboardApi;
use crate::error::Result;
use crate::models::{
    BulkUpdateRequest, BulkUpdateResponse, EmployeePatch, EmployeeWithShifts, Shift, ShiftPatch,
    UpdateEmployeeResponse, UpdateOutcome, UpdateShiftResponse,
};
use crate::services::employee_mapper::map_shifts_to_employee;

pub async fn update_employee<A>(api: &A, patch: EmployeePatch) -> UpdateEmployeeResponse
where
    A: DashboardApi + ?Sized,
{
    match api.patch_employee(&patch).await {
        Ok(()) => {
            log::debug!("Employee {} updated", patch.id);
            UpdateOutcome::Success(patch)
        }
        Err(e) => {
            log::warn!("Failed to update employee {}: {}", patch.id, e);
            UpdateOutcome::Fail(patch)
        }
    }
}

pub async fn update_shift<A>(api: &A, patch: ShiftPatch) -> UpdateShiftResponse
where
    A: DashboardApi + ?Sized,
{
    match api.patch_shift(&patch).await {
        Ok(()) => {
            log::debug!("Shift {} updated", patch.id);
            UpdateOutcome::Success(patch)
        }
        Err(e) => {
            log::warn!("Failed to update shift {}: {}", patch.id, e);
            UpdateOutcome::Fail(patch)
        }
    }
}

/// Issues one request per employee concurrently; resolves once all of them have.
pub async fn update_employees<A>(api: &A, patches: Vec<EmployeePatch>) -> Vec<UpdateEmployeeResponse>
where
    A: DashboardApi + ?Sized,
{
    if patches.is_empty() {
        return Vec::new();
    }
    join_all(patches.into_iter().map(|patch| update_employee(api, patch))).await
}

pub async fn update_shifts<A>(api: &A, patches: Vec<ShiftPatch>) -> Vec<UpdateShiftResponse>
where
    A: DashboardApi + ?Sized,
{
    if patches.is_empty() {
        return Vec::new();
    }
    join_all(patches.into_iter().map(|patch| update_shift(api, patch))).await
}

/// Persists a whole batch. Never fails: every record resolves to an outcome.
pub async fn update_data<A>(api: &A, request: BulkUpdateRequest) -> BulkUpdateResponse
where
    A: DashboardApi + ?Sized,
{
    let (employees, shifts) = futures::join!(
        update_employees(api, request.employees),
        update_shifts(api, request.shifts)
    );

    let response = BulkUpdateResponse { employees, shifts };
    log::info!(
        "Bulk update finished: {}/{} employees, {}/{} shifts succeeded",
        response.successful_employees().len(),
        response.employees.len(),
        response.successful_shifts().len(),
        response.shifts.len()
    );
    response
}

fn belongs_to(employee: &EmployeeWithShifts, patch: &ShiftPatch) -> bool {
    match &patch.employee_id {
        Some(employee_id) => employee_id == employee.id(),
        None => employee.has_shift(&patch.id),
    }
}

fn update_shifts_for_employee(shifts: &[Shift], updated: &[&ShiftPatch]) -> Vec<Shift> {
    shifts
        .iter()
        .map(|shift| {
            let mut shift = shift.clone();
            if let Some(patch) = updated.iter().find(|p| p.id == shift.id) {
                shift.apply(patch);
            }
            shift
        })
        .collect()
}

/// Folds the successful outcomes of a batch into the enriched collection.
///
/// Failed outcomes and outcomes for rows not in `employees` are ignored. Every
/// touched employee is re-derived from scratch.
pub fn refresh_data<Tz: TimeZone>(
    tz: &Tz,
    employees: &[EmployeeWithShifts],
    response: &BulkUpdateResponse,
) -> Result<Vec<EmployeeWithShifts>> {
    let updated_employees = response.successful_employees();
    let updated_shifts = response.successful_shifts();

    employees
        .iter()
        .map(|current| {
            let updated_employee = updated_employees.iter().find(|p| p.id == current.id());
            let employee_shifts: Vec<&ShiftPatch> = updated_shifts
                .iter()
                .copied()
                .filter(|p| belongs_to(current, p))
                .collect();

            if updated_employee.is_none() && employee_shifts.is_empty() {
                return Ok(current.clone());
            }

            let mut employee = current.employee.clone();
            if let Some(patch) = updated_employee {
                employee.apply(patch);
            }
            let shifts = if employee_shifts.is_empty() {
                current.shifts.clone()
            } else {
                update_shifts_for_employee(&current.shifts, &employee_shifts)
            };

            map_shifts_to_employee(tz, employee, shifts)
        })
        .collect()
}

pub fn pluralize(count: usize, word: &str) -> String {
    if count > 1 {
        format!("{}s", word)
    } else {
        word.to_string()
    }
}

/// Human-readable summary of how many records were saved.
pub fn update_message(employees_updated: usize, shifts_updated: usize) -> String {
    let employees = format!(
        "{} {}",
        employees_updated,
        pluralize(employees_updated, "employee")
    );
    let shifts = format!("{} {}", shifts_updated, pluralize(shifts_updated, "shift"));

    match (employees_updated, shifts_updated) {
        (0, 0) => "No updates".to_string(),
        (0, _) => format!("Successfully updated {}", shifts),
        (_, 0) => format!("Successfully updated {}", employees),
        _ => format!("Successfully updated {} and {}", employees, shifts),
    }
}

pub fn summarize(response: &BulkUpdateResponse) -> String {
    update_message(
        response.successful_employees().len(),
        response.successful_shifts().len(),
    )
}
