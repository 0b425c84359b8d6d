use chrono::TimeZone;

use crate::error::Result;
use crate::models::{Employee, EmployeeWithShifts, MILLIS_PER_HOUR, Shift};
use crate::services::pay::calculate_pay;
use crate::services::time_aggregator::{calculate_regular_and_overtime_hours, worked_millis_per_day};

pub fn employee_shifts(shifts: &[Shift], employee_id: &str) -> Vec<Shift> {
    shifts
        .iter()
        .filter(|s| s.employee_id == employee_id)
        .cloned()
        .collect()
}

pub fn map_total_clocked_in_time_to_shifts(shifts: Vec<Shift>) -> Vec<Shift> {
    shifts
        .into_iter()
        .map(|shift| Shift {
            total_clock_in_time: shift.duration_hours(),
            ..shift
        })
        .collect()
}

/// Builds the enriched view of one employee from scratch.
///
/// Deterministic in its inputs; the same employee and shifts always yield the same record.
pub fn map_shifts_to_employee<Tz: TimeZone>(
    tz: &Tz,
    employee: Employee,
    shifts: Vec<Shift>,
) -> Result<EmployeeWithShifts> {
    let shifts = map_total_clocked_in_time_to_shifts(shifts);
    let total_clocked_in_time =
        shifts.iter().map(Shift::duration_millis).sum::<i64>() as f64 / MILLIS_PER_HOUR;
    let time_by_day = worked_millis_per_day(tz, &shifts)?;
    let hours = calculate_regular_and_overtime_hours(&time_by_day);
    let pay = calculate_pay(&employee, &hours);

    Ok(EmployeeWithShifts {
        employee,
        shifts,
        total_clocked_in_time,
        time_by_day,
        regular_working_hours: hours.regular_working_hours,
        overtime_working_hours: hours.overtime_working_hours,
        regular_hours_paid: pay.regular_hours_paid,
        overtime_hours_paid: pay.overtime_hours_paid,
    })
}

/// Enriches every employee with its own slice of the flat shift list.
pub fn enrich_employees<Tz: TimeZone>(
    tz: &Tz,
    employees: Vec<Employee>,
    shifts: &[Shift],
) -> Result<Vec<EmployeeWithShifts>> {
    employees
        .into_iter()
        .map(|employee| {
            let own = employee_shifts(shifts, &employee.id);
            map_shifts_to_employee(tz, employee, own)
        })
        .collect()
}
