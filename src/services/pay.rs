use serde::Serialize;

use crate::models::{Employee, WorkingHours};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pay {
    pub regular_hours_paid: f64,
    pub overtime_hours_paid: f64,
}

/// `hours × rate`, unrounded.
pub fn pay_for(hours: f64, rate: f64) -> f64 {
    hours * rate
}

pub fn calculate_pay(employee: &Employee, hours: &WorkingHours) -> Pay {
    Pay {
        regular_hours_paid: pay_for(hours.regular_working_hours, employee.hourly_rate),
        overtime_hours_paid: pay_for(hours.overtime_working_hours, employee.hourly_rate_overtime),
    }
}
