use serde::Serialize;

/// Totals across every employee on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallData {
    pub total_hours: f64,
    pub regular_hours_paid: f64,
    pub overtime_hours_paid: f64,
}
