use chrono::{FixedOffset, TimeZone};

use crate::api::DashboardApi;
use crate::error::Result;
use crate::models::{
    BulkUpdateRequest, BulkUpdateResponse, Employee, EmployeeWithShifts, ModalPayload,
    OverallData, Shift,
};
use crate::services::bulk_edit::BulkEditSession;
use crate::services::bulk_update::{refresh_data, summarize, update_data};
use crate::services::employee_mapper::enrich_employees;

/// Owns the enriched employee collection and is the only place it changes.
#[derive(Debug, Clone)]
pub struct Dashboard<Tz: TimeZone = FixedOffset> {
    tz: Tz,
    employees: Vec<EmployeeWithShifts>,
    total_shifts: usize,
}

impl<Tz: TimeZone> Dashboard<Tz> {
    pub fn new(tz: Tz, employees: Vec<Employee>, shifts: Vec<Shift>) -> Result<Self> {
        let employees = enrich_employees(&tz, employees, &shifts)?;
        Ok(Self {
            tz,
            employees,
            total_shifts: shifts.len(),
        })
    }

    /// Fetches employees and shifts concurrently and derives the enriched view.
    pub async fn load<A>(api: &A, tz: Tz) -> Result<Self>
    where
        A: DashboardApi + ?Sized,
    {
        let (employees, shifts) = tokio::try_join!(api.fetch_employees(), api.fetch_shifts())?;
        log::info!(
            "Dashboard loaded: {} employees, {} shifts",
            employees.len(),
            shifts.len()
        );
        Self::new(tz, employees, shifts)
    }

    pub fn employees(&self) -> &[EmployeeWithShifts] {
        &self.employees
    }

    pub fn employee(&self, id: &str) -> Option<&EmployeeWithShifts> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn total_shifts(&self) -> usize {
        self.total_shifts
    }

    pub fn overall(&self) -> OverallData {
        self.employees
            .iter()
            .fold(OverallData::default(), |mut total, employee| {
                total.total_hours += employee.total_clocked_in_time;
                total.regular_hours_paid += employee.regular_hours_paid;
                total.overtime_hours_paid += employee.overtime_hours_paid;
                total
            })
    }

    /// Opens a bulk edit over the selected employees. Unknown ids are skipped.
    pub fn open_bulk_edit(&self, employee_ids: &[&str]) -> Result<BulkEditSession> {
        let selected = self
            .employees
            .iter()
            .filter(|e| employee_ids.contains(&e.id()))
            .cloned()
            .collect();
        BulkEditSession::open(selected)
    }

    /// Merges a finished batch into the collection and returns its summary.
    pub fn apply_bulk_update(&mut self, response: &BulkUpdateResponse) -> Result<String> {
        self.employees = refresh_data(&self.tz, &self.employees, response)?;
        let message = summarize(response);
        log::info!("{}", message);
        Ok(message)
    }

    /// Handles a closed edit dialog. `Cancel` changes nothing and yields no message.
    pub async fn submit<A>(
        &mut self,
        api: &A,
        payload: ModalPayload<BulkUpdateRequest>,
    ) -> Result<Option<String>>
    where
        A: DashboardApi + ?Sized,
    {
        match payload {
            ModalPayload::Cancel => Ok(None),
            ModalPayload::Action(request) => {
                let response = update_data(api, request).await;
                self.apply_bulk_update(&response).map(Some)
            }
        }
    }
}
