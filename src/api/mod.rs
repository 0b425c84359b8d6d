use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Employee, EmployeePatch, Shift, ShiftPatch};

pub mod client;

pub use client::ApiClient;

/// Backend the dashboard reads from and persists edits to.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_employees(&self) -> Result<Vec<Employee>>;

    /// Shifts sorted by start, ascending.
    async fn fetch_shifts(&self) -> Result<Vec<Shift>>;

    async fn patch_employee(&self, patch: &EmployeePatch) -> Result<()>;

    async fn patch_shift(&self, patch: &ShiftPatch) -> Result<()>;
}
