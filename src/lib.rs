pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod test_utils;

pub use api::{ApiClient, DashboardApi};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{AppError, Result};
pub use services::{BulkEditSession, EditTracker};
