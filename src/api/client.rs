use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use super::DashboardApi;
use crate::config::Config;
use crate::error::Result;
use crate::models::{Employee, EmployeePatch, Shift, ShiftPatch};

const EMPLOYEES_PATH: &str = "employees";
const SHIFTS_PATH: &str = "shifts";

/// JSON-over-HTTP client for the `/employees` and `/shifts` resources.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        log::debug!("GET {}", self.url(path));
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        log::debug!("PATCH {}", self.url(path));
        self.client
            .patch(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        self.get(EMPLOYEES_PATH, &[]).await
    }

    async fn fetch_shifts(&self) -> Result<Vec<Shift>> {
        self.get(SHIFTS_PATH, &[("_sort", "start"), ("_order", "asc")])
            .await
    }

    async fn patch_employee(&self, patch: &EmployeePatch) -> Result<()> {
        self.patch(&format!("{}/{}", EMPLOYEES_PATH, patch.id), patch)
            .await
    }

    async fn patch_shift(&self, patch: &ShiftPatch) -> Result<()> {
        self.patch(&format!("{}/{}", SHIFTS_PATH, patch.id), patch)
            .await
    }
}
