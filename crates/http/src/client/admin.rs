//! Administrative API client methods
//!
//! Everything here lives under the admin prefix, so the request interceptor
//! attaches the stored bearer credential and a 401 lands in the login
//! redirect path.

use super::{ApiClient, error::ClientError};
use crate::types::{
    DashboardMetrics, PatientCreate, PatientOut, ResourceCreate, ResourceOut, ScheduleCreate,
    ScheduleOut, UserCreate, UserOut,
};

impl ApiClient {
    /// List portal users
    pub async fn list_users(&self) -> Result<Vec<UserOut>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/admin/users");
        self.execute(req).await
    }

    /// Create a portal user
    pub async fn create_user(&self, user: UserCreate) -> Result<UserOut, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/users")
            .json(&user);
        self.execute(req).await
    }

    /// List patients
    pub async fn list_patients(&self) -> Result<Vec<PatientOut>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/admin/patients");
        self.execute(req).await
    }

    /// Create a patient record
    pub async fn create_patient(&self, patient: PatientCreate) -> Result<PatientOut, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/patients")
            .json(&patient);
        self.execute(req).await
    }

    /// Delete a patient record
    pub async fn delete_patient(&self, patient_id: i64) -> Result<serde_json::Value, ClientError> {
        let req = self.request(
            reqwest::Method::DELETE,
            &format!("/admin/patients/{patient_id}"),
        );
        self.execute(req).await
    }

    /// List bookable resources
    pub async fn list_resources(&self) -> Result<Vec<ResourceOut>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/admin/resources");
        self.execute(req).await
    }

    /// Create a bookable resource
    pub async fn create_resource(
        &self,
        resource: ResourceCreate,
    ) -> Result<ResourceOut, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/resources")
            .json(&resource);
        self.execute(req).await
    }

    /// List schedules, newest first
    pub async fn list_schedules(&self) -> Result<Vec<ScheduleOut>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/admin/schedules");
        self.execute(req).await
    }

    /// Create a schedule entry
    pub async fn create_schedule(
        &self,
        schedule: ScheduleCreate,
    ) -> Result<ScheduleOut, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/schedules")
            .json(&schedule);
        self.execute(req).await
    }

    /// Dashboard counters and risk distribution
    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, ClientError> {
        let req = self.request(reqwest::Method::GET, "/admin/dashboard/metrics");
        self.execute(req).await
    }
}
