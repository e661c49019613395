//! Public screening API client methods
//!
//! These endpoints sit outside the admin prefix; the request interceptor
//! leaves them untouched regardless of credential presence.

use super::{ApiClient, error::ClientError};
use crate::types::{AssessPayload, AssessResponse, HealthResponse};

impl ApiClient {
    /// Backend liveness probe
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/v1/health");
        self.execute(req).await
    }

    /// Run a risk assessment.
    ///
    /// The backend takes the risk factors as a JSON string in a `payload`
    /// form field (an image part may accompany it; file upload is wired by
    /// the host application).
    pub async fn assess(&self, payload: &AssessPayload) -> Result<AssessResponse, ClientError> {
        let encoded = serde_json::to_string(payload)?;
        let req = self
            .request(reqwest::Method::POST, "/api/v1/assess")
            .form(&[("payload", encoded)]);
        self.execute(req).await
    }
}
