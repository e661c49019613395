//! Authentication API client methods

use super::{ApiClient, error::ClientError};
use crate::types::{LoginRequest, Token};

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, username: String, password: String) -> Result<Token, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/admin/auth/login")
            .json(&LoginRequest { username, password });
        self.execute(req).await
    }
}
