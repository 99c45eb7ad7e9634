use crate::connectors::config::UserServiceConfig;
use crate::connectors::errors::ConnectorError;

use reqwest::StatusCode;
use tracing::Instrument;

use super::connector::UserServiceConnector;
use super::types::UserProfile;

/// HTTP-based User Service client
pub struct UserServiceClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl UserServiceClient {
    /// Create new User Service client
    pub fn new(config: UserServiceConfig) -> Result<Self, ConnectorError> {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConnectorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Lookup URL for a single user: `{base_url}/api/users/{id}`
    pub(crate) fn user_url(&self, user_id: i64) -> String {
        format!("{}/api/users/{}", self.base_url, user_id)
    }

    async fn fetch_user(&self, user_id: i64) -> Result<Option<UserProfile>, ConnectorError> {
        let resp = self
            .http_client
            .get(self.user_url(user_id))
            .send()
            .await
            .map_err(ConnectorError::from)?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ConnectorError::HttpError(format!(
                "User Service error ({}): {}",
                status.as_u16(),
                body
            )));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ConnectorError::HttpError(e.to_string()))?;
        // an empty 200 body or a literal `null` means there is no such user
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<UserProfile>>(&text)
            .map_err(|_| ConnectorError::InvalidResponse(text))
    }
}

#[async_trait::async_trait]
impl UserServiceConnector for UserServiceClient {
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserProfile>, ConnectorError> {
        let span = tracing::info_span!("user_service_get_user", user_id = user_id);

        match self.fetch_user(user_id).instrument(span).await {
            Ok(Some(profile)) => Ok(Some(profile)),
            Ok(None) => {
                tracing::info!("User {} not found in User Service", user_id);
                Ok(None)
            }
            Err(err) => {
                tracing::error!(
                    "Failed to fetch user {} from User Service: {}",
                    user_id,
                    err
                );
                Err(err)
            }
        }
    }
}
