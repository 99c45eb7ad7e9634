use std::sync::Arc;

use crate::connectors::config::ConnectorConfig;
use crate::connectors::errors::ConnectorError;
use crate::connectors::user_service::{mock, UserServiceClient, UserServiceConnector};

/// Initialize User Service connector with config from Settings
///
/// Falls back to a mock that knows no users when the connector is disabled,
/// so every review is enriched with the "unknown user" placeholders.
///
/// # Example
/// ```ignore
/// // In startup.rs
/// let users = connectors::init_user_service(&settings.connectors)?;
/// let service = ReviewService::new(store, users);
/// ```
pub fn init(
    connector_config: &ConnectorConfig,
) -> Result<Arc<dyn UserServiceConnector>, ConnectorError> {
    let connector: Arc<dyn UserServiceConnector> = if let Some(user_service_config) =
        connector_config.user_service.as_ref().filter(|c| c.enabled)
    {
        tracing::info!(
            "Initializing User Service connector: {}",
            user_service_config.base_url
        );
        Arc::new(UserServiceClient::new(user_service_config.clone())?)
    } else {
        tracing::warn!("User Service connector disabled - using mock");
        Arc::new(mock::MockUserServiceConnector::default())
    };

    Ok(connector)
}
