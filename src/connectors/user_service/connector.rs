use super::types::UserProfile;
use crate::connectors::errors::ConnectorError;

/// Trait for User Service integration
/// Allows mocking in tests and swapping implementations
#[async_trait::async_trait]
pub trait UserServiceConnector: Send + Sync {
    /// Fetch the public profile of a user.
    ///
    /// `Ok(None)` when the User Service answers 404, `Err` for every other failure.
    /// Implementations make exactly one attempt.
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserProfile>, ConnectorError>;
}
