use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::connectors::errors::ConnectorError;

use super::{UserProfile, UserServiceConnector};

/// Mock User Service for testing and for running without a User Service.
///
/// Knows only the users registered with [`with_user`](Self::with_user); every
/// other id is reported as not found. Ids registered with
/// [`with_unreachable`](Self::with_unreachable) fail like a dead connection.
#[derive(Debug, Default)]
pub struct MockUserServiceConnector {
    users: HashMap<i64, UserProfile>,
    unreachable: HashSet<i64>,
    lookups: AtomicUsize,
}

impl MockUserServiceConnector {
    pub fn with_user(mut self, profile: UserProfile) -> Self {
        self.users.insert(profile.id, profile);
        self
    }

    pub fn with_unreachable(mut self, user_id: i64) -> Self {
        self.unreachable.insert(user_id);
        self
    }

    /// Number of lookups served so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl UserServiceConnector for MockUserServiceConnector {
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<UserProfile>, ConnectorError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.unreachable.contains(&user_id) {
            return Err(ConnectorError::ServiceUnavailable(format!(
                "Connection failed: user {}",
                user_id
            )));
        }

        Ok(self.users.get(&user_id).cloned())
    }
}
