//! External Service Connectors
//!
//! Adapters for communicating with services this one depends on. Today that is
//! only the User Service, used to resolve the author of a review.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `{service}/connector.rs` → allows mocking in tests
//! 2. Implement the HTTP client next to it in `client.rs`
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. Inject the trait object into `ReviewService` → business logic never depends on HTTP
//!
//! ## Testing
//!
//! ```ignore
//! let users = MockUserServiceConnector::default().with_user(UserProfile { .. });
//! let service = ReviewService::new(Arc::new(InMemoryReviewStore::default()), Arc::new(users));
//! ```

pub mod config;
pub mod errors;
pub mod user_service;

pub use config::{ConnectorConfig, UserServiceConfig};
pub use errors::ConnectorError;
pub use user_service::{
    mock::MockUserServiceConnector, UserProfile, UserServiceClient, UserServiceConnector,
};

pub use user_service::init as init_user_service;
