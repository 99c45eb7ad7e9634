pub mod memory;
pub mod review;

use crate::models;
use sqlx::PgPool;

pub use memory::InMemoryReviewStore;

/// Keyed storage of reviews.
///
/// Only single-record writes are expected to be atomic. Errors are already
/// logged by the implementation when they are returned.
#[async_trait::async_trait]
pub trait ReviewStore: Send + Sync {
    /// Store a new review and return it with the assigned id
    async fn insert(&self, review: models::Review) -> Result<models::Review, String>;

    async fn find_by_id(&self, id: i64) -> Result<Option<models::Review>, String>;

    async fn find_by_product_id(&self, product_id: i64) -> Result<Vec<models::Review>, String>;

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<models::Review>, String>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, String>;

    async fn delete_by_id(&self, id: i64) -> Result<(), String>;

    /// Insert or overwrite the review with `review.id`
    async fn save(&self, review: models::Review) -> Result<models::Review, String>;
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ReviewStore for PgReviewStore {
    async fn insert(&self, review: models::Review) -> Result<models::Review, String> {
        review::insert(&self.pool, review).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<models::Review>, String> {
        review::fetch(&self.pool, id).await
    }

    async fn find_by_product_id(&self, product_id: i64) -> Result<Vec<models::Review>, String> {
        review::fetch_by_product(&self.pool, product_id).await
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<models::Review>, String> {
        review::fetch_by_user(&self.pool, user_id).await
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, String> {
        review::exists(&self.pool, id).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), String> {
        review::delete(&self.pool, id).await.map(|_| ())
    }

    async fn save(&self, review: models::Review) -> Result<models::Review, String> {
        review::save(&self.pool, review).await
    }
}
