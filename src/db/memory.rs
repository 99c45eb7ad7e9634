use std::collections::BTreeMap;

use tokio::sync::Mutex;

use super::ReviewStore;
use crate::models;

#[derive(Debug, Default)]
struct State {
    last_id: i64,
    rows: BTreeMap<i64, models::Review>,
}

/// Process-local store, ids start at 1. Lists come back ordered by id like the
/// PostgreSQL store.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    state: Mutex<State>,
}

impl InMemoryReviewStore {
    pub async fn len(&self) -> usize {
        self.state.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn insert(&self, mut review: models::Review) -> Result<models::Review, String> {
        let mut state = self.state.lock().await;
        state.last_id += 1;
        review.id = state.last_id;
        state.rows.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<models::Review>, String> {
        Ok(self.state.lock().await.rows.get(&id).cloned())
    }

    async fn find_by_product_id(&self, product_id: i64) -> Result<Vec<models::Review>, String> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .values()
            .filter(|review| review.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<models::Review>, String> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .values()
            .filter(|review| review.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, String> {
        Ok(self.state.lock().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), String> {
        self.state.lock().await.rows.remove(&id);
        Ok(())
    }

    async fn save(&self, review: models::Review) -> Result<models::Review, String> {
        let mut state = self.state.lock().await;
        state.last_id = state.last_id.max(review.id);
        state.rows.insert(review.id, review.clone());
        Ok(review)
    }
}
