mod errors;

pub use errors::ReviewError;

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use futures::future::try_join_all;

use crate::connectors::UserServiceConnector;
use crate::db::ReviewStore;
use crate::forms;
use crate::models;
use crate::views;

/// Review operations on top of a store and the User Service
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
    users: Arc<dyn UserServiceConnector>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>, users: Arc<dyn UserServiceConnector>) -> Self {
        Self { store, users }
    }

    #[tracing::instrument(name = "Create review.", skip(self))]
    pub async fn create_review(&self, form: forms::review::Add) -> Result<models::Review, ReviewError> {
        let rating = match form.rating {
            Some(rating) if (1..=5).contains(&rating) => rating,
            _ => {
                return Err(ReviewError::validation(
                    "rating",
                    "Rating must be between 1 and 5.",
                ))
            }
        };
        let comment = match form.comment {
            Some(comment) if !comment.trim().is_empty() => comment,
            _ => {
                return Err(ReviewError::validation(
                    "comment",
                    "Comment cannot be empty.",
                ))
            }
        };

        check_sizes(&form.title, &comment)?;

        // TIMESTAMPTZ keeps microseconds
        let review = models::Review {
            id: 0,
            product_id: form.product_id,
            user_id: form.user_id,
            rating,
            title: form.title,
            comment,
            review_date: Utc::now().trunc_subsecs(6),
        };

        let review = self.store.insert(review).await.map_err(ReviewError::Store)?;
        tracing::info!("New review {} has been saved", review.id);

        Ok(review)
    }

    #[tracing::instrument(name = "Get reviews of a product.", skip(self))]
    pub async fn get_reviews_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<views::review::Enriched>, ReviewError> {
        let reviews = self
            .store
            .find_by_product_id(product_id)
            .await
            .map_err(ReviewError::Store)?;

        self.enrich_all(reviews).await
    }

    #[tracing::instrument(name = "Get reviews of a user.", skip(self))]
    pub async fn get_reviews_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<views::review::Enriched>, ReviewError> {
        let reviews = self
            .store
            .find_by_user_id(user_id)
            .await
            .map_err(ReviewError::Store)?;

        self.enrich_all(reviews).await
    }

    #[tracing::instrument(name = "Get review.", skip(self))]
    pub async fn get_review_by_id(
        &self,
        id: i64,
    ) -> Result<Option<views::review::Enriched>, ReviewError> {
        match self.store.find_by_id(id).await.map_err(ReviewError::Store)? {
            Some(review) => self.enrich(review).await.map(Some),
            None => Ok(None),
        }
    }

    /// Replaces rating, title and comment. Only the column sizes are checked;
    /// the rating range and blank comment checks of `create_review` are not.
    #[tracing::instrument(name = "Update review.", skip(self))]
    pub async fn update_review(
        &self,
        id: i64,
        form: forms::review::Edit,
    ) -> Result<models::Review, ReviewError> {
        check_sizes(&form.title, &form.comment)?;

        let mut review = self
            .store
            .find_by_id(id)
            .await
            .map_err(ReviewError::Store)?
            .ok_or(ReviewError::NotFound(id))?;

        form.update(&mut review);

        self.store.save(review).await.map_err(ReviewError::Store)
    }

    /// `Ok(false)` when there was nothing to delete
    #[tracing::instrument(name = "Delete review.", skip(self))]
    pub async fn delete_review(&self, id: i64) -> Result<bool, ReviewError> {
        if !self.store.exists_by_id(id).await.map_err(ReviewError::Store)? {
            return Ok(false);
        }

        self.store.delete_by_id(id).await.map_err(ReviewError::Store)?;
        Ok(true)
    }

    async fn enrich(&self, review: models::Review) -> Result<views::review::Enriched, ReviewError> {
        let author = self.users.get_user_by_id(review.user_id).await?;
        Ok(views::review::Enriched::new(review, author))
    }

    // Lookups run concurrently; output keeps the store order and the first
    // transport error fails the whole list.
    async fn enrich_all(
        &self,
        reviews: Vec<models::Review>,
    ) -> Result<Vec<views::review::Enriched>, ReviewError> {
        try_join_all(reviews.into_iter().map(|review| self.enrich(review))).await
    }
}

impl std::fmt::Debug for ReviewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewService").finish_non_exhaustive()
    }
}

fn check_sizes(title: &str, comment: &str) -> Result<(), ReviewError> {
    if title.chars().count() > forms::review::TITLE_MAX_CHARS {
        return Err(ReviewError::validation(
            "title",
            &format!(
                "Title must be at most {} characters.",
                forms::review::TITLE_MAX_CHARS
            ),
        ));
    }
    if comment.chars().count() > forms::review::COMMENT_MAX_CHARS {
        return Err(ReviewError::validation(
            "comment",
            &format!(
                "Comment must be at most {} characters.",
                forms::review::COMMENT_MAX_CHARS
            ),
        ));
    }
    Ok(())
}
