use crate::connectors::UserProfile;
use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_USERNAME: &str = "Usuario Desconocido";
pub const UNKNOWN_FULL_NAME: &str = "N/A";

/// A review together with the public data of its author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enriched {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub review_date: DateTime<Utc>,
    pub username: String,
    pub full_name: Option<String>, // null when the author never set one
}

impl Enriched {
    /// `author` is `None` when User Service does not know the user.
    pub fn new(review: models::Review, author: Option<UserProfile>) -> Self {
        let (username, full_name) = match author {
            Some(profile) => (profile.username, profile.full_name),
            None => (
                UNKNOWN_USERNAME.to_string(),
                Some(UNKNOWN_FULL_NAME.to_string()),
            ),
        };

        Self {
            id: review.id,
            product_id: review.product_id,
            user_id: review.user_id,
            rating: review.rating,
            title: review.title,
            comment: review.comment,
            review_date: review.review_date,
            username,
            full_name,
        }
    }
}
