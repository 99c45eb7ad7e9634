use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `POST /api/reviews`.
///
/// `rating` and `comment` stay optional here so that a missing value is reported
/// as a validation error of that field instead of a deserialize error.
/// A `reviewDate` sent by the client is ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddReview {
    pub product_id: i64,
    pub user_id: i64,
    pub rating: Option<i32>,
    #[serde(default)]
    #[validate(max_length = 255)]
    pub title: String,
    #[validate(max_length = 500)]
    pub comment: Option<String>,
}
