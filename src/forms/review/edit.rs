use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `PUT /api/reviews/{id}`. All three fields replace the stored ones.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditReview {
    pub rating: i32,
    #[serde(default)]
    #[validate(max_length = 255)]
    pub title: String,
    #[validate(max_length = 500)]
    pub comment: String,
}

impl EditReview {
    pub fn update(self, review: &mut models::Review) {
        review.rating = self.rating;
        review.title = self.title;
        review.comment = self.comment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn update_keeps_identity_fields() {
        let created = Utc::now();
        let mut review = models::Review {
            id: 3,
            product_id: 10,
            user_id: 20,
            rating: 2,
            title: "meh".to_string(),
            comment: "not great".to_string(),
            review_date: created,
        };

        EditReview {
            rating: 4,
            title: "better".to_string(),
            comment: "grew on me".to_string(),
        }
        .update(&mut review);

        assert_eq!(review.id, 3);
        assert_eq!(review.product_id, 10);
        assert_eq!(review.user_id, 20);
        assert_eq!(review.review_date, created);
        assert_eq!(review.rating, 4);
        assert_eq!(review.title, "better");
        assert_eq!(review.comment, "grew on me");
    }

    #[test]
    fn title_may_be_omitted() {
        let form: EditReview =
            serde_json::from_str(r#"{"rating": 5, "comment": "fine"}"#).unwrap();
        assert_eq!(form.title, "");
    }
}
