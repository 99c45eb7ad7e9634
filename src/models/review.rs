use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,         // assigned by the store on insert
    pub product_id: i64, // id of the external product
    pub user_id: i64,    // id of the author in User Service
    pub rating: i32,     // 1..=5
    pub title: String,
    pub comment: String,
    pub review_date: DateTime<Utc>, // set once on creation
}
