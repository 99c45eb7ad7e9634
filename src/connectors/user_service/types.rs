use serde::{Deserialize, Serialize};

/// Public profile of a user as returned by `GET /api/users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>, // not every user has filled it in
}
