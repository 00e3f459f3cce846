use serde::{Serialize, Deserialize};

/// Returned once by sign-in and never stored.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub token: String,
}
