use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One turn of the dashboard chat. Bot replies are stored as their own rows
/// with `is_user_message == false`; the `response` column is carried from
/// the original schema but never populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i32,
    pub user_id: Option<i32>,
    pub message: String,
    pub is_user_message: bool,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewChatMessage {
    #[serde(default)]
    pub user_id: Option<i32>,
    pub message: String,
    pub is_user_message: bool,
    #[serde(default)]
    pub response: Option<String>,
}
