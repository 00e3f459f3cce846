use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

/// Strict activity record: every field must be present.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub task_id: i64,
    pub project_id: i64,
    #[serde(deserialize_with = "crate::utils::datetime::deserialize")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "crate::utils::datetime::deserialize")]
    pub end_time: NaiveDateTime,
    pub mouse_activity: i64,
    pub keyboard_activity: i64,
    pub total_activity: i64,
    pub notes: String,
    pub organisation_id: i64,
    pub uri: String,
    pub un_tracked_time: i64,
}

/// Lenient activity record: missing fields fall back to zero or empty.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityEntry {
    pub task_id: i64,
    pub project_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub mouse_activity: i64,
    pub keyboard_activity: i64,
    pub total_activity: i64,
    pub notes: String,
    pub organisation_id: i64,
    pub uri: String,
    pub un_tracked_time: i64,
    pub billable: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddActivityRequest<A> {
    pub activity_data: Vec<A>,
}

/// Mimics the acknowledgement a MySQL driver returns for an INSERT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMetadata {
    pub field_count: i64,
    pub affected_rows: i64,
    pub insert_id: i64,
    pub server_status: i64,
    pub warning_count: i64,
    pub message: String,
    pub protocol41: bool,
    pub changed_rows: i64,
}

impl InsertMetadata {
    /// The acknowledgement is always the same, whatever was submitted.
    pub fn fabricated() -> Self {
        InsertMetadata {
            field_count: 0,
            affected_rows: 1,
            insert_id: 2283680,
            server_status: 2,
            warning_count: 0,
            message: String::new(),
            protocol41: true,
            changed_rows: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddActivityData {
    pub success: bool,
    pub activities: InsertMetadata,
}
