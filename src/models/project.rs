use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListRequest {
    // accepted, never used to filter
    pub organisation_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUser {
    pub user_id: i64,
    pub full_name: String,
    pub profile_image: Option<String>,
}

/// v1 sends project members as a JSON list, v2 as that list encoded into a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectUsers {
    Members(Vec<ProjectUser>),
    Encoded(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: i64,
    pub name: String,
    pub status: i32,
    pub start_date: NaiveDateTime,
    pub users: ProjectUsers,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListData {
    pub project_lists: Vec<Project>,
}
