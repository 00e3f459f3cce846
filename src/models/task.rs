use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListRequest {
    pub project_id: i64,
    pub organisation_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub task_id: i64,
    pub name: String,
    pub project_id: i64,
    pub project_name: String,
    pub organisation_id: i64,
    pub time: Option<NaiveDateTime>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub screenshots: String,
    pub notes: String,
    pub un_tracked_time: Option<i64>,
    pub last_screen_shot_time: String,
    /// Seconds.
    pub total_time: i64,
}

impl TaskDetail {
    /// A task with nothing tracked yet.
    pub fn untracked(task_id: i64, name: &str, project_id: i64, project_name: &str, organisation_id: i64) -> Self {
        TaskDetail {
            task_id,
            name: name.to_string(),
            project_id,
            project_name: project_name.to_string(),
            organisation_id,
            time: None,
            start_time: None,
            end_time: None,
            screenshots: String::new(),
            notes: String::new(),
            un_tracked_time: None,
            last_screen_shot_time: String::from("00:00:00"),
            total_time: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListData {
    pub task_details: Vec<TaskDetail>,
}
