//! The fixed records every listing endpoint serves. Built once, never mutated.

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::LazyLock;
use crate::models::organisation::Organization;
use crate::models::project::{Project, ProjectUser, ProjectUsers};
use crate::models::task::TaskDetail;
use crate::utils::config::ApiVariant;

pub static ORGANISATIONS: LazyLock<Vec<Organization>> = LazyLock::new(|| {
    vec![
        Organization {
            name: String::from("ExampleOrg"),
            organisation_id: 123,
            image: String::from("https://example.com/images/org123.png"),
            role_id: 2,
            enable_screenshot: 0,
            description: String::from("Example organization description"),
            role: String::from("Admin"),
            other_role_ids: vec![3, 4],
        },
        Organization {
            name: String::from("TestOrg"),
            organisation_id: 456,
            image: String::from("https://example.com/images/org456.png"),
            role_id: 3,
            enable_screenshot: 1,
            description: String::from("Test organization for demo purposes"),
            role: String::from("User"),
            other_role_ids: vec![],
        },
    ]
});

/// Projects with their members as a structured list.
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            project_id: 101,
            name: String::from("Project Alpha"),
            status: 0,
            start_date: timestamp(2023, 1, 1, 10, 0),
            users: ProjectUsers::Members(vec![
                member(201, "John Doe", None),
                member(202, "Jane Smith", None),
            ]),
        },
        Project {
            project_id: 102,
            name: String::from("Project Beta"),
            status: 0,
            start_date: timestamp(2024, 2, 15, 9, 30),
            users: ProjectUsers::Members(vec![
                member(301, "Alice Brown", Some("https://example.com/profiles/301.jpg")),
                member(302, "Bob White", Some("https://example.com/profiles/302.jpg")),
            ]),
        },
    ]
});

/// Tasks served by v1: all in one project unrelated to the project table.
pub static V1_TASKS: LazyLock<Vec<TaskDetail>> = LazyLock::new(|| {
    vec![
        TaskDetail::untracked(1663, "Introduction", 803, "AI-ML", 698),
        TaskDetail::untracked(1670, "Interview", 803, "AI-ML", 698),
        TaskDetail::untracked(1684, "AI Database Query Generator", 803, "AI-ML", 698),
    ]
});

/// Tasks served by v2: two in project 101, one in 102.
pub static V2_TASKS: LazyLock<Vec<TaskDetail>> = LazyLock::new(|| {
    vec![
        TaskDetail::untracked(1663, "Introduction", 101, "Project Alpha", 123),
        TaskDetail::untracked(1670, "Interview", 101, "Project Alpha", 123),
        TaskDetail::untracked(1684, "AI Database Query Generator", 102, "Project Beta", 123),
    ]
});

pub fn tasks(variant: ApiVariant) -> &'static [TaskDetail] {
    match variant {
        ApiVariant::V1 => V1_TASKS.as_slice(),
        ApiVariant::V2 => V2_TASKS.as_slice(),
    }
}

/// Project table in the variant's wire shape. v2 encodes each member list into a JSON string.
pub fn projects(variant: ApiVariant) -> Result<Vec<Project>, serde_json::Error> {
    match variant {
        ApiVariant::V1 => Ok(PROJECTS.clone()),
        ApiVariant::V2 => PROJECTS
            .iter()
            .map(|project| -> Result<Project, serde_json::Error> {
                let users = match &project.users {
                    ProjectUsers::Members(members) => ProjectUsers::Encoded(serde_json::to_string(members)?),
                    encoded @ ProjectUsers::Encoded(_) => encoded.clone(),
                };
                Ok(Project { users, ..project.clone() })
            })
            .collect(),
    }
}

fn member(user_id: i64, full_name: &str, profile_image: Option<&str>) -> ProjectUser {
    ProjectUser {
        user_id,
        full_name: full_name.to_string(),
        profile_image: profile_image.map(str::to_string),
    }
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}
