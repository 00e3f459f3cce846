use actix_web::{web, HttpResponse};
use crate::fixtures;
use crate::handlers::method_not_allowed;
use crate::models::envelope::Envelope;
use crate::models::task::{TaskDetail, TaskListData, TaskListRequest};
use crate::utils::config::{AuthMode, Settings, TaskListing};
use crate::utils::extractors::JsonBody;
use crate::utils::middleware::BearerAuth;

/// Picks the tasks a request gets back. `organisation_id` never narrows the result.
pub fn select_tasks(table: &[TaskDetail], listing: TaskListing, project_id: i64) -> Vec<TaskDetail> {
    match listing {
        TaskListing::Fixed => table.to_vec(),
        TaskListing::Filtered => table
            .iter()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect(),
    }
}

pub async fn get_task_by_project_id(
    settings: web::Data<Settings>,
    request: JsonBody<TaskListRequest>,
) -> HttpResponse {
    let tasks = select_tasks(fixtures::tasks(settings.variant), settings.task_listing, request.project_id);
    log::debug!(
        "{} task(s) for project {} in organisation {}",
        tasks.len(),
        request.project_id,
        request.organisation_id
    );

    HttpResponse::Ok().json(Envelope::success(TaskListData { task_details: tasks }, "Success"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    cfg.service(
        web::resource("/api/task/getTaskByProjectId").route(
            web::post()
                .to(get_task_by_project_id)
                .wrap(BearerAuth::new(settings.auth_mode == AuthMode::Strict)),
        )
        .default_service(web::to(method_not_allowed))
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::ApiVariant;

    #[test]
    fn filtered_listing_is_an_exact_match() {
        let table = fixtures::tasks(ApiVariant::V2);

        let ids: Vec<i64> = select_tasks(table, TaskListing::Filtered, 101)
            .iter()
            .map(|task| task.task_id)
            .collect();
        assert_eq!(ids, vec![1663, 1670]);

        assert_eq!(select_tasks(table, TaskListing::Filtered, 102).len(), 1);
        assert!(select_tasks(table, TaskListing::Filtered, 999).is_empty());
    }

    #[test]
    fn fixed_listing_ignores_the_project() {
        let table = fixtures::tasks(ApiVariant::V1);

        assert_eq!(select_tasks(table, TaskListing::Fixed, 999), table.to_vec());
        assert_eq!(select_tasks(table, TaskListing::Fixed, 803).len(), 3);
    }
}
