use actix_web::{web, HttpResponse, Route};
use crate::fixtures;
use crate::handlers::method_not_allowed;
use crate::models::envelope::Envelope;
use crate::models::project::{ProjectListData, ProjectListRequest};
use crate::utils::config::{ApiVariant, AuthMode, Settings};
use crate::utils::error::ApiError;
use crate::utils::extractors::JsonBody;
use crate::utils::middleware::BearerAuth;

pub async fn get_project_list(
    settings: web::Data<Settings>,
    request: JsonBody<ProjectListRequest>,
) -> Result<HttpResponse, ApiError> {
    log::debug!("project list for organisation {} (not filtered)", request.organisation_id);

    let projects = fixtures::projects(settings.variant)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let data = ProjectListData { project_lists: projects };

    Ok(HttpResponse::Ok().json(Envelope::success(
        data,
        "User organization project list retrieved successfully.",
    )))
}

pub fn project_list_route(settings: &Settings) -> Route {
    web::post()
        .to(get_project_list)
        .wrap(BearerAuth::new(settings.auth_mode == AuthMode::Strict))
}

/// v1 mounts the project listing on the organisation path instead, see `organisation_handler`.
pub fn init_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    if settings.variant == ApiVariant::V2 {
        cfg.service(
            web::resource("/api/project/getProjectList")
                .route(project_list_route(settings))
                .default_service(web::to(method_not_allowed))
        );
    }
}
