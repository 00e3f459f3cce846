pub mod activity_handler;
pub mod auth_handler;
pub mod organisation_handler;
pub mod project_handler;
pub mod task_handler;

use actix_web::{web, HttpResponse};
use serde_json::json;
use crate::utils::config::Settings;
use crate::utils::error::ApiError;
use crate::utils::extractors::payload_config;

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Server is running" }))
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

/// Default service for every resource: a known path hit with the wrong method.
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

/// Registers shared app data and every route the configured variant exposes.
pub fn init_routes(cfg: &mut web::ServiceConfig, settings: &web::Data<Settings>) {
    cfg.app_data(settings.clone())
        .app_data(payload_config())
        .default_service(web::to(not_found));

    cfg.service(
        web::resource("/")
            .route(web::get().to(root))
            .default_service(web::to(method_not_allowed))
    );

    auth_handler::init_routes(cfg, settings);
    organisation_handler::init_routes(cfg, settings);
    project_handler::init_routes(cfg, settings);
    task_handler::init_routes(cfg, settings);
    activity_handler::init_routes(cfg, settings);
}
