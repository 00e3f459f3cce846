use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use crate::handlers::method_not_allowed;
use crate::models::activity::{Activity, ActivityEntry, AddActivityData, AddActivityRequest, InsertMetadata};
use crate::models::envelope::Envelope;
use crate::utils::config::{ApiVariant, AuthMode, Settings};
use crate::utils::extractors::JsonBody;
use crate::utils::middleware::BearerAuth;

/// Nothing is stored. The acknowledgement does not depend on how many records came in.
pub async fn add_activity_list<A: DeserializeOwned + 'static>(request: JsonBody<AddActivityRequest<A>>) -> HttpResponse {
    let submitted = request.activity_data.len();
    let metadata = InsertMetadata::fabricated();
    if submitted as i64 != metadata.affected_rows {
        log::debug!("{} activities submitted, acknowledging {}", submitted, metadata.affected_rows);
    }

    let data = AddActivityData {
        success: true,
        activities: metadata,
    };
    HttpResponse::Ok().json(Envelope::success(data, "Success"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    // v1 rejects incomplete records, v2 fills the gaps with defaults
    let route = match settings.variant {
        ApiVariant::V1 => web::post().to(add_activity_list::<Activity>),
        ApiVariant::V2 => web::post().to(add_activity_list::<ActivityEntry>),
    };
    cfg.service(
        web::resource("/api/activity/addActivityList")
            .route(route.wrap(BearerAuth::new(settings.auth_mode == AuthMode::Strict)))
            .default_service(web::to(method_not_allowed))
    );
}
