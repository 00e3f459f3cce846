use actix_web::{web, HttpResponse};
use crate::fixtures::ORGANISATIONS;
use crate::handlers::{method_not_allowed, project_handler};
use crate::models::envelope::Envelope;
use crate::models::organisation::OrganisationListData;
use crate::utils::config::{ApiVariant, Settings};

pub const ORGANISATION_PATH: &str = "/api/organisation/getUserOrganization";

// No bearer check here in either variant, unlike the other listings.
pub async fn get_user_organisations() -> HttpResponse {
    let data = OrganisationListData {
        organisation_list: ORGANISATIONS.clone(),
    };
    HttpResponse::Ok().json(Envelope::success(data, "User organisation list"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    let resource = web::resource(ORGANISATION_PATH)
        .route(web::get().to(get_user_organisations))
        .default_service(web::to(method_not_allowed));

    // v1 lists projects from the POST side of the same path
    let resource = match settings.variant {
        ApiVariant::V1 => resource.route(project_handler::project_list_route(settings)),
        ApiVariant::V2 => resource,
    };
    cfg.service(resource);
}
