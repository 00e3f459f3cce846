use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use crate::handlers::method_not_allowed;
use crate::models::claims::Claims;
use crate::models::credentials::Credentials;
use crate::models::envelope::Envelope;
use crate::models::session::Session;
use crate::utils::config::{ApiVariant, Settings};
use crate::utils::error::ApiError;
use crate::utils::extractors::ValidatedJson;
use crate::utils::middleware::{BearerAuth, BearerToken};

pub async fn signin(
    settings: web::Data<Settings>,
    credentials: ValidatedJson<Credentials>,
) -> Result<HttpResponse, ApiError> {
    let account = &settings.account;
    if credentials.email != account.email || credentials.password != account.password {
        return Err(ApiError::invalid_credentials());
    }

    let claims = Claims {
        user_id: account.user_id,
        sub: credentials.email.clone(),
        exp: (Utc::now() + Duration::hours(24)).timestamp() as usize,
    };
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(settings.token_secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    log::info!("signed in user {}", account.user_id);

    Ok(HttpResponse::Ok().json(Session {
        user_id: account.user_id,
        first_name: account.first_name.clone(),
        last_name: account.last_name.clone(),
        email: credentials.into_inner().email,
        token,
    }))
}

/// Nothing is invalidated; the bearer check in front of this route is the whole contract.
pub async fn signout(token: web::ReqData<BearerToken>) -> HttpResponse {
    log::debug!("sign-out accepted for a {}-byte token", token.0.len());
    HttpResponse::Ok().json(Envelope::success(json!({}), "Signed out successfully"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig, settings: &Settings) {
    cfg.service(
        web::resource("/api/auth/signin")
            .route(web::post().to(signin))
            .default_service(web::to(method_not_allowed))
    );

    if settings.variant == ApiVariant::V2 {
        cfg.service(
            web::resource("/api/auth/signout")
                .route(web::get().to(signout).wrap(BearerAuth::required()))
                .default_service(web::to(method_not_allowed))
        );
    }
}
