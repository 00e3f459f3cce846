mod activity_handler_test;

use actix_web::web;
use crate::utils::config::{ApiVariant, AuthMode, Settings};

pub fn settings_for(variant: ApiVariant) -> web::Data<Settings> {
    web::Data::new(Settings::for_variant(variant))
}

pub fn with_auth(variant: ApiVariant, auth_mode: AuthMode) -> web::Data<Settings> {
    let mut settings = Settings::for_variant(variant);
    settings.auth_mode = auth_mode;
    web::Data::new(settings)
}
