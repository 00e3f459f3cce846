use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use std::ops::Deref;
use validator::Validate;
use crate::utils::error::ApiError;

pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// JSON request body. Decode failures become 422s whose `loc` points at the
/// offending field, e.g. `["body", "activityData", 0, "taskId"]`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// JSON body that has also passed its `validator` rules. Handlers taking this
/// never run for a body that fails either step.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// Reads the body and decodes it, tracking the path serde was at when it failed.
fn read_json<T>(req: &HttpRequest, payload: &mut Payload) -> LocalBoxFuture<'static, Result<T, actix_web::Error>>
where
    T: DeserializeOwned + 'static,
{
    if !is_json(req) {
        log::debug!("rejected body for {} {}: content type {:?}", req.method(), req.path(), req.content_type());
        return futures::future::ready(Err(ApiError::content_type().into())).boxed_local();
    }

    let body = web::Bytes::from_request(req, payload);
    let target = format!("{} {}", req.method(), req.path());
    async move {
        let body = body.await?;
        let deserializer = &mut serde_json::Deserializer::from_slice(&body);
        let value: T = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            log::debug!("rejected body for {}: {}", target, err);
            ApiError::from(err)
        })?;
        Ok::<T, actix_web::Error>(value)
    }
    .boxed_local()
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        read_json::<T>(req, payload).map(|res| res.map(JsonBody)).boxed_local()
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = read_json::<T>(req, payload);
        async move {
            let value = json.await?;
            value.validate().map_err(ApiError::from)?;
            Ok::<Self, actix_web::Error>(ValidatedJson(value))
        }
        .boxed_local()
    }
}

/// Body size limit shared by every JSON route.
pub fn payload_config() -> web::PayloadConfig {
    web::PayloadConfig::new(BODY_LIMIT)
}
