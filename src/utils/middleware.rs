use actix_service::{Service, Transform};
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::body::EitherBody;
use actix_web::{dev::ServiceRequest, dev::ServiceResponse, HttpMessage, HttpResponse};
use futures::future::{ok, ready, LocalBoxFuture, Ready};
use futures::FutureExt;
use std::task::{Context, Poll};
use crate::utils::error::ApiError;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Whatever followed the `Bearer ` prefix. Never decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct BearerToken(pub String);

/// Returns the token part of the `Authorization` header when it carries the bearer prefix.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Rejects requests whose `Authorization` header does not start with `Bearer `.
/// When not enforced, requests pass through untouched.
pub struct BearerAuth {
    enforced: bool,
}

impl BearerAuth {
    pub fn new(enforced: bool) -> Self {
        BearerAuth { enforced }
    }

    pub fn required() -> Self {
        BearerAuth::new(true)
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = BearerAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(BearerAuthService {
            service,
            enforced: self.enforced,
        })
    }
}

pub struct BearerAuthService<S> {
    service: S,
    enforced: bool,
}

impl<S, B> BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    fn pass(&self, req: ServiceRequest) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, actix_web::Error>> {
        self.service
            .call(req)
            .map(|res| res.map(ServiceResponse::map_into_left_body))
            .boxed_local()
    }
}

impl<S, B> Service<ServiceRequest> for BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.enforced {
            return self.pass(req);
        }

        let token = bearer_token(req.headers()).map(str::to_owned);
        match token {
            Some(token) => {
                req.extensions_mut().insert(BearerToken(token));
                self.pass(req)
            }
            None => {
                log::debug!("rejected {} {}: no bearer prefix", req.method(), req.path());
                let response = HttpResponse::from_error(ApiError::invalid_token()).map_into_right_body();
                ready(Ok(req.into_response(response))).boxed_local()
            }
        }
    }
}
