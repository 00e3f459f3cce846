use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{json, Value};
use serde_path_to_error::Segment;
use thiserror::Error;
use validator::ValidationErrors;

/// One offending input location, shaped like `{"loc": [...], "msg": ..., "type": ...}`.
/// `loc` starts at `"body"`; list positions are numbers, keys are strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn at(loc: Vec<Value>, msg: impl Into<String>, kind: impl Into<String>) -> FieldError {
        let mut full = vec![Value::from("body")];
        full.extend(loc);
        FieldError {
            loc: full,
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    /// Carries a fixed, generic message so callers cannot tell which check failed.
    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_token() -> ApiError {
        ApiError::Unauthorized("Invalid token")
    }

    pub fn invalid_credentials() -> ApiError {
        ApiError::Unauthorized("Invalid email or password")
    }

    pub fn content_type() -> ApiError {
        ApiError::Validation(vec![FieldError::at(
            vec![],
            "expected a JSON body with content type application/json",
            "value_error.content_type",
        )])
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => json!({ "detail": errors }),
            ApiError::Unauthorized(message) => json!({ "detail": message }),
            ApiError::NotFound => json!({ "detail": "Not Found" }),
            ApiError::MethodNotAllowed => json!({ "detail": "Method Not Allowed" }),
            ApiError::Internal(_) => json!({ "detail": "Internal Server Error" }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| {
                    let msg = match &error.message {
                        Some(message) => message.to_string(),
                        None => format!("value is not a valid {}", error.code),
                    };
                    FieldError::at(vec![Value::from(field)], msg, format!("value_error.{}", error.code))
                })
            })
            .collect();
        // field_errors() is a HashMap, keep the output stable
        details.sort_by_key(|detail| detail.loc.iter().map(Value::to_string).collect::<Vec<_>>());
        ApiError::Validation(details)
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ApiError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let mut loc: Vec<Value> = err
            .path()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Seq { index } => Some(Value::from(*index)),
                Segment::Map { key } => Some(Value::from(key.as_str())),
                Segment::Enum { variant } => Some(Value::from(variant.as_str())),
                Segment::Unknown => None,
            })
            .collect();

        let inner = err.inner();
        let msg = inner.to_string();
        let kind = if let Some(field) = missing_field(&msg) {
            // serde reports a missing field at its parent; point at the field itself
            loc.push(Value::from(field));
            "value_error.missing"
        } else if inner.is_syntax() || inner.is_eof() {
            "value_error.jsondecode"
        } else {
            "type_error"
        };
        ApiError::Validation(vec![FieldError::at(loc, msg, kind)])
    }
}

/// Field name from serde's "missing field `name`" message. The name comes from
/// the struct definition, never from client input.
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}
