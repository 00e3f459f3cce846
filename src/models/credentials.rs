use serde::{Serialize, Deserialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "value is not a valid email address"), custom = "domain_has_dot")]
    pub email: String,
    pub password: String,
}

// `email` alone lets dotless domains like `a@b` or `john@localhost` through
fn domain_has_dot(email: &str) -> Result<(), ValidationError> {
    match email.rsplit_once('@') {
        Some((_, domain)) if domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') => Ok(()),
        _ => {
            let mut error = ValidationError::new("email");
            error.message = Some("value is not a valid email address".into());
            Err(error)
        }
    }
}
