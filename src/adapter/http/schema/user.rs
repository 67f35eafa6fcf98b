use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::adapter::http::schema::ValidPassword;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, max = 150, message = "Username must be between 1 and 150 characters"),
        custom(
            function = "username_chars",
            message = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
        )
    )]
    pub username: String,
    #[validate(nested)]
    pub password: ValidPassword,
}

fn username_chars(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Ok(());
    }
    Err(ValidationError::new("username_invalid_chars"))
}
