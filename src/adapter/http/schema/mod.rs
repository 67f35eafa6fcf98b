pub mod auth;
pub mod id;
pub mod pagination;
pub mod profile;
pub mod user;

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Validate, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(description = "Validated password string. Validation rules: min length 8, not entirely numeric.")]
pub struct ValidPassword {
    #[validate(
        length(min = 8, message = "This password is too short. It must contain at least 8 characters."),
        custom(function = "not_entirely_numeric", message = "This password is entirely numeric.")
    )]
    value: String,
}

impl ValidPassword {
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn not_entirely_numeric(password: &str) -> Result<(), ValidationError> {
    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("password_entirely_numeric"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use validator::Validate;

    use crate::adapter::http::schema::ValidPassword;

    #[rstest]
    #[case("correct horse")]
    #[case("Password123!")]
    #[case("12345abc")]
    #[case("Пароль123")]
    fn test_valid_password(#[case] password: &str) {
        let pwd = serde_json::from_value::<ValidPassword>(json!(password)).unwrap();
        assert!(pwd.validate().is_ok(), "Password `{}` should be valid", password);
    }

    #[rstest]
    #[case("pass", "too short")]
    #[case("12345678", "entirely numeric")]
    #[case("", "empty")]
    fn test_password_invalid(#[case] password: &str, #[case] message: &str) {
        let result = serde_json::from_value::<ValidPassword>(json!(password));

        let is_invalid = match result {
            Ok(pwd) => pwd.validate().is_err(),
            Err(_) => true,
        };

        assert!(is_invalid, "Password `{}` should fail ({})", password, message)
    }

    #[rstest]
    fn test_password_value_getter() {
        let password = "Password123!";
        let result = serde_json::from_value::<ValidPassword>(json!(password));
        assert_eq!(result.unwrap().value(), password);
    }
}
