use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(r"^\+?[0-9 ]+$").expect("Invalid phone number regex");
    let digits = phone_number.chars().filter(char::is_ascii_digit).count();
    match regex.is_match(phone_number) && (6..=20).contains(&digits) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_PHONE_NUMBER")
            .with_message(Cow::from("Phone number must contain 6 to 20 digits"))),
    }
}

pub fn validate_postal_code(postal_code: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(r"^[A-Za-z0-9 -]{1,10}$").expect("Invalid postal code regex");
    match regex.is_match(postal_code) {
        true => Ok(()),
        false => Err(ValidationError::new("INVALID_POSTAL_CODE")
            .with_message(Cow::from("Postal code must be 1 to 10 alphanumeric characters"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_phone_numbers() {
        assert!(validate_phone_number("+34 600 123 456").is_ok());
        assert!(validate_phone_number("954000000").is_ok());
    }

    #[test]
    fn rejects_malformed_phone_numbers() {
        assert!(validate_phone_number("call me").is_err());
        assert!(validate_phone_number("123").is_err());
        assert!(validate_phone_number("      ").is_err());
        assert!(validate_phone_number("+ 1 2 3 4 5").is_err());
        assert!(validate_phone_number("123456789012345678901").is_err());
    }

    #[test]
    fn postal_codes_are_bounded() {
        assert!(validate_postal_code("41012").is_ok());
        assert!(validate_postal_code("SW1A 1AA").is_ok());
        assert!(validate_postal_code("").is_err());
        assert!(validate_postal_code("12345678901").is_err());
    }

    #[test]
    fn validation_errors_render_as_bad_request() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        let (status, Json(body)) = into_response(errors);

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["name"].is_array());
    }
}
