//! Error definitions shared by every Agora front-end.
//!
//! - [`ValidationError`] covers the checks forms run before anything is sent.
//! - [`parse_error_body`] turns a non-2xx gateway body into a displayable message.

mod gateway;
mod validation;

pub use gateway::parse_error_body;
pub use validation::ValidationError;

/// Standard Result type for client-side validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ValidationError::Required { field: "nickname".to_string() };
        assert_eq!(err.to_string(), "nickname is required");

        let err = ValidationError::PasswordLength { min: 8, max: 72 };
        let msg = err.to_string();
        assert!(msg.contains('8'));
        assert!(msg.contains("72"));
    }

    #[test]
    fn test_gateway_detail_takes_precedence() {
        let body = r#"{"detail":"Invalid credentials","message":"ignored"}"#;
        assert_eq!(parse_error_body(401, body), "Invalid credentials");
    }
}
