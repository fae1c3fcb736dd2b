//! Client-side validation errors.

use thiserror::Error;

/// A form failed a check before any request was issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty
    #[error("{field} is required")]
    Required {
        /// Human-readable field name
        field: String,
    },

    /// Email address does not look like `local@domain.tld`
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password length outside the accepted range
    #[error("Password must be between {min} and {max} characters")]
    PasswordLength {
        /// Minimum accepted length
        min: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Password and its confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// A text field is too short or too long
    #[error("{field} must be between {min} and {max} characters")]
    Length {
        /// Human-readable field name
        field: String,
        /// Minimum accepted length
        min: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Wrong number of categories selected for an agent
    #[error("Select between 1 and {max} categories")]
    CategoryCount {
        /// Maximum number of categories
        max: usize,
    },

    /// Media step submitted without any file
    #[error("Add at least one photo or video")]
    NoMedia,

    /// File type not accepted for this slot
    #[error("Unsupported file type: {name}")]
    UnsupportedMedia {
        /// Offending file name
        name: String,
    },

    /// Video exceeds the size limit
    #[error("Video is too large (max {max_mb} MB)")]
    VideoTooLarge {
        /// Limit in mebibytes
        max_mb: u64,
    },

    /// Video exceeds the duration limit
    #[error("Video is too long (max {max_minutes} minutes)")]
    VideoTooLong {
        /// Limit in minutes
        max_minutes: u64,
    },

    /// Any other rule, reported by field
    #[error("Validation error for {field}: {message}")]
    Invalid {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        Self::Required { field: field.to_string() }
    }

    /// Convert the first failure reported by the `validator` derive.
    ///
    /// Field order in `ValidationErrors` is unspecified, so callers that care
    /// about precedence run their own checks first.
    pub fn from_validator(errors: &validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let Some((field, errs)) = fields.first() else {
            return Self::Invalid { field: "form".to_string(), message: errors.to_string() };
        };
        let Some(first) = errs.first() else {
            return Self::Invalid { field: field.to_string(), message: errors.to_string() };
        };

        match &*first.code {
            "email" => Self::InvalidEmail,
            "length" => {
                let min = first.params.get("min").and_then(serde_json::Value::as_u64).unwrap_or(0);
                let max = first
                    .params
                    .get("max")
                    .and_then(serde_json::Value::as_u64)
                    .unwrap_or(u64::MAX);
                if field.to_string() == "password" {
                    Self::PasswordLength { min: min as usize, max: max as usize }
                } else {
                    Self::Length { field: field.to_string(), min: min as usize, max: max as usize }
                }
            },
            _ => Self::Invalid {
                field: field.to_string(),
                message: first
                    .message
                    .as_ref()
                    .map_or_else(|| first.code.to_string(), ToString::to_string),
            },
        }
    }
}
