//! Login, registration, developer and profile forms.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{is_valid_email, NICKNAME_LEN, PASSWORD_LEN};
use crate::error::{Result, ValidationError};
use crate::models::{Role, User};
use crate::protocol::{DeveloperRequest, LoginRequest, ProfileUpdate, RegisterRequest};

fn check_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if len < PASSWORD_LEN.0 || len > PASSWORD_LEN.1 {
        return Err(ValidationError::PasswordLength { min: PASSWORD_LEN.0, max: PASSWORD_LEN.1 });
    }
    Ok(())
}

fn check_nickname(nickname: &str) -> Result<()> {
    let len = nickname.chars().count();
    if len < NICKNAME_LEN.0 || len > NICKNAME_LEN.1 {
        return Err(ValidationError::Length {
            field: "Nickname".to_string(),
            min: NICKNAME_LEN.0,
            max: NICKNAME_LEN.1,
        });
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Email + password sign-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::required("Email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::required("Password"));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(LoginRequest { email: self.email.trim().to_string(), password: self.password.clone() })
    }
}

/// Account registration.
///
/// When `as_developer` is set the page stashes the request and continues on
/// the developer registration page instead of submitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub confirm_password: String,
    pub as_developer: bool,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::required("Email"));
        }
        if self.nickname.trim().is_empty() {
            return Err(ValidationError::required("Nickname"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::required("Password"));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        check_nickname(self.nickname.trim())?;
        check_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        let request = RegisterRequest {
            email: self.email.trim().to_string(),
            nickname: self.nickname.trim().to_string(),
            password: self.password.clone(),
            role: Role::User,
        };
        request.validate().map_err(|e| ValidationError::from_validator(&e))?;
        Ok(request)
    }
}

/// Developer facet collected on the second registration page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeveloperForm {
    pub first_name: String,
    pub last_name: String,
    pub github_profile: String,
    pub support_email: String,
    pub support_phone: String,
}

impl DeveloperForm {
    pub fn validate(&self) -> Result<DeveloperRequest> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::required("First name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::required("Last name"));
        }

        let github_profile = non_empty(&self.github_profile);
        if let Some(profile) = &github_profile {
            if !(profile.starts_with("https://") || profile.starts_with("http://")) {
                return Err(ValidationError::Invalid {
                    field: "GitHub profile".to_string(),
                    message: "must be a link starting with http:// or https://".to_string(),
                });
            }
        }

        let support_email = non_empty(&self.support_email);
        if support_email.as_deref().is_some_and(|e| !is_valid_email(e)) {
            return Err(ValidationError::InvalidEmail);
        }

        let support_phone = non_empty(&self.support_phone);
        if let Some(phone) = &support_phone {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            let allowed =
                phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
            if !allowed || !(7..=15).contains(&digits) {
                return Err(ValidationError::Invalid {
                    field: "Support phone".to_string(),
                    message: "must contain 7 to 15 digits".to_string(),
                });
            }
        }

        Ok(DeveloperRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            github_profile,
            support_email,
            support_phone,
        })
    }
}

/// Profile tab edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub nickname: String,
    pub email: String,
    pub avatar_url: String,
}

impl ProfileForm {
    /// Pre-fill from the signed-in user.
    pub fn from_user(user: &User) -> Self {
        Self {
            nickname: user.nickname.clone(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone().unwrap_or_default(),
        }
    }

    /// An empty avatar field clears the avatar.
    pub fn validate(&self) -> Result<ProfileUpdate> {
        let nickname = self.nickname.trim();
        if nickname.is_empty() {
            return Err(ValidationError::required("Nickname"));
        }
        check_nickname(nickname)?;
        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::required("Email"));
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ProfileUpdate {
            nickname: nickname.to_string(),
            email,
            avatar_url: non_empty(&self.avatar_url),
        })
    }
}

/// Password change in the settings tab. Checked locally only; the gateway
/// exposes no password endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<()> {
        if self.current_password.is_empty() {
            return Err(ValidationError::required("Current password"));
        }
        check_password(&self.new_password)?;
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password == self.current_password {
            return Err(ValidationError::Invalid {
                field: "New password".to_string(),
                message: "must differ from the current password".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            email: " neo@example.com ".to_string(),
            nickname: "neo".to_string(),
            password: "followthewhiterabbit".to_string(),
            confirm_password: "followthewhiterabbit".to_string(),
            as_developer: false,
        }
    }

    #[test]
    fn test_login_requires_fields() {
        let form = LoginForm { email: String::new(), password: "x".to_string() };
        assert_eq!(form.validate(), Err(ValidationError::required("Email")));

        let form = LoginForm { email: "neo@example.com".to_string(), password: String::new() };
        assert_eq!(form.validate(), Err(ValidationError::required("Password")));

        let form = LoginForm { email: "neo".to_string(), password: "x".to_string() };
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_register_ok_trims_email() {
        let request = register_form().validate().unwrap();
        assert_eq!(request.email, "neo@example.com");
        assert_eq!(request.role, Role::User);
    }

    #[test]
    fn test_register_password_rules() {
        let mut form = register_form();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordLength { min: 8, max: 72 }));

        let mut form = register_form();
        form.password = "x".repeat(73);
        form.confirm_password = form.password.clone();
        assert_eq!(form.validate(), Err(ValidationError::PasswordLength { min: 8, max: 72 }));

        let mut form = register_form();
        form.confirm_password = "something else".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_register_nickname_length() {
        let mut form = register_form();
        form.nickname = "ne".to_string();
        assert!(matches!(form.validate(), Err(ValidationError::Length { min: 3, max: 100, .. })));
    }

    #[test]
    fn test_developer_form() {
        let form = DeveloperForm {
            first_name: " Thomas ".to_string(),
            last_name: "Anderson".to_string(),
            github_profile: "https://github.com/neo".to_string(),
            ..Default::default()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.first_name, "Thomas");
        assert_eq!(request.support_email, None);

        let form = DeveloperForm { last_name: "Anderson".to_string(), ..Default::default() };
        assert_eq!(form.validate(), Err(ValidationError::required("First name")));

        let form = DeveloperForm {
            first_name: "Thomas".to_string(),
            last_name: "Anderson".to_string(),
            github_profile: "github.com/neo".to_string(),
            ..Default::default()
        };
        assert!(matches!(form.validate(), Err(ValidationError::Invalid { .. })));

        let form = DeveloperForm {
            first_name: "Thomas".to_string(),
            last_name: "Anderson".to_string(),
            support_phone: "+7 (900) 123-45-67".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_profile_form_clears_avatar() {
        let form = ProfileForm {
            nickname: " neo ".to_string(),
            email: "Neo@Example.com".to_string(),
            avatar_url: "   ".to_string(),
        };
        let update = form.validate().unwrap();
        assert_eq!(update.nickname, "neo");
        assert_eq!(update.email, "neo@example.com");
        assert_eq!(update.avatar_url, None);
    }

    #[test]
    fn test_password_change() {
        let form = PasswordChangeForm {
            current_password: "oldpassword".to_string(),
            new_password: "newpassword".to_string(),
            confirm_password: "newpassword".to_string(),
        };
        assert!(form.validate().is_ok());

        let form = PasswordChangeForm { confirm_password: "other".to_string(), ..form };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }
}
