//! Client-side form validation
//!
//! Everything here runs before a request is built. A failed check blocks the
//! submission and is shown next to the form, it is never sent to the server.

use thiserror::Error;

/// Minimum password length accepted by the register and reset forms
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty (or whitespace only)
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("Please enter a valid email")]
    InvalidEmail,

    /// Password is shorter than [`MIN_PASSWORD_LENGTH`]
    #[error("Password must be at least {min} characters ({actual} given)")]
    PasswordTooShort { min: usize, actual: usize },

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    /// Password and its confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Reset form opened without a reset token
    #[error("This reset link is invalid or incomplete")]
    MissingResetToken,
}

/// One line of the live password checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRule {
    pub label: &'static str,
    pub satisfied: bool,
}

/// Rough password strength shown under the register form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
pub enum PasswordStrength {
    #[display("Weak")]
    Weak,
    #[display("Medium")]
    Medium,
    #[display("Strong")]
    Strong,
}

/// Per-rule status in display order: length, lowercase, uppercase, digit.
pub fn password_rules(password: &str) -> [PasswordRule; 4] {
    [
        PasswordRule {
            label: "8+ characters",
            satisfied: password.chars().count() >= MIN_PASSWORD_LENGTH,
        },
        PasswordRule {
            label: "Lowercase letter",
            satisfied: password.chars().any(|c| c.is_ascii_lowercase()),
        },
        PasswordRule {
            label: "Uppercase letter",
            satisfied: password.chars().any(|c| c.is_ascii_uppercase()),
        },
        PasswordRule {
            label: "Digit",
            satisfied: password.chars().any(|c| c.is_ascii_digit()),
        },
    ]
}

/// Every rule the password breaks, in checklist order.
pub fn password_violations(password: &str) -> Vec<ValidationError> {
    let rules = password_rules(password);
    let mut errors = Vec::new();
    if !rules[0].satisfied {
        errors.push(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: password.chars().count(),
        });
    }
    if !rules[1].satisfied {
        errors.push(ValidationError::MissingLowercase);
    }
    if !rules[2].satisfied {
        errors.push(ValidationError::MissingUppercase);
    }
    if !rules[3].satisfied {
        errors.push(ValidationError::MissingDigit);
    }
    errors
}

/// Accepts a password only if it is 8+ characters with a lowercase letter,
/// an uppercase letter and a digit. Returns the first broken rule.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    match password_violations(password).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

pub fn validate_password_confirmation(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let score = [
        len >= MIN_PASSWORD_LENGTH,
        len >= 12,
        password.chars().any(|c| c.is_uppercase()),
        password.chars().any(|c| c.is_lowercase()),
        password.chars().any(|c| c.is_numeric()),
        password.chars().any(|c| !c.is_alphanumeric()),
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count();

    match score {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    validate_required("Email", email)?;
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Register form: all fields required, email shaped like an address,
/// password strong enough and confirmed.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    validate_required("Username", username)?;
    validate_email(email)?;
    validate_required("Password", password)?;
    validate_password(password)?;
    validate_password_confirmation(password, confirm)
}

/// Reset form: a token must be present and the new password must pass the
/// same rules as registration.
pub fn validate_reset(
    reset_token: Option<&str>,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    match reset_token {
        Some(token) if !token.trim().is_empty() => {}
        _ => return Err(ValidationError::MissingResetToken),
    }
    validate_password(password)?;
    validate_password_confirmation(password, confirm)
}
