//! Password policy enforcement for new passwords.

use sangam_core::config::AuthConfig;
use sangam_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
    /// Minimum zxcvbn score (0-4).
    min_score: u8,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            min_score: config.password_min_score,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if u8::from(estimate.score()) < self.min_score {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(validator().validate("abc").is_err());
    }

    #[test]
    fn rejects_weak_passwords() {
        assert!(validator().validate("password").is_err());
    }

    #[test]
    fn accepts_strong_passwords() {
        assert!(validator().validate("correct-horse-battery-staple").is_ok());
    }

    #[test]
    fn rejects_reused_password() {
        assert!(validator().validate_not_same("same-one", "same-one").is_err());
        assert!(validator().validate_not_same("old-one", "new-one").is_ok());
    }
}
