// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy for operator accounts.

use thiserror::Error;

/// Errors produced by password policy validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// The password has fewer characters than the minimum.
    #[error("password must be at least {minimum} characters, got {actual}")]
    TooShort {
        /// The required minimum length.
        minimum: usize,
        /// The supplied length.
        actual: usize,
    },
    /// The password matches the login name.
    #[error("password must not match the login name")]
    MatchesLoginName,
}

/// Password policy for operator accounts.
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Minimum password length in characters.
    pub const MIN_LENGTH: usize = 12;

    /// Validates a candidate password for an operator account.
    ///
    /// # Arguments
    ///
    /// * `login_name` - The account's login name
    /// * `password` - The candidate password
    ///
    /// # Errors
    ///
    /// Returns an error if the password is shorter than
    /// [`Self::MIN_LENGTH`] or equals the login name
    /// (case-insensitively).
    pub fn validate(login_name: &str, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                minimum: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if password.eq_ignore_ascii_case(login_name) {
            return Err(PasswordPolicyError::MatchesLoginName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_length_enforced() {
        assert_eq!(
            PasswordPolicy::validate("desk", "short"),
            Err(PasswordPolicyError::TooShort {
                minimum: 12,
                actual: 5,
            })
        );
        assert!(PasswordPolicy::validate("desk", "a dozen chars").is_ok());
    }

    #[test]
    fn test_password_must_not_equal_login() {
        assert_eq!(
            PasswordPolicy::validate("frontdesk-admin", "FRONTDESK-ADMIN"),
            Err(PasswordPolicyError::MatchesLoginName)
        );
    }
}
