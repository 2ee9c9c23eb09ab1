/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Account validation and password hashing applied by every account store
//! before credentials are persisted.

use crate::consts::MIN_PASSWORD_LENGTH;
use crate::error::StoreError;
use crate::store::NewAccount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub required_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            required_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn check(&self, password: &str, errors: &mut Vec<String>) {
        if password.chars().count() < self.required_length {
            errors.push(format!(
                "Passwords must be at least {} characters.",
                self.required_length
            ));
        }
    }
}

/// Usernames may hold ASCII letters, digits and `@`, `_` or `.`, so an
/// email address is a valid username.
fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '_' | '.')
}

fn check_username(username: &str, errors: &mut Vec<String>) {
    if username.is_empty() {
        errors.push("Name cannot be null or empty.".to_string());
    } else if !username.chars().all(is_username_char) {
        errors.push(format!(
            "User name {} is invalid, can only contain letters or digits.",
            username
        ));
    }
}

/// Key used for username lookups and the unique index, so `admin` and
/// `Admin` name the same account.
pub fn normalize_username(username: &str) -> String {
    username.to_uppercase()
}

fn check_email(email: &str, errors: &mut Vec<String>) {
    if !email.is_empty() && !email.contains('@') {
        errors.push(format!("Email '{}' is invalid.", email));
    }
}

/// Validates a new account against the username, email and password rules,
/// reporting every violation at once.
pub fn validate_new_account(
    policy: &PasswordPolicy,
    account: &NewAccount,
    password: &str,
) -> Result<(), StoreError> {
    let mut errors = Vec::new();
    check_username(&account.username, &mut errors);
    check_email(&account.email, &mut errors);
    policy.check(password, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Identity { errors })
    }
}

pub fn hash_password(
    policy: &PasswordPolicy,
    account: &NewAccount,
    password: &str,
) -> Result<String, StoreError> {
    validate_new_account(policy, account, password)?;
    Ok(password_auth::generate_hash(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(username: &str, email: &str) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            email: email.to_string(),
            first_name: "Admin".to_string(),
            last_name: "Admin".to_string(),
        }
    }

    #[test]
    fn test_default_policy_accepts_default_admin() {
        let account = new_account("Admin", "admin@taskbook.com");
        assert!(validate_new_account(&PasswordPolicy::default(), &account, "admin1").is_ok());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let account = new_account("Admin", "admin@taskbook.com");
        let err = validate_new_account(&PasswordPolicy::default(), &account, "admin").unwrap_err();

        match err {
            StoreError::Identity { errors } => {
                assert_eq!(errors, vec!["Passwords must be at least 6 characters.".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_violations_are_collected() {
        let account = new_account("not valid", "nowhere");
        let err = validate_new_account(&PasswordPolicy::default(), &account, "x").unwrap_err();

        match err {
            StoreError::Identity { errors } => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_email_style_username_is_accepted() {
        let account = new_account("jane.doe_2@taskbook.com", "jane@taskbook.com");
        assert!(validate_new_account(&PasswordPolicy::default(), &account, "secret1").is_ok());

        let account = new_account("jane-doe", "jane@taskbook.com");
        assert!(validate_new_account(&PasswordPolicy::default(), &account, "secret1").is_err());
    }

    #[test]
    fn test_normalize_username_ignores_case() {
        assert_eq!(normalize_username("admin"), normalize_username("Admin"));
        assert_eq!(normalize_username("Admin"), "ADMIN");
    }

    #[test]
    fn test_hash_verifies() {
        let account = new_account("Admin", "admin@taskbook.com");
        let hash = hash_password(&PasswordPolicy::default(), &account, "admin1").unwrap();

        assert_ne!(hash, "admin1");
        assert!(password_auth::verify_password("admin1", &hash).is_ok());
    }
}
