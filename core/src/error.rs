/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::{PermissionKey, RoleKey};
use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[source] DbErr),
    #[error("{entity} '{key}' already exists")]
    AlreadyExists { entity: &'static str, key: String },
    #[error("Permission '{0}' does not exist")]
    MissingPermission(PermissionKey),
    #[error("Role '{0}' does not exist")]
    MissingRole(RoleKey),
    #[error("Account '{0}' does not exist")]
    MissingAccount(Uuid),
    #[error("Identity validation failed: {}", .errors.join("; "))]
    Identity { errors: Vec<String> },
}

impl StoreError {
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AlreadyExists { .. })
    }

    /// Translates a failed insert, mapping unique index violations to
    /// [`StoreError::AlreadyExists`].
    pub fn from_insert(err: DbErr, entity: &'static str, key: impl ToString) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::AlreadyExists {
                entity,
                key: key.to_string(),
            },
            _ => StoreError::Database(err),
        }
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_error_lists_every_message() {
        let err = StoreError::Identity {
            errors: vec![
                "Passwords must be at least 6 characters.".to_string(),
                "User name can only contain letters or digits.".to_string(),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Identity validation failed: Passwords must be at least 6 characters.; User name can only contain letters or digits."
        );
    }

    #[test]
    fn test_non_unique_insert_errors_stay_database_errors() {
        let err = StoreError::from_insert(DbErr::Custom("boom".to_string()), "Account", "Admin");
        assert!(matches!(err, StoreError::Database(_)));
        assert!(!err.is_already_exists());
    }
}
