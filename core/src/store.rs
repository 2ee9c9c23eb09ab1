/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Capabilities the seeder needs from persistence.
//!
//! [`CatalogStore`] covers permissions and roles, [`AccountStore`] covers
//! accounts and their role memberships. Both are implemented over sea-orm
//! in [`crate::db_store`] and in memory in [`crate::memory_store`].

use async_trait::async_trait;
use entity::{PermissionKey, RoleKey};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::MAccount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Queues an insert-or-update of the permission keyed by `key`.
    /// Nothing is written until [`CatalogStore::save_changes`].
    async fn upsert_permission(
        &self,
        key: PermissionKey,
        description: &str,
    ) -> Result<(), StoreError>;

    /// Applies every queued upsert in a single unit of work and returns how
    /// many rows were inserted or changed. Upserts that match the stored
    /// description are not counted.
    async fn save_changes(&self) -> Result<usize, StoreError>;

    async fn role_exists(&self, key: RoleKey) -> Result<bool, StoreError>;

    /// Creates the role and links it to the existing permission rows.
    async fn create_role(
        &self,
        key: RoleKey,
        description: &str,
        permissions: &[PermissionKey],
    ) -> Result<(), StoreError>;

    /// Empty when the role does not exist.
    async fn role_permissions(&self, key: RoleKey)
        -> Result<BTreeSet<PermissionKey>, StoreError>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<MAccount>, StoreError>;

    /// Validates and hashes `password`, then creates the account.
    async fn create_with_credentials(
        &self,
        account: NewAccount,
        password: &str,
    ) -> Result<MAccount, StoreError>;

    async fn roles_for_account(&self, id: Uuid) -> Result<BTreeSet<RoleKey>, StoreError>;

    async fn assign_role(&self, id: Uuid, role: RoleKey) -> Result<(), StoreError>;
}
