/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! In-memory implementation of both store capabilities, enforcing the same
//! uniqueness rules as the database schema. Used by tests and by tooling
//! that needs to dry-run the seeder.

use async_trait::async_trait;
use chrono::Utc;
use entity::{PermissionKey, RoleKey};
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StoreError;
use crate::identity::{PasswordPolicy, hash_password, normalize_username};
use crate::store::{AccountStore, CatalogStore, NewAccount};
use crate::types::*;

#[derive(Debug)]
struct MemoryRole {
    id: Uuid,
    description: String,
    permissions: BTreeSet<Uuid>,
}

#[derive(Debug, Default)]
struct MemoryState {
    permissions: BTreeMap<PermissionKey, MPermission>,
    pending: Vec<(PermissionKey, String)>,
    roles: BTreeMap<RoleKey, MemoryRole>,
    accounts: Vec<MAccount>,
    memberships: BTreeSet<(Uuid, RoleKey)>,
    policy: PasswordPolicy,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                policy,
                ..Default::default()
            }),
        }
    }

    pub async fn set_policy(&self, policy: PasswordPolicy) {
        self.state.lock().await.policy = policy;
    }

    pub async fn permissions(&self) -> Vec<MPermission> {
        self.state.lock().await.permissions.values().cloned().collect()
    }

    pub async fn roles(&self) -> Vec<MRole> {
        self.state
            .lock()
            .await
            .roles
            .iter()
            .map(|(key, role)| MRole {
                id: role.id,
                name: *key,
                description: role.description.clone(),
            })
            .collect()
    }

    pub async fn accounts(&self) -> Vec<MAccount> {
        self.state.lock().await.accounts.clone()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn upsert_permission(
        &self,
        key: PermissionKey,
        description: &str,
    ) -> Result<(), StoreError> {
        self.state
            .lock()
            .await
            .pending
            .push((key, description.to_string()));
        Ok(())
    }

    async fn save_changes(&self) -> Result<usize, StoreError> {
        let mut state = self.state.lock().await;
        let pending = std::mem::take(&mut state.pending);
        let mut written = 0;

        for (key, description) in pending {
            match state.permissions.get_mut(&key) {
                Some(permission) if permission.description == description => continue,
                Some(permission) => permission.description = description,
                None => {
                    state.permissions.insert(
                        key,
                        MPermission {
                            id: Uuid::new_v4(),
                            name: key,
                            description,
                        },
                    );
                }
            }

            written += 1;
        }

        Ok(written)
    }

    async fn role_exists(&self, key: RoleKey) -> Result<bool, StoreError> {
        Ok(self.state.lock().await.roles.contains_key(&key))
    }

    async fn create_role(
        &self,
        key: RoleKey,
        description: &str,
        permissions: &[PermissionKey],
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;

        if state.roles.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                entity: "Role",
                key: key.to_string(),
            });
        }

        let permission_ids = permissions
            .iter()
            .map(|permission| {
                state
                    .permissions
                    .get(permission)
                    .map(|row| row.id)
                    .ok_or(StoreError::MissingPermission(*permission))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        state.roles.insert(
            key,
            MemoryRole {
                id: Uuid::new_v4(),
                description: description.to_string(),
                permissions: permission_ids,
            },
        );

        Ok(())
    }

    async fn role_permissions(
        &self,
        key: RoleKey,
    ) -> Result<BTreeSet<PermissionKey>, StoreError> {
        let state = self.state.lock().await;

        let Some(role) = state.roles.get(&key) else {
            return Ok(BTreeSet::new());
        };

        Ok(state
            .permissions
            .values()
            .filter(|permission| role.permissions.contains(&permission.id))
            .map(|permission| permission.name)
            .collect())
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<MAccount>, StoreError> {
        let normalized_username = normalize_username(username);

        Ok(self
            .state
            .lock()
            .await
            .accounts
            .iter()
            .find(|account| account.normalized_username == normalized_username)
            .cloned())
    }

    async fn create_with_credentials(
        &self,
        account: NewAccount,
        password: &str,
    ) -> Result<MAccount, StoreError> {
        let mut state = self.state.lock().await;
        let password = hash_password(&state.policy, &account, password)?;
        let normalized_username = normalize_username(&account.username);

        if state
            .accounts
            .iter()
            .any(|existing| existing.normalized_username == normalized_username)
        {
            return Err(StoreError::AlreadyExists {
                entity: "Account",
                key: account.username,
            });
        }

        let created = MAccount {
            id: Uuid::new_v4(),
            username: account.username,
            normalized_username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            password,
            created_at: Utc::now().naive_utc(),
            deleted_at: None,
        };

        state.accounts.push(created.clone());
        Ok(created)
    }

    async fn roles_for_account(&self, id: Uuid) -> Result<BTreeSet<RoleKey>, StoreError> {
        Ok(self
            .state
            .lock()
            .await
            .memberships
            .iter()
            .filter(|(account, _)| *account == id)
            .map(|(_, role)| *role)
            .collect())
    }

    async fn assign_role(&self, id: Uuid, role: RoleKey) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;

        if !state.roles.contains_key(&role) {
            return Err(StoreError::MissingRole(role));
        }

        if !state.accounts.iter().any(|account| account.id == id) {
            return Err(StoreError::MissingAccount(id));
        }

        if !state.memberships.insert((id, role)) {
            return Err(StoreError::AlreadyExists {
                entity: "Account role",
                key: format!("{}/{}", id, role),
            });
        }

        Ok(())
    }
}
