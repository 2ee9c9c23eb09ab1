/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use chrono::Utc;
use entity::{PermissionKey, RoleKey};
use futures::TryStreamExt;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QuerySelect, RelationTrait, TransactionTrait,
};
use std::collections::BTreeSet;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StoreError;
use crate::identity::{PasswordPolicy, hash_password, normalize_username};
use crate::reader::project_stream;
use crate::store::{AccountStore, CatalogStore, NewAccount};
use crate::types::*;

#[derive(Debug)]
pub struct DbCatalogStore {
    db: DatabaseConnection,
    pending: Mutex<Vec<(PermissionKey, String)>>,
}

impl DbCatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            pending: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CatalogStore for DbCatalogStore {
    async fn upsert_permission(
        &self,
        key: PermissionKey,
        description: &str,
    ) -> Result<(), StoreError> {
        self.pending.lock().await.push((key, description.to_string()));
        Ok(())
    }

    async fn save_changes(&self) -> Result<usize, StoreError> {
        let pending = std::mem::take(&mut *self.pending.lock().await);
        if pending.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        let mut written = 0;

        for (key, description) in &pending {
            let existing = EPermission::find()
                .filter(CPermission::Name.eq(*key))
                .one(&txn)
                .await?;

            match existing {
                Some(permission) if permission.description == *description => continue,
                Some(permission) => {
                    let mut apermission = permission.into_active_model();
                    apermission.description = Set(description.clone());
                    apermission.update(&txn).await?;
                }
                None => {
                    let apermission = APermission {
                        id: Set(Uuid::new_v4()),
                        name: Set(*key),
                        description: Set(description.clone()),
                    };

                    apermission
                        .insert(&txn)
                        .await
                        .map_err(|e| StoreError::from_insert(e, "Permission", key))?;
                }
            }

            written += 1;
        }

        txn.commit().await?;
        Ok(written)
    }

    async fn role_exists(&self, key: RoleKey) -> Result<bool, StoreError> {
        Ok(ERole::find()
            .filter(CRole::Name.eq(key))
            .one(&self.db)
            .await?
            .is_some())
    }

    async fn create_role(
        &self,
        key: RoleKey,
        description: &str,
        permissions: &[PermissionKey],
    ) -> Result<(), StoreError> {
        let txn = self.db.begin().await?;

        let rows = if permissions.is_empty() {
            Vec::new()
        } else {
            EPermission::find()
                .filter(CPermission::Name.is_in(permissions.iter().copied()))
                .all(&txn)
                .await?
        };

        if let Some(missing) = permissions
            .iter()
            .find(|key| !rows.iter().any(|row| row.name == **key))
        {
            return Err(StoreError::MissingPermission(*missing));
        }

        let arole = ARole {
            id: Set(Uuid::new_v4()),
            name: Set(key),
            description: Set(description.to_string()),
        };

        let role = arole
            .insert(&txn)
            .await
            .map_err(|e| StoreError::from_insert(e, "Role", key))?;

        if !rows.is_empty() {
            let links = rows.iter().map(|permission| ARolePermission {
                id: Set(Uuid::new_v4()),
                role: Set(role.id),
                permission: Set(permission.id),
            });

            ERolePermission::insert_many(links).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn role_permissions(
        &self,
        key: RoleKey,
    ) -> Result<BTreeSet<PermissionKey>, StoreError> {
        let rows = EPermission::find()
            .join_rev(JoinType::InnerJoin, RRolePermission::Permission.def())
            .join(JoinType::InnerJoin, RRolePermission::Role.def())
            .filter(CRole::Name.eq(key))
            .stream(&self.db)
            .await?;

        Ok(project_stream(rows, |permission: MPermission| Ok(permission.name))
            .try_collect()
            .await?)
    }
}

#[derive(Debug)]
pub struct DbAccountStore {
    db: DatabaseConnection,
    policy: PasswordPolicy,
}

impl DbAccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_policy(db, PasswordPolicy::default())
    }

    pub fn with_policy(db: DatabaseConnection, policy: PasswordPolicy) -> Self {
        Self { db, policy }
    }
}

#[async_trait]
impl AccountStore for DbAccountStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<MAccount>, StoreError> {
        Ok(EAccount::find()
            .filter(CAccount::NormalizedUsername.eq(normalize_username(username)))
            .one(&self.db)
            .await?)
    }

    async fn create_with_credentials(
        &self,
        account: NewAccount,
        password: &str,
    ) -> Result<MAccount, StoreError> {
        let password = hash_password(&self.policy, &account, password)?;
        let username = account.username.clone();

        let aaccount = AAccount {
            id: Set(Uuid::new_v4()),
            normalized_username: Set(normalize_username(&account.username)),
            username: Set(account.username),
            email: Set(account.email),
            first_name: Set(account.first_name),
            last_name: Set(account.last_name),
            password: Set(password),
            created_at: Set(Utc::now().naive_utc()),
            deleted_at: Set(None),
        };

        aaccount
            .insert(&self.db)
            .await
            .map_err(|e| StoreError::from_insert(e, "Account", username))
    }

    async fn roles_for_account(&self, id: Uuid) -> Result<BTreeSet<RoleKey>, StoreError> {
        let rows = ERole::find()
            .join_rev(JoinType::InnerJoin, RAccountRole::Role.def())
            .filter(CAccountRole::Account.eq(id))
            .stream(&self.db)
            .await?;

        Ok(project_stream(rows, |role: MRole| Ok(role.name))
            .try_collect()
            .await?)
    }

    async fn assign_role(&self, id: Uuid, role: RoleKey) -> Result<(), StoreError> {
        let role_row = ERole::find()
            .filter(CRole::Name.eq(role))
            .one(&self.db)
            .await?
            .ok_or(StoreError::MissingRole(role))?;

        EAccount::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::MissingAccount(id))?;

        let aaccount_role = AAccountRole {
            id: Set(Uuid::new_v4()),
            account: Set(id),
            role: Set(role_row.id),
        };

        aaccount_role
            .insert(&self.db)
            .await
            .map_err(|e| StoreError::from_insert(e, "Account role", format!("{}/{}", id, role)))?;

        Ok(())
    }
}
