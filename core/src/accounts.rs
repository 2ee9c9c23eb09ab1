/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Account read paths and account administration outside the seeder.
//! Soft-deleted accounts are left out of account lookups and project listings.

use anyhow::{Context, Result};
use chrono::Utc;
use entity::{PermissionKey, RoleKey};
use futures::TryStreamExt;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use tracing::info;
use uuid::Uuid;

use super::error::StoreError;
use super::identity::normalize_username;
use super::reader::project_stream;
use super::store::{AccountStore, NewAccount};
use super::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Marks the account as deleted and keeps the row and its memberships.
    Soft,
    /// Removes the row, memberships go with it.
    Hard,
}

async fn account_roles(db: &DatabaseConnection, account_id: Uuid) -> Result<Vec<RoleKey>> {
    let rows = ERole::find()
        .join_rev(JoinType::InnerJoin, RAccountRole::Role.def())
        .filter(CAccountRole::Account.eq(account_id))
        .order_by_asc(CRole::Name)
        .stream(db)
        .await
        .context("Failed to query account roles")?;

    project_stream(rows, |role: MRole| Ok(role.name))
        .try_collect()
        .await
        .context("Failed to read account roles")
}

pub async fn find_account_with_roles(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<AccountWithRoles>> {
    let Some(account) = EAccount::find()
        .filter(CAccount::NormalizedUsername.eq(normalize_username(username)))
        .filter(CAccount::DeletedAt.is_null())
        .one(db)
        .await
        .context("Failed to query account")?
    else {
        return Ok(None);
    };

    let roles = account_roles(db, account.id).await?;

    Ok(Some(AccountWithRoles {
        account: account.into(),
        roles,
    }))
}

pub async fn accounts_by_project(
    db: &DatabaseConnection,
    project_id: Uuid,
) -> Result<Vec<AccountSummary>> {
    let rows = EAccount::find()
        .join_rev(JoinType::InnerJoin, RProjectUser::Account.def())
        .filter(CProjectUser::Project.eq(project_id))
        .filter(CAccount::DeletedAt.is_null())
        .order_by_asc(CAccount::Username)
        .stream(db)
        .await
        .context("Failed to query project accounts")?;

    project_stream(rows, |account: MAccount| Ok(AccountSummary::from(account)))
        .try_collect()
        .await
        .context("Failed to read project accounts")
}

/// Members of a project together with their roles. Roles are read with one
/// query per account after the member list has been read in full.
pub async fn accounts_with_roles_by_project(
    db: &DatabaseConnection,
    project_id: Uuid,
) -> Result<Vec<AccountWithRoles>> {
    let accounts = accounts_by_project(db, project_id).await?;
    let mut members = Vec::with_capacity(accounts.len());

    for account in accounts {
        let roles = account_roles(db, account.id).await?;
        members.push(AccountWithRoles { account, roles });
    }

    Ok(members)
}

pub async fn account_has_permission(
    db: &DatabaseConnection,
    account_id: Uuid,
    permission: PermissionKey,
) -> Result<bool> {
    let granted = EPermission::find()
        .join_rev(JoinType::InnerJoin, RRolePermission::Permission.def())
        .join_rev(
            JoinType::InnerJoin,
            EAccountRole::belongs_to(entity::role_permission::Entity)
                .from(CAccountRole::Role)
                .to(CRolePermission::Role)
                .into(),
        )
        .filter(CAccountRole::Account.eq(account_id))
        .filter(CPermission::Name.eq(permission))
        .one(db)
        .await
        .context("Failed to query account permission")?;

    Ok(granted.is_some())
}

/// Creates an account and makes it a member of `role`. Validation failures
/// come back as [`StoreError::Identity`] and nothing is written. The two
/// writes are not atomic, a failed assignment leaves the account without
/// the role.
pub async fn add_account_with_role<A>(
    store: &A,
    account: NewAccount,
    password: &str,
    role: RoleKey,
) -> Result<MAccount, StoreError>
where
    A: AccountStore + ?Sized,
{
    let created = store.create_with_credentials(account, password).await?;
    store.assign_role(created.id, role).await?;

    info!(username = %created.username, role = %role, "Created account");
    Ok(created)
}

/// Returns `false` when there was no (live) account to delete.
pub async fn delete_account(
    db: &DatabaseConnection,
    account_id: Uuid,
    mode: DeleteMode,
) -> Result<bool> {
    if mode == DeleteMode::Hard {
        let res = EAccount::delete_by_id(account_id)
            .exec(db)
            .await
            .context("Failed to delete account")?;

        return Ok(res.rows_affected > 0);
    }

    let Some(account) = EAccount::find_by_id(account_id)
        .filter(CAccount::DeletedAt.is_null())
        .one(db)
        .await
        .context("Failed to query account")?
    else {
        return Ok(false);
    };

    let mut aaccount = account.into_active_model();
    aaccount.deleted_at = Set(Some(Utc::now().naive_utc()));
    aaccount
        .update(db)
        .await
        .context("Failed to soft-delete account")?;

    info!(account = %account_id, "Soft-deleted account");
    Ok(true)
}
