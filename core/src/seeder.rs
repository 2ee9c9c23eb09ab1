/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Startup provisioning of the permission catalog, the role catalog and the
//! default administrator account.
//!
//! Every step commits before the next one starts and re-running is safe:
//! permissions are upserted, roles and the account are only created when
//! absent, and the administrator role is only assigned when missing.
//! Existing roles keep whatever permissions they currently have.

use anyhow::{Context, Result};
use entity::RoleKey;
use tracing::{debug, info, warn};

use crate::catalog::{PERMISSIONS, ROLES, validate_catalog};
use crate::consts::*;
use crate::error::StoreError;
use crate::store::{AccountStore, CatalogStore, NewAccount};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Permission rows inserted or given a new description.
    pub permissions_upserted: usize,
    pub roles_created: Vec<RoleKey>,
    pub roles_skipped: Vec<RoleKey>,
    pub account_created: bool,
    pub admin_role_assigned: bool,
}

pub async fn seed<C, A>(catalog: &C, accounts: &A) -> Result<SeedReport>
where
    C: CatalogStore + ?Sized,
    A: AccountStore + ?Sized,
{
    validate_catalog().context("Role catalog references undefined permissions")?;

    let mut report = SeedReport {
        permissions_upserted: seed_permissions(catalog)
            .await
            .context("Failed to seed permissions")?,
        ..Default::default()
    };

    seed_roles(catalog, &mut report)
        .await
        .context("Failed to seed roles")?;

    seed_default_admin(accounts, &mut report)
        .await
        .context("Failed to seed default administrator account")?;

    info!(
        permissions = report.permissions_upserted,
        roles_created = report.roles_created.len(),
        account_created = report.account_created,
        admin_role_assigned = report.admin_role_assigned,
        "Seeding finished"
    );

    Ok(report)
}

async fn seed_permissions<C>(catalog: &C) -> Result<usize, StoreError>
where
    C: CatalogStore + ?Sized,
{
    for permission in &PERMISSIONS {
        catalog
            .upsert_permission(permission.key, permission.description)
            .await?;
    }

    let applied = catalog.save_changes().await?;
    debug!(count = applied, "Permission catalog saved");
    Ok(applied)
}

async fn seed_roles<C>(catalog: &C, report: &mut SeedReport) -> Result<(), StoreError>
where
    C: CatalogStore + ?Sized,
{
    for role in &ROLES {
        if catalog.role_exists(role.key).await? {
            debug!(role = %role.key, "Role already exists");
            report.roles_skipped.push(role.key);
            continue;
        }

        match catalog
            .create_role(role.key, role.description, role.permissions)
            .await
        {
            Ok(()) => {
                info!(role = %role.key, permissions = role.permissions.len(), "Created role");
                report.roles_created.push(role.key);
            }
            Err(e) if e.is_already_exists() => {
                warn!(role = %role.key, "Role was created concurrently");
                report.roles_skipped.push(role.key);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn default_admin_account() -> NewAccount {
    NewAccount {
        username: DEFAULT_ADMIN_USERNAME.to_string(),
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        first_name: DEFAULT_ADMIN_FIRST_NAME.to_string(),
        last_name: DEFAULT_ADMIN_LAST_NAME.to_string(),
    }
}

async fn seed_default_admin<A>(accounts: &A, report: &mut SeedReport) -> Result<(), StoreError>
where
    A: AccountStore + ?Sized,
{
    let account = match accounts.find_by_username(DEFAULT_ADMIN_USERNAME).await? {
        Some(account) => account,
        None => match accounts
            .create_with_credentials(default_admin_account(), DEFAULT_ADMIN_PASSWORD)
            .await
        {
            Ok(account) => {
                info!(username = DEFAULT_ADMIN_USERNAME, "Created default administrator account");
                report.account_created = true;
                account
            }
            Err(e) if e.is_already_exists() => {
                warn!(username = DEFAULT_ADMIN_USERNAME, "Account was created concurrently");
                accounts
                    .find_by_username(DEFAULT_ADMIN_USERNAME)
                    .await?
                    .ok_or(e)?
            }
            Err(e) => return Err(e),
        },
    };

    let roles = accounts.roles_for_account(account.id).await?;
    if roles.contains(&DEFAULT_ADMIN_ROLE) {
        return Ok(());
    }

    match accounts.assign_role(account.id, DEFAULT_ADMIN_ROLE).await {
        Ok(()) => {
            info!(username = %account.username, role = %DEFAULT_ADMIN_ROLE, "Assigned role");
            report.admin_role_assigned = true;
            Ok(())
        }
        Err(e) if e.is_already_exists() => Ok(()),
        Err(e) => Err(e),
    }
}
