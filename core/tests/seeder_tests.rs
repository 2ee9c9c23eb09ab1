/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the startup seeder, run against the in-memory store

use async_trait::async_trait;
use entity::{PermissionKey, RoleKey};
use sea_orm::DbErr;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use taskbook_core::catalog::{PERMISSIONS, ROLES};
use taskbook_core::consts::*;
use taskbook_core::error::StoreError;
use taskbook_core::identity::PasswordPolicy;
use taskbook_core::memory_store::MemoryStore;
use taskbook_core::seeder::seed;
use taskbook_core::store::{AccountStore, CatalogStore, NewAccount};
use taskbook_core::types::MAccount;
use uuid::Uuid;

fn admin_account() -> NewAccount {
    NewAccount {
        username: DEFAULT_ADMIN_USERNAME.to_string(),
        email: "other@taskbook.com".to_string(),
        first_name: "Other".to_string(),
        last_name: "Process".to_string(),
    }
}

async fn assert_catalog_state(store: &MemoryStore) {
    let permissions = store.permissions().await;
    assert_eq!(permissions.len(), PERMISSIONS.len());
    for seed in &PERMISSIONS {
        let matching: Vec<_> = permissions.iter().filter(|p| p.name == seed.key).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].description, seed.description);
    }

    let roles = store.roles().await;
    assert_eq!(roles.len(), ROLES.len());
    for seed in &ROLES {
        let expected: BTreeSet<PermissionKey> = seed.permissions.iter().copied().collect();
        assert_eq!(store.role_permissions(seed.key).await.unwrap(), expected);
    }

    let admins: Vec<_> = store
        .accounts()
        .await
        .into_iter()
        .filter(|a| a.username == DEFAULT_ADMIN_USERNAME)
        .collect();
    assert_eq!(admins.len(), 1);

    let roles = store.roles_for_account(admins[0].id).await.unwrap();
    assert!(roles.contains(&RoleKey::Admin));
}

#[tokio::test]
async fn test_seed_populates_empty_store() {
    let store = MemoryStore::new();

    let report = seed(&store, &store).await.unwrap();

    assert_eq!(report.permissions_upserted, 11);
    assert_eq!(
        report.roles_created,
        vec![
            RoleKey::Admin,
            RoleKey::Manager,
            RoleKey::AdvancedUser,
            RoleKey::User
        ]
    );
    assert!(report.roles_skipped.is_empty());
    assert!(report.account_created);
    assert!(report.admin_role_assigned);

    assert_catalog_state(&store).await;

    let admin = store
        .find_by_username(DEFAULT_ADMIN_USERNAME)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin.email, DEFAULT_ADMIN_EMAIL);
    assert_eq!(admin.first_name, DEFAULT_ADMIN_FIRST_NAME);
    assert_eq!(admin.last_name, DEFAULT_ADMIN_LAST_NAME);
    assert_ne!(admin.password, DEFAULT_ADMIN_PASSWORD);
    assert!(password_auth::verify_password(DEFAULT_ADMIN_PASSWORD, &admin.password).is_ok());
}

#[tokio::test]
async fn test_seed_twice_is_idempotent() {
    let store = MemoryStore::new();

    seed(&store, &store).await.unwrap();
    let permissions_before = store.permissions().await;
    let roles_before = store.roles().await;
    let accounts_before = store.accounts().await;

    let report = seed(&store, &store).await.unwrap();

    assert_eq!(report.permissions_upserted, 0);
    assert!(report.roles_created.is_empty());
    assert_eq!(report.roles_skipped.len(), 4);
    assert!(!report.account_created);
    assert!(!report.admin_role_assigned);

    assert_eq!(store.permissions().await, permissions_before);
    assert_eq!(store.roles().await, roles_before);
    assert_eq!(store.accounts().await, accounts_before);
    assert_catalog_state(&store).await;
}

#[test]
fn test_roles_only_reference_defined_permissions() {
    let defined: BTreeSet<PermissionKey> = PERMISSIONS.iter().map(|p| p.key).collect();

    for role in &ROLES {
        for permission in role.permissions {
            assert!(
                defined.contains(permission),
                "role {} references undefined permission {}",
                role.key,
                permission
            );
        }
    }
}

#[tokio::test]
async fn test_existing_admin_without_role_is_assigned_role() {
    let store = MemoryStore::new();
    let existing = store
        .create_with_credentials(admin_account(), "secret1")
        .await
        .unwrap();

    let report = seed(&store, &store).await.unwrap();

    assert!(!report.account_created);
    assert!(report.admin_role_assigned);

    let accounts = store.accounts().await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, existing.id);
    assert_eq!(accounts[0].email, "other@taskbook.com");

    let roles = store.roles_for_account(existing.id).await.unwrap();
    assert_eq!(roles, BTreeSet::from([RoleKey::Admin]));
}

#[tokio::test]
async fn test_admin_lookup_ignores_case() {
    let store = MemoryStore::new();
    let mut lowercase = admin_account();
    lowercase.username = DEFAULT_ADMIN_USERNAME.to_lowercase();
    let existing = store
        .create_with_credentials(lowercase, "secret1")
        .await
        .unwrap();

    let report = seed(&store, &store).await.unwrap();

    assert!(!report.account_created);
    assert!(report.admin_role_assigned);

    let accounts = store.accounts().await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].username, "admin");
    assert_eq!(
        store.roles_for_account(existing.id).await.unwrap(),
        BTreeSet::from([RoleKey::Admin])
    );
}

#[tokio::test]
async fn test_usernames_differing_in_case_collide() {
    let store = MemoryStore::new();
    store
        .create_with_credentials(admin_account(), "secret1")
        .await
        .unwrap();

    let mut shouting = admin_account();
    shouting.username = "ADMIN".to_string();
    let err = store
        .create_with_credentials(shouting, "secret1")
        .await
        .unwrap_err();

    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_existing_admin_with_role_is_left_alone() {
    let store = MemoryStore::new();
    seed(&store, &store).await.unwrap();

    let admin = store
        .find_by_username(DEFAULT_ADMIN_USERNAME)
        .await
        .unwrap()
        .unwrap();
    store.assign_role(admin.id, RoleKey::Manager).await.unwrap();

    let report = seed(&store, &store).await.unwrap();

    assert!(!report.admin_role_assigned);
    assert_eq!(
        store.roles_for_account(admin.id).await.unwrap(),
        BTreeSet::from([RoleKey::Admin, RoleKey::Manager])
    );
}

// Existing roles are not reconciled with the catalog, so a role that was
// edited (or created from an older catalog) keeps its permission set.
#[tokio::test]
async fn test_existing_role_permissions_are_not_reconciled() {
    let store = MemoryStore::new();
    store
        .upsert_permission(PermissionKey::ViewUsers, "View project users")
        .await
        .unwrap();
    store.save_changes().await.unwrap();
    store
        .create_role(RoleKey::Admin, "Legacy administrators", &[PermissionKey::ViewUsers])
        .await
        .unwrap();

    let report = seed(&store, &store).await.unwrap();

    assert_eq!(report.roles_skipped, vec![RoleKey::Admin]);
    assert_eq!(
        store.role_permissions(RoleKey::Admin).await.unwrap(),
        BTreeSet::from([PermissionKey::ViewUsers])
    );

    let admin_role = store
        .roles()
        .await
        .into_iter()
        .find(|r| r.name == RoleKey::Admin)
        .unwrap();
    assert_eq!(admin_role.description, "Legacy administrators");
}

#[tokio::test]
async fn test_permission_descriptions_are_upserted() {
    let store = MemoryStore::new();
    store
        .upsert_permission(PermissionKey::ManageTasks, "Outdated description")
        .await
        .unwrap();
    store.save_changes().await.unwrap();
    let before = store.permissions().await;

    let report = seed(&store, &store).await.unwrap();
    assert_eq!(report.permissions_upserted, 11);

    let after = store.permissions().await;
    let old = before.iter().find(|p| p.name == PermissionKey::ManageTasks).unwrap();
    let new = after.iter().find(|p| p.name == PermissionKey::ManageTasks).unwrap();
    assert_eq!(old.id, new.id);
    assert_eq!(new.description, "Add, modify, and delete tasks");
}

#[tokio::test]
async fn test_rejected_password_is_fatal_and_seeding_resumes() {
    let store = MemoryStore::with_policy(PasswordPolicy { required_length: 12 });

    let err = seed(&store, &store).await.unwrap_err();
    match err.downcast_ref::<StoreError>() {
        Some(StoreError::Identity { errors }) => {
            assert_eq!(errors, &vec!["Passwords must be at least 12 characters.".to_string()]);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    assert_eq!(store.permissions().await.len(), 11);
    assert_eq!(store.roles().await.len(), 4);
    assert!(store.accounts().await.is_empty());

    store.set_policy(PasswordPolicy::default()).await;
    let report = seed(&store, &store).await.unwrap();

    assert_eq!(report.permissions_upserted, 0);
    assert!(report.roles_created.is_empty());
    assert!(report.account_created);
    assert!(report.admin_role_assigned);
    assert_catalog_state(&store).await;
}

/// Catalog whose commits are always rejected.
struct RejectingCatalog {
    inner: MemoryStore,
}

#[async_trait]
impl CatalogStore for RejectingCatalog {
    async fn upsert_permission(
        &self,
        key: PermissionKey,
        description: &str,
    ) -> Result<(), StoreError> {
        self.inner.upsert_permission(key, description).await
    }

    async fn save_changes(&self) -> Result<usize, StoreError> {
        Err(StoreError::Database(DbErr::Custom(
            "commit rejected by store".to_string(),
        )))
    }

    async fn role_exists(&self, key: RoleKey) -> Result<bool, StoreError> {
        self.inner.role_exists(key).await
    }

    async fn create_role(
        &self,
        key: RoleKey,
        description: &str,
        permissions: &[PermissionKey],
    ) -> Result<(), StoreError> {
        self.inner.create_role(key, description, permissions).await
    }

    async fn role_permissions(
        &self,
        key: RoleKey,
    ) -> Result<BTreeSet<PermissionKey>, StoreError> {
        self.inner.role_permissions(key).await
    }
}

#[tokio::test]
async fn test_storage_failure_stops_before_roles() {
    let catalog = RejectingCatalog {
        inner: MemoryStore::new(),
    };
    let accounts = MemoryStore::new();

    let err = seed(&catalog, &accounts).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::Database(_))
    ));
    assert!(err.to_string().contains("Failed to seed permissions"));

    assert!(catalog.inner.permissions().await.is_empty());
    assert!(catalog.inner.roles().await.is_empty());
    assert!(accounts.accounts().await.is_empty());
}

/// Hides the account from the first lookup, as if another instance created it
/// between the lookup and the insert.
struct RacingAccounts {
    inner: MemoryStore,
    hidden: AtomicBool,
}

#[async_trait]
impl AccountStore for RacingAccounts {
    async fn find_by_username(&self, username: &str) -> Result<Option<MAccount>, StoreError> {
        if self.hidden.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        self.inner.find_by_username(username).await
    }

    async fn create_with_credentials(
        &self,
        account: NewAccount,
        password: &str,
    ) -> Result<MAccount, StoreError> {
        self.inner.create_with_credentials(account, password).await
    }

    async fn roles_for_account(&self, id: Uuid) -> Result<BTreeSet<RoleKey>, StoreError> {
        self.inner.roles_for_account(id).await
    }

    async fn assign_role(&self, id: Uuid, role: RoleKey) -> Result<(), StoreError> {
        self.inner.assign_role(id, role).await
    }
}

#[tokio::test]
async fn test_concurrently_created_account_is_reused() {
    let catalog = MemoryStore::new();
    let accounts = RacingAccounts {
        inner: MemoryStore::new(),
        hidden: AtomicBool::new(true),
    };

    // The account store has its own role table.
    accounts
        .inner
        .create_role(RoleKey::Admin, "Administrator of the TaskBook application", &[])
        .await
        .unwrap();
    let existing = accounts
        .inner
        .create_with_credentials(admin_account(), "secret1")
        .await
        .unwrap();

    let report = seed(&catalog, &accounts).await.unwrap();

    assert!(!report.account_created);
    assert!(report.admin_role_assigned);
    assert_eq!(accounts.inner.accounts().await.len(), 1);
    assert_eq!(
        accounts.inner.roles_for_account(existing.id).await.unwrap(),
        BTreeSet::from([RoleKey::Admin])
    );
}
