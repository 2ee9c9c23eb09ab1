/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Fixed permission and role catalog provisioned at startup.
//!
//! Roles may only reference permission keys that are present in
//! [`PERMISSIONS`]; [`validate_catalog`] checks this before anything is
//! written to storage.

use entity::{PermissionKey, RoleKey};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSeed {
    pub key: PermissionKey,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSeed {
    pub key: RoleKey,
    pub description: &'static str,
    pub permissions: &'static [PermissionKey],
}

pub const PERMISSIONS: [PermissionSeed; 11] = [
    PermissionSeed {
        key: PermissionKey::ViewUsers,
        description: "View project users",
    },
    PermissionSeed {
        key: PermissionKey::ManageUsers,
        description: "Add, modify and delete users",
    },
    PermissionSeed {
        key: PermissionKey::ViewRolePermissions,
        description: "View roles and permissions",
    },
    PermissionSeed {
        key: PermissionKey::ViewTasks,
        description: "View users' tasks",
    },
    PermissionSeed {
        key: PermissionKey::ManageTasks,
        description: "Add, modify, and delete tasks",
    },
    PermissionSeed {
        key: PermissionKey::ViewOwnTasks,
        description: "View own tasks",
    },
    PermissionSeed {
        key: PermissionKey::ModifyOwnTasks,
        description: "Modify own tasks",
    },
    PermissionSeed {
        key: PermissionKey::ModifyOwnAccount,
        description: "Modify own account",
    },
    PermissionSeed {
        key: PermissionKey::ViewProjectsManagers,
        description: "View projects and managers",
    },
    PermissionSeed {
        key: PermissionKey::ManageProjects,
        description: "Add, modify, and delete projects",
    },
    PermissionSeed {
        key: PermissionKey::AddManagerToProject,
        description: "Add manager to a project",
    },
];

pub const ROLES: [RoleSeed; 4] = [
    RoleSeed {
        key: RoleKey::Admin,
        description: "Administrator of the TaskBook application",
        permissions: &[
            PermissionKey::ViewProjectsManagers,
            PermissionKey::ManageProjects,
            PermissionKey::AddManagerToProject,
        ],
    },
    RoleSeed {
        key: RoleKey::Manager,
        description: "Project manager",
        permissions: &[
            PermissionKey::ViewUsers,
            PermissionKey::ManageUsers,
            PermissionKey::ViewRolePermissions,
            PermissionKey::ViewTasks,
            PermissionKey::ManageTasks,
            PermissionKey::ViewOwnTasks,
            PermissionKey::ModifyOwnTasks,
            PermissionKey::ModifyOwnAccount,
        ],
    },
    RoleSeed {
        key: RoleKey::AdvancedUser,
        description: "Advanced user in the project",
        permissions: &[
            PermissionKey::ViewUsers,
            PermissionKey::ViewRolePermissions,
            PermissionKey::ViewTasks,
            PermissionKey::ManageTasks,
            PermissionKey::ViewOwnTasks,
            PermissionKey::ModifyOwnTasks,
            PermissionKey::ModifyOwnAccount,
        ],
    },
    RoleSeed {
        key: RoleKey::User,
        description: "Mere user in the project",
        permissions: &[
            PermissionKey::ViewOwnTasks,
            PermissionKey::ModifyOwnTasks,
            PermissionKey::ModifyOwnAccount,
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Permission '{0}' is listed more than once")]
    DuplicatePermission(PermissionKey),
    #[error("Role '{0}' is listed more than once")]
    DuplicateRole(RoleKey),
    #[error("Role '{role}' references undefined permission '{permission}'")]
    UndefinedPermission {
        role: RoleKey,
        permission: PermissionKey,
    },
    #[error("Role '{role}' lists permission '{permission}' more than once")]
    RepeatedRolePermission {
        role: RoleKey,
        permission: PermissionKey,
    },
}

pub fn permission_seed(key: PermissionKey) -> Option<&'static PermissionSeed> {
    PERMISSIONS.iter().find(|p| p.key == key)
}

pub fn role_seed(key: RoleKey) -> Option<&'static RoleSeed> {
    ROLES.iter().find(|r| r.key == key)
}

pub fn validate_catalog() -> Result<(), CatalogError> {
    validate(&PERMISSIONS, &ROLES)
}

pub(crate) fn validate(
    permissions: &[PermissionSeed],
    roles: &[RoleSeed],
) -> Result<(), CatalogError> {
    let mut defined = BTreeSet::new();
    for permission in permissions {
        if !defined.insert(permission.key) {
            return Err(CatalogError::DuplicatePermission(permission.key));
        }
    }

    let mut seen_roles = BTreeSet::new();
    for role in roles {
        if !seen_roles.insert(role.key) {
            return Err(CatalogError::DuplicateRole(role.key));
        }

        let mut role_permissions = BTreeSet::new();
        for permission in role.permissions {
            if !defined.contains(permission) {
                return Err(CatalogError::UndefinedPermission {
                    role: role.key,
                    permission: *permission,
                });
            }

            if !role_permissions.insert(*permission) {
                return Err(CatalogError::RepeatedRolePermission {
                    role: role.key,
                    permission: *permission,
                });
            }
        }
    }

    Ok(())
}
