/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    DeriveActiveEnum,
    EnumIter,
    Deserialize,
    Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(64))")]
pub enum PermissionKey {
    #[sea_orm(string_value = "ViewUsers")]
    ViewUsers,
    #[sea_orm(string_value = "ManageUsers")]
    ManageUsers,
    #[sea_orm(string_value = "ViewRolePermissions")]
    ViewRolePermissions,
    #[sea_orm(string_value = "ViewTasks")]
    ViewTasks,
    #[sea_orm(string_value = "ManageTasks")]
    ManageTasks,
    #[sea_orm(string_value = "ViewOwnTasks")]
    ViewOwnTasks,
    #[sea_orm(string_value = "ModifyOwnTasks")]
    ModifyOwnTasks,
    #[sea_orm(string_value = "ModifyOwnAccount")]
    ModifyOwnAccount,
    #[sea_orm(string_value = "ViewProjectsManagers")]
    ViewProjectsManagers,
    #[sea_orm(string_value = "ManageProjects")]
    ManageProjects,
    #[sea_orm(string_value = "AddManagerToProject")]
    AddManagerToProject,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    DeriveActiveEnum,
    EnumIter,
    Deserialize,
    Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(64))")]
pub enum RoleKey {
    #[sea_orm(string_value = "Admin")]
    Admin,
    #[sea_orm(string_value = "Manager")]
    Manager,
    #[sea_orm(string_value = "AdvancedUser")]
    AdvancedUser,
    #[sea_orm(string_value = "User")]
    User,
}

impl PermissionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKey::ViewUsers => "ViewUsers",
            PermissionKey::ManageUsers => "ManageUsers",
            PermissionKey::ViewRolePermissions => "ViewRolePermissions",
            PermissionKey::ViewTasks => "ViewTasks",
            PermissionKey::ManageTasks => "ManageTasks",
            PermissionKey::ViewOwnTasks => "ViewOwnTasks",
            PermissionKey::ModifyOwnTasks => "ModifyOwnTasks",
            PermissionKey::ModifyOwnAccount => "ModifyOwnAccount",
            PermissionKey::ViewProjectsManagers => "ViewProjectsManagers",
            PermissionKey::ManageProjects => "ManageProjects",
            PermissionKey::AddManagerToProject => "AddManagerToProject",
        }
    }
}

impl RoleKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::Admin => "Admin",
            RoleKey::Manager => "Manager",
            RoleKey::AdvancedUser => "AdvancedUser",
            RoleKey::User => "User",
        }
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
