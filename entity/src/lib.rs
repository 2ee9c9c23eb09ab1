/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod account;
pub mod account_role;
pub mod keys;
pub mod permission;
pub mod project;
pub mod project_user;
pub mod role;
pub mod role_permission;

pub use keys::{PermissionKey, RoleKey};
