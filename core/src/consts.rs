/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::RoleKey;

pub const DEFAULT_ADMIN_USERNAME: &str = "Admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin1";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@taskbook.com";
pub const DEFAULT_ADMIN_FIRST_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_LAST_NAME: &str = "Admin";

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const DEFAULT_ADMIN_ROLE: RoleKey = RoleKey::Admin;
