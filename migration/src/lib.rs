/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260110_090000_create_table_permission;
mod m20260110_090100_create_table_role;
mod m20260110_090200_create_table_role_permission;
mod m20260110_090300_create_table_account;
mod m20260110_090400_create_table_account_role;
mod m20260110_090500_create_table_project;
mod m20260110_090600_create_table_project_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_090000_create_table_permission::Migration),
            Box::new(m20260110_090100_create_table_role::Migration),
            Box::new(m20260110_090200_create_table_role_permission::Migration),
            Box::new(m20260110_090300_create_table_account::Migration),
            Box::new(m20260110_090400_create_table_account_role::Migration),
            Box::new(m20260110_090500_create_table_project::Migration),
            Box::new(m20260110_090600_create_table_project_user::Migration),
        ]
    }
}
