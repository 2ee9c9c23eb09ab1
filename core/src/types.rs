/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::greater_than_zero;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "TaskBook", display_name = "TaskBook", bin_name = "taskbook-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TASKBOOK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TASKBOOK_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "TASKBOOK_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "TASKBOOK_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "20")]
    pub max_connections: u32,
    #[arg(long, env = "TASKBOOK_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountWithRoles {
    #[serde(flatten)]
    pub account: AccountSummary,
    pub roles: Vec<RoleKey>,
}

impl From<MAccount> for AccountSummary {
    fn from(account: MAccount) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
        }
    }
}

pub type EAccount = account::Entity;
pub type EAccountRole = account_role::Entity;
pub type EPermission = permission::Entity;
pub type EProject = project::Entity;
pub type EProjectUser = project_user::Entity;
pub type ERole = role::Entity;
pub type ERolePermission = role_permission::Entity;

pub type MAccount = account::Model;
pub type MAccountRole = account_role::Model;
pub type MPermission = permission::Model;
pub type MProject = project::Model;
pub type MProjectUser = project_user::Model;
pub type MRole = role::Model;
pub type MRolePermission = role_permission::Model;

pub type AAccount = account::ActiveModel;
pub type AAccountRole = account_role::ActiveModel;
pub type APermission = permission::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AProjectUser = project_user::ActiveModel;
pub type ARole = role::ActiveModel;
pub type ARolePermission = role_permission::ActiveModel;

pub type CAccount = account::Column;
pub type CAccountRole = account_role::Column;
pub type CPermission = permission::Column;
pub type CProject = project::Column;
pub type CProjectUser = project_user::Column;
pub type CRole = role::Column;
pub type CRolePermission = role_permission::Column;

pub type RAccountRole = account_role::Relation;
pub type RProjectUser = project_user::Relation;
pub type RRolePermission = role_permission::Relation;
