/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod accounts;
pub mod catalog;
pub mod consts;
pub mod database;
pub mod db_store;
pub mod error;
pub mod identity;
pub mod input;
pub mod memory_store;
pub mod reader;
pub mod seeder;
pub mod store;
pub mod types;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting TaskBook server");

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
