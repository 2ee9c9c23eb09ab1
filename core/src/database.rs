/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::db_store::{DbAccountStore, DbCatalogStore};
use super::input::read_database_url;
use super::seeder::{SeedReport, seed};
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url =
        read_database_url(cli.database_url.as_deref(), cli.database_url_file.as_deref())?;

    let mut opt = ConnectOptions::new(db_url);

    // SQL statements are only logged at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(cli.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(60));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_database(&db)
        .await
        .context("Failed to seed database")?;
    Ok(db)
}

pub async fn seed_database(db: &DatabaseConnection) -> Result<SeedReport> {
    let catalog = DbCatalogStore::new(db.clone());
    let accounts = DbAccountStore::new(db.clone());

    seed(&catalog, &accounts).await
}
