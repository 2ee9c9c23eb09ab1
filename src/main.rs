/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use taskbook_core::init_state;
use taskbook_core::types::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();

    let _guard = cli.sentry_dsn.as_deref().map(sentry::init);

    let state = init_state(cli).await?;

    tracing::info!(
        max_connections = state.cli.max_connections,
        "Database ready, TaskBook provisioning complete"
    );

    Ok(())
}
