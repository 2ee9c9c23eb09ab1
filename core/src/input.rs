/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, bail};

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn read_database_url(
    database_url: Option<&str>,
    database_url_file: Option<&str>,
) -> Result<String> {
    if let Some(file) = database_url_file {
        let url = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read database url from {}", file))?;
        Ok(url.trim().to_string())
    } else if let Some(url) = database_url {
        Ok(url.to_string())
    } else {
        bail!("No database url provided")
    }
}
