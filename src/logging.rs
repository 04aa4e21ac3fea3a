// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Logging setup.
//!
//! The terminal is owned by the form, so all `tracing` output goes to a log
//! file in the platform data directory instead.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "MEASUREUI_LOG";
const LOG_FILE: &str = "measureui.log";

/// Directory holding the log file.
pub(crate) fn get_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
        .context("Failed to determine home directory")?;
    Ok(dirs.data_local_dir().to_path_buf())
}

/// Installs the file subscriber and returns the path written to.
///
/// The filter comes from `MEASUREUI_LOG`, falling back to `RUST_LOG` and
/// then to `info` for this crate.
pub(crate) fn initialize_logging() -> Result<PathBuf> {
    let directory = get_data_dir()?;
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create {}", directory.display()))?;

    let log_path = directory.join(LOG_FILE);
    let log_file = fs::File::create(&log_path)
        .with_context(|| format!("Failed to create {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(log_path)
}
