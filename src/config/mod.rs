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

//! Application configuration.
//!
//! This module reads the optional configuration file that chooses which
//! units the form starts with. The file is only ever read; a missing or
//! unreadable file means the defaults are used.

use std::path::Path;

use measureui::units::VolumeUnit;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const CONFIG_NAME: &str = "measureui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) default_from: VolumeUnit,
    pub(crate) default_to: VolumeUnit,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            default_from: VolumeUnit::Teaspoon,
            default_to: VolumeUnit::Tablespoon,
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    match confy::get_configuration_file_path(CONFIG_NAME, None) {
        Ok(path) => load_config_from(&path),
        Err(e) => {
            warn!(error = %e, "No configuration directory, using defaults");
            AppConfig::default()
        }
    }
}

/// Loads the configuration at `path` without creating it when absent.
pub(crate) fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        info!(path = %path.display(), "No configuration file, using defaults");
        return AppConfig::default();
    }

    match confy::load_path(path) {
        Ok(config) => {
            let config: AppConfig = config;
            info!(path = %path.display(), version = config.version, "Loaded configuration");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Invalid configuration, using defaults");
            AppConfig::default()
        }
    }
}
