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
//! This module manages the application configuration file and stamps the
//! running crate version into the loaded value, so the rest of the
//! application reads a single process-wide config.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "runeboard";

const DEFAULT_CURRENCY: &str = "rune";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Config schema version.
    pub version: u32,

    /// Currency code amounts are decorated with, `"rune"` or `"usd"`.
    pub currency: String,

    /// Crate version stamped in by [`load_config`]; never persisted.
    #[serde(skip)]
    pub app_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            currency: DEFAULT_CURRENCY.to_string(),
            app_version: String::new(),
        }
    }
}

pub fn load_config() -> AppConfig {
    stamp_version(confy::load(CONFIG_NAME, None).unwrap_or_default())
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

fn stamp_version(mut cfg: AppConfig) -> AppConfig {
    cfg.app_version = crate::VERSION.to_string();
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefer_the_native_currency() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.currency, "rune");
        assert!(cfg.app_version.is_empty());
    }

    #[test]
    fn loading_stamps_the_crate_version() {
        let cfg = stamp_version(AppConfig::default());
        assert_eq!(cfg.app_version, crate::VERSION);
    }

    #[test]
    fn the_stamped_version_is_never_persisted() {
        let cfg = stamp_version(AppConfig::default());
        let json = serde_json::to_string(&cfg).unwrap();

        assert!(!json.contains("app_version"));
    }
}
