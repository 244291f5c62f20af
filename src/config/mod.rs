use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::utils::{app_data_dir, ensure_dir, write_atomic};

const CONFIG_FILE: &str = "config.json";

/// Display preferences applied by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
}

impl Config {
    /// Symbol rendered before amounts; unrecognised codes fall back to `$`.
    pub fn currency_symbol(&self) -> &str {
        match self.currency.as_str() {
            "EUR" => "€",
            "GBP" => "£",
            "JPY" => "¥",
            _ => "$",
        }
    }

    /// en-US renders `Jun 5, 2024`; every other locale renders `5 Jun 2024`.
    pub fn month_first_dates(&self) -> bool {
        self.locale == "en-US"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, StoreError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, StoreError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, StoreError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }
}
