//! # Configuration
//!
//! Chefbook configuration is loaded by [`confique`] from layered sources.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `CHEFBOOK_DATA_DIR`, `CHEFBOOK_CUSTOMERS_FILE`,
//!    `CHEFBOOK_BOOKINGS_FILE`, `CHEFBOOK_BIRTHDAY_WINDOW`.
//! 2. **Config file**: `chefbook.toml` in the OS config directory (via the
//!    `directories` crate), or an explicit path. A missing file is skipped.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory, else `.` | Where both CSV files live |
//! | `customers_file` | `customers.csv` | Customer store file name |
//! | `bookings_file` | `bookings.csv` | Booking store file name |
//! | `birthday_window` | `7` | Days ahead covered by the birthdays report |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "chefbook.toml";

/// Configuration for chefbook, stored in `chefbook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChefbookConfig {
    /// Directory holding the CSV stores. When absent, the OS data directory.
    #[config(env = "CHEFBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[config(env = "CHEFBOOK_CUSTOMERS_FILE", default = "customers.csv")]
    pub customers_file: String,

    #[config(env = "CHEFBOOK_BOOKINGS_FILE", default = "bookings.csv")]
    pub bookings_file: String,

    /// How many days ahead `birthdays` looks by default.
    #[config(env = "CHEFBOOK_BIRTHDAY_WINDOW", default = 7)]
    pub birthday_window: u32,
}

impl Default for ChefbookConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            customers_file: "customers.csv".to_string(),
            bookings_file: "bookings.csv".to_string(),
            birthday_window: 7,
        }
    }
}

/// Resolved locations of both stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChefbookPaths {
    pub customers: PathBuf,
    pub bookings: PathBuf,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "chefbook", "chefbook")
}

/// `chefbook.toml` in the OS config directory, if one can be determined.
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl ChefbookConfig {
    /// Loads from the environment, then `file` (or the default config file),
    /// then compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file.map(Path::to_path_buf).or_else(default_config_file) {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn paths(&self) -> ChefbookPaths {
        let dir = self.data_dir();
        ChefbookPaths {
            customers: dir.join(&self.customers_file),
            bookings: dir.join(&self.bookings_file),
        }
    }
}
