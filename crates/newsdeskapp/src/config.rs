//! # Configuration
//!
//! newsdesk configuration is a [`confique`] derive, loaded in layers.
//!
//! ## Resolution Order
//!
//! Configuration is resolved in priority order:
//! 1. **Command-line flags**: `--bind`, `--data-dir` (applied by the binary).
//! 2. **Environment variables**: `NEWSDESK_BIND`, `NEWSDESK_ADMIN_TOKEN`, etc.
//! 3. **Config file**: the TOML file passed with `--config`, if any.
//! 4. **Compiled defaults**: `#[config(default = ...)]` and the methods below.
//!
//! ## Available Settings
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `data_dir` | `NEWSDESK_DATA_DIR` | OS data directory (via `directories`) |
//! | `bind` | `NEWSDESK_BIND` | `127.0.0.1:3000` |
//! | `admin_token` | `NEWSDESK_ADMIN_TOKEN` | unset: all writes are forbidden |
//! | `enforce_categories` | `NEWSDESK_ENFORCE_CATEGORIES` | `false` |
//! | `default_author` | `NEWSDESK_DEFAULT_AUTHOR` | `Admin` |
//! | `default_image_source` | `NEWSDESK_DEFAULT_IMAGE_SOURCE` | `N/A` |
//! | `read.primary_url` | `NEWSDESK_READ_PRIMARY_URL` | `http://127.0.0.1:3000` |
//! | `read.secondary_url` | `NEWSDESK_READ_SECONDARY_URL` | unset |
//!
//! ## Example
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! admin_token = "change-me"
//! enforce_categories = true
//!
//! [read]
//! primary_url = "https://news.example.com/api"
//! secondary_url = "https://mirror.example.com/api"
//! ```

use crate::error::{NewsError, Result};
use crate::validation::{DraftDefaults, ValidationPolicy};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fallback when the OS reports no home directory.
const LOCAL_DATA_DIR: &str = ".newsdesk";

/// Configuration for newsdesk, optionally stored in a TOML file.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewsConfig {
    /// Directory holding the article documents.
    #[config(env = "NEWSDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Address the HTTP server listens on.
    #[config(env = "NEWSDESK_BIND", default = "127.0.0.1:3000")]
    pub bind: String,

    /// Bearer token granting admin rights. Without one, every write is refused.
    #[config(env = "NEWSDESK_ADMIN_TOKEN")]
    pub admin_token: Option<String>,

    /// Reject categories and subcategories missing from the registry.
    #[config(env = "NEWSDESK_ENFORCE_CATEGORIES", default = false)]
    pub enforce_categories: bool,

    #[config(env = "NEWSDESK_DEFAULT_AUTHOR", default = "Admin")]
    pub default_author: String,

    #[config(env = "NEWSDESK_DEFAULT_IMAGE_SOURCE", default = "N/A")]
    pub default_image_source: String,

    #[config(nested)]
    pub read: ReadConfig,
}

/// Where the reader fetches articles from.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReadConfig {
    #[config(env = "NEWSDESK_READ_PRIMARY_URL", default = "http://127.0.0.1:3000")]
    pub primary_url: String,

    /// Tried once when the primary fails.
    #[config(env = "NEWSDESK_READ_SECONDARY_URL")]
    pub secondary_url: Option<String>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            bind: "127.0.0.1:3000".to_string(),
            admin_token: None,
            enforce_categories: false,
            default_author: "Admin".to_string(),
            default_image_source: "N/A".to_string(),
            read: ReadConfig::default(),
        }
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            primary_url: "http://127.0.0.1:3000".to_string(),
            secondary_url: None,
        }
    }
}

impl NewsConfig {
    /// Loads configuration from the environment and an optional TOML file.
    ///
    /// Environment variables take precedence over the file. A missing file is
    /// an error, since it was asked for explicitly.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            if !path.is_file() {
                return Err(NewsError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        builder.load().map_err(|e| NewsError::Config(e.to_string()))
    }

    /// The configured data directory, or the OS data directory for newsdesk.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        ProjectDirs::from("com", "newsdesk", "newsdesk")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(LOCAL_DATA_DIR))
    }

    /// The admin token, ignoring blank values.
    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            enforce_categories: self.enforce_categories,
        }
    }

    pub fn draft_defaults(&self) -> DraftDefaults {
        DraftDefaults {
            author: self.default_author.clone(),
            image_source: self.default_image_source.clone(),
        }
    }
}
