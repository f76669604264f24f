//! Run configuration
//!
//! Values come from an optional JSON config file and from command-line
//! flags; a flag always wins over the file. The base URL and both API keys
//! are required once everything is merged.
//!
//! ```json
//! {
//!   "baseUrl": "https://magda.example.com",
//!   "apiKeyId": "...",
//!   "apiKey": "...",
//!   "continue": false,
//!   "dataDir": "data"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use common::prelude::ContentPaths;

use crate::api::client::ApiCredentials;
use crate::sync::SyncOptions;

/// Contents of the JSON config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default, rename = "continue")]
    pub continue_on_error: Option<bool>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub api_key_id: Option<String>,
    pub api_key: Option<String>,
    pub continue_on_error: bool,
    pub data_dir: Option<PathBuf>,
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    pub base_url: Url,
    pub credentials: ApiCredentials,
    pub options: SyncOptions,
    pub paths: ContentPaths,
}

impl MirrorConfig {
    /// Load the config file named by `overrides`, if any, and merge.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let file = match &overrides.config_path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Self::merge(file, overrides)
    }

    pub fn merge(file: ConfigFile, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let base_url = required(overrides.base_url.or(file.base_url), "base URL (--url)")?;
        let api_key_id = required(
            overrides.api_key_id.or(file.api_key_id),
            "API key id (--api-key-id)",
        )?;
        let api_key = required(overrides.api_key.or(file.api_key), "API key (--api-key)")?;

        let base_url = Url::parse(&base_url).map_err(|source| ConfigError::InvalidUrl {
            url: base_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: base_url.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        let continue_on_error =
            overrides.continue_on_error || file.continue_on_error.unwrap_or(false);
        let paths = overrides
            .data_dir
            .or(file.data_dir)
            .map(ContentPaths::new)
            .unwrap_or_default();

        Ok(Self {
            base_url,
            credentials: ApiCredentials::new(api_key_id, api_key),
            options: SyncOptions { continue_on_error },
            paths,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing required option: {0}")]
    Missing(&'static str),
    #[error("invalid base URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
