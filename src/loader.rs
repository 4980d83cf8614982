//! Configuration loader.
//! Resolves the config location, fetches it once with caching disabled, parses JSON,
//! and checks that the top-level value is a list.
//! Remote sources go through reqwest; local paths are re-read from disk on every load.
//! No retry. A timeout applies only when one is configured.

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::entry::{LauncherEntry, LauncherState};

pub const DEFAULT_CONFIG_PATH: &str = "./items.json";

/// Why a load fell back to the empty state. All variants render the same way.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("config server answered {0}")]
    Status(StatusCode),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a list of entries, found {0}")]
    Shape(&'static str),
}

/// Where items.json lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Remote(Url),
}

impl ConfigSource {
    /// http(s) URLs are fetched, file:// URLs and anything else are local paths.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => ConfigSource::Remote(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => ConfigSource::File(path),
                Err(()) => ConfigSource::File(PathBuf::from(location)),
            },
            _ => ConfigSource::File(PathBuf::from(location)),
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::File(PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Remote(url) => write!(f, "{}", url),
        }
    }
}


// *************** Public API ***************

/// Loads the launcher state. Errors keep their cause; use `LauncherState::settle` to collapse them.
pub async fn load(
    source: &ConfigSource,
    timeout: Option<Duration>,
) -> Result<LauncherState, LoadError> {
    let client = build_client(timeout)?;
    load_with(&client, source).await
}

/// Same as `load`, reusing a caller-provided HTTP client for remote sources.
pub async fn load_with(
    client: &Client,
    source: &ConfigSource,
) -> Result<LauncherState, LoadError> {
    debug!("Loading launcher config from {}", source);
    let body = match source {
        ConfigSource::File(path) => read_file(path).await?,
        ConfigSource::Remote(url) => fetch_remote(client, url).await?,
    };
    let items = parse_items(&body)?;
    Ok(LauncherState::new(items))
}

/// Parses a config body. Only a top-level JSON array is accepted; its elements are kept as-is.
pub fn parse_items(body: &[u8]) -> Result<Vec<LauncherEntry>, LoadError> {
    let value: Value = serde_json::from_slice(body)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        other => Err(LoadError::Shape(kind_of(&other))),
    }
}


// *************** Internal Functions ***************

async fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build_client(timeout: Option<Duration>) -> Result<Client, LoadError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

async fn fetch_remote(client: &Client, url: &Url) -> Result<Vec<u8>, LoadError> {
    let response = client
        .get(url.clone())
        .header(CACHE_CONTROL, "no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(body.to_vec())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// *************** Tests ***************
