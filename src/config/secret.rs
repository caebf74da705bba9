//! Secret configuration source.
//!
//! Reads a set of secret configuration values from a `.properties` file.
//! These values are only secret in that they are excluded from version
//! control and supplied per-deployment. The file is read once per process;
//! missing or unreadable files degrade to an empty map with diagnostics
//! rather than failing the embedding service.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use once_cell::sync::OnceCell;
use tracing::{debug, error, warn};

use super::properties::read_properties;
use super::source::{ConfigSource, CONFIG_ORDINAL_KEY};

/// Environment variable naming the secrets file, consulted when the
/// embedding service supplies no explicit path property.
pub const SECRET_PATH_ENV: &str = "CONFIG_SECRET_PATH";

/// Fallback location under the conventional secrets mount.
pub const DEFAULT_SECRET_LOCATION: &str = "/run/secrets/secret.properties";

/// Ranks secret values between container config and environment variables,
/// unless the file sets its own ordinal.
const SECRET_SOURCE_ORDINAL: &str = "260";

/// Lazily-loaded secrets file, exposed as a [`ConfigSource`].
pub struct SecretConfigSource {
    path_property: Option<String>,
    secrets: OnceCell<HashMap<String, String>>,
}

impl SecretConfigSource {
    pub fn new() -> Self {
        Self {
            path_property: None,
            secrets: OnceCell::new(),
        }
    }

    /// Build with an explicit path, the analog of the `config.secret.path`
    /// property. An explicit path outranks [`SECRET_PATH_ENV`].
    pub fn with_path_property(path: impl Into<String>) -> Self {
        Self {
            path_property: Some(path.into()),
            secrets: OnceCell::new(),
        }
    }

    fn load(&self) -> HashMap<String, String> {
        let mut secrets = HashMap::new();
        let path = resolve_secret_path(
            self.path_property.as_deref(),
            std::env::var(SECRET_PATH_ENV).ok().as_deref(),
        );

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                error!(
                    "Secrets file at {} does not exist or cannot be read: {}",
                    path.display(),
                    e
                );
                return secrets;
            }
        };

        // Best effort: an I/O error mid-read keeps whatever parsed so far.
        if let Err(e) = read_properties(BufReader::new(file), &mut secrets) {
            error!(
                "Error while reading secrets file {}: {}",
                path.display(),
                e
            );
        }

        // Keys only. Values are secrets and never hit the logs.
        debug!(
            "Found secret keys: {:?}",
            secrets.keys().collect::<Vec<_>>()
        );

        secrets
            .entry(CONFIG_ORDINAL_KEY.to_string())
            .or_insert_with(|| SECRET_SOURCE_ORDINAL.to_string());
        secrets
    }
}

impl Default for SecretConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for SecretConfigSource {
    fn name(&self) -> &str {
        "secret"
    }

    /// Loads the secrets file on first call; every later call returns the
    /// same cached map without touching the filesystem again.
    fn properties(&self) -> &HashMap<String, String> {
        self.secrets.get_or_init(|| self.load())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// First match wins: explicit property, then [`SECRET_PATH_ENV`], then the
/// default location. Pure so the chain is testable without touching the
/// process environment.
fn resolve_secret_path(property: Option<&str>, env: Option<&str>) -> PathBuf {
    if let Some(path) = non_empty(property) {
        return PathBuf::from(path);
    }
    if let Some(path) = non_empty(env) {
        return PathBuf::from(path);
    }
    warn!(
        "Secret path property and environment variable {} not set, using default {}",
        SECRET_PATH_ENV, DEFAULT_SECRET_LOCATION
    );
    PathBuf::from(DEFAULT_SECRET_LOCATION)
}
