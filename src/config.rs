//! Configuration loading.
//!
//! Everything the adapters need arrives in one explicit [`Config`] struct
//! read from a TOML file; nothing is kept in ambient global state. Secrets
//! stay out of the file: the HTTP gate token comes from `SYNC_TOKEN` and the
//! store credential from `FIRESTORE_TOKEN`.

use crate::core::{PurgeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub firestore: FirestoreConfig,
    #[serde(default)]
    pub purge: PurgeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port for `docpurge serve`.
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirestoreConfig {
    pub project_id: String,
    /// Firestore database id; almost always the default database.
    #[serde(default = "default_database")]
    pub database: String,
    /// Override for tests and emulators.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeConfig {
    /// Global cap on documents deleted in one run.
    #[serde(default = "default_total_limit")]
    pub total_limit: usize,
    /// Collections to purge, processed in this order.
    #[serde(default)]
    pub collections: Vec<CollectionTarget>,
}

/// One entry of the logical-name → collection mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionTarget {
    /// Logical name used in logs and reports.
    pub name: String,
    /// Collection in the remote store.
    pub collection: String,
}

fn default_port() -> u16 {
    4000
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com".to_string()
}

fn default_total_limit() -> usize {
    200
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port() }
    }
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            database: default_database(),
            base_url: default_base_url(),
        }
    }
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            total_limit: default_total_limit(),
            collections: Vec::new(),
        }
    }
}

impl Config {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PurgeError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| PurgeError::Config(format!("cannot parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.firestore.project_id.is_empty() {
            return Err(PurgeError::Config(
                "firestore.project_id must be set".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for target in &self.purge.collections {
            if target.name.is_empty() || target.collection.is_empty() {
                return Err(PurgeError::Config(
                    "every collection entry needs a name and a collection".to_string(),
                ));
            }
            if !seen.insert(target.name.as_str()) {
                return Err(PurgeError::Config(format!(
                    "duplicate collection entry '{}'",
                    target.name
                )));
            }
        }
        Ok(())
    }
}
