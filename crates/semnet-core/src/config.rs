//! Configuration for semnet consumers.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (SEMNET_ prefix, `__` section separator)
//! 2. Config file (`semnet.toml` by default)
//! 3. Defaults

use serde::Deserialize;

use crate::error::Result;
use crate::types::{HAS_PART, USES_FUEL};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetConfig {
    /// Fallback tracing filter when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub conflicts: ConflictConfig,
}

/// Settings for property inheritance.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InferenceConfig {
    /// Relations copied from parent to child along `is-a` edges.
    #[serde(default = "default_property_relations")]
    pub property_relations: Vec<String>,

    /// Upper bound on rounds for fixed-point inheritance.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
}

/// Settings for conflict detection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConflictConfig {
    /// Relations scanned when no relation is given explicitly.
    #[serde(default = "default_conflict_relations")]
    pub relations: Vec<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_property_relations() -> Vec<String> {
    vec![HAS_PART.to_string()]
}

fn default_max_rounds() -> usize {
    16
}

fn default_conflict_relations() -> Vec<String> {
    vec![USES_FUEL.to_string()]
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            inference: InferenceConfig::default(),
            conflicts: ConflictConfig::default(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            property_relations: default_property_relations(),
            max_rounds: default_max_rounds(),
        }
    }
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            relations: default_conflict_relations(),
        }
    }
}

impl NetConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) and
    /// `SEMNET_*` environment variables.
    ///
    /// Sections are separated by `__`, e.g. `SEMNET_INFERENCE__MAX_ROUNDS=8`.
    /// List-valued settings accept comma-separated values from the
    /// environment, e.g. `SEMNET_INFERENCE__PROPERTY_RELATIONS=has-part,uses-fuel`.
    pub fn load(file_prefix: &str) -> Result<Self> {
        Self::load_with(file_prefix, environment())
    }

    fn load_with(file_prefix: &str, env: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(env)
            .build()?;

        let loaded: NetConfig = cfg.try_deserialize()?;
        tracing::debug!(
            file_prefix,
            property_relations = ?loaded.inference.property_relations,
            conflict_relations = ?loaded.conflicts.relations,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}

/// The `SEMNET_` environment layer.
fn environment() -> config::Environment {
    config::Environment::with_prefix("SEMNET")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("inference.property_relations")
        .with_list_parse_key("conflicts.relations")
        .try_parsing(true)
}
