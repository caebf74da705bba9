//! Configuration source contract and layering.
//!
//! Sources are registered explicitly and ranked by a numeric ordinal; when
//! several sources define the same key, the highest-ordinal source wins.

use std::collections::HashMap;

/// Key a source may define to override its own priority.
pub const CONFIG_ORDINAL_KEY: &str = "config_ordinal";

/// Priority for sources that declare nothing else.
pub const DEFAULT_ORDINAL: u32 = 100;

/// Environment variables outrank file-based sources by convention.
const ENV_SOURCE_ORDINAL: u32 = 300;

/// A named provider of string configuration values.
pub trait ConfigSource: Send + Sync {
    /// Identifier used to tell sources apart in logs and lookups.
    fn name(&self) -> &str;

    /// The full key/value set this source provides.
    fn properties(&self) -> &HashMap<String, String>;

    /// A single value, or `None` when this source does not define the key.
    fn value(&self, key: &str) -> Option<String> {
        self.properties().get(key).cloned()
    }

    /// Rank of this source. Sources may override their own rank through
    /// [`CONFIG_ORDINAL_KEY`].
    fn ordinal(&self) -> u32 {
        self.value(CONFIG_ORDINAL_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ORDINAL)
    }
}

/// Process environment as a configuration source.
///
/// The environment is snapshotted at construction; lookups try the exact
/// key first and then the conventional mangled form (`a.b.c` → `A_B_C`).
pub struct EnvConfigSource {
    vars: HashMap<String, String>,
}

impl EnvConfigSource {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    fn mangle(key: &str) -> String {
        key.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvConfigSource {
    fn name(&self) -> &str {
        "env"
    }

    fn properties(&self) -> &HashMap<String, String> {
        &self.vars
    }

    fn value(&self, key: &str) -> Option<String> {
        self.vars
            .get(key)
            .or_else(|| self.vars.get(&Self::mangle(key)))
            .cloned()
    }

    fn ordinal(&self) -> u32 {
        self.vars
            .get(CONFIG_ORDINAL_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(ENV_SOURCE_ORDINAL)
    }
}

/// An explicit list of sources answering lookups in priority order.
pub struct LayeredConfig {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfig {
    /// Build from a registration list. Sources are ranked by descending
    /// ordinal; registration order breaks ties.
    pub fn new(mut sources: Vec<Box<dyn ConfigSource>>) -> Self {
        sources.sort_by_key(|s| std::cmp::Reverse(s.ordinal()));
        Self { sources }
    }

    /// The value for `key` from the highest-ranked source that defines it.
    pub fn value(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|s| s.value(key))
    }

    /// Name of the source that currently wins for `key`.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.value(key).is_some())
            .map(|s| s.name())
    }

    /// Registered sources in ranked order.
    pub fn sources(&self) -> impl Iterator<Item = &dyn ConfigSource> {
        self.sources.iter().map(|s| s.as_ref())
    }
}
