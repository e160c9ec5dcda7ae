use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tdsp_color::names::canonicalize;
use tdsp_color::{Fade, FadeKind};

use crate::error::ConfigError;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TDSP_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Variant used to read and print channel values
    pub base: Base,

    /// Defaults for the `fade` command
    pub fade: FadeConfig,

    /// User shorthands, resolved before the named-color table.
    /// Keys are canonical names (lowercase, single spaces).
    #[serde(deserialize_with = "deserialize_aliases")]
    pub aliases: BTreeMap<String, String>,
}

fn deserialize_aliases<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(canonical_aliases(raw))
}

/// Key aliases by canonical name.
///
/// Spellings that collapse to the same name keep the first in input order;
/// the others are logged and dropped.
pub fn canonical_aliases(
    raw: impl IntoIterator<Item = (String, String)>,
) -> BTreeMap<String, String> {
    let mut aliases = BTreeMap::new();
    for (name, value) in raw {
        match aliases.entry(canonicalize(&name)) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(slot) => {
                tracing::warn!(
                    alias = %name,
                    kept = %slot.get(),
                    ignored = %value,
                    "Duplicate alias, keeping the first"
                );
            }
        }
    }
    aliases
}

/// Which color variant channel values are expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    /// Channels in 0..=1
    #[default]
    Unit,
    /// Channels in 0..=255
    Byte,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    pub begin: f64,
    pub end: f64,
    pub kind: FadeKind,

    /// Number of colors printed, both ends included
    pub steps: usize,
}

impl Default for FadeConfig {
    fn default() -> Self {
        let fade = Fade::default();
        Self {
            begin: fade.begin,
            end: fade.end,
            kind: fade.kind,
            steps: default_steps(),
        }
    }
}

fn default_steps() -> usize {
    5
}

impl FadeConfig {
    pub fn fade(&self) -> Fade {
        Fade {
            begin: self.begin,
            end: self.end,
            kind: self.kind,
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    /// Given on the command line
    Explicit(PathBuf),
    /// Named by `TDSP_CONFIG`
    Environment(PathBuf),
    /// `TDSP_CONFIG` named a file that could not be used
    EnvironmentFallback(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => f.write_str("defaults"),
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::Environment(path) => write!(f, "{} (from {CONFIG_ENV})", path.display()),
            ConfigSource::EnvironmentFallback(path) => {
                write!(f, "defaults ({} not usable)", path.display())
            }
        }
    }
}

impl AppConfig {
    /// Load from `explicit`, else from `TDSP_CONFIG`, else use defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit, env_path.as_deref())
    }

    /// Resolve the config source without touching the environment.
    ///
    /// An explicit path must load; a path from the environment that does not
    /// load is reported and replaced by defaults.
    pub fn load_from(
        explicit: Option<&Path>,
        env_path: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        match env_path {
            Some(path) => match Self::from_file(path) {
                Ok(config) => Ok((config, ConfigSource::Environment(path.to_path_buf()))),
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config, using defaults");
                    Ok((
                        Self::default(),
                        ConfigSource::EnvironmentFallback(path.to_path_buf()),
                    ))
                }
            },
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            aliases = config.aliases.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Color string an alias stands for; names match as table names do.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(&canonicalize(name)).map(String::as_str)
    }
}
