//! Configuration types for bestiary.
//!
//! [`Config::load`] layers `~/.config/bestiary/config.toml` (or an explicit
//! file) on top of the embedded defaults. [`Config::defaults`] returns the
//! same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
raw_input         = "src/lib/data/monsters_2024_raw.json"
normalized_output = "src/lib/data/monsters_2024_processed.json"
local_dataset     = "src/lib/data/monsters_2024_final.json"
missing_output    = "missing_monsters.json"

[remote]
index_url           = "https://www.aidedd.org/en/rules/monsters/"
fallback_index_url  = "https://www.aidedd.org/dnd-filters/monsters.php"
detail_url_template = "https://www.aidedd.org/dnd/monstres.php?vo={slug}"
user_agent          = "bestiary/0.1"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/bestiary/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// `[paths]` section of `config.toml`. Relative paths resolve against the
/// working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_raw_input")]
    pub raw_input: PathBuf,
    #[serde(default = "default_normalized_output")]
    pub normalized_output: PathBuf,
    #[serde(default = "default_local_dataset")]
    pub local_dataset: PathBuf,
    #[serde(default = "default_missing_output")]
    pub missing_output: PathBuf,
}

fn default_raw_input() -> PathBuf { "src/lib/data/monsters_2024_raw.json".into() }
fn default_normalized_output() -> PathBuf { "src/lib/data/monsters_2024_processed.json".into() }
fn default_local_dataset() -> PathBuf { "src/lib/data/monsters_2024_final.json".into() }
fn default_missing_output() -> PathBuf { "missing_monsters.json".into() }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_input: default_raw_input(),
            normalized_output: default_normalized_output(),
            local_dataset: default_local_dataset(),
            missing_output: default_missing_output(),
        }
    }
}

/// `[remote]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_index_url")]
    pub index_url: String,
    /// Tried once when `index_url` answers with anything but 200.
    #[serde(default = "default_fallback_index_url")]
    pub fallback_index_url: String,
    /// Detail page URL for a slug; `{slug}` is substituted.
    #[serde(default = "default_detail_url_template")]
    pub detail_url_template: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_index_url() -> String { "https://www.aidedd.org/en/rules/monsters/".to_string() }
fn default_fallback_index_url() -> String { "https://www.aidedd.org/dnd-filters/monsters.php".to_string() }
fn default_detail_url_template() -> String { "https://www.aidedd.org/dnd/monstres.php?vo={slug}".to_string() }
fn default_user_agent() -> String { "bestiary/0.1".to_string() }

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            fallback_index_url: default_fallback_index_url(),
            detail_url_template: default_detail_url_template(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// With `explicit`, that file must exist. Otherwise the user config file
    /// is read when present and silently skipped when not.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (config_path(), false),
        };
        tracing::debug!(path = %path.display(), required, "loading config");

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("bestiary")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
