//! Configuration file lookup and loading.
//!
//! Resolution order:
//!
//! 1. `--config` flag (or `$NAMING_LINT_CONFIG`)
//! 2. `naming-lint.toml` or `.naming-lint.toml` in the working directory
//! 3. `config.toml` in `$NAMING_LINT_CONFIG_DIR`, else `~/.naming-lint/`
//! 4. Built-in defaults
//!
//! A `preset` named in the loaded file fills in every rule setting the file
//! leaves open.

use anyhow::{Context, Result};
use naming_lint_core::Config;
use naming_lint_rules::Preset;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line.
    Explicit(PathBuf),
    /// Found in the working directory.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration and applies its preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or names an unknown preset.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No configuration file, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }

        let mut config = Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        if let Some(name) = config.preset.clone() {
            let preset = Preset::from_name(&name)
                .with_context(|| format!("Unknown preset '{name}' in {}", path.display()))?;
            tracing::debug!("Applying preset {}", preset.name());
            preset.apply(&mut config);
        }
        Ok(config)
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["naming-lint.toml", ".naming-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(candidate) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists())
    {
        tracing::debug!("Found project config: {}", candidate.display());
        return ConfigSource::Project(candidate);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.exists())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

/// Returns `$NAMING_LINT_CONFIG_DIR`, else `~/.naming-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("NAMING_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".naming-lint"))
}
