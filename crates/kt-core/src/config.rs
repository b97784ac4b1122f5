//! Configuration types and parsing for karat.yml

use crate::configuration::DEFAULT_SIZE_UNIT;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project configuration from karat.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Storefront name
    pub name: String,

    /// How unset metal facets are filled when one of them is chosen
    #[serde(default)]
    pub autofill: AutofillPolicy,

    /// Unit appended to `metadata.size_value` when an option names none
    #[serde(default = "default_size_unit")]
    pub default_size_unit: String,

    /// Directories scanned for catalogue files
    #[serde(default = "default_catalog_paths")]
    pub catalog_paths: Vec<String>,
}

/// Which option supplies autofilled values when several match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AutofillPolicy {
    /// Smallest variant id wins (numerically when both ids are integers);
    /// ties go to the earlier option
    #[default]
    LowestVariant,
    /// Earliest option in catalogue order wins
    FirstListed,
    /// Never autofill; the shopper picks every facet
    Disabled,
}

impl std::fmt::Display for AutofillPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutofillPolicy::LowestVariant => write!(f, "lowest_variant"),
            AutofillPolicy::FirstListed => write!(f, "first_listed"),
            AutofillPolicy::Disabled => write!(f, "disabled"),
        }
    }
}

fn default_size_unit() -> String {
    DEFAULT_SIZE_UNIT.to_string()
}

fn default_catalog_paths() -> Vec<String> {
    vec!["catalog".to_string()]
}

const CONFIG_FILE_NAMES: [&str; 2] = ["karat.yml", "karat.yaml"];

impl Config {
    /// In-memory configuration with every default applied.
    pub fn default_for(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            autofill: AutofillPolicy::default(),
            default_size_unit: default_size_unit(),
            catalog_paths: default_catalog_paths(),
        }
    }

    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for karat.yml or karat.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map(|path| Self::load(&path))
            .unwrap_or_else(|| {
                Err(CoreError::FileNotFound {
                    path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
                })
            })
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Storefront name cannot be empty".to_string(),
            });
        }

        let unit = self.default_size_unit.trim();
        if unit.is_empty() || unit.chars().any(|c| c.is_ascii_digit() || c.is_whitespace()) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "default_size_unit '{}' must be a non-empty unit without digits or spaces",
                    self.default_size_unit
                ),
            });
        }

        if self.catalog_paths.iter().any(|p| p.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "catalog_paths entries cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get absolute catalogue paths relative to a project root
    pub fn catalog_paths_absolute(&self, root: &Path) -> Vec<PathBuf> {
        self.catalog_paths.iter().map(|p| root.join(p)).collect()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
