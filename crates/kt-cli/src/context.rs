//! Runtime context for CLI commands

use anyhow::{Context, Result};
use kt_core::{Catalog, Config, ConfigurationMatcher, CoreError};
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Name given to the in-memory config when a project has no `karat.yml`.
const FALLBACK_NAME: &str = "karat";

/// Runtime context containing the storefront configuration
#[derive(Debug)]
pub struct RuntimeContext {
    /// Project directory that relative catalogue paths resolve against
    pub root: PathBuf,

    /// Loaded or defaulted storefront configuration
    pub config: Config,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    ///
    /// An explicit `--config` must exist. Without one, a missing `karat.yml`
    /// falls back to the default configuration.
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&args.project_dir);

        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            match Config::load_from_dir(&root) {
                Ok(config) => config,
                Err(CoreError::FileNotFound { path }) => {
                    tracing::debug!("No config at {}, using defaults", path);
                    Config::default_for(FALLBACK_NAME)
                }
                Err(e) => return Err(e).context("Failed to load project configuration"),
            }
        };

        tracing::debug!(
            "Storefront '{}' (autofill {}, size unit {})",
            config.name,
            config.autofill,
            config.default_size_unit
        );
        Ok(Self { root, config })
    }

    /// Directories scanned for catalogue files
    pub fn catalog_dirs(&self) -> Vec<PathBuf> {
        self.config.catalog_paths_absolute(&self.root)
    }

    /// Load a catalogue given as a file path or a bare product name.
    pub fn load_catalog(&self, arg: &str) -> Result<Catalog> {
        let path = self.catalog_path(arg)?;
        tracing::debug!("Loading catalogue {}", path.display());
        Catalog::load(&path).with_context(|| format!("Failed to load catalogue {}", path.display()))
    }

    fn catalog_path(&self, arg: &str) -> Result<PathBuf> {
        let direct = Path::new(arg);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }
        if direct.extension().is_some() || arg.contains(std::path::MAIN_SEPARATOR) {
            // Looks like a path; let the loader report it missing
            return Ok(direct.to_path_buf());
        }
        Catalog::find(arg, &self.catalog_dirs())
            .with_context(|| format!("No catalogue named '{}' under {:?}", arg, self.config.catalog_paths))
    }

    /// A fresh matcher over `catalog` using this storefront's settings.
    pub fn matcher(&self, catalog: &Catalog) -> ConfigurationMatcher {
        ConfigurationMatcher::new(catalog.options.clone(), &self.config)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
