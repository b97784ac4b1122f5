//! Product catalogue files
//!
//! A catalogue is one product's list of configuration options, stored as JSON
//! (`.json`) or YAML (`.yml` / `.yaml`):
//!
//! ```yaml
//! product: solitaire-ring
//! options:
//!   - variantId: V1
//!     metals: [{ metalId: gold, purityId: 18k, toneId: yellow }]
//!     priceTotal: 1200
//!     size: { value: "6" }
//! ```

use crate::configuration::ConfigurationOption;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const CATALOG_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// One product's configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Product name
    pub product: String,

    /// Purchasable combinations, in storefront order
    pub options: Vec<ConfigurationOption>,
}

impl Catalog {
    /// Load and validate a catalogue file.
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

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str::<Catalog>(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<Catalog>(&content).map_err(|e| e.to_string())
        };
        let catalog = parsed.map_err(|details| CoreError::CatalogParseError {
            path: path.display().to_string(),
            details,
        })?;

        catalog.validate()?;
        catalog.warn_price_mismatches();
        Ok(catalog)
    }

    /// Find a catalogue named `product` in `dirs`, trying each known extension.
    pub fn find(product: &str, dirs: &[PathBuf]) -> CoreResult<PathBuf> {
        dirs.iter()
            .flat_map(|dir| {
                CATALOG_EXTENSIONS
                    .iter()
                    .map(move |ext| dir.join(format!("{product}.{ext}")))
            })
            .find(|path| path.is_file())
            .ok_or_else(|| CoreError::FileNotFound {
                path: format!("{product}.{{json,yml,yaml}}"),
            })
    }

    /// Load every catalogue file directly under `dir`, sorted by file name.
    ///
    /// Files that fail to load are logged and skipped.
    pub fn discover(dir: &Path) -> CoreResult<Vec<Catalog>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| CATALOG_EXTENSIONS.contains(&e))
            })
            .collect();
        paths.sort();

        let mut catalogs = Vec::with_capacity(paths.len());
        for path in paths {
            match Self::load(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => log::warn!("Skipping catalogue {}: {}", path.display(), e),
            }
        }
        Ok(catalogs)
    }

    /// Validate the catalogue
    pub fn validate(&self) -> CoreResult<()> {
        if self.options.is_empty() {
            return Err(CoreError::CatalogEmpty {
                product: self.product.clone(),
            });
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if option.metals.is_empty() {
                return Err(CoreError::OptionMissingMetal {
                    product: self.product.clone(),
                    variant: option.variant_id.to_string(),
                });
            }
            if !seen.insert(option.variant_id.as_str()) {
                return Err(CoreError::DuplicateVariant {
                    product: self.product.clone(),
                    variant: option.variant_id.to_string(),
                });
            }
        }

        Ok(())
    }

    fn warn_price_mismatches(&self) {
        for option in &self.options {
            if let Some(diff) = option.price_mismatch() {
                log::warn!(
                    "{}: variant {} total {:.2} differs from its breakup by {:.2}",
                    self.product,
                    option.variant_id,
                    option.price_total,
                    diff
                );
            }
        }
    }

    /// Whether any option carries size information
    pub fn has_size(&self) -> bool {
        self.options.iter().any(ConfigurationOption::carries_size)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
