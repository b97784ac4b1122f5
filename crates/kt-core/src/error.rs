//! Error types for kt-core

use thiserror::Error;

/// Core error type for Karat
#[derive(Error, Debug)]
pub enum CoreError {
    /// KT001: Config or catalogue file not found
    #[error("[KT001] File not found: {path}")]
    FileNotFound { path: String },

    /// KT002: Failed to parse a catalogue file
    #[error("[KT002] Failed to parse catalogue {path}: {details}")]
    CatalogParseError { path: String, details: String },

    /// KT003: Catalogue has no configuration options
    #[error("[KT003] Catalogue '{product}' has no configuration options")]
    CatalogEmpty { product: String },

    /// KT004: Configuration option without a metal entry
    #[error("[KT004] Variant '{variant}' in '{product}' has no metal entry")]
    OptionMissingMetal { product: String, variant: String },

    /// KT005: Duplicate variant id in one catalogue
    #[error("[KT005] Duplicate variant '{variant}' in catalogue '{product}'")]
    DuplicateVariant { product: String, variant: String },

    /// KT006: Malformed `facet=value` expression
    #[error("[KT006] Invalid facet selection '{input}': {reason}")]
    InvalidFacetValue { input: String, reason: String },

    /// KT007: Invalid configuration value
    #[error("[KT007] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// IO error with file path context
    #[error("[KT008] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
