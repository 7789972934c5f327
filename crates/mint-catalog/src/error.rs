//! # Catalog Error Types
//!
//! Error types for loading the currency catalog and its configuration.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────────┐    │
//! │  │     Configuration       │        │        Core                 │    │
//! │  │                         │        │                             │    │
//! │  │  InvalidConfig          │        │  Core(MintError)            │    │
//! │  │  ConfigLoadFailed       │        │   UnknownCurrency, ...      │    │
//! │  │  ConfigSaveFailed       │        │                             │    │
//! │  └─────────────────────────┘        └─────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mint_core::{MintError, ValidationError};
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Everything that can go wrong while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration parsed but holds unusable values.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config file could not be written.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Core Errors
    // =========================================================================
    /// Error from the value layer.
    #[error(transparent)]
    Core(#[from] MintError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::InvalidConfig(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(err: toml::ser::Error) -> Self {
        CatalogError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CatalogError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfig(_)
                | CatalogError::ConfigLoadFailed(_)
                | CatalogError::ConfigSaveFailed(_)
        )
    }
}
