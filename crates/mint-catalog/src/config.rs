//! # Catalog Configuration
//!
//! Configuration for formatting defaults, arithmetic defaults and extra
//! currencies.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MINT_DEFAULT_LOCALE=de_DE                                          │
//! │     MINT_ROUNDING_MODE=half_down                                       │
//! │     MINT_HIDE_FRACTION_DIGITS=true                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, else $MINT_CATALOG_CONFIG, else                     │
//! │     ~/.config/mint/catalog.toml (Linux)                                │
//! │     ~/Library/Application Support/org.mint.mint/catalog.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     en_US, half_up, fraction digits shown                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [formatting]
//! default_locale = "de_DE"
//! hide_fraction_digits = true
//!
//! [arithmetic]
//! rounding_mode = "half_up"   # half_up | half_down | up | down
//!
//! [[currencies]]
//! code = "XTS"
//! exponent = 2
//! symbol = "T$"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use mint_core::validation::validate_locale;
use mint_core::RoundingMode;

use crate::error::{CatalogError, CatalogResult};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "MINT_CATALOG_CONFIG";

/// Largest accepted minor-unit exponent; 10^18 still fits an `i64`.
const MAX_EXPONENT: u32 = 18;

// =============================================================================
// Formatting Settings
// =============================================================================

/// Defaults for human-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingSettings {
    /// Locale used when the caller passes none, and as fallback for
    /// unknown locales.
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Drop the fraction part for amounts that are whole multiples of 100
    /// smallest units.
    #[serde(default)]
    pub hide_fraction_digits: bool,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Default for FormattingSettings {
    fn default() -> Self {
        FormattingSettings {
            default_locale: default_locale(),
            hide_fraction_digits: false,
        }
    }
}

// =============================================================================
// Arithmetic Settings
// =============================================================================

/// Defaults for operations that round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticSettings {
    #[serde(default)]
    pub rounding_mode: RoundingMode,
}

// =============================================================================
// Currency Entries
// =============================================================================

/// A currency added to (or overriding) the built-in ISO table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    /// Alpha-3 code.
    pub code: String,

    /// Minor-unit digits.
    pub exponent: u32,

    /// Display symbol; the alpha code is shown when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

// =============================================================================
// Main Catalog Configuration
// =============================================================================

/// Complete catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub formatting: FormattingSettings,

    #[serde(default)]
    pub arithmetic: ArithmeticSettings,

    /// Extra currencies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub currencies: Vec<CurrencyEntry>,
}

impl CatalogConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document, then validates it.
    ///
    /// Environment overrides are not applied.
    pub fn from_toml_str(contents: &str) -> CatalogResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$MINT_CATALOG_CONFIG`, or the
    ///    platform config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path
            .or_else(Self::env_config_path)
            .or_else(Self::default_config_path)
        {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CatalogResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CatalogError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CatalogError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Catalog config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        validate_locale(&self.formatting.default_locale)?;

        for entry in &self.currencies {
            mint_core::validation::validate_alpha_code(&entry.code)?;

            if entry.exponent > MAX_EXPONENT {
                return Err(CatalogError::InvalidConfig(format!(
                    "exponent of {} must be at most {}, got {}",
                    entry.code, MAX_EXPONENT, entry.exponent
                )));
            }

            if matches!(entry.symbol.as_deref(), Some(s) if s.trim().is_empty()) {
                return Err(CatalogError::InvalidConfig(format!(
                    "symbol of {} must not be blank",
                    entry.code
                )));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(locale) = std::env::var("MINT_DEFAULT_LOCALE") {
            debug!(locale = %locale, "Overriding default locale from environment");
            self.formatting.default_locale = locale;
        }

        if let Ok(mode) = std::env::var("MINT_ROUNDING_MODE") {
            match mode.parse::<RoundingMode>() {
                Ok(parsed) => {
                    debug!(mode = %parsed, "Overriding rounding mode from environment");
                    self.arithmetic.rounding_mode = parsed;
                }
                Err(_) => warn!(mode = %mode, "Unknown rounding mode in environment"),
            }
        }

        if let Ok(hide) = std::env::var("MINT_HIDE_FRACTION_DIGITS") {
            match hide.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.formatting.hide_fraction_digits = true,
                "0" | "false" | "no" | "off" => self.formatting.hide_fraction_digits = false,
                _ => warn!(value = %hide, "Unknown MINT_HIDE_FRACTION_DIGITS value in environment"),
            }
        }
    }

    fn env_config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "mint", "mint")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// `[formatting] default_locale`.
    pub fn default_locale(&self) -> &str {
        &self.formatting.default_locale
    }

    /// `[arithmetic] rounding_mode`.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.arithmetic.rounding_mode
    }

    /// `[formatting] hide_fraction_digits`.
    pub fn hide_fraction_digits(&self) -> bool {
        self.formatting.hide_fraction_digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_locale(), "en_US");
        assert_eq!(config.rounding_mode(), RoundingMode::HalfUp);
        assert!(!config.hide_fraction_digits());
        assert!(config.currencies.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_document() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [formatting]
            default_locale = "de_DE"
            hide_fraction_digits = true

            [arithmetic]
            rounding_mode = "half_down"

            [[currencies]]
            code = "XTS"
            exponent = 2
            symbol = "T$"

            [[currencies]]
            code = "XBT"
            exponent = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.default_locale(), "de_DE");
        assert!(config.hide_fraction_digits());
        assert_eq!(config.rounding_mode(), RoundingMode::HalfDown);
        assert_eq!(config.currencies.len(), 2);
        assert_eq!(config.currencies[0].symbol.as_deref(), Some("T$"));
        assert_eq!(config.currencies[1].symbol, None);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config =
            CatalogConfig::from_toml_str("[arithmetic]\nrounding_mode = \"down\"\n").unwrap();
        assert_eq!(config.default_locale(), "en_US");
        assert_eq!(config.rounding_mode(), RoundingMode::Down);
    }

    #[test]
    fn test_unknown_rounding_mode_is_load_error() {
        let err = CatalogConfig::from_toml_str("[arithmetic]\nrounding_mode = \"bankers\"\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = CatalogConfig::default();

        config.formatting.default_locale = "german".to_string();
        assert!(config.validate().is_err());

        config.formatting.default_locale = "de-DE".to_string();
        assert!(config.validate().is_ok());

        config.currencies.push(CurrencyEntry {
            code: "EURO".to_string(),
            exponent: 2,
            symbol: None,
        });
        assert!(config.validate().unwrap_err().is_config_error());

        config.currencies[0].code = "XTS".to_string();
        config.currencies[0].exponent = 19;
        assert!(config.validate().is_err());

        config.currencies[0].exponent = 2;
        config.currencies[0].symbol = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = CatalogConfig::default();
        config.currencies.push(CurrencyEntry {
            code: "XTS".to_string(),
            exponent: 2,
            symbol: None,
        });

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[formatting]"));
        assert!(toml_str.contains("[arithmetic]"));
        assert!(toml_str.contains("[[currencies]]"));
        assert!(toml_str.contains("rounding_mode = \"half_up\""));

        let parsed = CatalogConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_and_load_from_explicit_path() {
        let path = std::env::temp_dir().join(format!("mint-catalog-{}.toml", std::process::id()));

        let mut config = CatalogConfig::default();
        config.formatting.default_locale = "fr_FR".to_string();
        config.save(Some(path.clone())).unwrap();

        let loaded = CatalogConfig::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        // Env overrides could apply here; only assert on what they don't touch
        assert_eq!(loaded.currencies, config.currencies);
        if std::env::var("MINT_DEFAULT_LOCALE").is_err() {
            assert_eq!(loaded.default_locale(), "fr_FR");
        }
    }

    #[test]
    fn test_load_or_default_on_broken_file() {
        let path = std::env::temp_dir()
            .join(format!("mint-catalog-broken-{}.toml", std::process::id()));
        std::fs::write(&path, "[formatting\n").unwrap();

        let config = CatalogConfig::load_or_default(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, CatalogConfig::default());
    }
}
