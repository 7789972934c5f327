//! # mint-catalog: Currency Catalog for Mint
//!
//! Supplies the concrete collaborators `mint-core` only knows as traits: an
//! ISO 4217 table for [`CurrencyLookup`] and a locale-aware
//! [`AmountFormatter`], both set up from a TOML + environment configuration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      mint-catalog (THIS CRATE)                          │
//! │                                                                         │
//! │  ┌──────────────┐    ┌─────────────┐     ┌─────────────────────────┐   │
//! │  │ CatalogConfig│───►│  IsoTable   │────►│   LocaleFormatter       │   │
//! │  │ (TOML + env) │    │ (exponents, │     │ (separators, symbols)   │   │
//! │  │              │    │  symbols)   │     │                         │   │
//! │  └──────────────┘    └──────┬──────┘     └────────────┬────────────┘   │
//! │                             │ CurrencyLookup          │ AmountFormatter │
//! │                             ▼                         ▼                 │
//! │                  ┌──────────────────────────────────────────────┐      │
//! │                  │                 mint-core                    │      │
//! │                  └──────────────────────────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use mint_catalog::{Catalog, CatalogConfig};
//!
//! let catalog = Catalog::from_config(&CatalogConfig::default()).unwrap();
//!
//! let price = catalog.money(123.45, "EUR").unwrap();
//! assert_eq!(price.amount(), 12345);
//! assert_eq!(catalog.format(&price, None), "€123.45");
//! assert_eq!(catalog.format(&price, Some("de_DE")), "123,45\u{a0}€");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod iso4217;

pub use config::{CatalogConfig, CurrencyEntry};
pub use error::{CatalogError, CatalogResult};
pub use format::LocaleFormatter;
pub use iso4217::IsoTable;

use std::path::PathBuf;
use tracing::info;

use mint_core::{AmountFormatter, CurrencyLookup, Money, RoundingMode};

// =============================================================================
// Catalog
// =============================================================================

/// Lookup table, formatter and defaults built from one configuration.
#[derive(Debug, Clone)]
pub struct Catalog {
    formatter: LocaleFormatter,
    rounding_mode: RoundingMode,
    hide_fraction_digits: bool,
}

impl Catalog {
    /// Builds a catalog from an already loaded configuration.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let table = IsoTable::with_entries(&config.currencies)?;
        info!(
            currencies = table.len(),
            extra = config.currencies.len(),
            locale = %config.default_locale(),
            rounding_mode = %config.rounding_mode(),
            "Currency catalog ready"
        );

        Ok(Catalog {
            formatter: LocaleFormatter::new(table, config.default_locale()),
            rounding_mode: config.rounding_mode(),
            hide_fraction_digits: config.hide_fraction_digits(),
        })
    }

    /// Loads configuration (see [`CatalogConfig::load`]) and builds a catalog.
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        Self::from_config(&CatalogConfig::load(config_path)?)
    }

    /// The currency table.
    pub fn lookup(&self) -> &IsoTable {
        self.formatter.table()
    }

    /// The locale formatter.
    pub fn formatter(&self) -> &LocaleFormatter {
        &self.formatter
    }

    /// Configured rounding mode.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Creates money from a default-unit amount with the configured rounding
    /// mode.
    pub fn money(&self, amount: f64, alpha_code: &str) -> CatalogResult<Money> {
        Ok(Money::from_default_unit_amount(
            amount,
            alpha_code,
            self.lookup(),
            self.rounding_mode,
        )?)
    }

    /// Formats `money` for `locale`, or for the default locale when `None`,
    /// applying the configured fraction-digit rule.
    pub fn format(&self, money: &Money, locale: Option<&str>) -> String {
        let locale = locale.unwrap_or_else(|| self.formatter.default_locale());
        money.formatted_amount(&self.formatter, locale, self.hide_fraction_digits)
    }
}

impl CurrencyLookup for Catalog {
    fn exponent(&self, alpha_code: &str) -> Option<u32> {
        self.lookup().exponent(alpha_code)
    }
}

impl AmountFormatter for Catalog {
    fn format_currency(
        &self,
        amount: f64,
        alpha_code: &str,
        locale: &str,
        options: mint_core::FormatOptions,
    ) -> String {
        self.formatter
            .format_currency(amount, alpha_code, locale, options)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
