//! # Currency Module
//!
//! Currency metadata and the capabilities the rest of the crate depends on.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Currency Capability                            │
//! │                                                                         │
//! │  trait CurrencyUnit                                                    │
//! │  ├── alpha_code()            "EUR"                                     │
//! │  ├── smallest_unit_factor()  100   (euro → eurocent)                   │
//! │  └── decimal_digits()        2                                         │
//! │                                                                         │
//! │  Implemented by:                                                       │
//! │  ├── Currency      plain data holder, built from static metadata       │
//! │  └── IsoCurrency   resolved through an injected CurrencyLookup         │
//! │                                                                         │
//! │  Money stores a Currency; anything implementing CurrencyUnit converts  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two currencies are equal for monetary purposes iff their alpha codes are
//! equal. Factor and digit count are derived metadata and are not compared.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::error::{MintError, MintResult, ValidationError};
use crate::validation::{validate_alpha_code, validate_exchange_rate, validate_smallest_unit_factor};

// =============================================================================
// Capability Traits
// =============================================================================

/// Metadata every currency exposes.
pub trait CurrencyUnit {
    /// ISO 4217 alpha-3 code, e.g. `EUR`.
    fn alpha_code(&self) -> &str;

    /// Factor from default unit to smallest unit, e.g. 100 for euro to eurocent.
    fn smallest_unit_factor(&self) -> i64;

    /// Number of fraction digits in the default-unit representation.
    fn decimal_digits(&self) -> u32;
}

/// Resolves alpha codes to their minor-unit exponent.
///
/// Implemented by the ISO-4217 table in `mint-catalog`. Tests can use a plain
/// `HashMap<String, u32>`.
pub trait CurrencyLookup {
    /// Returns the exponent (number of minor-unit digits) for `alpha_code`,
    /// or `None` if the code is unknown.
    fn exponent(&self, alpha_code: &str) -> Option<u32>;

    /// Builds a [`Currency`] for `alpha_code`.
    ///
    /// ## Errors
    /// [`MintError::UnknownCurrency`] if the code is not in the table.
    fn currency(&self, alpha_code: &str) -> MintResult<Currency> {
        IsoCurrency::new(alpha_code, self).map(Currency::from)
    }
}

impl<S: BuildHasher> CurrencyLookup for HashMap<String, u32, S> {
    fn exponent(&self, alpha_code: &str) -> Option<u32> {
        self.get(alpha_code).copied()
    }
}

impl<L: CurrencyLookup + ?Sized> CurrencyLookup for &L {
    fn exponent(&self, alpha_code: &str) -> Option<u32> {
        (**self).exponent(alpha_code)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Plain currency metadata.
///
/// ## Example
/// ```rust
/// use mint_core::currency::{Currency, CurrencyUnit};
///
/// let eur = Currency::new("EUR", 100, 2).unwrap();
/// assert_eq!(eur.alpha_code(), "EUR");
/// assert_eq!(eur.smallest_unit_factor(), 100);
///
/// // Equality only looks at the code
/// assert_eq!(eur, Currency::new("EUR", 1000, 3).unwrap());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Currency {
    alpha_code: String,
    smallest_unit_factor: i64,
    decimal_digits: u32,
}

impl Currency {
    /// Creates a currency from explicit metadata.
    ///
    /// ## Errors
    /// [`MintError::Validation`] if the code is not three ASCII letters or
    /// the factor is not positive.
    pub fn new(
        alpha_code: impl Into<String>,
        smallest_unit_factor: i64,
        decimal_digits: u32,
    ) -> MintResult<Self> {
        let alpha_code = alpha_code.into();
        validate_alpha_code(&alpha_code)?;
        validate_smallest_unit_factor(smallest_unit_factor)?;

        Ok(Currency {
            alpha_code,
            smallest_unit_factor,
            decimal_digits,
        })
    }

    /// Creates a currency whose factor is `10^exponent` and whose decimal
    /// digit count is `exponent`, the way ISO 4217 describes minor units.
    pub fn from_exponent(alpha_code: impl Into<String>, exponent: u32) -> MintResult<Self> {
        let factor = factor_for_exponent(exponent)?;
        Self::new(alpha_code, factor, exponent)
    }

    /// Copies the metadata of any [`CurrencyUnit`].
    pub fn of(unit: &impl CurrencyUnit) -> Self {
        Currency {
            alpha_code: unit.alpha_code().to_string(),
            smallest_unit_factor: unit.smallest_unit_factor(),
            decimal_digits: unit.decimal_digits(),
        }
    }
}

impl CurrencyUnit for Currency {
    fn alpha_code(&self) -> &str {
        &self.alpha_code
    }

    fn smallest_unit_factor(&self) -> i64 {
        self.smallest_unit_factor
    }

    fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.alpha_code == other.alpha_code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alpha_code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alpha_code)
    }
}

fn factor_for_exponent(exponent: u32) -> MintResult<i64> {
    10_i64.checked_pow(exponent).ok_or_else(|| {
        MintError::Validation(ValidationError::InvalidFormat {
            field: "exponent".to_string(),
            reason: format!("10^{} does not fit a 64-bit factor", exponent),
        })
    })
}

// =============================================================================
// ISO-backed Currency
// =============================================================================

/// A currency resolved through a [`CurrencyLookup`].
///
/// The table is passed in explicitly so that callers choose the data source
/// and tests can substitute a fake.
///
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use mint_core::currency::{CurrencyUnit, IsoCurrency};
///
/// let table: HashMap<String, u32> = HashMap::from([("BHD".to_string(), 3)]);
/// let bhd = IsoCurrency::new("BHD", &table).unwrap();
/// assert_eq!(bhd.smallest_unit_factor(), 1000);
/// assert!(IsoCurrency::new("XYZ", &table).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsoCurrency {
    alpha_code: String,
    exponent: u32,
    factor: i64,
}

impl IsoCurrency {
    /// Looks up `alpha_code` in `lookup`.
    ///
    /// ## Errors
    /// [`MintError::UnknownCurrency`] if the table does not know the code.
    pub fn new<L: CurrencyLookup + ?Sized>(alpha_code: &str, lookup: &L) -> MintResult<Self> {
        let exponent = lookup
            .exponent(alpha_code)
            .ok_or_else(|| MintError::UnknownCurrency(alpha_code.to_string()))?;

        Ok(IsoCurrency {
            alpha_code: alpha_code.to_string(),
            exponent,
            factor: factor_for_exponent(exponent)?,
        })
    }
}

impl CurrencyUnit for IsoCurrency {
    fn alpha_code(&self) -> &str {
        &self.alpha_code
    }

    fn smallest_unit_factor(&self) -> i64 {
        self.factor
    }

    fn decimal_digits(&self) -> u32 {
        self.exponent
    }
}

impl From<IsoCurrency> for Currency {
    fn from(iso: IsoCurrency) -> Self {
        Currency {
            alpha_code: iso.alpha_code,
            smallest_unit_factor: iso.factor,
            decimal_digits: iso.exponent,
        }
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// A currency paired with the rate used to reach it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRate {
    currency: Currency,
    rate: f64,
}

impl ExchangeRate {
    /// Creates an exchange rate.
    ///
    /// ## Errors
    /// [`MintError::Validation`] if `rate` is not finite and positive.
    pub fn new(currency: impl Into<Currency>, rate: f64) -> MintResult<Self> {
        validate_exchange_rate(rate)?;
        Ok(ExchangeRate {
            currency: currency.into(),
            rate,
        })
    }

    /// The target currency.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The numeric rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
