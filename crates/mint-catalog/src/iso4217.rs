//! # ISO 4217 Currency Table
//!
//! Minor-unit exponents for the active ISO 4217 currencies, plus display
//! symbols for the common ones. The table is the concrete
//! [`CurrencyLookup`] used by applications; tests in `mint-core` get by
//! with a `HashMap`.
//!
//! ## Exponent → Smallest-Unit Factor
//! ```text
//! ┌──────────┬──────────┬──────────┬───────────────────────────────────────┐
//! │ Exponent │ Factor   │ Example  │ Codes                                 │
//! ├──────────┼──────────┼──────────┼───────────────────────────────────────┤
//! │    0     │     1    │ 1234 JPY │ JPY, KRW, CLP, DJF, ISK, VND, XOF ... │
//! │    2     │   100    │ 12.34 EUR│ most currencies                       │
//! │    3     │  1000    │ 1.234 BHD│ BHD, IQD, JOD, KWD, LYD, OMR, TND     │
//! │    4     │ 10000    │ CLF      │ CLF, UYW                              │
//! └──────────┴──────────┴──────────┴───────────────────────────────────────┘
//! ```
//!
//! Extra or overriding entries come from the `[[currencies]]` section of the
//! catalog configuration.

use std::collections::HashMap;
use tracing::debug;

use mint_core::validation::validate_alpha_code;
use mint_core::CurrencyLookup;

use crate::config::CurrencyEntry;
use crate::error::CatalogResult;

// =============================================================================
// Built-in Data
// =============================================================================

const ZERO_DIGIT_CODES: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "UYI", "VND",
    "VUV", "XAF", "XOF", "XPF",
];

const THREE_DIGIT_CODES: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

const FOUR_DIGIT_CODES: &[&str] = &["CLF", "UYW"];

const TWO_DIGIT_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BMD", "BND", "BOB", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHF",
    "CNY", "COP", "CRC", "CUP", "CVE", "CZK", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR",
    "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF",
    "IDR", "ILS", "INR", "IRR", "JMD", "KES", "KGS", "KHR", "KPW", "KYD", "KZT", "LAK", "LBP",
    "LKR", "LRD", "LSL", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR",
    "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "PAB", "PEN", "PGK",
    "PHP", "PKR", "PLN", "QAR", "RON", "RSD", "RUB", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD",
    "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TOP",
    "TRY", "TTD", "TWD", "TZS", "UAH", "USD", "UYU", "UZS", "VES", "WST", "XCD", "YER", "ZAR",
    "ZMW", "ZWL",
];

const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
    ("XAF", "FCFA"),
    ("XOF", "F\u{202f}CFA"),
];

// =============================================================================
// Table
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    exponent: u32,
    symbol: Option<String>,
}

/// ISO 4217 lookup table with optional display symbols.
///
/// ## Example
/// ```rust
/// use mint_catalog::IsoTable;
/// use mint_core::{CurrencyLookup, CurrencyUnit};
///
/// let table = IsoTable::new();
/// let bhd = table.currency("BHD").unwrap();
/// assert_eq!(bhd.smallest_unit_factor(), 1000);
/// assert_eq!(table.symbol("EUR"), Some("€"));
/// assert!(table.currency("XXX").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoTable {
    entries: HashMap<String, Entry>,
}

impl Default for IsoTable {
    fn default() -> Self {
        Self::new()
    }
}

impl IsoTable {
    /// Creates the built-in table.
    pub fn new() -> Self {
        let groups: [(&[&str], u32); 4] = [
            (ZERO_DIGIT_CODES, 0),
            (TWO_DIGIT_CODES, 2),
            (THREE_DIGIT_CODES, 3),
            (FOUR_DIGIT_CODES, 4),
        ];

        let mut entries = HashMap::new();
        for (codes, exponent) in groups {
            for code in codes {
                entries.insert(
                    (*code).to_string(),
                    Entry {
                        exponent,
                        symbol: None,
                    },
                );
            }
        }
        for (code, symbol) in SYMBOLS {
            if let Some(entry) = entries.get_mut(*code) {
                entry.symbol = Some((*symbol).to_string());
            }
        }

        IsoTable { entries }
    }

    /// Creates the built-in table extended with `extra` entries.
    ///
    /// Extra entries override built-in ones with the same code.
    pub fn with_entries<'a>(
        extra: impl IntoIterator<Item = &'a CurrencyEntry>,
    ) -> CatalogResult<Self> {
        let mut table = Self::new();
        for entry in extra {
            table.insert(&entry.code, entry.exponent, entry.symbol.clone())?;
        }
        Ok(table)
    }

    /// Adds or replaces a currency.
    ///
    /// The code is stored upper-cased.
    pub fn insert(
        &mut self,
        code: &str,
        exponent: u32,
        symbol: Option<String>,
    ) -> CatalogResult<()> {
        validate_alpha_code(code)?;
        let code = code.to_ascii_uppercase();

        let replaced = self
            .entries
            .insert(code.clone(), Entry { exponent, symbol })
            .is_some();
        debug!(code = %code, exponent, replaced, "Registered currency");

        Ok(())
    }

    /// Display symbol for `alpha_code`, if one is known.
    pub fn symbol(&self, alpha_code: &str) -> Option<&str> {
        self.entries
            .get(alpha_code)
            .and_then(|entry| entry.symbol.as_deref())
    }

    /// Returns true if `alpha_code` is in the table.
    pub fn contains(&self, alpha_code: &str) -> bool {
        self.entries.contains_key(alpha_code)
    }

    /// Number of currencies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no currencies.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All alpha codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl CurrencyLookup for IsoTable {
    fn exponent(&self, alpha_code: &str) -> Option<u32> {
        let exponent = self.entries.get(alpha_code).map(|entry| entry.exponent);
        if exponent.is_none() {
            debug!(alpha_code, "Currency not in ISO table");
        }
        exponent
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
