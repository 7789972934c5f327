//! # Locale Formatter
//!
//! Renders default-unit amounts the way common locales write prices.
//!
//! ## Rendering
//! ```text
//! format_currency(10000.0, "EUR", "de_DE", options)
//!      │
//!      ├── rules for de_DE   decimal ','  group '.'  symbol after, no-break space
//!      ├── digits            options.max_fraction_digits, capped by EUR's 2
//!      ├── symbol            "€" from the ISO table, else the alpha code
//!      ▼
//! "10.000,00 €"
//! ```
//!
//! Unknown locales fall back to a locale with the same language, then to the
//! configured default locale. The space between amount and symbol is a
//! no-break space (U+00A0).

use tracing::debug;

use mint_core::{AmountFormatter, CurrencyLookup, FormatOptions};

use crate::iso4217::IsoTable;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

// Digits used when the currency is not in the table.
const FALLBACK_DIGITS: u32 = 2;

// =============================================================================
// Locale Rules
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    /// `€1.00`
    Prefix,
    /// `€ 1,00`
    PrefixSpaced,
    /// `1,00 €`
    SuffixSpaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocaleRules {
    decimal: char,
    group: char,
    placement: SymbolPlacement,
}

const fn rules(decimal: char, group: char, placement: SymbolPlacement) -> LocaleRules {
    LocaleRules {
        decimal,
        group,
        placement,
    }
}

const LOCALES: &[(&str, LocaleRules)] = &[
    ("en_US", rules('.', ',', SymbolPlacement::Prefix)),
    ("en_GB", rules('.', ',', SymbolPlacement::Prefix)),
    ("en_AU", rules('.', ',', SymbolPlacement::Prefix)),
    ("en_CA", rules('.', ',', SymbolPlacement::Prefix)),
    ("ja_JP", rules('.', ',', SymbolPlacement::Prefix)),
    ("zh_CN", rules('.', ',', SymbolPlacement::Prefix)),
    ("ko_KR", rules('.', ',', SymbolPlacement::Prefix)),
    ("de_DE", rules(',', '.', SymbolPlacement::SuffixSpaced)),
    ("it_IT", rules(',', '.', SymbolPlacement::SuffixSpaced)),
    ("fr_FR", rules(',', NARROW_NBSP, SymbolPlacement::SuffixSpaced)),
    ("nl_NL", rules(',', '.', SymbolPlacement::PrefixSpaced)),
    ("pt_BR", rules(',', '.', SymbolPlacement::PrefixSpaced)),
    ("de_CH", rules('.', '\u{2019}', SymbolPlacement::PrefixSpaced)),
];

/// Finds rules for `locale`: exact match (`de-DE` and `de_DE` are the same),
/// then the first locale with the same language.
fn find_rules(locale: &str) -> Option<LocaleRules> {
    let normalized = locale.replace('-', "_");

    if let Some((_, found)) = LOCALES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&normalized))
    {
        return Some(*found);
    }

    let language = normalized.split('_').next().unwrap_or_default();
    LOCALES
        .iter()
        .find(|(name, _)| {
            name.split('_')
                .next()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
        })
        .map(|(_, found)| *found)
}

// =============================================================================
// Formatter
// =============================================================================

/// [`AmountFormatter`] backed by a built-in locale list and an [`IsoTable`].
///
/// ## Example
/// ```rust
/// use mint_catalog::{IsoTable, LocaleFormatter};
/// use mint_core::{AmountFormatter, FormatOptions};
///
/// let formatter = LocaleFormatter::new(IsoTable::new(), "en_US");
///
/// let options = FormatOptions::default();
/// assert_eq!(formatter.format_currency(10000.0, "EUR", "en_US", options), "€10,000.00");
/// assert_eq!(formatter.format_currency(1.0, "EUR", "de_DE", options), "1,00\u{a0}€");
/// ```
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    table: IsoTable,
    default_locale: String,
}

impl LocaleFormatter {
    /// Creates a formatter. `default_locale` is used for unknown locales.
    pub fn new(table: IsoTable, default_locale: impl Into<String>) -> Self {
        LocaleFormatter {
            table,
            default_locale: default_locale.into(),
        }
    }

    /// The table used for digits and symbols.
    pub fn table(&self) -> &IsoTable {
        &self.table
    }

    /// Locale used when a requested one has no rules.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Returns true if `locale` (or its language) has rules of its own.
    pub fn supports_locale(&self, locale: &str) -> bool {
        find_rules(locale).is_some()
    }

    fn rules_for(&self, locale: &str) -> LocaleRules {
        if let Some(found) = find_rules(locale) {
            return found;
        }

        debug!(locale, fallback = %self.default_locale, "Unknown locale, using default");
        find_rules(&self.default_locale).unwrap_or(LOCALES[0].1)
    }

    fn fraction_digits(&self, alpha_code: &str, options: FormatOptions) -> u32 {
        let currency_digits = self.table.exponent(alpha_code).unwrap_or(FALLBACK_DIGITS);
        options
            .max_fraction_digits
            .map_or(currency_digits, |max| max.min(currency_digits))
    }
}

impl AmountFormatter for LocaleFormatter {
    fn format_currency(
        &self,
        amount: f64,
        alpha_code: &str,
        locale: &str,
        options: FormatOptions,
    ) -> String {
        let rules = self.rules_for(locale);
        let digits = self.fraction_digits(alpha_code, options) as usize;
        let number = group_number(amount.abs(), digits, rules);

        let symbol = self.table.symbol(alpha_code).unwrap_or(alpha_code);
        let sign = if amount < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };

        match rules.placement {
            // Alphabetic symbols such as "CHF" are kept apart from the digits
            SymbolPlacement::Prefix if symbol.ends_with(|c: char| c.is_alphabetic()) => {
                format!("{sign}{symbol}{NBSP}{number}")
            }
            SymbolPlacement::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPlacement::PrefixSpaced => format!("{sign}{symbol}{NBSP}{number}"),
            SymbolPlacement::SuffixSpaced => format!("{sign}{number}{NBSP}{symbol}"),
        }
    }
}

/// Renders a non-negative amount with `digits` fraction digits and groups of
/// three in the integer part.
fn group_number(amount: f64, digits: usize, rules: LocaleRules) -> String {
    let plain = format!("{:.*}", digits, amount);
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(rules.group);
        }
        grouped.push(digit);
    }

    if let Some(fraction) = fraction {
        grouped.push(rules.decimal);
        grouped.push_str(fraction);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mint_core::{Currency, Money};
    use rstest::rstest;

    fn formatter() -> LocaleFormatter {
        LocaleFormatter::new(IsoTable::new(), "en_US")
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    #[rstest]
    #[case(100, "EUR", "de_DE", "1,00\u{a0}€")]
    #[case(1000000, "EUR", "de_DE", "10.000,00\u{a0}€")]
    #[case(100, "USD", "de_DE", "1,00\u{a0}$")]
    #[case(1000000, "USD", "de_DE", "10.000,00\u{a0}$")]
    #[case(100, "EUR", "en_US", "€1.00")]
    #[case(1000000, "EUR", "en_US", "€10,000.00")]
    fn test_formatted_amount(
        #[case] amount: i64,
        #[case] code: &str,
        #[case] locale: &str,
        #[case] expected: &str,
    ) {
        let money = Money::new(amount, Currency::from_exponent(code, 2).unwrap());
        assert_eq!(money.formatted_amount(&formatter(), locale, false), expected);
    }

    #[rstest]
    #[case(1200, false, "€12.00")]
    #[case(1200, true, "€12")]
    #[case(1250, true, "€12.50")]
    fn test_hide_fraction_digits(#[case] amount: i64, #[case] hide: bool, #[case] expected: &str) {
        let money = Money::new(amount, Currency::from_exponent("EUR", 2).unwrap());
        assert_eq!(money.formatted_amount(&formatter(), "en_US", hide), expected);
    }

    #[rstest]
    #[case(1234567.891, "BHD", "en_US", "BHD\u{a0}1,234,567.891")]
    #[case(1234567.0, "JPY", "ja_JP", "¥1,234,567")]
    #[case(1234.5, "EUR", "fr_FR", "1\u{202f}234,50\u{a0}€")]
    #[case(1234.5, "EUR", "nl_NL", "€\u{a0}1.234,50")]
    #[case(1234.5, "CHF", "de_CH", "CHF\u{a0}1\u{2019}234.50")]
    #[case(999.0, "USD", "en_US", "$999.00")]
    #[case(0.0, "USD", "en_US", "$0.00")]
    fn test_locales_and_digits(
        #[case] amount: f64,
        #[case] code: &str,
        #[case] locale: &str,
        #[case] expected: &str,
    ) {
        let result = formatter().format_currency(amount, code, locale, FormatOptions::default());
        assert_eq!(result, expected);
    }

    #[test]
    fn test_prefix_letter_symbol_gets_space() {
        let result = formatter().format_currency(5.0, "CHF", "en_US", FormatOptions::default());
        assert_eq!(result, "CHF\u{a0}5.00");
    }

    #[test]
    fn test_negative_amounts() {
        let f = formatter();
        assert_eq!(f.format_currency(-1.5, "EUR", "en_US", FormatOptions::default()), "-€1.50");
        assert_eq!(
            f.format_currency(-1.5, "EUR", "de_DE", FormatOptions::default()),
            "-1,50\u{a0}€"
        );
        // No "-0.00"
        assert_eq!(f.format_currency(-0.001, "EUR", "en_US", FormatOptions::default()), "€0.00");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        init_tracing();
        let f = LocaleFormatter::new(IsoTable::new(), "de_DE");

        assert!(!f.supports_locale("xx_XX"));
        assert_eq!(
            f.format_currency(1.0, "EUR", "xx_XX", FormatOptions::default()),
            "1,00\u{a0}€"
        );
        // Same language, different region
        assert!(f.supports_locale("en_NZ"));
        assert_eq!(
            f.format_currency(1.0, "EUR", "en-NZ", FormatOptions::default()),
            "€1.00"
        );
    }

    #[test]
    fn test_unknown_currency_uses_code_and_two_digits() {
        init_tracing();
        let result = formatter().format_currency(3.0, "XTS", "de_DE", FormatOptions::default());
        assert_eq!(result, "3,00\u{a0}XTS");
    }

    #[test]
    fn test_max_fraction_digits_caps_currency_digits() {
        let f = formatter();
        let options = FormatOptions {
            max_fraction_digits: Some(1),
        };
        assert_eq!(f.format_currency(1.26, "BHD", "de_DE", options), "1,3\u{a0}BHD");
        assert_eq!(
            f.format_currency(12.0, "EUR", "en_US", FormatOptions::without_fraction()),
            "€12"
        );
    }
}
