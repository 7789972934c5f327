//! # Price Tags
//!
//! A price tag pairs a net and a gross price with the tax percentage between
//! them. If no tax applies, use a tax percentage of `0.0` or plain `Money`.
//!
//! ## Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PriceTag                                                               │
//! │  ├── net_price       12.34 EUR                                          │
//! │  ├── gross_price     14.68 EUR   (same alpha code as net, enforced)     │
//! │  └── tax_percentage  19.0                                               │
//! │                                                                         │
//! │  tax_value() = gross - net = 2.34 EUR                                   │
//! │                                                                         │
//! │  add / subtract / compare_to:  tax percentages must be EQUAL            │
//! │  multiply / divide / convert:  applied to net and gross independently   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax percentages are compared with exact `f64` equality. Two tags whose
//! percentages were computed differently (e.g. `19.0` vs `0.19 * 100.0`) are
//! therefore not combinable; normalise rates before building tags.

use serde::Serialize;
use std::cmp::Ordering;

use crate::currency::Currency;
use crate::error::{MintError, MintResult};
use crate::money::Money;
use crate::rounding::RoundingMode;
use crate::validation::validate_tax_percentage;

/// Net and gross price with the tax percentage between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTag {
    net_price: Money,
    gross_price: Money,
    tax_percentage: f64,
}

impl PriceTag {
    /// Creates a price tag.
    ///
    /// ## Errors
    /// - [`MintError::CurrencyMismatch`] if net and gross currencies differ
    /// - [`MintError::Validation`] if `tax_percentage` is not finite
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    /// use mint_core::price_tag::PriceTag;
    ///
    /// let eur = Currency::from_exponent("EUR", 2).unwrap();
    /// let tag =
    ///     PriceTag::new(Money::new(1234, eur.clone()), Money::new(2345, eur), 19.5).unwrap();
    /// assert_eq!(tag.tax_value().unwrap().amount(), 1111);
    /// ```
    pub fn new(net_price: Money, gross_price: Money, tax_percentage: f64) -> MintResult<Self> {
        net_price.assert_same_currency(&gross_price)?;
        validate_tax_percentage(tax_percentage)?;

        Ok(PriceTag {
            net_price,
            gross_price,
            tax_percentage,
        })
    }

    /// Net price.
    pub fn net_price(&self) -> &Money {
        &self.net_price
    }

    /// Gross price.
    pub fn gross_price(&self) -> &Money {
        &self.gross_price
    }

    /// Tax percentage between net and gross, e.g. `19.5`.
    pub fn tax_percentage(&self) -> f64 {
        self.tax_percentage
    }

    /// Currency shared by net and gross.
    pub fn currency(&self) -> &Currency {
        self.net_price.currency()
    }

    /// Tax amount, `gross - net`.
    pub fn tax_value(&self) -> MintResult<Money> {
        self.gross_price.subtract(&self.net_price)
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Adds another price tag with the same tax percentage.
    ///
    /// ## Errors
    /// - [`MintError::TaxMismatch`] if tax percentages differ
    /// - [`MintError::CurrencyMismatch`] if currencies differ
    pub fn add(&self, summand: &PriceTag) -> MintResult<PriceTag> {
        self.assert_same_tax(summand)?;

        let net_price = self.net_price.add(&summand.net_price)?;
        let gross_price = self.gross_price.add(&summand.gross_price)?;

        Ok(self.with_prices(net_price, gross_price))
    }

    /// Subtracts another price tag with the same tax percentage.
    ///
    /// ## Errors
    /// Same as [`PriceTag::add`].
    pub fn subtract(&self, subtrahend: &PriceTag) -> MintResult<PriceTag> {
        self.assert_same_tax(subtrahend)?;

        let net_price = self.net_price.subtract(&subtrahend.net_price)?;
        let gross_price = self.gross_price.subtract(&subtrahend.gross_price)?;

        Ok(self.with_prices(net_price, gross_price))
    }

    /// Multiplies net and gross by `factor`.
    pub fn multiply(&self, factor: f64, mode: RoundingMode) -> MintResult<PriceTag> {
        let net_price = self.net_price.multiply(factor, mode)?;
        let gross_price = self.gross_price.multiply(factor, mode)?;

        Ok(self.with_prices(net_price, gross_price))
    }

    /// Divides net and gross by `divisor`.
    pub fn divide(&self, divisor: f64, mode: RoundingMode) -> MintResult<PriceTag> {
        let net_price = self.net_price.divide(divisor, mode)?;
        let gross_price = self.gross_price.divide(divisor, mode)?;

        Ok(self.with_prices(net_price, gross_price))
    }

    /// Converts net and gross into `currency` with `ratio`.
    ///
    /// See [`Money::convert_to`] for how `ratio` is applied.
    pub fn convert_to(
        &self,
        ratio: f64,
        currency: impl Into<Currency>,
        mode: RoundingMode,
    ) -> MintResult<PriceTag> {
        let currency = currency.into();
        let net_price = self.net_price.convert_to(ratio, currency.clone(), mode)?;
        let gross_price = self.gross_price.convert_to(ratio, currency, mode)?;

        Ok(self.with_prices(net_price, gross_price))
    }

    /// Orders two price tags by net price.
    ///
    /// ## Errors
    /// - [`MintError::TaxMismatch`] if tax percentages differ
    /// - [`MintError::CurrencyMismatch`] if currencies differ
    pub fn compare_to(&self, other: &PriceTag) -> MintResult<Ordering> {
        self.assert_same_tax(other)?;
        self.net_price.compare_to(&other.net_price)
    }

    /// Fails with [`MintError::TaxMismatch`] unless both tax percentages are
    /// exactly equal.
    pub fn assert_same_tax(&self, other: &PriceTag) -> MintResult<()> {
        if self.tax_percentage != other.tax_percentage {
            return Err(MintError::TaxMismatch {
                expected: self.tax_percentage,
                actual: other.tax_percentage,
            });
        }
        Ok(())
    }

    // Net and gross always come from the same-currency operands above, so
    // the construction invariant still holds.
    fn with_prices(&self, net_price: Money, gross_price: Money) -> PriceTag {
        PriceTag {
            net_price,
            gross_price,
            tax_percentage: self.tax_percentage,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn currency(code: &str) -> Currency {
        Currency::from_exponent(code, 2).unwrap()
    }

    fn tag(net: i64, gross: i64) -> PriceTag {
        tag_in(net, gross, "EUR", 19.0)
    }

    fn tag_in(net: i64, gross: i64, code: &str, tax: f64) -> PriceTag {
        PriceTag::new(
            Money::new(net, currency(code)),
            Money::new(gross, currency(code)),
            tax,
        )
        .unwrap()
    }

    #[rstest]
    #[case(1234, 2345, 19.5, 1111)]
    #[case(2345, 1234, 1234.5, -1111)]
    fn test_constructor_and_getters(
        #[case] net: i64,
        #[case] gross: i64,
        #[case] tax: f64,
        #[case] tax_value: i64,
    ) {
        let net_price = Money::new(net, currency("EUR"));
        let gross_price = Money::new(gross, currency("EUR"));

        let subject = PriceTag::new(net_price.clone(), gross_price.clone(), tax).unwrap();

        assert_eq!(subject.net_price(), &net_price);
        assert_eq!(subject.gross_price(), &gross_price);
        assert_eq!(subject.tax_percentage(), tax);
        assert_eq!(subject.currency().to_string(), "EUR");

        let value = subject.tax_value().unwrap();
        assert_eq!(value.amount(), tax_value);
        assert_eq!(value.currency().to_string(), "EUR");
    }

    #[test]
    fn test_constructor_fails_with_different_currencies() {
        let err = PriceTag::new(
            Money::new(1234, currency("EUR")),
            Money::new(2345, currency("USD")),
            1234.0,
        )
        .unwrap_err();

        assert!(matches!(err, MintError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_constructor_rejects_non_finite_tax() {
        let eur = Money::new(1, currency("EUR"));
        assert!(matches!(
            PriceTag::new(eur.clone(), eur, f64::NAN),
            Err(MintError::Validation(_))
        ));
    }

    #[test]
    fn test_methods_fail_with_different_currencies() {
        let eur = tag_in(1234, 1234, "EUR", 1234.0);
        let usd = tag_in(1234, 1234, "USD", 1234.0);

        assert!(matches!(eur.add(&usd), Err(MintError::CurrencyMismatch { .. })));
        assert!(matches!(eur.subtract(&usd), Err(MintError::CurrencyMismatch { .. })));
        assert!(matches!(eur.compare_to(&usd), Err(MintError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_methods_fail_with_different_tax_percentages() {
        let a = tag_in(1234, 1234, "EUR", 123.0);
        let b = tag_in(1234, 1234, "EUR", 234.0);
        let expected = MintError::TaxMismatch {
            expected: 123.0,
            actual: 234.0,
        };

        assert_eq!(a.add(&b).unwrap_err(), expected);
        assert_eq!(a.subtract(&b).unwrap_err(), expected);
        assert_eq!(a.compare_to(&b).unwrap_err(), expected);
    }

    #[test]
    fn test_tax_is_checked_before_currency() {
        let a = tag_in(1, 1, "EUR", 7.0);
        let b = tag_in(1, 1, "USD", 19.0);
        assert!(matches!(a.add(&b), Err(MintError::TaxMismatch { .. })));
    }

    #[rstest]
    #[case(tag(1235, 1470), tag(1267, 1508), 2502, 2978)]
    #[case(tag(-1235, -1470), tag(-1267, 1508), -2502, 38)]
    fn test_add(
        #[case] left: PriceTag,
        #[case] right: PriceTag,
        #[case] net: i64,
        #[case] gross: i64,
    ) {
        let result = left.add(&right).unwrap();

        assert_eq!(result.net_price().amount(), net);
        assert_eq!(result.gross_price().amount(), gross);
        assert_eq!(result.currency(), left.currency());
        assert_eq!(result.gross_price().currency(), left.currency());
        assert_eq!(result.tax_percentage(), left.tax_percentage());
    }

    #[rstest]
    #[case(tag(1235, 1470), tag(1267, 1508), -32, -38)]
    #[case(tag(-1235, -1470), tag(-1267, 1508), 32, -2978)]
    fn test_subtract(
        #[case] left: PriceTag,
        #[case] right: PriceTag,
        #[case] net: i64,
        #[case] gross: i64,
    ) {
        let result = left.subtract(&right).unwrap();

        assert_eq!(result.net_price().amount(), net);
        assert_eq!(result.gross_price().amount(), gross);
        assert_eq!(result.tax_percentage(), left.tax_percentage());
    }

    #[rstest]
    #[case(tag(1235, 1470), 1525, 1815)]
    #[case(tag(-1235, -1470), -1525, -1815)]
    fn test_multiply(#[case] subject: PriceTag, #[case] net: i64, #[case] gross: i64) {
        let result = subject.multiply(1.2345, RoundingMode::HalfUp).unwrap();

        assert_eq!(result.net_price().amount(), net);
        assert_eq!(result.gross_price().amount(), gross);
        assert_eq!(result.tax_percentage(), 19.0);
    }

    #[rstest]
    #[case(tag(1235, 1470), 1000, 1191)]
    #[case(tag(-1235, -1470), -1000, -1191)]
    fn test_divide(#[case] subject: PriceTag, #[case] net: i64, #[case] gross: i64) {
        let result = subject.divide(1.2345, RoundingMode::HalfUp).unwrap();

        assert_eq!(result.net_price().amount(), net);
        assert_eq!(result.gross_price().amount(), gross);
        assert_eq!(result.tax_percentage(), 19.0);
    }

    #[rstest]
    #[case(tag(1235, 1470), 1525, 1815, "USD")]
    #[case(tag(-1235, -1470), -1525, -1815, "EUR")]
    fn test_convert_to(
        #[case] subject: PriceTag,
        #[case] net: i64,
        #[case] gross: i64,
        #[case] code: &str,
    ) {
        let result = subject
            .convert_to(1.2345, currency(code), RoundingMode::HalfUp)
            .unwrap();

        assert_eq!(result.net_price().amount(), net);
        assert_eq!(result.gross_price().amount(), gross);
        assert_eq!(result.net_price().currency().to_string(), code);
        assert_eq!(result.gross_price().currency().to_string(), code);
        assert_eq!(result.tax_percentage(), subject.tax_percentage());
    }

    #[test]
    fn test_compare_to_uses_net_price() {
        let cheap = tag(100, 1000);
        let expensive = tag(200, 150);
        assert_eq!(cheap.compare_to(&expensive).unwrap(), Ordering::Less);
        assert_eq!(expensive.compare_to(&cheap).unwrap(), Ordering::Greater);
        assert_eq!(cheap.compare_to(&tag(100, 1)).unwrap(), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn prop_add_and_subtract_are_componentwise(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
            c in -10_000i64..10_000,
            d in -10_000i64..10_000,
        ) {
            let left = tag(a, b);
            let right = tag(c, d);

            let sum = left.add(&right).unwrap();
            prop_assert_eq!(sum.net_price().amount(), a + c);
            prop_assert_eq!(sum.gross_price().amount(), b + d);

            let difference = left.subtract(&right).unwrap();
            prop_assert_eq!(difference.net_price().amount(), a - c);
            prop_assert_eq!(difference.gross_price().amount(), b - d);
        }

        #[test]
        fn prop_multiply_by_integer_is_exact(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
            factor in -10_000i64..10_000,
        ) {
            let result = tag(a, b).multiply(factor as f64, RoundingMode::HalfUp).unwrap();
            prop_assert_eq!(result.net_price().amount(), a * factor);
            prop_assert_eq!(result.gross_price().amount(), b * factor);
        }

        #[test]
        fn prop_divide_matches_money_divide(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
            divisor in 1i64..10_000,
        ) {
            let subject = tag(a, b);
            let result = subject.divide(divisor as f64, RoundingMode::HalfUp).unwrap();
            prop_assert_eq!(
                result.net_price(),
                &subject.net_price().divide(divisor as f64, RoundingMode::HalfUp).unwrap()
            );
            prop_assert_eq!(
                result.gross_price(),
                &subject.gross_price().divide(divisor as f64, RoundingMode::HalfUp).unwrap()
            );
        }
    }
}
