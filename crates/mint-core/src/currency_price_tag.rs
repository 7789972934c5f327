//! # Currency Price Tags
//!
//! A [`PriceTag`] in the base currency (what the shop books) next to the same
//! tag in a display currency (what the customer sees), linked by the exchange
//! rate used between them.
//!
//! ```text
//! base_price_tag     100.00 / 119.00 EUR  (19%)
//!        │
//!        │  exchange_rate: USD @ 1.0567
//!        ▼
//! display_price_tag  105.67 / 125.75 USD  (19%)
//! ```
//!
//! Combining two currency price tags requires exactly equal exchange rates.
//! As with tax percentages, this is exact `f64` equality: rates that are
//! computed rather than copied from one source may not compare equal.

use serde::Serialize;

use crate::currency::ExchangeRate;
use crate::error::{MintError, MintResult};
use crate::price_tag::PriceTag;
use crate::rounding::RoundingMode;

/// A base-currency price tag, its display-currency counterpart, and the rate
/// between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyPriceTag {
    base_price_tag: PriceTag,
    display_price_tag: PriceTag,
    exchange_rate: ExchangeRate,
}

impl CurrencyPriceTag {
    /// Creates a currency price tag.
    ///
    /// ## Errors
    /// [`MintError::TaxMismatch`] if base and display tax percentages differ.
    pub fn new(
        base_price_tag: PriceTag,
        display_price_tag: PriceTag,
        exchange_rate: ExchangeRate,
    ) -> MintResult<Self> {
        base_price_tag.assert_same_tax(&display_price_tag)?;

        Ok(CurrencyPriceTag {
            base_price_tag,
            display_price_tag,
            exchange_rate,
        })
    }

    /// Derives the display tag by converting `base_price_tag` with
    /// `exchange_rate`.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::{Currency, ExchangeRate};
    /// use mint_core::currency_price_tag::CurrencyPriceTag;
    /// use mint_core::money::Money;
    /// use mint_core::price_tag::PriceTag;
    /// use mint_core::rounding::RoundingMode;
    ///
    /// let eur = Currency::from_exponent("EUR", 2).unwrap();
    /// let usd = Currency::from_exponent("USD", 2).unwrap();
    ///
    /// let base =
    ///     PriceTag::new(Money::new(10000, eur.clone()), Money::new(11900, eur), 19.0).unwrap();
    /// let rate = ExchangeRate::new(usd, 1.0567).unwrap();
    ///
    /// let tag = CurrencyPriceTag::from_base(base, rate, RoundingMode::HalfUp).unwrap();
    /// assert_eq!(tag.display_price_tag().net_price().amount(), 10567);
    /// assert_eq!(tag.display_price_tag().gross_price().amount(), 12575);
    /// ```
    pub fn from_base(
        base_price_tag: PriceTag,
        exchange_rate: ExchangeRate,
        mode: RoundingMode,
    ) -> MintResult<Self> {
        let display_price_tag = base_price_tag.convert_to(
            exchange_rate.rate(),
            exchange_rate.currency().clone(),
            mode,
        )?;

        Self::new(base_price_tag, display_price_tag, exchange_rate)
    }

    /// Tag in the base currency.
    pub fn base_price_tag(&self) -> &PriceTag {
        &self.base_price_tag
    }

    /// Tag in the display currency.
    pub fn display_price_tag(&self) -> &PriceTag {
        &self.display_price_tag
    }

    /// Rate between base and display.
    pub fn exchange_rate(&self) -> &ExchangeRate {
        &self.exchange_rate
    }

    /// Tax percentage shared by both tags.
    pub fn tax_percentage(&self) -> f64 {
        self.base_price_tag.tax_percentage()
    }

    /// Adds another currency price tag with the same exchange rate.
    ///
    /// ## Errors
    /// - [`MintError::ExchangeRateMismatch`] if rates differ
    /// - anything [`PriceTag::add`] raises
    pub fn add(&self, summand: &CurrencyPriceTag) -> MintResult<CurrencyPriceTag> {
        self.assert_same_exchange_rate(summand)?;

        let base_price_tag = self.base_price_tag.add(&summand.base_price_tag)?;
        let display_price_tag = self.display_price_tag.add(&summand.display_price_tag)?;

        Ok(self.with_tags(base_price_tag, display_price_tag))
    }

    /// Subtracts another currency price tag with the same exchange rate.
    pub fn subtract(&self, subtrahend: &CurrencyPriceTag) -> MintResult<CurrencyPriceTag> {
        self.assert_same_exchange_rate(subtrahend)?;

        let base_price_tag = self.base_price_tag.subtract(&subtrahend.base_price_tag)?;
        let display_price_tag = self
            .display_price_tag
            .subtract(&subtrahend.display_price_tag)?;

        Ok(self.with_tags(base_price_tag, display_price_tag))
    }

    /// Multiplies both tags by `factor`.
    pub fn multiply(&self, factor: f64, mode: RoundingMode) -> MintResult<CurrencyPriceTag> {
        let base_price_tag = self.base_price_tag.multiply(factor, mode)?;
        let display_price_tag = self.display_price_tag.multiply(factor, mode)?;

        Ok(self.with_tags(base_price_tag, display_price_tag))
    }

    /// Divides both tags by `divisor`.
    pub fn divide(&self, divisor: f64, mode: RoundingMode) -> MintResult<CurrencyPriceTag> {
        let base_price_tag = self.base_price_tag.divide(divisor, mode)?;
        let display_price_tag = self.display_price_tag.divide(divisor, mode)?;

        Ok(self.with_tags(base_price_tag, display_price_tag))
    }

    /// Fails with [`MintError::ExchangeRateMismatch`] unless both rates are
    /// exactly equal.
    pub fn assert_same_exchange_rate(&self, other: &CurrencyPriceTag) -> MintResult<()> {
        let expected = self.exchange_rate.rate();
        let actual = other.exchange_rate.rate();
        if expected != actual {
            return Err(MintError::ExchangeRateMismatch { expected, actual });
        }
        Ok(())
    }

    fn with_tags(&self, base_price_tag: PriceTag, display_price_tag: PriceTag) -> Self {
        CurrencyPriceTag {
            base_price_tag,
            display_price_tag,
            exchange_rate: self.exchange_rate.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
