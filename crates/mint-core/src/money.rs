//! # Money Module
//!
//! Provides the `Money` type: an exact smallest-unit count tagged with its
//! currency.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer smallest units                                   │
//! │    12345 cents + 655 cents = 13000 cents (exact, always)                │
//! │                                                                         │
//! │  Floats only appear at the edges:                                       │
//! │    from_default_unit_amount(123.45) ──round──► 12345                    │
//! │    multiply / divide / convert_to   ──round──► integer again            │
//! │    default_unit_amount()            ──────────► 123.45 (display only)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mint_core::currency::Currency;
//! use mint_core::money::Money;
//! use mint_core::rounding::RoundingMode;
//!
//! let eur = Currency::from_exponent("EUR", 2).unwrap();
//! let price = Money::new(1099, eur.clone()); // 10.99 EUR
//!
//! let total = price.add(&Money::new(500, eur)).unwrap();
//! assert_eq!(total.amount(), 1599);
//!
//! let discounted = total.multiply(0.9, RoundingMode::HalfUp).unwrap();
//! assert_eq!(discounted.amount(), 1439);
//! ```

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::currency::{Currency, CurrencyLookup, CurrencyUnit};
use crate::error::{MintError, MintResult};
use crate::format::{AmountFormatter, FormatOptions};
use crate::rounding::{round, RoundingMode};

// Above this many digits 10^digits stops being exact in an f64.
const MAX_DISPLAY_DIGITS: u32 = 15;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest unit of its currency.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values for refunds, discounts, tax deltas
/// - **Immutable**: every operation returns a new value; operands are
///   never touched
/// - **Currency-checked**: combining two values first checks alpha codes
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Money ──► PricedOffer (alternate quotes in other currencies)          │
/// │    │                                                                    │
/// │    └──► PriceTag (net + gross) ──► CurrencyPriceTag ──► PriceItem      │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a Money value from a smallest-unit count.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    ///
    /// let eur = Currency::from_exponent("EUR", 2).unwrap();
    /// let price = Money::new(1099, eur); // 10.99 EUR
    /// assert_eq!(price.amount(), 1099);
    /// ```
    #[inline]
    pub fn new(amount: i64, currency: impl Into<Currency>) -> Self {
        Money {
            amount,
            currency: currency.into(),
        }
    }

    /// Returns zero in `currency`.
    #[inline]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(0, currency)
    }

    /// Creates a Money value from a number that must already be integral.
    ///
    /// This is the guard for amounts coming from loosely typed sources.
    ///
    /// ## Errors
    /// [`MintError::InvalidAmount`] if `amount` is NaN, infinite, has a
    /// fractional part, or does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    ///
    /// let eur = Currency::from_exponent("EUR", 2).unwrap();
    /// assert_eq!(Money::from_integral(250.0, eur.clone()).unwrap().amount(), 250);
    /// assert!(Money::from_integral(2.5, eur).is_err());
    /// ```
    pub fn from_integral(amount: f64, currency: impl Into<Currency>) -> MintResult<Self> {
        if amount.fract() != 0.0 {
            return Err(MintError::InvalidAmount { value: amount });
        }
        let amount = round(amount, RoundingMode::Down)
            .map_err(|_| MintError::InvalidAmount { value: amount })?;
        Ok(Self::new(amount, currency))
    }

    /// Creates a Money value from a default-unit amount (e.g. `4.20` euros)
    /// and an alpha code resolved through `lookup`.
    ///
    /// ## Errors
    /// - [`MintError::UnknownCurrency`] if `lookup` does not know the code
    /// - [`MintError::AmountOutOfRange`] if the scaled amount overflows
    pub fn from_default_unit_amount<L: CurrencyLookup + ?Sized>(
        amount: f64,
        alpha_code: &str,
        lookup: &L,
        mode: RoundingMode,
    ) -> MintResult<Self> {
        let currency = lookup.currency(alpha_code)?;
        Self::from_default_unit_amount_in(amount, currency, mode)
    }

    /// Same as [`Money::from_default_unit_amount`] for a currency already at
    /// hand.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    /// use mint_core::rounding::RoundingMode;
    ///
    /// let eur = Currency::from_exponent("EUR", 2).unwrap();
    /// let money = Money::from_default_unit_amount_in(123.45, eur, RoundingMode::HalfUp).unwrap();
    /// assert_eq!(money.amount(), 12345);
    /// ```
    pub fn from_default_unit_amount_in(
        amount: f64,
        currency: impl Into<Currency>,
        mode: RoundingMode,
    ) -> MintResult<Self> {
        let currency = currency.into();
        let scaled = round(amount * currency.smallest_unit_factor() as f64, mode)?;
        Ok(Self::new(scaled, currency))
    }

    /// Returns the smallest-unit count.
    #[inline]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the amount in default units, rounded to the currency's decimal
    /// digits.
    ///
    /// For display only. Arithmetic never goes through this value.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    ///
    /// let bhd = Currency::from_exponent("BHD", 3).unwrap();
    /// assert_eq!(Money::new(1500, bhd).default_unit_amount(), 1.5);
    /// ```
    pub fn default_unit_amount(&self) -> f64 {
        let value = self.amount as f64 / self.currency.smallest_unit_factor() as f64;
        let digits = self.currency.decimal_digits();
        if digits > MAX_DISPLAY_DIGITS {
            return value;
        }
        let scale = 10_f64.powi(digits as i32);
        (value * scale).round() / scale
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Adds two values of the same currency.
    ///
    /// ## Errors
    /// - [`MintError::CurrencyMismatch`] if the alpha codes differ
    /// - [`MintError::AmountOutOfRange`] on `i64` overflow
    pub fn add(&self, summand: &Money) -> MintResult<Money> {
        self.assert_same_currency(summand)?;

        let sum = self
            .amount
            .checked_add(summand.amount)
            .ok_or(MintError::AmountOutOfRange {
                value: self.amount as f64 + summand.amount as f64,
            })?;

        Ok(self.with_amount(sum))
    }

    /// Subtracts a value of the same currency.
    ///
    /// ## Errors
    /// - [`MintError::CurrencyMismatch`] if the alpha codes differ
    /// - [`MintError::AmountOutOfRange`] on `i64` overflow
    pub fn subtract(&self, subtrahend: &Money) -> MintResult<Money> {
        self.assert_same_currency(subtrahend)?;

        let difference = self
            .amount
            .checked_sub(subtrahend.amount)
            .ok_or(MintError::AmountOutOfRange {
                value: self.amount as f64 - subtrahend.amount as f64,
            })?;

        Ok(self.with_amount(difference))
    }

    /// Multiplies by `factor`, rounding with `mode`.
    ///
    /// Equivalent to `convert_to(factor, self.currency(), mode)`.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    /// use mint_core::rounding::RoundingMode;
    ///
    /// let usd = Currency::from_exponent("USD", 2).unwrap();
    /// let money = Money::new(10, usd);
    /// assert_eq!(money.multiply(1.45, RoundingMode::HalfUp).unwrap().amount(), 15);
    /// assert_eq!(money.multiply(1.45, RoundingMode::HalfDown).unwrap().amount(), 14);
    /// ```
    pub fn multiply(&self, factor: f64, mode: RoundingMode) -> MintResult<Money> {
        self.convert_to(factor, self.currency.clone(), mode)
    }

    /// Divides by `divisor`, rounding with `mode`.
    ///
    /// ## Errors
    /// [`MintError::AmountOutOfRange`] when the quotient is not representable
    /// (including division by zero).
    pub fn divide(&self, divisor: f64, mode: RoundingMode) -> MintResult<Money> {
        let quotient = round(self.amount as f64 / divisor, mode)?;
        Ok(self.with_amount(quotient))
    }

    /// Converts into `currency` using `ratio`.
    ///
    /// The result is `round(amount * ratio * target_factor / source_factor)`,
    /// so the smallest-unit scale of both currencies is accounted for and
    /// `ratio` only has to express the exchange rate.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    /// use mint_core::rounding::RoundingMode;
    ///
    /// let clp = Currency::from_exponent("CLP", 0).unwrap();
    /// let eur = Currency::from_exponent("EUR", 2).unwrap();
    ///
    /// let pesos = Money::new(2_333_443, clp);
    /// let euros = pesos.convert_to(1.0 / 747.0, eur, RoundingMode::HalfUp).unwrap();
    /// assert_eq!(euros.amount(), 312_375);
    /// ```
    pub fn convert_to(
        &self,
        ratio: f64,
        currency: impl Into<Currency>,
        mode: RoundingMode,
    ) -> MintResult<Money> {
        let currency = currency.into();
        let currency_factor =
            currency.smallest_unit_factor() as f64 / self.currency.smallest_unit_factor() as f64;

        let product = round(self.amount as f64 * ratio * currency_factor, mode)?;

        Ok(Money::new(product, currency))
    }

    /// Orders two values of the same currency by amount.
    ///
    /// ## Errors
    /// [`MintError::CurrencyMismatch`] if the alpha codes differ.
    pub fn compare_to(&self, other: &Money) -> MintResult<Ordering> {
        self.assert_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns the negated value.
    pub fn negate(&self) -> MintResult<Money> {
        let negated = self
            .amount
            .checked_neg()
            .ok_or(MintError::AmountOutOfRange {
                value: -(self.amount as f64),
            })?;
        Ok(self.with_amount(negated))
    }

    // =========================================================================
    // Currency Guard
    // =========================================================================

    /// True if both values carry the same alpha code.
    #[inline]
    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.currency.alpha_code() == other.currency.alpha_code()
    }

    /// Fails with [`MintError::CurrencyMismatch`] naming both alpha codes if
    /// the currencies differ.
    pub fn assert_same_currency(&self, other: &Money) -> MintResult<()> {
        if !self.is_same_currency(other) {
            return Err(MintError::CurrencyMismatch {
                expected: self.currency.alpha_code().to_string(),
                actual: other.currency.alpha_code().to_string(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Renders the value through `formatter` for `locale`.
    ///
    /// With `hide_fraction_digits`, whole multiples of 100 smallest units are
    /// rendered without a fraction part (`820 €` rather than `820,00 €`);
    /// anything else keeps the currency's digits so no `820,1 €` appears.
    pub fn formatted_amount<F: AmountFormatter + ?Sized>(
        &self,
        formatter: &F,
        locale: &str,
        hide_fraction_digits: bool,
    ) -> String {
        let options = if hide_fraction_digits && self.amount % 100 == 0 {
            FormatOptions::without_fraction()
        } else {
            FormatOptions::default()
        };

        formatter.format_currency(
            self.default_unit_amount(),
            self.currency.alpha_code(),
            locale,
            options,
        )
    }

    fn with_amount(&self, amount: i64) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `<amount> <CODE>` rendering.
///
/// ## Note
/// This is for logs and debugging. Use [`Money::formatted_amount`] for
/// anything a user reads.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.decimal_digits().min(MAX_DISPLAY_DIGITS) as usize;
        write!(
            f,
            "{:.*} {}",
            digits,
            self.default_unit_amount(),
            self.currency.alpha_code()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
