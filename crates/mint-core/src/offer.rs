//! # Priced Offers
//!
//! A primary [`Money`] plus quotes for the same thing in other currencies.
//!
//! The alternates are independent price quotes, not derived conversions:
//! nothing ties their amounts to the primary amount. This is the only type in
//! the crate that is mutated in place; `Money` itself stays immutable.
//!
//! ## Lookup
//! ```text
//! price_in_currency("EGP", use_default)
//!      │
//!      ├── alternate with code EGP exists ──► that alternate
//!      │
//!      ├── missing, use_default = true    ──► primary
//!      │
//!      └── missing, use_default = false   ──► None
//! ```

use crate::currency::CurrencyUnit;
use crate::money::Money;

/// A primary price plus alternate-currency quotes, ordered by insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOffer {
    primary: Money,
    alternates: Vec<Money>,
}

impl PricedOffer {
    /// Creates an offer without alternates.
    pub fn new(primary: Money) -> Self {
        PricedOffer {
            primary,
            alternates: Vec::new(),
        }
    }

    /// Creates an offer with an initial list of alternates.
    ///
    /// Entries sharing an alpha code collapse into one; the last one wins and
    /// keeps the position of the first.
    pub fn with_alternates(primary: Money, alternates: impl IntoIterator<Item = Money>) -> Self {
        let mut offer = Self::new(primary);
        offer.set_currencies(alternates);
        offer
    }

    /// The primary price.
    pub fn primary(&self) -> &Money {
        &self.primary
    }

    /// The alternate prices, in insertion order.
    pub fn currencies(&self) -> &[Money] {
        &self.alternates
    }

    /// Adds an alternate price.
    ///
    /// An existing alternate with the same alpha code is replaced in place.
    pub fn add_currency_price(&mut self, price: Money) {
        match self
            .alternates
            .iter_mut()
            .find(|existing| existing.is_same_currency(&price))
        {
            Some(existing) => *existing = price,
            None => self.alternates.push(price),
        }
    }

    /// Replaces all alternate prices.
    pub fn set_currencies(&mut self, prices: impl IntoIterator<Item = Money>) {
        self.alternates.clear();
        for price in prices {
            self.add_currency_price(price);
        }
    }

    /// Finds the price quoted in `alpha_code`.
    ///
    /// Only the alternates are searched. When none matches, `use_default`
    /// decides between the primary price and `None`.
    ///
    /// ## Example
    /// ```rust
    /// use mint_core::currency::Currency;
    /// use mint_core::money::Money;
    /// use mint_core::offer::PricedOffer;
    ///
    /// let eur = Currency::from_exponent("EUR", 2).unwrap();
    /// let egp = Currency::from_exponent("EGP", 2).unwrap();
    ///
    /// let mut offer = PricedOffer::new(Money::new(123, eur));
    /// offer.add_currency_price(Money::new(50, egp));
    ///
    /// assert_eq!(offer.price_in_currency("EGP", false).unwrap().amount(), 50);
    /// assert_eq!(offer.price_in_currency("XXX", true).unwrap().amount(), 123);
    /// assert!(offer.price_in_currency("XXX", false).is_none());
    /// ```
    pub fn price_in_currency(&self, alpha_code: &str, use_default: bool) -> Option<&Money> {
        self.alternates
            .iter()
            .find(|price| price.currency().alpha_code() == alpha_code)
            .or(if use_default { Some(&self.primary) } else { None })
    }
}

impl From<Money> for PricedOffer {
    fn from(primary: Money) -> Self {
        PricedOffer::new(primary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;

    fn money(amount: i64, code: &str) -> Money {
        Money::new(amount, Currency::from_exponent(code, 2).unwrap())
    }

    #[test]
    fn test_price_in_currency_exists() {
        let mut offer = PricedOffer::new(money(123, "EUR"));
        offer.add_currency_price(money(50, "EGP"));

        let result = offer.price_in_currency("EGP", false).unwrap();
        assert_eq!(result.amount(), 50);
        assert_eq!(result.currency().alpha_code(), "EGP");
    }

    #[test]
    fn test_price_in_currency_falls_back_to_primary() {
        let mut offer = PricedOffer::new(money(123, "EUR"));
        offer.add_currency_price(money(50, "USD"));

        let result = offer.price_in_currency("EGP", true).unwrap();
        assert_eq!(result, offer.primary());
        assert_eq!(result.amount(), 123);
    }

    #[test]
    fn test_price_in_currency_absent_without_default() {
        let mut offer = PricedOffer::new(money(123, "EUR"));
        offer.add_currency_price(money(50, "USD"));

        assert!(offer.price_in_currency("XXX", false).is_none());
        // The primary's own code is not searched
        assert!(offer.price_in_currency("EUR", false).is_none());
    }

    #[test]
    fn test_add_currency_price_replaces_same_code_in_place() {
        let mut offer = PricedOffer::new(money(123, "EUR"));
        offer.add_currency_price(money(50, "USD"));
        offer.add_currency_price(money(70, "EGP"));
        offer.add_currency_price(money(55, "USD"));

        let codes: Vec<&str> = offer
            .currencies()
            .iter()
            .map(|m| m.currency().alpha_code())
            .collect();
        assert_eq!(codes, vec!["USD", "EGP"]);
        assert_eq!(offer.price_in_currency("USD", false).unwrap().amount(), 55);
    }

    #[test]
    fn test_set_currencies_replaces_list() {
        let mut offer =
            PricedOffer::with_alternates(money(123, "EUR"), vec![money(50, "USD")]);
        offer.set_currencies(vec![money(1, "GBP"), money(2, "CHF")]);

        assert_eq!(offer.currencies().len(), 2);
        assert!(offer.price_in_currency("USD", false).is_none());
        assert_eq!(offer.currencies()[1].amount(), 2);
    }

    #[test]
    fn test_primary_is_unaffected_by_alternates() {
        let primary = money(123, "EUR");
        let mut offer = PricedOffer::from(primary.clone());
        offer.add_currency_price(money(50, "USD"));
        assert_eq!(offer.primary(), &primary);
    }
}
