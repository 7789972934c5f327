//! # Price Items
//!
//! One order line as the pricing pipeline hands it over: the tags for each
//! stage of the calculation plus the quantity. Nothing is computed here; the
//! caller fills every field.
//!
//! ```text
//! base_price ──× factor──► retail_price ──+ additional_costs──► unit_price
//!                                                                   │
//!                                                          × amount │
//!                                                                   ▼
//!                                                              item_price
//! ```

use serde::Serialize;

use crate::currency_price_tag::CurrencyPriceTag;

/// An order line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceItem {
    base_price: CurrencyPriceTag,
    factor: f64,
    retail_price: CurrencyPriceTag,
    additional_costs: CurrencyPriceTag,
    unit_price: CurrencyPriceTag,
    amount: i64,
    item_price: CurrencyPriceTag,
}

impl PriceItem {
    /// Creates a price item from already computed parts.
    pub fn new(
        base_price: CurrencyPriceTag,
        factor: f64,
        retail_price: CurrencyPriceTag,
        additional_costs: CurrencyPriceTag,
        unit_price: CurrencyPriceTag,
        amount: i64,
        item_price: CurrencyPriceTag,
    ) -> Self {
        PriceItem {
            base_price,
            factor,
            retail_price,
            additional_costs,
            unit_price,
            amount,
            item_price,
        }
    }

    /// Purchase price before the factor is applied.
    pub fn base_price(&self) -> &CurrencyPriceTag {
        &self.base_price
    }

    /// Markup factor applied to the base price.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Base price times the factor.
    pub fn retail_price(&self) -> &CurrencyPriceTag {
        &self.retail_price
    }

    /// Extra per-unit costs such as shipping.
    pub fn additional_costs(&self) -> &CurrencyPriceTag {
        &self.additional_costs
    }

    /// Retail price plus additional costs.
    pub fn unit_price(&self) -> &CurrencyPriceTag {
        &self.unit_price
    }

    /// Quantity on this line.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Unit price times the quantity.
    pub fn item_price(&self) -> &CurrencyPriceTag {
        &self.item_price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{Currency, ExchangeRate};
    use crate::money::Money;
    use crate::price_tag::PriceTag;
    use crate::rounding::RoundingMode;

    fn currency_tag(net: i64, gross: i64) -> CurrencyPriceTag {
        let eur = Currency::from_exponent("EUR", 2).unwrap();
        let usd = Currency::from_exponent("USD", 2).unwrap();
        let base =
            PriceTag::new(Money::new(net, eur.clone()), Money::new(gross, eur), 19.0).unwrap();
        let rate = ExchangeRate::new(usd, 1.1).unwrap();
        CurrencyPriceTag::from_base(base, rate, RoundingMode::HalfUp).unwrap()
    }

    #[test]
    fn test_accessors_return_constructor_values() {
        let base = currency_tag(1000, 1190);
        let retail = base.multiply(1.5, RoundingMode::HalfUp).unwrap();
        let costs = currency_tag(100, 119);
        let unit = retail.add(&costs).unwrap();
        let item = unit.multiply(3.0, RoundingMode::HalfUp).unwrap();

        let line = PriceItem::new(
            base.clone(),
            1.5,
            retail.clone(),
            costs.clone(),
            unit.clone(),
            3,
            item.clone(),
        );

        assert_eq!(line.base_price(), &base);
        assert_eq!(line.factor(), 1.5);
        assert_eq!(line.retail_price(), &retail);
        assert_eq!(line.additional_costs(), &costs);
        assert_eq!(line.unit_price(), &unit);
        assert_eq!(line.amount(), 3);
        assert_eq!(line.item_price(), &item);
        assert_eq!(line.item_price().base_price_tag().net_price().amount(), 4800);
    }
}
