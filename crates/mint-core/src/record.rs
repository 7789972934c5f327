//! # Serialization Records
//!
//! Flat, serde-friendly shapes for moving money across process boundaries
//! (JSON APIs, the frontend via generated TypeScript types).
//!
//! Records only carry the alpha code. Currency metadata is looked up again on
//! the way back in, so a record can never smuggle in a wrong factor.
//!
//! ```text
//! Money / PricedOffer ──to_record()──► MoneyRecord / PricedOfferRecord
//!                                              │ serde_json
//!                                              ▼
//!                                    {"amount":123,"currency":"EUR",...}
//!                                              │
//! Money / PricedOffer ◄──from_record(&lookup)──┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{CurrencyLookup, CurrencyUnit};
use crate::error::MintResult;
use crate::money::Money;
use crate::offer::PricedOffer;

// =============================================================================
// Records
// =============================================================================

/// Serialized form of a [`Money`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoneyRecord {
    /// Amount in the smallest unit.
    pub amount: i64,

    /// ISO 4217 alpha-3 code.
    pub currency: String,
}

/// Serialized form of a [`PricedOffer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricedOfferRecord {
    /// Primary amount in the smallest unit.
    pub amount: i64,

    /// Primary alpha code.
    pub currency: String,

    /// Alternate quotes, in insertion order.
    #[serde(default)]
    pub alternates: Vec<MoneyRecord>,
}

// =============================================================================
// Conversions
// =============================================================================

impl Money {
    /// Converts to the serialized form.
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord {
            amount: self.amount(),
            currency: self.currency().alpha_code().to_string(),
        }
    }

    /// Rebuilds a value, resolving the currency through `lookup`.
    ///
    /// ## Errors
    /// [`crate::error::MintError::UnknownCurrency`] if the code is not known
    /// to `lookup`.
    pub fn from_record<L: CurrencyLookup + ?Sized>(
        record: &MoneyRecord,
        lookup: &L,
    ) -> MintResult<Money> {
        let currency = lookup.currency(&record.currency)?;
        Ok(Money::new(record.amount, currency))
    }
}

impl PricedOffer {
    /// Converts to the serialized form, keeping alternate order.
    pub fn to_record(&self) -> PricedOfferRecord {
        let primary = self.primary().to_record();

        PricedOfferRecord {
            amount: primary.amount,
            currency: primary.currency,
            alternates: self.currencies().iter().map(Money::to_record).collect(),
        }
    }

    /// Rebuilds an offer, resolving every currency through `lookup`.
    ///
    /// ## Example
    /// ```rust
    /// use std::collections::HashMap;
    /// use mint_core::offer::PricedOffer;
    /// use mint_core::record::PricedOfferRecord;
    ///
    /// let table: HashMap<String, u32> =
    ///     [("EUR".to_string(), 2), ("USD".to_string(), 2)].into_iter().collect();
    ///
    /// let record: PricedOfferRecord = serde_json::from_str(
    ///     r#"{"amount":123,"currency":"EUR","alternates":[{"amount":150,"currency":"USD"}]}"#,
    /// ).unwrap();
    ///
    /// let offer = PricedOffer::from_record(&record, &table).unwrap();
    /// assert_eq!(offer.price_in_currency("USD", false).unwrap().amount(), 150);
    /// ```
    pub fn from_record<L: CurrencyLookup + ?Sized>(
        record: &PricedOfferRecord,
        lookup: &L,
    ) -> MintResult<PricedOffer> {
        let primary = Money::new(record.amount, lookup.currency(&record.currency)?);
        let alternates = record
            .alternates
            .iter()
            .map(|alternate| Money::from_record(alternate, lookup))
            .collect::<MintResult<Vec<_>>>()?;

        Ok(PricedOffer::with_alternates(primary, alternates))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
