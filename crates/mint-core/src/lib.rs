//! # mint-core: Pure Monetary Values
//!
//! Exact money arithmetic on smallest-unit integers, with tax-aware and
//! exchange-rate-aware price tags built on top. No I/O happens in this crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Mint Workspace                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Application / API layer                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                mint-catalog (ISO table, config)                 │   │
//! │  │     IsoTable: CurrencyLookup    LocaleFormatter: AmountFormatter│   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ traits                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mint-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   Currency ──► Money ──► PriceTag ──► CurrencyPriceTag          │   │
//! │  │                  │                          │                   │   │
//! │  │                  ▼                          ▼                   │   │
//! │  │             PricedOffer                 PriceItem               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL TABLES • NO LOGGING                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Currency metadata, lookup trait, exchange rates
//! - [`money`] - Money type with integer arithmetic
//! - [`offer`] - Primary price plus alternate-currency quotes
//! - [`price_tag`] - Net/gross pairs with a tax percentage
//! - [`currency_price_tag`] - Base and display price tags with a rate
//! - [`price_item`] - Order line aggregate
//! - [`rounding`] - Rounding modes
//! - [`record`] - Serialization records
//! - [`format`] - Formatter capability
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use mint_core::{Money, PriceTag, RoundingMode};
//!
//! let table: HashMap<String, u32> = [("EUR".to_string(), 2)].into_iter().collect();
//!
//! let net = Money::from_default_unit_amount(12.34, "EUR", &table, RoundingMode::HalfUp).unwrap();
//! let gross = net.multiply(1.19, RoundingMode::HalfUp).unwrap();
//! let tag = PriceTag::new(net, gross, 19.0).unwrap();
//!
//! assert_eq!(tag.tax_value().unwrap().amount(), 234);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod currency_price_tag;
pub mod error;
pub mod format;
pub mod money;
pub mod offer;
pub mod price_item;
pub mod price_tag;
pub mod record;
pub mod rounding;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mint_core::Money` instead of
// `use mint_core::money::Money`

pub use currency::{Currency, CurrencyLookup, CurrencyUnit, ExchangeRate, IsoCurrency};
pub use currency_price_tag::CurrencyPriceTag;
pub use error::{MintError, MintResult, ValidationError};
pub use format::{AmountFormatter, FormatOptions};
pub use money::Money;
pub use offer::PricedOffer;
pub use price_item::PriceItem;
pub use price_tag::PriceTag;
pub use record::{MoneyRecord, PricedOfferRecord};
pub use rounding::RoundingMode;
