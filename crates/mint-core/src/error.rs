//! # Error Types
//!
//! Domain-specific error types for mint-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mint-core errors (this file)                                          │
//! │  ├── MintError        - Invariant violations on monetary values        │
//! │  └── ValidationError  - Malformed input (codes, factors, rates)        │
//! │                                                                         │
//! │  mint-catalog errors (separate crate)                                  │
//! │  └── CatalogError     - Config loading, wraps MintError                │
//! │                                                                         │
//! │  Flow: ValidationError → MintError → CatalogError → caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Mismatch errors carry BOTH sides of the comparison
//! 3. Errors are enum variants, never String
//! 4. Nothing here is retryable: every variant is a caller or input error

use thiserror::Error;

// =============================================================================
// Mint Error
// =============================================================================

/// Errors raised by monetary operations.
///
/// Every guard fails at the point of the offending call. No operation
/// coerces or truncates a value to get around a mismatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MintError {
    /// Amount handed to a `Money` constructor is not an exact integer.
    ///
    /// ## When This Occurs
    /// - `Money::from_integral(1.5, ..)`
    /// - NaN or infinite input
    #[error("Money amount {value} must be a valid integer")]
    InvalidAmount { value: f64 },

    /// Two monetary values with different alpha codes were combined.
    ///
    /// ## User Workflow
    /// ```text
    /// 1.23 EUR + 1.89 USD
    ///      │
    ///      ▼
    /// assert_same_currency()
    ///      │
    ///      ▼
    /// CurrencyMismatch { expected: "EUR", actual: "USD" }
    /// ```
    #[error("Currency {expected} does not match {actual} of other value")]
    CurrencyMismatch { expected: String, actual: String },

    /// Two price tags with different tax percentages were combined.
    #[error("Tax percentage {expected} must match {actual} when combining price tags")]
    TaxMismatch { expected: f64, actual: f64 },

    /// Two currency price tags with different exchange rates were combined.
    #[error("Exchange rate {expected} must match {actual} when combining currency price tags")]
    ExchangeRateMismatch { expected: f64, actual: f64 },

    /// Alpha code not present in the currency lookup table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// A computed amount cannot be represented as an `i64`.
    ///
    /// ## When This Occurs
    /// - Dividing by zero (infinite or NaN quotient)
    /// - Sums or products beyond ±9.2e18 smallest units
    #[error("Amount {value} is out of range for a 64-bit smallest-unit count")]
    AmountOutOfRange { value: f64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl MintError {
    /// Returns true for the three "values are not combinable" errors.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            MintError::CurrencyMismatch { .. }
                | MintError::TaxMismatch { .. }
                | MintError::ExchangeRateMismatch { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when constructing currencies, rates and configuration values from
/// untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    MustBeFinite { field: String },

    /// Invalid format (e.g. a four-letter currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with MintError.
pub type MintResult<T> = Result<T, MintError>;

// =============================================================================
// Unit Tests
// =============================================================================
