//! # Validation Module
//!
//! Input validation for the metadata that monetary values are built from.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Construction time (this module)                                       │
//! │  ├── Currency::new        → alpha code, smallest-unit factor          │
//! │  ├── ExchangeRate::new    → rate is finite and positive               │
//! │  └── PriceTag::new        → tax percentage is finite                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Operation time (Money / PriceTag guards)                              │
//! │  ├── currency alpha codes equal                                        │
//! │  ├── tax percentages equal                                             │
//! │  └── exchange rates equal                                              │
//! │                                                                         │
//! │  Values that pass construction never need re-checking                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mint_core::validation::{validate_alpha_code, validate_exchange_rate};
//!
//! validate_alpha_code("EUR").unwrap();
//! assert!(validate_exchange_rate(0.0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Currency Metadata
// =============================================================================

/// Validates an alpha-3 currency code.
///
/// ## Rules
/// - Must not be empty
/// - Must be exactly three ASCII letters (case is not normalised)
///
/// ## Example
/// ```rust
/// use mint_core::validation::validate_alpha_code;
///
/// assert!(validate_alpha_code("EUR").is_ok());
/// assert!(validate_alpha_code("").is_err());
/// assert!(validate_alpha_code("EURO").is_err());
/// assert!(validate_alpha_code("E1R").is_err());
/// ```
pub fn validate_alpha_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "alpha_code".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "alpha_code".to_string(),
            reason: format!("'{}' must be exactly three ASCII letters", code),
        });
    }

    Ok(())
}

/// Validates the factor between default unit and smallest unit.
///
/// Zero or negative factors would make every conversion meaningless.
pub fn validate_smallest_unit_factor(factor: i64) -> ValidationResult<()> {
    if factor <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "smallest_unit_factor".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Rates
// =============================================================================

/// Validates a tax percentage (e.g. `19.5` for 19.5%).
///
/// Any finite value is accepted. Negative and above-100 percentages show up
/// in real data (credits, duty-inclusive prices) so they are not rejected.
pub fn validate_tax_percentage(percentage: f64) -> ValidationResult<()> {
    if !percentage.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: "tax_percentage".to_string(),
        });
    }
    Ok(())
}

/// Validates an exchange rate.
///
/// ## Rules
/// - Must be finite
/// - Must be greater than zero
pub fn validate_exchange_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() {
        return Err(ValidationError::MustBeFinite {
            field: "exchange_rate".to_string(),
        });
    }
    if rate <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "exchange_rate".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Locale
// =============================================================================

/// Validates a locale identifier such as `de_DE`, `en-US` or `fr`.
///
/// ## Rules
/// - Language part: two or three ASCII letters
/// - Optional region part after `_` or `-`: two ASCII letters or three digits
pub fn validate_locale(locale: &str) -> ValidationResult<()> {
    if locale.is_empty() {
        return Err(ValidationError::Required {
            field: "locale".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "locale".to_string(),
        reason: format!("'{}' is not a language[_REGION] identifier", locale),
    };

    let mut parts = locale.split(['_', '-']);
    let language = parts.next().unwrap_or_default();
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    if let Some(region) = parts.next() {
        let letters = region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic());
        let digits = region.len() == 3 && region.chars().all(|c| c.is_ascii_digit());
        if !letters && !digits {
            return Err(invalid());
        }
    }

    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
