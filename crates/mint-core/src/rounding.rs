//! # Rounding
//!
//! The single place where a real number becomes a smallest-unit count.
//!
//! ## Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value     HalfUp   HalfDown   Up (ceil)   Down (floor)                 │
//! │  ─────     ──────   ────────   ─────────   ────────────                 │
//! │   14.49      14        14         15           14                       │
//! │   14.50      15        14         15           14                       │
//! │   14.51      15        15         15           14                       │
//! │  -14.50     -15       -14        -14          -15                       │
//! │  -14.51     -15       -15        -14          -15                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Half modes are symmetric around zero: `HalfUp` moves ties away from zero,
//! `HalfDown` moves them toward zero. `Up` and `Down` are ceiling and floor.
//!
//! ## Decimal Ties
//! ```text
//! 1.005 EUR * 100  =  100.49999999999999   (binary f64)
//!                  ─► 100.500000000000     (15 significant digits)
//!                  ─► 101                  (HalfUp)
//! ```
//! [`round`] first snaps fractional values to 15 significant digits, the
//! precision an `f64` carries reliably, so decimal ties land on the tie.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{MintError, MintResult};

// 2^63 as f64; anything at or above it does not fit an i64.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

const SIGNIFICANT_DIGITS: usize = 15;

/// How a fractional smallest-unit count is turned into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Nearest integer, ties away from zero.
    #[default]
    HalfUp,
    /// Nearest integer, ties toward zero.
    HalfDown,
    /// Ceiling (toward positive infinity).
    Up,
    /// Floor (toward negative infinity).
    Down,
}

impl RoundingMode {
    /// Rounds `value` to an integral `f64` according to this mode.
    ///
    /// The result is not range-checked; see [`round`] for that.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfUp => value.round(),
            RoundingMode::HalfDown => {
                let truncated = value.trunc();
                if (value - truncated).abs() == 0.5 {
                    truncated
                } else {
                    value.round()
                }
            }
            RoundingMode::Up => value.ceil(),
            RoundingMode::Down => value.floor(),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfUp => write!(f, "half_up"),
            RoundingMode::HalfDown => write!(f, "half_down"),
            RoundingMode::Up => write!(f, "up"),
            RoundingMode::Down => write!(f, "down"),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = MintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "half_up" => Ok(RoundingMode::HalfUp),
            "half_down" => Ok(RoundingMode::HalfDown),
            "up" | "ceil" | "ceiling" => Ok(RoundingMode::Up),
            "down" | "floor" => Ok(RoundingMode::Down),
            other => Err(crate::error::ValidationError::InvalidFormat {
                field: "rounding_mode".to_string(),
                reason: format!(
                    "unknown mode '{}'. Valid options: half_up, half_down, up, down",
                    other
                ),
            }
            .into()),
        }
    }
}

/// Rounds `value` with `mode` and converts it to an `i64` smallest-unit count.
///
/// ## Errors
/// [`MintError::AmountOutOfRange`] when `value` is NaN, infinite, or rounds
/// to something outside the `i64` range.
///
/// ## Example
/// ```rust
/// use mint_core::rounding::{round, RoundingMode};
///
/// assert_eq!(round(14.5, RoundingMode::HalfUp).unwrap(), 15);
/// assert_eq!(round(14.5, RoundingMode::HalfDown).unwrap(), 14);
/// assert_eq!(round(1.005 * 100.0, RoundingMode::HalfUp).unwrap(), 101);
/// assert!(round(f64::NAN, RoundingMode::HalfUp).is_err());
/// ```
pub fn round(value: f64, mode: RoundingMode) -> MintResult<i64> {
    let rounded = mode.apply(to_significant_digits(value));

    if !rounded.is_finite() || rounded >= I64_UPPER_BOUND || rounded < -I64_UPPER_BOUND {
        return Err(MintError::AmountOutOfRange { value });
    }

    Ok(rounded as i64)
}

/// Re-reads `value` at 15 significant digits, dropping binary representation
/// noise. Integral and non-finite values pass through unchanged.
fn to_significant_digits(value: f64) -> f64 {
    if !value.is_finite() || value.fract() == 0.0 {
        return value;
    }
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(14.49, RoundingMode::HalfUp, 14)]
    #[case(14.5, RoundingMode::HalfUp, 15)]
    #[case(-14.5, RoundingMode::HalfUp, -15)]
    #[case(14.5, RoundingMode::HalfDown, 14)]
    #[case(14.51, RoundingMode::HalfDown, 15)]
    #[case(-14.5, RoundingMode::HalfDown, -14)]
    #[case(-14.51, RoundingMode::HalfDown, -15)]
    #[case(19.9, RoundingMode::Down, 19)]
    #[case(-19.1, RoundingMode::Down, -20)]
    #[case(19.1, RoundingMode::Up, 20)]
    #[case(-19.9, RoundingMode::Up, -19)]
    #[case(7.0, RoundingMode::Up, 7)]
    #[case(7.0, RoundingMode::Down, 7)]
    fn test_round_modes(#[case] value: f64, #[case] mode: RoundingMode, #[case] expected: i64) {
        assert_eq!(round(value, mode).unwrap(), expected);
    }

    #[rstest]
    #[case(1.005 * 100.0, RoundingMode::HalfUp, 101)]
    #[case(0.285 * 100.0, RoundingMode::HalfUp, 29)]
    #[case(-1.005 * 100.0, RoundingMode::HalfUp, -101)]
    #[case(1.005 * 100.0, RoundingMode::HalfDown, 100)]
    #[case(0.29 * 100.0, RoundingMode::Down, 29)]
    #[case(100.499_999_9, RoundingMode::HalfUp, 100)]
    fn test_decimal_ties_survive_float_noise(
        #[case] value: f64,
        #[case] mode: RoundingMode,
        #[case] expected: i64,
    ) {
        assert_eq!(round(value, mode).unwrap(), expected);
    }

    #[test]
    fn test_default_mode_is_half_up() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }

    #[test]
    fn test_out_of_range_values_fail() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e19, -1e19] {
            assert!(matches!(
                round(value, RoundingMode::HalfUp),
                Err(MintError::AmountOutOfRange { .. })
            ));
        }
        // -2^63 itself is representable
        assert_eq!(
            round(-I64_UPPER_BOUND, RoundingMode::Down).unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("half_up".parse::<RoundingMode>().unwrap(), RoundingMode::HalfUp);
        assert_eq!("HALF-DOWN".parse::<RoundingMode>().unwrap(), RoundingMode::HalfDown);
        assert_eq!("ceil".parse::<RoundingMode>().unwrap(), RoundingMode::Up);
        assert_eq!("floor".parse::<RoundingMode>().unwrap(), RoundingMode::Down);
        assert!("bankers".parse::<RoundingMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::Up,
            RoundingMode::Down,
        ] {
            assert_eq!(mode.to_string().parse::<RoundingMode>().unwrap(), mode);
        }
    }
}
