//! # Money Module
//!
//! Provides the `Money` type for handling prices and stock value exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A stock total summed from doubles drifts as products accumulate.       │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    "2.50"  × 4 = "10.00"  exactly                                      │
//! │    "2.999" × 3 = "8.997"  exactly (no rounding to cents)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::money::Money;
//!
//! // Parse what the user typed into the price field
//! let price: Money = "2.50".parse().unwrap();
//! assert_eq!(price, Money::from_cents(250));
//!
//! let line = price.multiply_quantity(4);
//! assert_eq!(line.to_string(), "10.00");
//! ```

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::MoneyParseError;
use crate::{DISPLAY_DECIMALS, MAX_PRICE_SCALE};

// =============================================================================
// Money Type
// =============================================================================

/// An exact base-10 monetary value.
///
/// ## Design Decisions
/// - **Signed**: the form can produce a negative price, which validation
///   must be able to see before rejecting it
/// - **Any scale up to 28 places**: a price keeps every digit the user typed
/// - **Saturating arithmetic**: the stock is unbounded, so totals clamp at
///   the decimal range instead of overflowing
///
/// ## Where Money is Used
/// ```text
/// Price field "2.50" ──► Product.price ──► Product::line_value()
///                                               │
///                                               ▼
///                               Stock::calculate_total_value()
///                                               │
///                                               ▼
///                               "Total stock value: R$10.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the value without its sign.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity, saturating at the decimal bounds.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"10"`, `"2.999"`, `"-1"`, `".99"` or `"1e2"`.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Optional leading `+` or `-`
/// - Optional exponent (`e` or `E`, itself optionally signed)
/// - No thousands separators
/// - The value is kept exactly; more than 28 significant fractional places
///   is an error rather than a silent rounding
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let not_a_number = || MoneyParseError::NotANumber(text.to_string());

        let (negative, unsigned) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let is_exponent_marker = |c: char| c == 'e' || c == 'E';
        let (mantissa, exponent) = match unsigned.split_once(is_exponent_marker) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (unsigned, None),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (mantissa, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(not_a_number());
        }

        let exponent = match exponent {
            Some(exp) => {
                let digits = exp
                    .strip_prefix(|c: char| c == '+' || c == '-')
                    .unwrap_or(exp);
                if digits.is_empty() || !all_digits(digits) {
                    return Err(not_a_number());
                }
                exp.parse::<i64>().map_err(|_| MoneyParseError::Overflow)?
            }
            None => 0,
        };

        // "2.500" carries the same value as "2.5"
        let frac_part = frac_part.trim_end_matches('0');
        let digits = format!("{}{}", int_part, frac_part);
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Money::zero());
        }

        let mut coefficient = digits
            .parse::<i128>()
            .map_err(|_| MoneyParseError::Overflow)?;
        let mut scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .ok_or(MoneyParseError::Overflow)?;

        if scale < 0 {
            let shift = u32::try_from(-scale).map_err(|_| MoneyParseError::Overflow)?;
            coefficient = 10_i128
                .checked_pow(shift)
                .and_then(|factor| coefficient.checked_mul(factor))
                .ok_or(MoneyParseError::Overflow)?;
            scale = 0;
        }

        if scale > i64::from(MAX_PRICE_SCALE) {
            return Err(MoneyParseError::TooManyDecimals {
                max: MAX_PRICE_SCALE,
            });
        }

        if negative {
            coefficient = -coefficient;
        }

        Decimal::try_from_i128_with_scale(coefficient, scale as u32)
            .map(Money)
            .map_err(|_| MoneyParseError::Overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the exact amount with at least two fractional digits and no
/// currency symbol: `10.00`, `2.50`, `2.999`.
///
/// The symbol is a presentation setting; see the terminal app's config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0.normalize();
        if value.scale() < DISPLAY_DECIMALS {
            value.rescale(DISPLAY_DECIMALS);
        }
        write!(f, "{}", value)
    }
}

/// Serialized as its display string (`"2.50"`), so JSON never carries a
/// float and equal amounts always serialize the same way.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn money(text: &str) -> Money {
        text.parse().unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), Decimal::new(1099, 2));
        assert_eq!(Money::new(Decimal::new(1099, 2)), money);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "10.99");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(money("2.999").to_string(), "2.999");
        assert_eq!(money("2.500").to_string(), "2.50");
        assert_eq!(money("-0").to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepts_decimal_text() {
        assert_eq!("2.50".parse::<Money>(), Ok(Money::from_cents(250)));
        assert_eq!("2.5".parse::<Money>(), Ok(Money::from_cents(250)));
        assert_eq!("2.05".parse::<Money>(), Ok(Money::from_cents(205)));
        assert_eq!("10".parse::<Money>(), Ok(Money::from_cents(1000)));
        assert_eq!("10.".parse::<Money>(), Ok(Money::from_cents(1000)));
        assert_eq!(".99".parse::<Money>(), Ok(Money::from_cents(99)));
        assert_eq!(" 3 ".parse::<Money>(), Ok(Money::from_cents(300)));
        assert_eq!("+1".parse::<Money>(), Ok(Money::from_cents(100)));
        assert_eq!("0".parse::<Money>(), Ok(Money::zero()));
        assert_eq!("007.10".parse::<Money>(), Ok(Money::from_cents(710)));
    }

    #[test]
    fn test_parse_keeps_every_fractional_digit() {
        assert_eq!(money("2.999").amount(), Decimal::new(2999, 3));
        assert_eq!(money("0.0001").amount(), Decimal::new(1, 4));
        assert_ne!(money("2.555"), Money::from_cents(256));
    }

    #[test]
    fn test_parse_exponent_notation() {
        assert_eq!(money("1e2"), Money::from_cents(10_000));
        assert_eq!(money("1E2"), Money::from_cents(10_000));
        assert_eq!(money("2.5e1"), Money::from_cents(2_500));
        assert_eq!(money("25e-1"), Money::from_cents(250));
        assert_eq!(money("1e+0"), Money::from_cents(100));
        assert_eq!(money("-1.5E3"), Money::from_cents(-150_000));
        assert_eq!(money("0e999"), Money::zero());
    }

    #[test]
    fn test_parse_keeps_negative_values() {
        // Negative prices parse; rejecting them is validation's job
        assert_eq!("-1".parse::<Money>(), Ok(Money::from_cents(-100)));
        assert_eq!("-0.5".parse::<Money>(), Ok(Money::from_cents(-50)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(MoneyParseError::Empty));
        for text in ["abc", "1,50", ".", "-", "1.2.3", "1e", "e2", "1e+", "1e2.5", "1_000", "0x10"] {
            assert!(
                matches!(text.parse::<Money>(), Err(MoneyParseError::NotANumber(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        assert_eq!(
            "1e-29".parse::<Money>(),
            Err(MoneyParseError::TooManyDecimals { max: 28 })
        );
        assert_eq!(
            "0.0000000000000000000000000001".parse::<Money>().map(|m| m.amount()),
            Ok(Decimal::new(1, 28))
        );
        assert_eq!(
            "99999999999999999999999999999".parse::<Money>(),
            Err(MoneyParseError::Overflow)
        );
        assert_eq!(
            "79228162514264337593543950335".parse::<Money>(),
            Ok(Money::new(Decimal::MAX))
        );
        assert_eq!("1e40".parse::<Money>(), Err(MoneyParseError::Overflow));
        assert_eq!(
            "1e99999999999999999999".parse::<Money>(),
            Err(MoneyParseError::Overflow)
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_cents(1500));

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_cents(2000));
    }

    #[test]
    fn test_fractional_cents_multiply_exactly() {
        let total = money("2.999").multiply_quantity(3);
        assert_eq!(total, money("8.997"));
        assert_eq!(total.to_string(), "8.997");
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::new(Decimal::MAX);
        assert_eq!(big + Money::from_cents(1), big);
        assert_eq!(big.multiply_quantity(2), big);
        assert_eq!(big.multiply_quantity(-2), Money::new(Decimal::MIN));
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(!money("-0").is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::from_cents(-1).abs(), Money::from_cents(1));
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_serializes_as_display_string() {
        let total = money("1.0") + money("4.0");
        assert_eq!(serde_json::to_string(&total).unwrap(), r#""5.00""#);
        assert_eq!(serde_json::to_string(&money("2.999")).unwrap(), r#""2.999""#);

        let back: Money = serde_json::from_str(r#""2.999""#).unwrap();
        assert_eq!(back, money("2.999"));
        assert!(serde_json::from_str::<Money>(r#""cheap""#).is_err());
        assert!(serde_json::from_str::<Money>("2.5").is_err());
    }

    proptest! {
        #[test]
        fn displayed_money_parses_back(coefficient in -1_000_000_000_i64..1_000_000_000, scale in 0_u32..8) {
            let money = Money::new(Decimal::new(coefficient, scale));
            prop_assert_eq!(money.to_string().parse::<Money>(), Ok(money));
        }
    }
}
