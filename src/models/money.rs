//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

// Currency symbols accepted (and ignored) in front of an amount
const KNOWN_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount, in whole units, that [`Money::parse`] accepts
    pub const MAX_UNITS: i64 = 1_000_000_000_000;

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use money_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "₹10.50", "10", "10.5", "10." and exponent
    /// forms such as "1.0E7". Extra decimal places are rounded to the nearest
    /// cent, halves away from zero. Amounts above [`Money::MAX_UNITS`] are
    /// out of range.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.trim_start_matches(&KNOWN_SYMBOLS[..]);

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };
        let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let exponent: i64 = match exponent {
            None => 0,
            Some(exp) => {
                let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                exp.parse().map_err(|_| out_of_range())?
            }
        };

        let digits = format!("{}{}", whole, frac);
        let digits = digits.trim_start_matches('0');
        // value = digits * 10^(exponent - frac.len()); cents shift by two more
        let shift = exponent
            .checked_sub(frac.len() as i64)
            .and_then(|e| e.checked_add(2))
            .ok_or_else(out_of_range)?;

        let cents = if digits.is_empty() {
            0
        } else if shift >= 0 {
            let scale = u32::try_from(shift)
                .ok()
                .and_then(|shift| 10u128.checked_pow(shift))
                .ok_or_else(out_of_range)?;
            parse_digits(digits)
                .ok_or_else(out_of_range)?
                .checked_mul(scale)
                .ok_or_else(out_of_range)?
        } else {
            let dropped = usize::try_from(shift.unsigned_abs()).map_err(|_| out_of_range())?;
            if dropped > digits.len() {
                0
            } else {
                let (kept, rest) = digits.split_at(digits.len() - dropped);
                let kept = if kept.is_empty() {
                    0
                } else {
                    parse_digits(kept).ok_or_else(out_of_range)?
                };
                if rest.starts_with(['5', '6', '7', '8', '9']) {
                    kept.saturating_add(1)
                } else {
                    kept
                }
            }
        };

        if cents > (Self::MAX_UNITS as u128) * 100 {
            return Err(out_of_range());
        }
        let cents = cents as i64;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, e.g. "₹10.50" or "-₹10.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

// Digit strings longer than u128 can hold come back as None
fn parse_digits(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
    })
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal form with two places and no symbol; this is the stored form.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

// Arithmetic saturates at the i64 bounds instead of wrapping.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount '{}' is out of range", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(74950).format_with_symbol("₹"), "₹749.50");
        assert_eq!(Money::from_cents(-5).format_with_symbol("$"), "-$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₹10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1000.0").unwrap().cents(), 100000);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse(" 0.05 ").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("abc"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e").is_err());
        assert!(Money::parse("e5").is_err());
        assert!(Money::parse("1e+").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("Infinity").is_err());
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse("1.0E7").unwrap().cents(), 1_000_000_000);
        assert_eq!(Money::parse("1.2345E7").unwrap().cents(), 1_234_500_000);
        assert_eq!(Money::parse("1e3").unwrap().cents(), 100_000);
        assert_eq!(Money::parse("5E-2").unwrap().cents(), 5);
        assert_eq!(Money::parse("2.5e+1").unwrap().cents(), 2500);
        assert_eq!(Money::parse("0e99999").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_rounds_to_cents() {
        assert_eq!(Money::parse("10.505").unwrap().cents(), 1051);
        assert_eq!(Money::parse("1.234").unwrap().cents(), 123);
        assert_eq!(Money::parse("0.004").unwrap().cents(), 0);
        assert_eq!(Money::parse("0.995").unwrap().cents(), 100);
        assert_eq!(Money::parse("-10.505").unwrap().cents(), -1051);
        assert_eq!(Money::parse("1e-9").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            Money::parse("999999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("1000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("1e400"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert_eq!(Money::parse("1000000000000").unwrap().units(), Money::MAX_UNITS);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        let min = Money::from_cents(i64::MIN);
        assert_eq!(min - Money::from_cents(1), min);

        let mut total = max;
        total += max;
        assert_eq!(total, max);
        assert_eq!(vec![max, max, max].into_iter().sum::<Money>(), max);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }
}
