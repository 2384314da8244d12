//! Fixed-point monetary amounts.
//!
//! Amounts are stored in minor units (e.g. cents) as a signed integer, so
//! summing a large catalog never drifts the way naive floating point does.
//! Negative amounts are representable on purpose: upstream data can be bad,
//! and aggregations must carry the raw value while reporting the problem.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A monetary amount in minor units (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount from minor units (e.g. `from_cents(1299)` is 12.99).
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Saturating addition; the sum of a catalog never wraps.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiply a unit amount by a quantity, saturating at the i64 bounds.
    pub fn times(self, quantity: i64) -> Money {
        let wide = (self.0 as i128) * (quantity as i128);
        Money(wide.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

impl core::fmt::Display for Money {
    /// Fixed two-decimal rendering: `12.99`, `-0.50`. No scientific notation,
    /// no locale separators.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let cents = self.0 as i128;
        let (sign, abs) = if cents < 0 { ("-", -cents) } else { ("", cents) };
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse a plain decimal string with at most two fraction digits
    /// (`"12"`, `"12.5"`, `"12.99"`, `"-0.50"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, s),
        };

        let (whole, frac) = match rest.split_once('.') {
            Some((w, f)) => (w, f),
            None => (rest, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("malformed amount: {s:?}")));
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "amount must have at most two fraction digits: {s:?}"
            )));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("amount out of range: {s:?}")))?;

        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .and_then(|c| c.checked_mul(sign))
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("amount out of range: {s:?}")))
    }
}
