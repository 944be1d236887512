use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;

/// Non-negative amount of money, kept in cents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units (saturating).
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Short form used on product lines: `20.0`, `15.5`, `19.99`.
    pub fn compact(self) -> String {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac % 10 == 0 {
            format!("{}.{}", whole, frac / 10)
        } else {
            format!("{}.{:02}", whole, frac)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceParseError {
    #[error("Price is empty")]
    Empty,

    #[error("Price must be non-negative: {0}")]
    Negative(String),

    #[error("Price is not a number: {0}")]
    Invalid(String),

    #[error("Price has more than two decimal places: {0}")]
    TooPrecise(String),

    #[error("Price is too large: {0}")]
    Overflow(String),
}

impl FromStr for Money {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(PriceParseError::Empty);
        }
        if text.starts_with('-') {
            return Err(PriceParseError::Negative(text.to_string()));
        }

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) || (text.contains('.') && frac.is_empty()) {
            return Err(PriceParseError::Invalid(text.to_string()));
        }
        if frac.len() > 2 {
            return Err(PriceParseError::TooPrecise(text.to_string()));
        }

        let whole_cents = whole
            .parse::<u64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .ok_or_else(|| PriceParseError::Overflow(text.to_string()))?;

        let frac_cents = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => frac.parse::<u64>().map_err(|_| PriceParseError::Invalid(text.to_string()))?,
        };

        whole_cents
            .checked_add(frac_cents)
            .map(Money)
            .ok_or_else(|| PriceParseError::Overflow(text.to_string()))
    }
}
