//! Fixed-point monetary amounts.
//!
//! Receipt totals and prices arrive as `"<dollars>.<cents>"` strings. They are
//! held as whole cents so the round-dollar and quarter checks never go through
//! binary floating point.

use std::fmt;

/// Non-negative amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn dollars(self) -> u64 {
        self.0 / 100
    }

    /// Cents component, `0..=99`.
    #[inline]
    pub const fn minor(self) -> u64 {
        self.0 % 100
    }

    pub const fn is_round_dollar(self) -> bool {
        self.minor() == 0
    }

    /// Whether the amount divides evenly into steps of `step_cents`.
    pub const fn is_multiple_of(self, step_cents: u64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }

    /// `ceil(amount * percent / 100)` expressed in whole dollars.
    ///
    /// With `percent = 20`, `$12.25` yields `3` (2.45 rounded up).
    pub fn percent_ceil_dollars(self, percent: u64) -> u64 {
        let scaled = u128::from(self.0) * u128::from(percent);
        let whole = scaled.div_ceil(100 * 100);
        u64::try_from(whole).unwrap_or(u64::MAX)
    }

    /// Parse a string of the exact form `[0-9]+\.[0-9]{2}` (ASCII digits only).
    pub fn parse(raw: &str) -> Result<Self, MoneyError> {
        let (major, minor) = raw
            .split_once('.')
            .ok_or_else(|| MoneyError::Malformed(raw.to_string()))?;

        let well_formed = !major.is_empty()
            && minor.len() == 2
            && major.bytes().all(|b| b.is_ascii_digit())
            && minor.bytes().all(|b| b.is_ascii_digit());
        if !well_formed {
            return Err(MoneyError::Malformed(raw.to_string()));
        }

        let dollars: u64 = major
            .parse()
            .map_err(|_| MoneyError::OutOfRange(raw.to_string()))?;
        let cents: u64 = minor
            .parse()
            .map_err(|_| MoneyError::Malformed(raw.to_string()))?;

        dollars
            .checked_mul(100)
            .and_then(|value| value.checked_add(cents))
            .map(Money)
            .ok_or_else(|| MoneyError::OutOfRange(raw.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.minor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("'{0}' is not a dollar amount with exactly two decimal places")]
    Malformed(String),
    #[error("'{0}' exceeds the supported amount range")]
    OutOfRange(String),
}
