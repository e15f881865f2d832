//! Monetary amounts.

use serde::{Deserialize, Serialize};

/// Amount in the smallest currency unit (e.g. cents).
///
/// Stored as an unsigned integer so totals stay exact. All arithmetic is
/// checked; an overflow surfaces as a domain invariant failure at the call
/// site rather than wrapping silently.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add two amounts, `None` on overflow.
    pub fn checked_add(self, other: Cents) -> Option<Cents> {
        self.0.checked_add(other.0).map(Cents)
    }

    /// Multiply a unit amount by a quantity, `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Cents> {
        self.0.checked_mul(u64::from(quantity)).map(Cents)
    }
}

impl From<u64> for Cents {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl core::fmt::Display for Cents {
    /// Render as major units with a two-digit fraction, e.g. `9.97`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_major_and_fractional_units() {
        assert_eq!(Cents::new(997).to_string(), "9.97");
        assert_eq!(Cents::new(10010).to_string(), "100.10");
        assert_eq!(Cents::new(5).to_string(), "0.05");
        assert_eq!(Cents::ZERO.to_string(), "0.00");
    }

    #[test]
    fn checked_mul_detects_overflow() {
        assert_eq!(Cents::new(350).checked_mul(4), Some(Cents::new(1400)));
        assert_eq!(Cents::new(u64::MAX).checked_mul(2), None);
    }

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(
            Cents::new(100).checked_add(Cents::new(20)),
            Some(Cents::new(120))
        );
        assert_eq!(Cents::new(u64::MAX).checked_add(Cents::new(1)), None);
    }
}
