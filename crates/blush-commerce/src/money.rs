//! Money in minor units (paise).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// An INR amount stored as paise to avoid floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    minor: i64,
}

impl Money {
    /// Zero rupees.
    pub const ZERO: Money = Money { minor: 0 };

    /// Create from paise.
    pub const fn from_minor(minor: i64) -> Self {
        Self { minor }
    }

    /// Create from whole rupees.
    pub const fn rupees(rupees: i64) -> Self {
        Self { minor: rupees * 100 }
    }

    /// Amount in paise.
    pub fn minor(&self) -> i64 {
        self.minor
    }

    /// Format for display, e.g. `₹1,299.00`.
    pub fn display(&self) -> String {
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        let whole = (abs / 100).to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{}\u{20b9}{}.{:02}", sign, grouped, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_minor(self.minor.saturating_add(rhs.minor))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money::from_minor(self.minor.saturating_mul(i64::from(rhs)))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(129_900).display(), "\u{20b9}1,299.00");
        assert_eq!(Money::from_minor(5).display(), "\u{20b9}0.05");
        assert_eq!(Money::rupees(1_234_567).display(), "\u{20b9}1,234,567.00");
        assert_eq!(Money::from_minor(-250).display(), "-\u{20b9}2.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let total: Money = vec![Money::rupees(10), Money::rupees(5) * 3].into_iter().sum();
        assert_eq!(total, Money::rupees(25));
    }
}
