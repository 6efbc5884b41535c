//! Eighths - The eighth-inch fraction grid used for dimension entry.

use crate::config::EIGHTHS_PER_INCH;
use crate::error::MeasureError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight canonical fractions 0/8 through 7/8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Eighths(u8);

impl Eighths {
    /// Zero fraction.
    pub const ZERO: Eighths = Eighths(0);

    /// All eight grid values in ascending order.
    pub const ALL: [Eighths; 8] = [
        Eighths(0),
        Eighths(1),
        Eighths(2),
        Eighths(3),
        Eighths(4),
        Eighths(5),
        Eighths(6),
        Eighths(7),
    ];

    /// Create from a count of eighths (0-7).
    pub fn new(count: u8) -> Option<Self> {
        (count < EIGHTHS_PER_INCH).then_some(Eighths(count))
    }

    /// Create from an exact decimal grid value (0.0, 0.125, ... 0.875).
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.value() == value)
    }

    /// Number of eighths.
    pub fn count(self) -> u8 {
        self.0
    }

    /// Decimal inch value.
    pub fn value(self) -> f64 {
        f64::from(self.0) / f64::from(EIGHTHS_PER_INCH)
    }

    /// Check if this is the zero fraction.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Display label in lowest terms ("0", "1/8", "1/4", ...).
    pub fn label(self) -> String {
        if self.0 == 0 {
            return "0".to_string();
        }
        let (num, den) = reduce(u32::from(self.0), u32::from(EIGHTHS_PER_INCH));
        format!("{}/{}", num, den)
    }
}

/// Reduce a fraction to lowest terms.
pub(crate) fn reduce(numerator: u32, denominator: u32) -> (u32, u32) {
    let divisor = gcd(numerator, denominator);
    (numerator / divisor, denominator / divisor)
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl TryFrom<f64> for Eighths {
    type Error = MeasureError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Eighths::from_value(value).ok_or(MeasureError::InvalidFraction { value })
    }
}

impl From<Eighths> for f64 {
    fn from(e: Eighths) -> Self {
        e.value()
    }
}

impl fmt::Display for Eighths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Eighths::new(0), Some(Eighths::ZERO));
        assert_eq!(Eighths::new(7).map(Eighths::count), Some(7));
        assert_eq!(Eighths::new(8), None);
    }

    #[test]
    fn test_from_value_exact_only() {
        assert_eq!(Eighths::from_value(0.5).map(Eighths::count), Some(4));
        assert_eq!(Eighths::from_value(0.875).map(Eighths::count), Some(7));
        assert_eq!(Eighths::from_value(0.3), None);
        assert_eq!(Eighths::from_value(1.0), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Eighths::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["0", "1/8", "1/4", "3/8", "1/2", "5/8", "3/4", "7/8"]
        );
    }

    #[test]
    fn test_serde_as_decimal() {
        let e = Eighths::new(6).unwrap();
        assert_eq!(serde_json::to_string(&e).unwrap(), "0.75");
        let back: Eighths = serde_json::from_str("0.75").unwrap();
        assert_eq!(back, e);
        assert!(serde_json::from_str::<Eighths>("0.7").is_err());
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(4, 8), (1, 2));
        assert_eq!(reduce(6, 8), (3, 4));
        assert_eq!(reduce(5, 8), (5, 8));
    }
}
