use std::fmt;

use serde::Serialize;

/// A non-negative fraction in lowest terms.
///
/// Fractions are always reduced on construction: `gcd(numerator, denominator)`
/// is 1 and the denominator is never zero. Zero is represented as `0/1`.
///
/// # Example
///
/// ```
/// use statmaster_engine::Fraction;
///
/// let fraction = Fraction::new(6, 16).unwrap();
/// assert_eq!(fraction.numerator(), 3);
/// assert_eq!(fraction.denominator(), 8);
/// assert_eq!(fraction.to_string(), "3/8");
/// assert!(Fraction::new(1, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// Creates the reduced form of `numerator / denominator`.
    ///
    /// Returns `None` if `denominator` is zero.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        // gcd(0, d) == d, so 0/d reduces to 0/1
        let divisor = gcd(numerator, denominator);
        Some(Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        })
    }

    #[must_use]
    pub const fn numerator(self) -> u32 {
        self.numerator
    }

    #[must_use]
    pub const fn denominator(self) -> u32 {
        self.denominator
    }

    /// Returns the value of the fraction as a float.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Greatest common divisor (Euclid's algorithm).
///
/// `gcd(0, 0)` is 0.
#[must_use]
pub const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_reduction() {
        let fraction = Fraction::new(10, 25).unwrap();
        assert_eq!((fraction.numerator(), fraction.denominator()), (2, 5));

        let fraction = Fraction::new(7, 7).unwrap();
        assert_eq!((fraction.numerator(), fraction.denominator()), (1, 1));
    }

    #[test]
    fn test_zero_numerator() {
        let fraction = Fraction::new(0, 12).unwrap();
        assert_eq!(fraction.to_string(), "0/1");
        assert_eq!(fraction.to_f64(), 0.0);
    }

    #[test]
    fn test_reduced_for_all_small_fractions() {
        for denominator in 1..=30 {
            for numerator in 0..=denominator {
                let fraction = Fraction::new(numerator, denominator).unwrap();
                assert_eq!(gcd(fraction.numerator(), fraction.denominator()), 1);
                assert_eq!(denominator % fraction.denominator(), 0);
                let exact = f64::from(numerator) / f64::from(denominator);
                assert!((fraction.to_f64() - exact).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_serialize() {
        let fraction = Fraction::new(2, 4).unwrap();
        assert_eq!(
            serde_json::to_string(&fraction).unwrap(),
            r#"{"numerator":1,"denominator":2}"#
        );
    }
}
