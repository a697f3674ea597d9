use serde::{Deserialize, Serialize};

/// How a mean is rounded before it is shown or compared.
///
/// The practice drills display the mean to one decimal place while the
/// assessment flow keeps two. Both conventions are kept as-is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeanRounding {
    /// One decimal place (practice).
    #[default]
    OneDecimal,
    /// Two decimal places (assessment).
    TwoDecimals,
}

impl MeanRounding {
    /// Number of decimal places kept by this policy.
    #[must_use]
    pub const fn decimals(self) -> u8 {
        match self {
            Self::OneDecimal => 1,
            Self::TwoDecimals => 2,
        }
    }

    /// Rounds `mean` according to this policy.
    ///
    /// ```
    /// use statmaster_stats::rounding::MeanRounding;
    ///
    /// assert_eq!(MeanRounding::OneDecimal.apply(271.0 / 26.0), 10.4);
    /// assert_eq!(MeanRounding::TwoDecimals.apply(271.0 / 26.0), 10.42);
    /// ```
    #[must_use]
    pub fn apply(self, mean: f64) -> f64 {
        round_to(mean, self.decimals())
    }
}

/// Rounds `value` to `decimals` decimal places, halves away from zero.
///
/// ```
/// use statmaster_stats::rounding::round_to;
///
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert_eq!(round_to(1.0 / 3.0, 1), 0.3);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimals));
    let rounded = (value * factor).round() / factor;
    // avoid "-0" in formatted output
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Rounds `value` and formats it with exactly `decimals` digits after `separator`.
///
/// ```
/// use statmaster_stats::rounding::format_decimal;
///
/// assert_eq!(format_decimal(1.0 / 3.0, 2, ','), "0,33");
/// assert_eq!(format_decimal(0.5, 2, '.'), "0.50");
/// assert_eq!(format_decimal(12.5, 0, ','), "13");
/// ```
#[must_use]
pub fn format_decimal(value: f64, decimals: u8, separator: char) -> String {
    let text = format!("{:.*}", usize::from(decimals), round_to(value, decimals));
    if separator == '.' {
        text
    } else {
        text.replace('.', separator.encode_utf8(&mut [0; 4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_unit() {
        assert_eq!(round_to(12.4, 0), 12.0);
        assert_eq!(round_to(12.5, 0), 13.0);
        assert_eq!(round_to(0.4, 0), 0.0);
    }

    #[test]
    fn test_round_to_negative_zero() {
        assert_eq!(format_decimal(-0.001, 1, '.'), "0.0");
    }

    #[test]
    fn test_format_keeps_trailing_zeros() {
        assert_eq!(format_decimal(0.2, 2, ','), "0,20");
        assert_eq!(format_decimal(20.0, 1, ','), "20,0");
        assert_eq!(format_decimal(1.0, 0, ','), "1");
    }

    #[test]
    fn test_mean_rounding_policies() {
        let mean = 10.456;
        assert_eq!(MeanRounding::OneDecimal.apply(mean), 10.5);
        assert_eq!(MeanRounding::TwoDecimals.apply(mean), 10.46);
        assert_eq!(MeanRounding::default(), MeanRounding::OneDecimal);
    }
}
