//! Parsing of numeric input typed by learners.
//!
//! French learners write decimals with a comma (`12,5`), so commas are never
//! treated as list separators: values are separated by whitespace or `;`.

use crate::SampleError;

/// Parses a single number, accepting `,` or `.` as decimal separator.
///
/// Returns `None` for anything that is not a finite number.
///
/// ```
/// use statmaster_stats::sample::parse_number;
///
/// assert_eq!(parse_number("12,5"), Some(12.5));
/// assert_eq!(parse_number(" -3 "), Some(-3.0));
/// assert_eq!(parse_number("douze"), None);
/// assert_eq!(parse_number("NaN"), None);
/// ```
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let normalized = token.replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses a whitespace- or `;`-separated list of numbers.
///
/// # Errors
///
/// * [`SampleError::Empty`] - if `text` contains no value
/// * [`SampleError::InvalidToken`] - if a token is not a number
///
/// # Examples
///
/// ```
/// use statmaster_stats::{SampleError, sample::parse_sample};
///
/// assert_eq!(parse_sample("4 8;2 ; 6").unwrap(), vec![4.0, 8.0, 2.0, 6.0]);
/// assert_eq!(parse_sample("  "), Err(SampleError::Empty));
/// assert!(matches!(
///     parse_sample("4 huit 2"),
///     Err(SampleError::InvalidToken { index: 1, .. })
/// ));
/// ```
pub fn parse_sample(text: &str) -> Result<Vec<f64>, SampleError> {
    let values = text
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            parse_number(token).ok_or_else(|| SampleError::InvalidToken {
                index,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(SampleError::Empty);
    }
    Ok(values)
}

/// Parses every item of `tokens` as a number.
///
/// Used for sample values passed as separate command-line arguments, where
/// each argument may itself contain several values.
///
/// # Errors
///
/// Same as [`parse_sample`].
pub fn parse_tokens<I, S>(tokens: I) -> Result<Vec<f64>, SampleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = tokens
        .into_iter()
        .map(|token| token.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(" ");
    parse_sample(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_is_a_decimal_separator() {
        assert_eq!(parse_sample("10,2 3,5").unwrap(), vec![10.2, 3.5]);
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(
            parse_sample("1;2\t3\n4 ;; 5").unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_invalid_token_reports_position() {
        let err = parse_sample("1 2 x3").unwrap_err();
        assert_eq!(
            err,
            SampleError::InvalidToken {
                index: 2,
                token: "x3".to_owned()
            }
        );
        assert_eq!(err.to_string(), "value #3 is not a number: \"x3\"");
    }

    #[test]
    fn test_infinity_is_rejected() {
        assert!(matches!(
            parse_sample("1 inf"),
            Err(SampleError::InvalidToken { index: 1, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_sample(""), Err(SampleError::Empty));
        assert_eq!(parse_sample(" ; ;"), Err(SampleError::Empty));
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            parse_tokens(["4", "8 2", "6,5"]).unwrap(),
            vec![4.0, 8.0, 2.0, 6.5]
        );
        assert_eq!(parse_tokens(Vec::<String>::new()), Err(SampleError::Empty));
    }
}
