//! Free-text dimension parsing ("35 5/8", "24.5\"", "3/4").

use crate::error::{MeasureError, Result};

/// Parse a dimension written as text into decimal inches.
///
/// Accepts a whole or decimal number, a whole number followed by a fraction
/// separated by a space or hyphen, or a bare fraction. A trailing inch mark
/// or `in` is ignored.
pub fn parse_dimension(text: &str) -> Result<f64> {
    let invalid = || MeasureError::InvalidDimension {
        value: text.to_string(),
    };

    let cleaned = text.trim().trim_end_matches('"').trim();
    let cleaned = cleaned.strip_suffix("in").unwrap_or(cleaned).trim();
    if cleaned.is_empty() {
        return Err(invalid());
    }

    let (whole, fraction) = match cleaned.split_once([' ', '-']) {
        Some((whole, fraction)) => (Some(whole.trim()), Some(fraction.trim())),
        None if cleaned.contains('/') => (None, Some(cleaned)),
        None => (Some(cleaned), None),
    };

    let whole = match whole {
        Some(w) => w.parse::<f64>().map_err(|_| invalid())?,
        None => 0.0,
    };

    let fraction = match fraction {
        Some(f) => {
            let (num, den) = f.split_once('/').ok_or_else(invalid)?;
            let num: u32 = num.trim().parse().map_err(|_| invalid())?;
            let den: u32 = den.trim().parse().map_err(|_| invalid())?;
            if den == 0 {
                return Err(invalid());
            }
            f64::from(num) / f64::from(den)
        }
        None => 0.0,
    };

    let value = whole + fraction;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_decimal() {
        assert_eq!(parse_dimension("36").unwrap(), 36.0);
        assert_eq!(parse_dimension(" 24.5 ").unwrap(), 24.5);
        assert_eq!(parse_dimension("40\"").unwrap(), 40.0);
        assert_eq!(parse_dimension("18in").unwrap(), 18.0);
    }

    #[test]
    fn test_parse_mixed_fraction() {
        assert_eq!(parse_dimension("35 5/8").unwrap(), 35.625);
        assert_eq!(parse_dimension("12 1/2\"").unwrap(), 12.5);
        assert_eq!(parse_dimension("52-1/8").unwrap(), 52.125);
        assert_eq!(parse_dimension("10 3/16").unwrap(), 10.1875);
    }

    #[test]
    fn test_parse_bare_fraction() {
        assert_eq!(parse_dimension("3/4").unwrap(), 0.75);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_dimension("").is_err());
        assert!(parse_dimension("abc").is_err());
        assert!(parse_dimension("12 1/0").is_err());
        assert!(parse_dimension("12 x").is_err());
        assert!(parse_dimension("-5").is_err());
    }

    #[test]
    fn test_parse_error_code() {
        let err = parse_dimension("wide").unwrap_err();
        assert_eq!(err.to_string(), "Invalid dimension: 'wide'");
    }
}
