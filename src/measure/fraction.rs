//! Conversion between decimal inches and whole/eighth entry pairs.

use crate::model::Eighths;

/// Split a decimal value into whole inches and the nearest eighth.
///
/// The remainder snaps to the closest grid fraction; an exact midpoint
/// (an odd sixteenth) goes to the smaller candidate. Remainders above 15/16
/// stay at 7/8 rather than carrying into the whole part. Negative or
/// non-finite values split to `(0, 0)`. Whole parts beyond `u64::MAX`
/// saturate; every value an f64 can carry a fraction on fits.
pub fn split(value: f64) -> (u64, Eighths) {
    if !value.is_finite() || value <= 0.0 {
        return (0, Eighths::ZERO);
    }

    let whole = value.floor();
    let remainder = value - whole;

    let frac = Eighths::ALL
        .into_iter()
        .fold(Eighths::ZERO, |best, candidate| {
            if (candidate.value() - remainder).abs() < (best.value() - remainder).abs() {
                candidate
            } else {
                best
            }
        });

    (whole as u64, frac)
}

/// Combine whole-inch text and a fraction into decimal inches.
///
/// Text that is not a run of digits counts as zero. Zero whole with a zero
/// fraction means the field was left blank and yields `None`.
pub fn combine(whole: &str, frac: Eighths) -> Option<f64> {
    let whole = whole.trim();
    let whole = if !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit()) {
        whole.parse::<f64>().unwrap_or(0.0)
    } else {
        0.0
    };
    if whole == 0.0 && frac.is_zero() {
        return None;
    }
    Some(whole + frac.value())
}

/// Keep only ASCII digits from typed whole-inch text.
pub fn sanitize_whole(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eighths(n: u8) -> Eighths {
        Eighths::new(n).unwrap()
    }

    // ==================== split tests ====================

    #[test]
    fn test_split_on_grid() {
        assert_eq!(split(35.625), (35, eighths(5)));
        assert_eq!(split(24.5), (24, eighths(4)));
        assert_eq!(split(52.0), (52, Eighths::ZERO));
    }

    #[test]
    fn test_split_snaps_to_nearest() {
        assert_eq!(split(35.7), (35, eighths(6)));
        assert_eq!(split(10.04), (10, Eighths::ZERO));
        assert_eq!(split(10.2), (10, eighths(2)));
    }

    #[test]
    fn test_split_midpoint_goes_down() {
        // 1/16 is equidistant from 0 and 1/8
        assert_eq!(split(10.0625), (10, Eighths::ZERO));
        // 3/16 is equidistant from 1/8 and 1/4
        assert_eq!(split(10.1875), (10, eighths(1)));
        assert_eq!(split(10.9375), (10, eighths(7)));
    }

    #[test]
    fn test_split_does_not_carry() {
        assert_eq!(split(35.99), (35, eighths(7)));
    }

    #[test]
    fn test_split_large_whole_part() {
        assert_eq!(split(5e9 + 0.5), (5_000_000_000, eighths(4)));
    }

    #[test]
    fn test_split_degenerate_inputs() {
        assert_eq!(split(0.0), (0, Eighths::ZERO));
        assert_eq!(split(-3.5), (0, Eighths::ZERO));
        assert_eq!(split(f64::NAN), (0, Eighths::ZERO));
        assert_eq!(split(f64::INFINITY), (0, Eighths::ZERO));
    }

    // ==================== combine tests ====================

    #[test]
    fn test_combine_values() {
        assert_eq!(combine("36", Eighths::ZERO), Some(36.0));
        assert_eq!(combine("24", eighths(4)), Some(24.5));
        assert_eq!(combine("", eighths(6)), Some(0.75));
        assert_eq!(combine(" 12 ", eighths(1)), Some(12.125));
    }

    #[test]
    fn test_combine_blank_is_none() {
        assert_eq!(combine("", Eighths::ZERO), None);
        assert_eq!(combine("0", Eighths::ZERO), None);
        assert_eq!(combine("000", Eighths::ZERO), None);
    }

    #[test]
    fn test_combine_large_whole_part() {
        assert_eq!(combine("5000000000", Eighths::ZERO), Some(5e9));
        assert_eq!(combine("5000000000", eighths(4)), Some(5e9 + 0.5));
        assert!(combine("99999999999999999999999", Eighths::ZERO).is_some_and(|v| v > 1e22));
    }

    #[test]
    fn test_combine_non_numeric_is_zero() {
        assert_eq!(combine("abc", Eighths::ZERO), None);
        assert_eq!(combine("abc", eighths(4)), Some(0.5));
        assert_eq!(combine("-5", eighths(4)), Some(0.5));
    }

    #[test]
    fn test_split_combine_round_trip() {
        for whole in [1u64, 7, 35, 120] {
            for frac in Eighths::ALL {
                let value = whole as f64 + frac.value();
                let (w, f) = split(value);
                assert_eq!(combine(&w.to_string(), f), Some(value));
            }
        }
    }

    #[test]
    fn test_sanitize_whole() {
        assert_eq!(sanitize_whole("3a5\""), "35");
        assert_eq!(sanitize_whole(""), "");
        assert_eq!(sanitize_whole("-12.5"), "125");
    }
}
