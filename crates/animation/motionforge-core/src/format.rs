//! Deterministic number/unit formatting shared by the binder, the stylesheet and both
//! code generators. Values are rounded to 4 decimals so float noise never leaks into
//! output, and `-0` is folded into `0`.

/// Above this magnitude an f64 has no fractional digits left to round.
const ROUNDING_LIMIT: f64 = 1e15;

pub(crate) fn number(value: f64) -> String {
    let rounded = if value.abs() < ROUNDING_LIMIT {
        (value * 10_000.0).round() / 10_000.0
    } else {
        value
    };
    if rounded == 0.0 || !rounded.is_finite() {
        return "0".to_string();
    }
    format!("{rounded}")
}

pub(crate) fn seconds(value: f64) -> String {
    format!("{}s", number(value))
}

pub(crate) fn degrees(value: f64) -> String {
    format!("{}deg", number(value))
}

pub(crate) fn pixels(value: f64) -> String {
    format!("{}px", number(value))
}

/// Length for transforms: a zero offset is written unitless (`translateX(0)`).
pub(crate) fn length(value: f64) -> String {
    let n = number(value);
    if n == "0" {
        n
    } else {
        format!("{n}px")
    }
}

pub(crate) fn percent(offset: f64) -> String {
    format!("{}%", number(offset * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_float_noise_and_negative_zero() {
        assert_eq!(number(0.1 + 0.2), "0.3");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(1.0), "1");
        assert_eq!(number(0.6), "0.6");
        assert_eq!(number(-50.0), "-50");
    }

    #[test]
    fn huge_values_keep_their_magnitude() {
        let text = number(1e305);
        assert_eq!(text.len(), 306);
        assert!(text.starts_with('1'));
        assert_eq!(length(-1e305), format!("-{text}px"));
    }

    #[test]
    fn units() {
        assert_eq!(seconds(0.6), "0.6s");
        assert_eq!(degrees(0.0), "0deg");
        assert_eq!(pixels(40.0), "40px");
        assert_eq!(length(0.0), "0");
        assert_eq!(length(-20.0), "-20px");
        assert_eq!(percent(0.2), "20%");
        assert_eq!(percent(1.0), "100%");
    }
}
