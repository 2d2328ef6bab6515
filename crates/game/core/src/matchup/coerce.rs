//! Lenient integer coercion for user-entered text.
//!
//! Form fields accept whatever the user types. Text is read the way a
//! browser's `parseInt` reads it: leading whitespace and an optional sign,
//! then as many decimal digits as follow. Anything unparsable becomes 0.

/// Parse the leading integer of `text`, or 0 when there is none.
///
/// Values beyond the `i32` range saturate.
pub fn parse_lenient(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    const LIMIT: i64 = i32::MAX as i64 + 1;
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            (acc * 10 + i64::from(digit - b'0')).min(LIMIT)
        });

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse a comma-separated list, coercing every entry leniently.
///
/// An empty or all-whitespace string yields an empty list.
pub fn parse_lenient_list(text: &str) -> Vec<i32> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(parse_lenient).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_leading_integer() {
        assert_eq!(parse_lenient("12"), 12);
        assert_eq!(parse_lenient("  7 "), 7);
        assert_eq!(parse_lenient("12abc"), 12);
        assert_eq!(parse_lenient("12.9"), 12);
        assert_eq!(parse_lenient("-4"), -4);
        assert_eq!(parse_lenient("+3"), 3);
    }

    #[test]
    fn unparsable_text_is_zero() {
        assert_eq!(parse_lenient(""), 0);
        assert_eq!(parse_lenient("abc"), 0);
        assert_eq!(parse_lenient("-"), 0);
        assert_eq!(parse_lenient("--2"), 0);
    }

    #[test]
    fn saturates_out_of_range() {
        assert_eq!(parse_lenient("99999999999"), i32::MAX);
        assert_eq!(parse_lenient("-99999999999"), i32::MIN);
    }

    #[test]
    fn lists_split_on_commas() {
        assert_eq!(parse_lenient_list("0, 2,4"), vec![0, 2, 4]);
        assert_eq!(parse_lenient_list("1,,x"), vec![1, 0, 0]);
        assert!(parse_lenient_list("  ").is_empty());
    }
}
