/// Parse the digits of `text`, ignoring every other character.
///
/// Returns `None` when `text` contains no ASCII digit. Digit runs too large
/// for `u64` saturate.
pub fn parse_digits(text: &str) -> Option<u64> {
    let mut digits = text.chars().filter(char::is_ascii_digit).peekable();
    digits.peek()?;

    Some(digits.fold(0u64, |acc, c| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(c as u8 - b'0'))
    }))
}

/// Parse the integer at the start of `text`.
///
/// Leading and trailing whitespace is skipped and an optional sign is
/// accepted. Parsing stops at the first non-digit, so `"300000sats"` yields
/// `300000`. Returns `None` when no digit follows the sign.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::plain("1234567", Some(1_234_567))]
    #[case::grouped("1,234,567", Some(1_234_567))]
    #[case::trailing_garbage("1,234,567abc", Some(1_234_567))]
    #[case::interleaved("a1b2c3", Some(123))]
    #[case::leading_zeros("000150000", Some(150_000))]
    #[case::no_digits("abc", None)]
    #[case::empty("", None)]
    #[case::sign_is_stripped("-42", Some(42))]
    #[case::non_ascii_digits("１２３", None)]
    #[case::overflow("99999999999999999999999", Some(u64::MAX))]
    fn test_parse_digits(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_digits(text), expected);
    }

    #[rstest]
    #[case::plain("300000", Some(300_000))]
    #[case::whitespace(" \t300000\n", Some(300_000))]
    #[case::plus("+300000", Some(300_000))]
    #[case::minus("-300000", Some(-300_000))]
    #[case::stops_at_non_digit("300000sats", Some(300_000))]
    #[case::stops_at_dot("1.5", Some(1))]
    #[case::grouping_stops("1,000,000", Some(1))]
    #[case::no_digits("sats", None)]
    #[case::sign_only("-", None)]
    #[case::empty("", None)]
    #[case::overflow("99999999999999999999999", Some(i64::MAX))]
    fn test_parse_leading_integer(#[case] text: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_leading_integer(text), expected);
    }
}
