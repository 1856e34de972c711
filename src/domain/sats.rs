use thousands::Separable;

pub const SATS_PER_BTC: u64 = 100_000_000;

/// Human readable sats amount, e.g. `2.50M sats`.
pub fn format_sats(sats: u64) -> String {
    if sats >= 1_000_000 {
        format!("{}M sats", fixed_point(sats, 6, 2))
    } else if sats >= 1_000 {
        format!("{}k sats", fixed_point(sats, 3, 1))
    } else {
        format!("{sats} sats")
    }
}

/// [`format_sats`] for raw text. Anything that is not a whole, non-negative
/// number is treated as zero.
pub fn format_sats_str(raw: &str) -> String {
    raw.trim()
        .parse::<u64>()
        .map(format_sats)
        .unwrap_or_else(|_| format_sats(0))
}

/// BTC equivalent of `sats` with precision chosen by magnitude.
pub fn sats_to_btc(sats: u64) -> String {
    let decimals = match sats {
        10_000_000.. => 3,
        1_000_000.. => 4,
        100_000.. => 5,
        _ => 6,
    };
    fixed_point(sats, 8, decimals)
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(sats: u64) -> String {
    sats.separate_with_commas()
}

/// Render `value / 10^exponent` with `decimals` fraction digits.
///
/// The quotient is computed as an `f64` and rounded like JavaScript's
/// `toFixed`: to the decimal nearest the binary value, upwards only on an
/// exact binary tie.
fn fixed_point(value: u64, exponent: i32, decimals: u32) -> String {
    to_fixed(value as f64 / 10f64.powi(exponent), decimals)
}

/// `toFixed` for finite, non-negative `x`.
fn to_fixed(x: f64, decimals: u32) -> String {
    let unit = 10u128.pow(decimals);
    let (mantissa, exponent) = decompose(x);
    let scaled = u128::from(mantissa) * unit;

    let rounded = if exponent >= 0 {
        scaled << exponent
    } else {
        let shift = exponent.unsigned_abs();
        if shift >= u128::BITS {
            0
        } else {
            let half = 1u128 << (shift - 1);
            let remainder = scaled & ((1u128 << shift) - 1);
            (scaled >> shift) + u128::from(remainder >= half)
        }
    };

    format!(
        "{}.{:0width$}",
        rounded / unit,
        rounded % unit,
        width = decimals as usize
    )
}

/// Split `x` into `mantissa * 2^exponent` exactly.
fn decompose(x: f64) -> (u64, i32) {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::millions(2_500_000, "2.50M sats")]
    #[case::exact_million(1_000_000, "1.00M sats")]
    #[case::default_max(16_777_216, "16.78M sats")]
    #[case::million_half_up(1_125_000, "1.13M sats")]
    #[case::thousands(2_500, "2.5k sats")]
    #[case::floor(150_000, "150.0k sats")]
    #[case::thousand_rounding(999_950, "1000.0k sats")]
    #[case::exact_thousand(1_000, "1.0k sats")]
    #[case::binary_below_half(1_150, "1.1k sats")]
    #[case::million_binary_below_half(1_005_000, "1.00M sats")]
    #[case::units(250, "250 sats")]
    #[case::zero(0, "0 sats")]
    fn test_format_sats(#[case] sats: u64, #[case] expected: &str) {
        assert_eq!(format_sats(sats), expected);
    }

    #[rstest]
    #[case::numeric("2500000", "2.50M sats")]
    #[case::padded(" 2500 ", "2.5k sats")]
    #[case::non_numeric("abc", "0 sats")]
    #[case::empty("", "0 sats")]
    #[case::negative("-5", "0 sats")]
    fn test_format_sats_str(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_sats_str(raw), expected);
    }

    #[rstest]
    #[case::three_decimals(12_000_000, "0.120")]
    #[case::four_decimals(1_500_000, "0.0150")]
    #[case::five_decimals(150_000, "0.00150")]
    #[case::six_decimals(50_000, "0.000500")]
    #[case::whole_btc(150_000_000, "1.500")]
    #[case::default_value(1_000_000, "0.0100")]
    #[case::rounding(16_777_216, "0.168")]
    #[case::binary_below_half(12_350_000, "0.123")]
    #[case::binary_above_half(16_750_000, "0.168")]
    #[case::zero(0, "0.000000")]
    fn test_sats_to_btc(#[case] sats: u64, #[case] expected: &str) {
        assert_eq!(sats_to_btc(sats), expected);
    }

    #[rstest]
    #[case::exact_tie_rounds_up(1.125, 2, "1.13")]
    #[case::below_tie(1.005, 2, "1.00")]
    #[case::above_tie(0.1675, 3, "0.168")]
    #[case::whole(16.0, 2, "16.00")]
    #[case::tiny(1e-300, 6, "0.000000")]
    #[case::large(18_446_744_073_709.55, 2, "18446744073709.55")]
    fn test_to_fixed(#[case] x: f64, #[case] decimals: u32, #[case] expected: &str) {
        assert_eq!(to_fixed(x, decimals), expected);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(150_000), "150,000");
        assert_eq!(group_thousands(999), "999");
    }
}
