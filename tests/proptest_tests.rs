//! Property-based tests for the ziffern crate.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use rust_decimal::Decimal;
use ziffern::*;

/// Decimals with up to 6 fractional digits.
fn decimals() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0..=6u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Characters plausible as locale separators.
fn separator_chars() -> impl Strategy<Value = char> {
    prop_oneof![Just('.'), Just(','), Just(' '), Just('\''), Just('_')]
}

proptest! {
    #[test]
    fn distinct_separators_never_fail_equal_always_do(
        value in decimals(),
        d in separator_chars(),
        g in separator_chars(),
    ) {
        let formatted = DecimalFormatter::new(2, DisplayPolicy::AlwaysShowDecimals)
            .decimal_separator(d)
            .grouping_separator(g)
            .format(value);
        let parsed = DecimalParser::new()
            .decimal_separator(d)
            .grouping_separator(g)
            .parse("1");
        if d == g {
            prop_assert_eq!(formatted.unwrap_err(), ZiffernError::InvalidSeparators(d));
            prop_assert_eq!(parsed.unwrap_err(), ZiffernError::InvalidSeparators(d));
        } else {
            prop_assert!(formatted.is_ok());
            prop_assert!(parsed.is_ok());
        }
    }

    #[test]
    fn always_show_has_exact_scale(value in decimals(), scale in 0..=8u32) {
        let s = to_display_string(value, scale, DisplayPolicy::AlwaysShowDecimals).unwrap();
        match s.split_once('.') {
            Some((_, frac)) => prop_assert_eq!(frac.len() as u32, scale),
            None => prop_assert_eq!(scale, 0),
        }
    }

    #[test]
    fn round_trip_at_sufficient_scale(mantissa in any::<i64>(), scale in 0..=6u32) {
        let value = Decimal::new(mantissa, scale);
        let s = to_display_string(value, 6, DisplayPolicy::AlwaysShowDecimals).unwrap();
        prop_assert_eq!(to_decimal(&s).unwrap(), value);
    }

    #[test]
    fn german_round_trip_at_sufficient_scale(mantissa in any::<i64>(), scale in 0..=4u32) {
        let value = Decimal::new(mantissa, scale);
        let s = DecimalFormatter::new(4, DisplayPolicy::AlwaysShowDecimals)
            .separators(Separators::german())
            .format(value)
            .unwrap();
        let parsed = DecimalParser::new()
            .separators(Separators::german())
            .parse(&s)
            .unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn hybrid_boundaries_match_simple_policies(value in decimals(), total in 0..=6u32) {
        let full = to_display_string(value, total, DisplayPolicy::Hybrid { always_shown: total }).unwrap();
        let always = to_display_string(value, total, DisplayPolicy::AlwaysShowDecimals).unwrap();
        prop_assert_eq!(full, always);

        let empty = to_display_string(value, total, DisplayPolicy::Hybrid { always_shown: 0 }).unwrap();
        let if_present = to_display_string(value, total, DisplayPolicy::ShowDecimalsIfPresent).unwrap();
        prop_assert_eq!(empty, if_present);
    }

    #[test]
    fn show_if_present_never_ends_in_padding(value in decimals(), total in 0..=6u32) {
        let s = to_display_string(value, total, DisplayPolicy::ShowDecimalsIfPresent).unwrap();
        if s.contains('.') {
            prop_assert!(!s.ends_with('0'));
            prop_assert!(!s.ends_with('.'));
        }
    }

    #[test]
    fn never_exponential_never_negative_zero(value in decimals(), total in 0..=6u32) {
        let s = to_display_string(value, total, DisplayPolicy::ShowDecimalsIfPresent).unwrap();
        prop_assert!(!s.contains('e') && !s.contains('E'));
        prop_assert_ne!(s.as_str(), "-0");
    }
}
