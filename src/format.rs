use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ZiffernError;
use crate::pattern::DigitPattern;
use crate::policy::DisplayPolicy;
use crate::separators::Separators;

/// Rounding applied when a value carries more fractional digits than the
/// configured scale.
///
/// The two conventions agree for positive values and differ for negative
/// ones: `-1.6` at scale 0 becomes `-1` under [`TowardZero`](Rounding::TowardZero)
/// and `-2` under [`Floor`](Rounding::Floor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Truncate toward zero. The default, matching financial truncation
    /// conventions.
    #[default]
    TowardZero,
    /// Round toward negative infinity.
    Floor,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::TowardZero => RoundingStrategy::ToZero,
            Rounding::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// Formats [`Decimal`] values as display strings under a [`DisplayPolicy`]
/// and a set of [`Separators`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ziffern::{DecimalFormatter, DisplayPolicy, Separators};
///
/// let fmt = DecimalFormatter::new(2, DisplayPolicy::AlwaysShowDecimals)
///     .separators(Separators::german());
/// assert_eq!(fmt.format(dec!(1234.5)).unwrap(), "1.234,50");
/// ```
#[derive(Debug, Clone)]
pub struct DecimalFormatter {
    total_places: u32,
    policy: DisplayPolicy,
    separators: Separators,
    rounding: Rounding,
}

impl DecimalFormatter {
    /// Formatter with the given scale and policy, canonical `.` separator,
    /// no grouping, default rounding.
    pub fn new(total_places: u32, policy: DisplayPolicy) -> Self {
        Self {
            total_places,
            policy,
            separators: Separators::default(),
            rounding: Rounding::default(),
        }
    }

    /// Set the decimal separator character.
    pub fn decimal_separator(mut self, c: char) -> Self {
        self.separators.decimal = c;
        self
    }

    /// Enable integer grouping with the given character.
    pub fn grouping_separator(mut self, c: char) -> Self {
        self.separators.grouping = Some(c);
        self
    }

    /// Replace both separators at once.
    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Set the rounding convention.
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Render `value` as a display string.
    ///
    /// All configuration validation (separators, hybrid scale) happens
    /// before any rendering work; a returned string is never partial.
    pub fn format(&self, value: Decimal) -> Result<String, ZiffernError> {
        self.separators.validate()?;
        let pattern = DigitPattern::build(
            self.policy,
            self.total_places,
            self.separators.grouping.is_some(),
        )?;
        Ok(render(value, &pattern, &self.separators, self.rounding))
    }
}

/// Apply a digit pattern to a value. Infallible: the pattern and
/// separators have already been validated.
fn render(
    value: Decimal,
    pattern: &DigitPattern,
    separators: &Separators,
    rounding: Rounding,
) -> String {
    let rounded = value.round_dp_with_strategy(pattern.total_places(), rounding.strategy());

    // Digits come from the absolute value; the sign is re-attached at the
    // end so a value that rounds to zero never renders as "-0".
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let canonical = rounded.abs().to_string();
    let (int_digits, frac_digits) = match canonical.split_once('.') {
        Some((i, f)) => (i, f),
        None => (canonical.as_str(), ""),
    };

    let mut out = String::with_capacity(canonical.len() + 4);
    if negative {
        out.push('-');
    }
    match separators.grouping.filter(|_| pattern.is_grouped()) {
        Some(g) => push_grouped(&mut out, int_digits, g),
        None => out.push_str(int_digits),
    }

    let frac = fraction_digits(frac_digits, pattern);
    if !frac.is_empty() {
        out.push(separators.decimal);
        out.push_str(&frac);
    }
    out
}

/// Write integer digits with a grouping marker every three digits.
fn push_grouped(out: &mut String, digits: &str, grouping: char) {
    let len = digits.len();
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(grouping);
        }
        out.push(d);
    }
}

/// Select the fractional digits to emit: mandatory slots are always kept
/// (zero-padded), optional slots only up to the last non-zero digit.
fn fraction_digits(digits: &str, pattern: &DigitPattern) -> String {
    let total = pattern.total_places() as usize;
    let mandatory = pattern.mandatory_places() as usize;

    let mut frac: String = digits.chars().take(total).collect();
    while frac.len() < total {
        frac.push('0');
    }
    let keep = frac
        .bytes()
        .rposition(|d| d != b'0')
        .map_or(0, |i| i + 1)
        .max(mandatory);
    frac.truncate(keep);
    frac
}
