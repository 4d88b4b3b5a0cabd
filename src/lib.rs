//! # ziffern
//!
//! Locale-aware display formatting and parsing for [`rust_decimal::Decimal`]
//! values — never floating point.
//!
//! A [`DisplayPolicy`] decides which fractional digits are rendered, a
//! [`Separators`] pair supplies the decimal and grouping characters, and
//! [`Rounding`] fixes how excess digits are dropped. Parsing reverses the
//! process: grouping is stripped, the decimal separator is mapped back to
//! `.`, and the canonical text is parsed exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use ziffern::{DecimalFormatter, DecimalParser, DisplayPolicy, Separators};
//!
//! let fmt = DecimalFormatter::new(2, DisplayPolicy::AlwaysShowDecimals)
//!     .separators(Separators::german());
//! assert_eq!(fmt.format(dec!(1234.5)).unwrap(), "1.234,50");
//!
//! let parser = DecimalParser::new().separators(Separators::german());
//! assert_eq!(parser.parse("1.234,50").unwrap(), dec!(1234.50));
//! ```
//!
//! All types are immutable value objects; every operation is a pure
//! function of its inputs and may run on any number of threads without
//! coordination.

mod error;
mod format;
mod parse;
mod pattern;
mod policy;
mod separators;

pub use error::ZiffernError;
pub use format::{DecimalFormatter, Rounding};
pub use parse::DecimalParser;
pub use pattern::{DigitPattern, DigitSlot};
pub use policy::DisplayPolicy;
pub use separators::Separators;

use rust_decimal::Decimal;

/// Render a value with the canonical `.` separator, no grouping, and
/// default rounding.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ziffern::{DisplayPolicy, to_display_string};
///
/// let s = to_display_string(dec!(24.102030), 6, DisplayPolicy::ShowDecimalsIfPresent).unwrap();
/// assert_eq!(s, "24.10203");
/// ```
pub fn to_display_string(
    value: Decimal,
    total_places: u32,
    policy: DisplayPolicy,
) -> Result<String, ZiffernError> {
    DecimalFormatter::new(total_places, policy).format(value)
}

/// Parse canonical decimal text (`.` separator, no grouping).
///
/// ```
/// use rust_decimal_macros::dec;
/// use ziffern::to_decimal;
///
/// assert_eq!(to_decimal("123.456").unwrap(), dec!(123.456));
/// ```
pub fn to_decimal(text: &str) -> Result<Decimal, ZiffernError> {
    DecimalParser::new().parse(text)
}
