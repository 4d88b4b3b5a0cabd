use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ZiffernError;
use crate::separators::Separators;

/// Parses display strings back into [`Decimal`] values.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ziffern::{DecimalParser, Separators};
///
/// let parser = DecimalParser::new().separators(Separators::german());
/// assert_eq!(parser.parse("123.456,789").unwrap(), dec!(123456.789));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecimalParser {
    separators: Separators,
}

impl DecimalParser {
    /// Parser for canonical text: `.` decimal separator, no grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decimal separator character.
    pub fn decimal_separator(mut self, c: char) -> Self {
        self.separators.decimal = c;
        self
    }

    /// Accept (and strip) a grouping character on input.
    pub fn grouping_separator(mut self, c: char) -> Self {
        self.separators.grouping = Some(c);
        self
    }

    /// Replace both separators at once.
    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Convert display text into a decimal value.
    ///
    /// Separators are validated first, then the text is normalized to
    /// canonical form and handed to [`Decimal::from_str`]. A parse failure
    /// carries the original input, not the normalized form.
    pub fn parse(&self, text: &str) -> Result<Decimal, ZiffernError> {
        self.separators.validate()?;
        let canonical = self.separators.normalize(text);
        Decimal::from_str(&canonical).map_err(|_| ZiffernError::ParseNumber {
            input: text.to_owned(),
        })
    }
}
