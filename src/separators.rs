use serde::{Deserialize, Serialize};

use crate::error::ZiffernError;

/// The decimal and optional grouping separator characters of a display format.
///
/// # Example
///
/// ```
/// use ziffern::Separators;
///
/// let german = Separators::german();
/// assert_eq!(german.normalize("1.234,50"), "1234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Character between integer and fractional digits.
    pub decimal: char,
    /// Character between groups of three integer digits, if any.
    pub grouping: Option<char>,
}

impl Default for Separators {
    /// Canonical form: `.` as decimal separator, no grouping.
    fn default() -> Self {
        Self {
            decimal: '.',
            grouping: None,
        }
    }
}

impl Separators {
    /// Separators with the given decimal character and no grouping.
    pub fn new(decimal: char) -> Self {
        Self {
            decimal,
            grouping: None,
        }
    }

    /// Separators with both a decimal and a grouping character.
    pub fn with_grouping(decimal: char, grouping: char) -> Self {
        Self {
            decimal,
            grouping: Some(grouping),
        }
    }

    /// German display convention: comma decimal separator, dot grouping.
    pub fn german() -> Self {
        Self::with_grouping(',', '.')
    }

    /// Reject configurations where both separators are the same character.
    pub fn validate(&self) -> Result<(), ZiffernError> {
        if self.grouping == Some(self.decimal) {
            return Err(ZiffernError::InvalidSeparators(self.decimal));
        }
        Ok(())
    }

    /// Map display text to canonical form for parsing.
    ///
    /// Grouping separators are stripped first, then the decimal separator
    /// is replaced with `.`. The order is fixed: stripping grouping first
    /// keeps a grouping dot from being misread as a decimal point.
    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = match self.grouping {
            Some(g) => text.chars().filter(|c| *c != g).collect(),
            None => text.to_owned(),
        };
        stripped.replace(self.decimal, ".")
    }
}
