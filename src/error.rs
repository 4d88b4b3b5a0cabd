use thiserror::Error;

/// Errors that can occur during formatting or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ZiffernError {
    /// The mandatory decimal prefix of a hybrid policy exceeds the total scale.
    #[error("invalid scale: {always_shown} mandatory decimal places exceed total of {total_places}")]
    InvalidScale { total_places: u32, always_shown: u32 },

    /// Decimal and grouping separator are the same character.
    #[error("invalid separators: decimal and grouping separator are both '{0}'")]
    InvalidSeparators(char),

    /// Input text is not a valid decimal literal after normalization.
    /// Carries the original input, not the normalized form.
    #[error("not a valid decimal number: \"{input}\"")]
    ParseNumber { input: String },
}
