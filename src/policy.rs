use serde::{Deserialize, Serialize};

/// How the fractional digits of a value are rendered.
///
/// The policy decides, per decimal position, whether a digit is always
/// written (zero-padded when absent) or only written while a non-zero
/// digit remains at or beyond that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayPolicy {
    /// Render exactly the configured number of decimal places, zero-padded.
    AlwaysShowDecimals,
    /// Render up to the configured number of decimal places, dropping
    /// trailing zeros — and the separator itself if nothing remains.
    ShowDecimalsIfPresent,
    /// Render a mandatory prefix of `always_shown` decimal places, then up
    /// to the remaining places with trailing zeros dropped.
    Hybrid {
        /// Number of leading decimal places that are always rendered.
        always_shown: u32,
    },
}
