use crate::error::ZiffernError;
use crate::policy::DisplayPolicy;

/// A single fractional digit position in a [`DigitPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitSlot {
    /// Always rendered, zero-padded when the value has no digit here.
    Mandatory,
    /// Rendered only while a non-zero digit sits here or further right.
    Optional,
}

/// An ordered description of the fractional digit positions to render,
/// plus whether integer grouping markers are in use.
///
/// A pattern is a pure value object: it is rebuilt for every formatting
/// call and never cached or mutated. Mandatory slots always form a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitPattern {
    slots: Vec<DigitSlot>,
    grouped: bool,
}

impl DigitPattern {
    /// Build the pattern for a policy at the given total scale.
    ///
    /// With `total_places` of zero the pattern has no decimal slots
    /// regardless of policy. A hybrid policy whose mandatory prefix
    /// exceeds `total_places` fails with
    /// [`InvalidScale`](ZiffernError::InvalidScale).
    pub fn build(
        policy: DisplayPolicy,
        total_places: u32,
        grouped: bool,
    ) -> Result<Self, ZiffernError> {
        let mandatory = match policy {
            DisplayPolicy::AlwaysShowDecimals => total_places,
            DisplayPolicy::ShowDecimalsIfPresent => 0,
            DisplayPolicy::Hybrid { always_shown } => {
                if always_shown > total_places {
                    return Err(ZiffernError::InvalidScale {
                        total_places,
                        always_shown,
                    });
                }
                always_shown
            }
        };
        let slots = (0..total_places)
            .map(|i| {
                if i < mandatory {
                    DigitSlot::Mandatory
                } else {
                    DigitSlot::Optional
                }
            })
            .collect();
        Ok(Self { slots, grouped })
    }

    /// Total number of decimal slots.
    pub fn total_places(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Length of the mandatory prefix.
    pub fn mandatory_places(&self) -> u32 {
        self.slots
            .iter()
            .take_while(|s| **s == DigitSlot::Mandatory)
            .count() as u32
    }

    /// The ordered decimal slots.
    pub fn slots(&self) -> &[DigitSlot] {
        &self.slots
    }

    /// Whether integer grouping markers are rendered.
    pub fn is_grouped(&self) -> bool {
        self.grouped
    }
}
