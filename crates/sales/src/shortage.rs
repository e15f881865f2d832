use serde::{Deserialize, Serialize};

/// The three terminal choices offered when a request exceeds available stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShortageChoice {
    /// Clamp the request to the full remaining stock and accept it.
    TakeAll,
    /// Discard the request and stay in the product loop.
    TakeNone,
    /// End the product loop; already-accumulated lines survive to review.
    AbortOrdering,
}

impl ShortageChoice {
    /// Menu labels, in the order the clerk is shown them.
    pub const LABELS: [&'static str; 3] = [
        "Take all remaining stock",
        "Take none",
        "Stop ordering",
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TakeAll),
            1 => Some(Self::TakeNone),
            2 => Some(Self::AbortOrdering),
            _ => None,
        }
    }
}

/// What happened to one product request after stock was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Accept a line for `quantity` units (possibly clamped).
    Accepted { quantity: u32 },
    /// Nothing added; the product loop continues.
    Skipped,
    /// Nothing added; the product loop ends.
    Aborted,
}

/// Resolve a short request against the remaining stock.
///
/// `available` is the reservation-adjusted count at the moment of the
/// request. TakeAll with zero remaining stock accepts nothing: a zero-quantity
/// line would violate the positive-quantity invariant.
pub fn resolve_shortage(available: u32, choice: ShortageChoice) -> LineOutcome {
    match choice {
        ShortageChoice::TakeAll if available == 0 => LineOutcome::Skipped,
        ShortageChoice::TakeAll => LineOutcome::Accepted {
            quantity: available,
        },
        ShortageChoice::TakeNone => LineOutcome::Skipped,
        ShortageChoice::AbortOrdering => LineOutcome::Aborted,
    }
}
