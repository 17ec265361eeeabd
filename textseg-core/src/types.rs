//! Shared value types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome at a position between two code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BreakOpportunity {
    /// A line must end here
    Mandatory,
    /// A line may end here
    Allowed,
    /// A line may end here only if spaces intervene; the engine resolves
    /// this before emitting events
    Indirect,
    /// A line may not end here
    Prohibited,
}

impl BreakOpportunity {
    /// True for [`BreakOpportunity::Allowed`] and [`BreakOpportunity::Mandatory`].
    #[inline]
    pub fn is_break(self) -> bool {
        matches!(self, BreakOpportunity::Allowed | BreakOpportunity::Mandatory)
    }
}
