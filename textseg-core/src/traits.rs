//! Collaborator traits

use alloc::vec::Vec;

/// Word segmentation for complex-context (South East Asian) scripts.
///
/// Thai, Lao, Khmer and Myanmar are written without spaces between words;
/// the pair matrix alone cannot place breaks inside such runs. An
/// implementation receives one maximal run of `SA` characters at a time.
pub trait WordBreaker: Send + Sync {
    /// Positions inside `run` where a break is allowed.
    ///
    /// A position `i` means "between `run[i - 1]` and `run[i]`", so valid
    /// values are `1..run.len()`. Anything else is ignored, as is order and
    /// duplication.
    fn find_word_boundaries(&self, run: &[char]) -> Vec<usize>;

    /// Whether the breaker can actually segment (e.g. its dictionary loaded).
    ///
    /// An unavailable breaker is treated as absent: runs stay unbroken.
    fn is_available(&self) -> bool {
        true
    }
}
