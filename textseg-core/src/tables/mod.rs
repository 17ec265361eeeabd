//! Compiled-in property tables and range lookup

mod generated;

pub use generated::UNICODE_VERSION;

use crate::class::{EastAsianWidth, LineBreakClass};

/// Binary search a sorted, non-overlapping range table.
pub(crate) fn lookup<T: Copy>(table: &[(u32, u32, T)], cp: u32, default: T) -> T {
    match table.binary_search_by(|&(start, end, _)| {
        if cp < start {
            core::cmp::Ordering::Greater
        } else if cp > end {
            core::cmp::Ordering::Less
        } else {
            core::cmp::Ordering::Equal
        }
    }) {
        Ok(idx) => table[idx].2,
        Err(_) => default,
    }
}

/// Membership test for a sorted, non-overlapping range set.
pub(crate) fn contains(set: &[(u32, u32)], cp: u32) -> bool {
    set.binary_search_by(|&(start, end)| {
        if cp < start {
            core::cmp::Ordering::Greater
        } else if cp > end {
            core::cmp::Ordering::Less
        } else {
            core::cmp::Ordering::Equal
        }
    })
    .is_ok()
}

pub(crate) fn line_break(cp: u32) -> LineBreakClass {
    lookup(generated::LINE_BREAK, cp, LineBreakClass::XX)
}

pub(crate) fn east_asian_width(cp: u32) -> EastAsianWidth {
    lookup(generated::EAST_ASIAN_WIDTH, cp, EastAsianWidth::Neutral)
}

pub(crate) fn is_unassigned_pictographic(cp: u32) -> bool {
    contains(generated::UNASSIGNED_PICTOGRAPHIC, cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted<T>(table: &[(u32, u32, T)]) {
        for window in table.windows(2) {
            assert!(window[0].0 <= window[0].1);
            assert!(window[0].1 < window[1].0, "overlap at {:#X}", window[1].0);
        }
    }

    #[test]
    fn test_tables_are_sorted_and_disjoint() {
        assert_sorted(generated::LINE_BREAK);
        assert_sorted(generated::EAST_ASIAN_WIDTH);
        for window in generated::UNASSIGNED_PICTOGRAPHIC.windows(2) {
            assert!(window[0].1 < window[1].0);
        }
    }

    #[test]
    fn test_unassigned_pictographic() {
        assert!(is_unassigned_pictographic(0x1FC00));
        assert!(is_unassigned_pictographic(0x1F02C));
        // U+1F600 GRINNING FACE is assigned
        assert!(!is_unassigned_pictographic(0x1F600));
        assert!(!is_unassigned_pictographic(0x41));
    }

    #[test]
    fn test_lookup_default_outside_ranges() {
        let table = [(0x10, 0x20, 1u8), (0x30, 0x30, 2u8)];
        assert_eq!(lookup(&table, 0x0F, 0), 0);
        assert_eq!(lookup(&table, 0x10, 0), 1);
        assert_eq!(lookup(&table, 0x20, 0), 1);
        assert_eq!(lookup(&table, 0x25, 0), 0);
        assert_eq!(lookup(&table, 0x30, 0), 2);
        assert_eq!(lookup(&table, 0x31, 0), 0);
    }

    #[test]
    fn test_contains() {
        let set = [(0x41, 0x43), (0x61, 0x61)];
        assert!(contains(&set, 0x42));
        assert!(contains(&set, 0x61));
        assert!(!contains(&set, 0x44));
        assert!(!contains(&[], 0x41));
    }

    #[test]
    fn test_surrogate_range_is_not_in_tables() {
        assert_eq!(line_break(0xD800), LineBreakClass::XX);
    }
}
