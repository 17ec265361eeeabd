//! Validation of non-UTF-8 input encodings
//!
//! `&str` input is valid by construction. Raw code points and UTF-16 are
//! checked in full before segmentation starts, so a caller never sees
//! events for a prefix of invalid input.

use textseg_core::CoreError;

use crate::error::Result;

/// Decode raw code point values.
///
/// Fails on the first surrogate or value above U+10FFFF; the error offset
/// is its index in `code_points`.
pub fn decode_code_points(code_points: &[u32]) -> Result<Vec<char>> {
    code_points
        .iter()
        .enumerate()
        .map(|(offset, &value)| {
            char::from_u32(value)
                .ok_or_else(|| CoreError::InvalidCodePoint { offset, value }.into())
        })
        .collect()
}

/// Decode UTF-16 code units.
///
/// Fails on the first unpaired surrogate; the error offset is its index in
/// `units`.
pub fn decode_utf16(units: &[u16]) -> Result<Vec<char>> {
    let mut chars = Vec::with_capacity(units.len());
    let mut offset = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                offset += c.len_utf16();
                chars.push(c);
            }
            Err(e) => {
                return Err(CoreError::InvalidCodePoint {
                    offset,
                    value: u32::from(e.unpaired_surrogate()),
                }
                .into())
            }
        }
    }
    Ok(chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn invalid(err: EngineError) -> (usize, u32) {
        match err {
            EngineError::Core(CoreError::InvalidCodePoint { offset, value }) => (offset, value),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_code_points() {
        assert_eq!(decode_code_points(&[0x41, 0x3042]).unwrap(), vec!['A', '\u{3042}']);
        assert_eq!(
            invalid(decode_code_points(&[0x41, 0x42, 0x11_0000]).unwrap_err()),
            (2, 0x11_0000)
        );
        assert_eq!(
            invalid(decode_code_points(&[0xDC00]).unwrap_err()),
            (0, 0xDC00)
        );
    }

    #[test]
    fn test_utf16() {
        let units: Vec<u16> = "a\u{1F600}b".encode_utf16().collect();
        assert_eq!(decode_utf16(&units).unwrap(), vec!['a', '\u{1F600}', 'b']);

        // a, <pair>, lone high surrogate, b
        let units = [0x61, 0xD83D, 0xDE00, 0xD800, 0x62];
        assert_eq!(invalid(decode_utf16(&units).unwrap_err()), (3, 0xD800));

        assert!(decode_utf16(&[]).unwrap().is_empty());
    }
}
