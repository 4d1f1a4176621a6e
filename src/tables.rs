//! Case-code tables folding four quadrant booleans into one byte
//!
//! Each storage cell holds one of 16 case codes describing the truth values
//! of the four quadrant cells aliasing it. Codes are ordered by population:
//! 0 for no quadrant true, 1-4 for the singles, 5-10 for the pairs, 11-14
//! for the triples, 15 for all four.

/// Case code for all four quadrants false
pub const EMPTY: u8 = 0;

/// Case code for all four quadrants true
pub const FULL: u8 = 15;

// Index: quadrant bitmask (bit i set = quadrant i true).
const ENCODE: [u8; 16] = [0, 1, 2, 5, 3, 6, 8, 11, 4, 7, 9, 12, 10, 13, 14, 15];

// Index: case code. Inverse of ENCODE.
const DECODE: [u8; 16] = [0, 1, 2, 4, 8, 3, 5, 9, 6, 10, 12, 7, 11, 13, 14, 15];

/// Fold four quadrant booleans into a case code
pub fn encode(slots: [bool; 4]) -> u8 {
    let mut mask = 0usize;
    for (i, &slot) in slots.iter().enumerate() {
        if slot {
            mask |= 1 << i;
        }
    }
    ENCODE[mask]
}

/// Expand a case code back into four quadrant booleans
///
/// Only the low four bits are meaningful; the matrix never stores a code
/// above 15.
pub fn decode(code: u8) -> [bool; 4] {
    let mask = DECODE[(code & 0x0f) as usize];
    [
        mask & 1 != 0,
        mask & 2 != 0,
        mask & 4 != 0,
        mask & 8 != 0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_of_encode_all_tuples() {
        for mask in 0..16u8 {
            let slots = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0];
            assert_eq!(decode(encode(slots)), slots);
        }
    }

    #[test]
    fn test_encode_of_decode_all_codes() {
        for code in 0..16u8 {
            assert_eq!(encode(decode(code)), code);
        }
    }

    #[test]
    fn test_empty_and_full() {
        assert_eq!(encode([false; 4]), EMPTY);
        assert_eq!(encode([true; 4]), FULL);
        assert_eq!(decode(EMPTY), [false; 4]);
        assert_eq!(decode(FULL), [true; 4]);
    }

    #[test]
    fn test_single_quadrant_cases() {
        // cases 1-4 are the single-quadrant patterns in quadrant order
        assert_eq!(encode([true, false, false, false]), 1);
        assert_eq!(encode([false, true, false, false]), 2);
        assert_eq!(encode([false, false, true, false]), 3);
        assert_eq!(encode([false, false, false, true]), 4);
    }

    #[test]
    fn test_codes_ordered_by_population() {
        let pops: Vec<u32> = (0..16u8)
            .map(|code| decode(code).iter().filter(|&&s| s).count() as u32)
            .collect();
        assert_eq!(pops, [0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 4]);
    }
}
