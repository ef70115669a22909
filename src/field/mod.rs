//! Big-endian field packing helpers shared by the renderer, the reorderer,
//! and the pattern synchronizer.

/// Packs `bytes` into a `width`-byte big-endian integer.
///
/// Positions past the end of `bytes` are zero-filled, so a partial trailing
/// field packs as if it had been padded with zeros. `width` must be in
/// `1..=8`; `bytes` beyond `width` are ignored.
pub(crate) fn pack_field(bytes: &[u8], width: usize) -> u64 {
    let mut value = 0u64;
    for slot in 0..width {
        value <<= 8;
        if let Some(&byte) = bytes.get(slot) {
            value |= u64::from(byte);
        }
    }
    value
}

/// Returns byte `index` of a `width`-byte big-endian integer, where index 0
/// is the most significant byte. `index` must be less than `width`.
pub(crate) fn extract_byte(value: u64, width: usize, index: usize) -> u8 {
    (value >> (8 * (width - 1 - index))) as u8
}

/// Sign-extends a `width`-byte big-endian value to 64 bits by shifting it to
/// the top of the word and arithmetically shifting it back down.
pub(crate) fn sign_extend(value: u64, width: usize) -> i64 {
    let shift = 64 - 8 * width as u32;
    ((value << shift) as i64) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_full_field() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(pack_field(&bytes, 8), 0x0102030405060708);
        assert_eq!(pack_field(&bytes, 8), 72623859790382856);
    }

    #[test]
    fn test_pack_single_byte() {
        assert_eq!(pack_field(&[0x81], 1), 0x81);
        assert_eq!(pack_field(&[0x00], 1), 0);
    }

    #[test]
    fn test_pack_partial_field_zero_fills_tail() {
        // Two bytes packed into a four-byte field leave the low half zero.
        assert_eq!(pack_field(&[0x81, 0x02], 4), 0x81020000);
    }

    #[test]
    fn test_pack_ignores_extra_bytes() {
        assert_eq!(pack_field(&[0xAA, 0xBB, 0xCC], 2), 0xAABB);
    }

    #[test]
    fn test_extract_byte_positions() {
        let value = 0x0102030405060708u64;
        for index in 0..8 {
            assert_eq!(extract_byte(value, 8, index), (index + 1) as u8);
        }
        assert_eq!(extract_byte(0xAABB, 2, 0), 0xAA);
        assert_eq!(extract_byte(0xAABB, 2, 1), 0xBB);
        assert_eq!(extract_byte(0x7F, 1, 0), 0x7F);
    }

    #[test]
    fn test_sign_extend_negative() {
        assert_eq!(sign_extend(0x81, 1), -127);
        assert_eq!(sign_extend(0xFF, 1), -1);
        assert_eq!(sign_extend(0x8182838485868788, 8), -9114578090645354616);
    }

    #[test]
    fn test_sign_extend_positive() {
        assert_eq!(sign_extend(0x7F, 1), 127);
        assert_eq!(sign_extend(0x0102030405060708, 8), 72623859790382856);
        assert_eq!(sign_extend(0x0000, 2), 0);
    }

    #[test]
    fn test_sign_extend_uses_field_width() {
        // The same packed value is negative at width 2 but positive at
        // width 4 because the sign bit moves with the width.
        assert_eq!(sign_extend(0x8000, 2), -32768);
        assert_eq!(sign_extend(0x8000, 4), 32768);
    }

    #[test]
    fn test_pack_then_extract_round_trip() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let packed = pack_field(&bytes, 4);
        for (index, &byte) in bytes.iter().enumerate() {
            assert_eq!(extract_byte(packed, 4, index), byte);
        }
    }
}
