//! Position datagram codec.
//!
//! A datagram is exactly three 8-byte IEEE-754 doubles `(p0, p1, p2)`:
//! no header, no length prefix, no checksum. Byte order is agreed out of
//! band; see [`WireByteOrder`].

pub use haptics_config::schema::WireByteOrder;

use crate::error::DecodeError;

/// Size of one position datagram in bytes.
pub const DATAGRAM_LEN: usize = 3 * FIELD_LEN;

const FIELD_LEN: usize = std::mem::size_of::<f64>();

/// Decode a datagram into wire-ordered components.
///
/// Anything other than exactly [`DATAGRAM_LEN`] bytes is rejected; the
/// payload is never truncated or padded.
pub fn decode(bytes: &[u8], order: WireByteOrder) -> Result<[f64; 3], DecodeError> {
    if bytes.len() != DATAGRAM_LEN {
        return Err(DecodeError::WrongLength {
            expected: DATAGRAM_LEN,
            actual: bytes.len(),
        });
    }

    let mut out = [0.0f64; 3];
    for (slot, chunk) in out.iter_mut().zip(bytes.chunks_exact(FIELD_LEN)) {
        let mut field = [0u8; FIELD_LEN];
        field.copy_from_slice(chunk);
        *slot = match order {
            WireByteOrder::Native => f64::from_ne_bytes(field),
            WireByteOrder::Little => f64::from_le_bytes(field),
            WireByteOrder::Big => f64::from_be_bytes(field),
        };
    }
    Ok(out)
}

/// Encode wire-ordered components into a datagram.
pub fn encode(values: [f64; 3], order: WireByteOrder) -> [u8; DATAGRAM_LEN] {
    let mut out = [0u8; DATAGRAM_LEN];
    for (chunk, value) in out.chunks_exact_mut(FIELD_LEN).zip(values) {
        let field = match order {
            WireByteOrder::Native => value.to_ne_bytes(),
            WireByteOrder::Little => value.to_le_bytes(),
            WireByteOrder::Big => value.to_be_bytes(),
        };
        chunk.copy_from_slice(&field);
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datagram_is_24_bytes() {
        assert_eq!(DATAGRAM_LEN, 24);
    }

    #[test]
    fn decode_little_endian_fields_in_order() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1.5f64.to_le_bytes());
        bytes.extend_from_slice(&(-2.0f64).to_le_bytes());
        bytes.extend_from_slice(&0.25f64.to_le_bytes());
        assert_eq!(
            decode(&bytes, WireByteOrder::Little).unwrap(),
            [1.5, -2.0, 0.25]
        );
    }

    #[test]
    fn decode_big_endian_fields_in_order() {
        let mut bytes = Vec::new();
        for v in [3.0f64, 4.0, -5.0] {
            bytes.extend_from_slice(&v.to_be_bytes());
        }
        assert_eq!(decode(&bytes, WireByteOrder::Big).unwrap(), [3.0, 4.0, -5.0]);
    }

    #[test]
    fn native_matches_platform_order() {
        let bytes = encode([7.0, 8.0, 9.0], WireByteOrder::Native);
        let expected = if cfg!(target_endian = "little") {
            WireByteOrder::Little
        } else {
            WireByteOrder::Big
        };
        assert_eq!(decode(&bytes, expected).unwrap(), [7.0, 8.0, 9.0]);
    }

    #[test]
    fn mismatched_byte_order_changes_values() {
        let bytes = encode([1.0, 2.0, 3.0], WireByteOrder::Big);
        let decoded = decode(&bytes, WireByteOrder::Little).unwrap();
        assert_ne!(decoded, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_short_and_long_payloads() {
        for len in [0usize, 8, 16, 23, 25, 32, 48] {
            let bytes = vec![0u8; len];
            let err = decode(&bytes, WireByteOrder::Native).unwrap_err();
            assert_eq!(
                err,
                DecodeError::WrongLength {
                    expected: 24,
                    actual: len
                }
            );
        }
    }

    #[test]
    fn special_values_survive() {
        let bytes = encode([f64::INFINITY, -0.0, f64::MIN_POSITIVE], WireByteOrder::Little);
        let decoded = decode(&bytes, WireByteOrder::Little).unwrap();
        assert_eq!(decoded[0], f64::INFINITY);
        assert!(decoded[1] == 0.0 && decoded[1].is_sign_negative());
        assert_eq!(decoded[2], f64::MIN_POSITIVE);
    }
}
