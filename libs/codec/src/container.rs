//! End-to-end container framing
//!
//! ```text
//! +------+----------------+---------------------+
//! | type | body           | padding (n × n)     |
//! | 1 B  | variable       | 1..=255 bytes       |
//! +------+----------------+---------------------+
//! ```
//!
//! Padding follows PKCS#7: `n` bytes, each of value `n`. It hides the body
//! length and is chosen so the whole container reaches at least the
//! configured minimum.

use crate::error::{CodecError, CodecResult};
use csp_types::constants::OVERHEAD_MAXPADDING;
use rand::Rng;

/// Random padding length in `1..=255`, raised so that
/// `1 + body_len + padding >= min_padded_len`
pub fn random_padding_len<R: Rng + ?Sized>(rng: &mut R, body_len: usize, min_padded_len: usize) -> u8 {
    let random = rng.gen_range(1..=OVERHEAD_MAXPADDING);
    let required = min_padded_len.saturating_sub(1 + body_len);
    // min_padded_len <= 255 is enforced by CodecLimits::validate
    random.max(required).min(OVERHEAD_MAXPADDING) as u8
}

/// Frame a body with an explicit padding length
pub fn pad(type_code: u8, body: &[u8], padding_len: u8) -> CodecResult<Vec<u8>> {
    if padding_len == 0 {
        return Err(CodecError::malformed_container(
            "padding length must be at least 1",
            1 + body.len(),
        ));
    }
    let mut out = Vec::with_capacity(1 + body.len() + padding_len as usize);
    out.push(type_code);
    out.extend_from_slice(body);
    out.resize(out.len() + padding_len as usize, padding_len);
    Ok(out)
}

/// Split a container into its type code and body
pub fn unpad(container: &[u8]) -> CodecResult<(u8, &[u8])> {
    let len = container.len();
    let (&type_code, rest) = container
        .split_first()
        .ok_or_else(|| CodecError::malformed_container("container is empty", 0))?;
    let padding_len = rest
        .last()
        .copied()
        .ok_or_else(|| CodecError::malformed_container("missing padding", len))? as usize;

    if padding_len == 0 || padding_len > rest.len() {
        return Err(CodecError::malformed_container(
            format!("invalid padding length {}", padding_len),
            len,
        ));
    }

    let (body, padding) = rest.split_at(rest.len() - padding_len);
    if padding.iter().any(|&b| b as usize != padding_len) {
        return Err(CodecError::malformed_container(
            "padding bytes do not match padding length",
            len,
        ));
    }

    Ok((type_code, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pad_and_unpad() {
        let container = pad(0x01, b"hi", 3).unwrap();
        assert_eq!(container, vec![0x01, b'h', b'i', 3, 3, 3]);
        assert_eq!(unpad(&container).unwrap(), (0x01, &b"hi"[..]));
    }

    #[test]
    fn test_padding_reaches_minimum() {
        let mut rng = StdRng::seed_from_u64(7);
        for body_len in [0usize, 1, 10, 30, 31, 100] {
            for _ in 0..50 {
                let padding = random_padding_len(&mut rng, body_len, 32) as usize;
                assert!(padding >= 1);
                assert!(1 + body_len + padding >= 32);
            }
        }
    }

    #[test]
    fn test_unpad_rejects_broken_padding() {
        assert!(matches!(
            unpad(&[]),
            Err(CodecError::MalformedContainer { .. })
        ));
        assert!(matches!(
            unpad(&[0x01]),
            Err(CodecError::MalformedContainer { .. })
        ));
        assert!(matches!(
            unpad(&[0x01, b'a', 0]),
            Err(CodecError::MalformedContainer { .. })
        ));
        assert!(matches!(
            unpad(&[0x01, b'a', 5]),
            Err(CodecError::MalformedContainer { .. })
        ));
        assert!(matches!(
            unpad(&[0x01, b'a', 3, 2]),
            Err(CodecError::MalformedContainer { .. })
        ));
    }

    #[test]
    fn test_zero_padding_rejected_on_encode() {
        assert!(pad(0x01, b"x", 0).is_err());
    }
}
