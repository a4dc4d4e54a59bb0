//! HMAC digests and dynamic truncation.

use ring::hmac::{sign, Key as HmacKey, Tag};

use crate::algorithm::Algorithm;

/// Trait for MAC outputs that can be dynamically truncated.
///
/// [RFC 4226][4226] defines dynamic truncation over a 20-byte HMAC-SHA1 value. The same procedure
/// applies unchanged to the longer HMAC-SHA256 and HMAC-SHA512 outputs used by
/// [RFC 6238][6238], since the offset is taken from the low nibble of the *last* byte.
///
/// # Notes
///
/// Implementors should take care that their digests are always at least 19 bytes long, or
/// [`Digest::truncate` will panic](#panics).
///
/// [4226]: https://datatracker.ietf.org/doc/html/rfc4226
/// [6238]: https://datatracker.ietf.org/doc/html/rfc6238
pub trait Digest: AsRef<[u8]> {
    /// Dynamically truncate the digest to a 31-bit integer.
    ///
    /// The result has not yet been reduced modulo a power of ten; see
    /// [`Code::new`](crate::Code::new).
    ///
    /// # Panics
    ///
    /// Truncating a digest shorter than 19 bytes panics. This never happens for the digests
    /// produced by [`hmac`].
    fn truncate(&self) -> u32 {
        let digest = self.as_ref();
        let len = digest.len();
        // Offset is at most 15, and the window is four bytes wide.
        assert!(len >= 19);
        let index = (digest[len - 1] & 0xf) as usize;
        let bytes = [
            // Strip leading bit to remove signed/unsigned ambiguity
            digest[index] & 0x7f,
            digest[index + 1],
            digest[index + 2],
            digest[index + 3],
        ];
        u32::from_be_bytes(bytes)
    }
}

impl Digest for Tag {}

impl Digest for [u8; 20] {}
impl Digest for [u8; 32] {}
impl Digest for [u8; 64] {}

/// Compute `HMAC(key, counter)` with the counter encoded as eight big-endian bytes.
pub fn hmac(algorithm: Algorithm, key: &[u8], counter: u64) -> Tag {
    let key = HmacKey::new(algorithm.hmac(), key);
    sign(&key, &counter.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_section_5_4() {
        let digest: [u8; 20] = [
            0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19,
            0xda, 0x8e, 0x94, 0x5b, 0x55, 0x5a,
        ];
        assert_eq!(digest.truncate(), 0x50ef7f19);
        assert_eq!(digest.truncate() % 1_000_000, 872921);
    }

    #[test]
    fn top_bit_is_cleared() {
        let mut digest = [0xff; 20];
        digest[19] = 0x00;
        assert_eq!(digest.truncate(), 0x7fff_ffff);
    }

    #[test]
    fn offset_uses_last_byte_of_long_digests() {
        let mut digest = [0; 64];
        digest[63] = 0x0f;
        digest[15..19].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(digest.truncate(), 0x01020304);
    }

    #[test]
    fn truncates_sha256_sized_digest() {
        let mut digest = [0; 32];
        digest[31] = 0x1c;
        digest[12..16].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(digest.truncate(), 0x5ead_beef);
        let tag = hmac(Algorithm::Sha256, b"key", 7);
        let mut bytes = [0; 32];
        bytes.copy_from_slice(tag.as_ref());
        assert_eq!(bytes.truncate(), tag.truncate());
    }

    #[test]
    fn digest_lengths() {
        assert_eq!(hmac(Algorithm::Sha1, b"key", 0).as_ref().len(), 20);
        assert_eq!(hmac(Algorithm::Sha256, b"key", 0).as_ref().len(), 32);
        assert_eq!(hmac(Algorithm::Sha512, b"key", 0).as_ref().len(), 64);
    }

    #[test]
    fn appendix_d_intermediate_values() {
        let secret = b"12345678901234567890";
        let expected = [
            0x4c93cf18, 0x41397eea, 0x082fef30, 0x66ef7655, 0x61c5938a, 0x33c083d4, 0x7256c032,
            0x04e5b397, 0x2823443f, 0x2679dc69,
        ];
        for (counter, value) in expected.iter().enumerate() {
            assert_eq!(hmac(Algorithm::Sha1, secret, counter as u64).truncate(), *value);
        }
    }
}
