//! OTP derivation ([RFC 4226 §5.3][4226]).
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226#section-5.3

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

use crate::{
    algorithm::Algorithm,
    code::Code,
    digest::{hmac, Digest as _},
    error::{Error, Result},
};

/// Derive an OTP code from a base64-encoded secret and a moving counter.
///
/// The secret is decoded with the standard base64 alphabet (padding required), the counter is
/// fed to HMAC as eight big-endian bytes, and the MAC is dynamically truncated and reduced modulo
/// `10^digits`. The returned [`Code`] displays without zero-padding.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `secret` is not valid base64.
///
/// # Examples
///
/// ```rust
/// # use rfc_6238::{derive, Algorithm};
/// // "12345678901234567890", the RFC 4226 Appendix D secret
/// let secret = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=";
/// let code = derive(secret, 1, 6, Algorithm::Sha1).unwrap();
/// assert_eq!(code.to_string(), "287082");
/// ```
pub fn derive(secret: &str, counter: u64, digits: u32, algorithm: Algorithm) -> Result<Code> {
    let key = decode_secret(secret)?;
    Ok(derive_raw(&key, counter, digits, algorithm))
}

/// Derive an OTP code from already-decoded key bytes.
pub fn derive_raw(key: &[u8], counter: u64, digits: u32, algorithm: Algorithm) -> Code {
    Code::new(hmac(algorithm, key, counter).truncate(), digits)
}

/// Standard alphabet with canonical padding. Non-zero trailing bits in the last symbol are
/// ignored rather than rejected.
const SECRET_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

pub(crate) fn decode_secret(secret: &str) -> Result<Vec<u8>> {
    SECRET_ENGINE.decode(secret).map_err(|source| Error::Decode {
        input: secret.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RFC_4226_SECRET: &str = "MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=";

    #[test]
    fn appendix_d() {
        let expected = [
            755224, 287082, 359152, 969429, 338314, 254676, 287922, 162583, 399871, 520489,
        ];
        for (counter, value) in expected.iter().enumerate() {
            let code = derive(RFC_4226_SECRET, counter as u64, 6, Algorithm::Sha1).unwrap();
            assert_eq!(code.value(), *value);
            assert_eq!(code.to_string(), value.to_string());
        }
    }

    #[test]
    fn raw_matches_encoded() {
        let raw = derive_raw(b"12345678901234567890", 5, 6, Algorithm::Sha1);
        assert_eq!(derive(RFC_4226_SECRET, 5, 6, Algorithm::Sha1).unwrap(), raw);
    }

    #[test]
    fn deterministic() {
        for algorithm in &[Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512] {
            let a = derive("dGVzdHVzZXI=", 42, 6, *algorithm).unwrap();
            let b = derive("dGVzdHVzZXI=", 42, 6, *algorithm).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn algorithm_changes_code() {
        let sha1 = derive("testuser", 0, 6, Algorithm::Sha1).unwrap();
        let sha256 = derive("testuser", 0, 6, Algorithm::Sha256).unwrap();
        let sha512 = derive("testuser", 0, 6, Algorithm::Sha512).unwrap();
        assert_ne!(sha1, sha256);
        assert_ne!(sha256, sha512);
        assert_ne!(sha1, sha512);
    }

    #[test]
    fn testuser_sha512() {
        let code = derive("testuser", 0, 6, Algorithm::Sha512).unwrap();
        assert_eq!(code.to_string(), "800658");
    }

    #[test]
    fn unpadded_short_code() {
        // Counter 30 truncates to 1204026920, i.e. 026920 with six digits.
        let code = derive(RFC_4226_SECRET, 30, 6, Algorithm::Sha1).unwrap();
        assert_eq!(code.to_string(), "26920");
        assert_eq!(code.to_padded_string(), "026920");
    }

    #[test]
    fn rejects_invalid_alphabet() {
        match derive("abc!", 0, 6, Algorithm::Sha1) {
            Err(Error::Decode { input, .. }) => assert_eq!(input, "abc!"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_padding() {
        assert!(matches!(
            derive("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA", 0, 6, Algorithm::Sha1),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(
            derive("dGVzdA===", 0, 6, Algorithm::Sha1),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn ignores_trailing_bits() {
        // "dGVzdB==" differs from "dGVzdA==" only in bits that fall off the end.
        assert_eq!(decode_secret("dGVzdB==").unwrap(), b"test");
        assert_eq!(
            derive("dGVzdB==", 0, 6, Algorithm::Sha1).unwrap(),
            derive("dGVzdA==", 0, 6, Algorithm::Sha1).unwrap()
        );
    }

    #[test]
    fn empty_secret_is_a_valid_key() {
        // Emptiness is rejected by the adapters, not the engine.
        assert!(derive("", 0, 6, Algorithm::Sha1).is_ok());
    }
}
