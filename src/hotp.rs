//! Counter-based one-time passwords ([RFC 4226][4226]).
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226

use log::debug;

use crate::{
    algorithm::Algorithm,
    code::Format,
    error::{Error, Result},
    otp::derive,
    totp::DEFAULT_DIGITS,
};

/// HOTP generator configuration.
///
/// The stored counter is passed to the OTP derivation as-is. Unset fields are filled in place by
/// [`Hotp::generate`], the same way [`Totp::generate`](crate::Totp::generate) does.
///
/// ```rust
/// # use rfc_6238::Hotp;
/// let mut hotp = Hotp::new("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=").with_counter(1);
/// assert_eq!(hotp.generate().unwrap(), "287082");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Hotp {
    /// Base64-encoded shared secret.
    pub secret: String,
    /// Number of decimal digits. Defaults to [`DEFAULT_DIGITS`].
    pub digits: u32,
    /// Moving counter fed to the HMAC.
    pub counter: u64,
    /// Defaults to SHA1, the only function RFC 4226 defines.
    pub algorithm: Option<Algorithm>,
    /// How the code is rendered. Unpadded by default.
    pub format: Format,
}

impl Hotp {
    /// A configuration with the given base64 secret and every other field unset.
    pub fn new<S: Into<String>>(secret: S) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Set the digit count.
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    /// Set the moving counter.
    pub fn with_counter(mut self, counter: u64) -> Self {
        self.counter = counter;
        self
    }

    /// Set the HMAC hash function.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set how the code is rendered.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Generate the code for the stored counter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSecret`] if no secret is configured and [`Error::Decode`] if the
    /// secret is not valid base64.
    pub fn generate(&mut self) -> Result<String> {
        if self.secret.is_empty() {
            return Err(Error::MissingSecret);
        }
        if self.digits == 0 {
            self.digits = DEFAULT_DIGITS;
        }
        let algorithm = *self.algorithm.get_or_insert_with(Algorithm::default);
        debug!(
            "generating HOTP: algorithm={} digits={} counter={}",
            algorithm, self.digits, self.counter
        );
        let code = derive(&self.secret, self.counter, self.digits, algorithm)?;
        Ok(code.format(self.format))
    }

    /// Move to the next counter value, wrapping at `u64::MAX`.
    pub fn advance(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }
}
