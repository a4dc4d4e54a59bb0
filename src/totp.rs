//! Time-based one-time passwords ([RFC 6238][6238]).
//!
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

use log::{debug, trace};

use crate::{
    algorithm::Algorithm,
    clock::{Clock, SystemClock},
    code::Format,
    error::{Error, Result},
    otp::derive,
};

/// Digit count used when none is configured.
pub const DEFAULT_DIGITS: u32 = 6;

/// Time step, in seconds, used when none is configured.
pub const DEFAULT_PERIOD: u64 = 60;

/// TOTP generator configuration.
///
/// Zero-valued fields are unset. [`Totp::generate`] fills them with their defaults in place, so
/// after a successful call the configuration records exactly what was used.
///
/// ```rust
/// # use rfc_6238::{Algorithm, Totp};
/// let mut totp = Totp::new("testuser")
///     .with_algorithm(Algorithm::Sha512)
///     .with_period(5)
///     .with_unix_time(59);
/// assert_eq!(totp.generate().unwrap(), "893144");
/// assert_eq!(totp.digits, 6);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Totp {
    /// Base64-encoded shared secret.
    pub secret: String,
    /// Number of decimal digits. Defaults to [`DEFAULT_DIGITS`].
    pub digits: u32,
    /// HMAC hash function. Defaults to SHA1.
    pub algorithm: Option<Algorithm>,
    /// Time step in seconds.
    pub period: u64,
    /// Fixed Unix time to generate for instead of reading the clock. `Some(0)` counts as unset.
    pub unix_time: Option<u64>,
    /// How the code is rendered. Unpadded by default.
    pub format: Format,
}

impl Totp {
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

    /// Set the HMAC hash function.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the time step in seconds.
    pub fn with_period(mut self, period: u64) -> Self {
        self.period = period;
        self
    }

    /// Generate for a fixed Unix time instead of reading the clock.
    pub fn with_unix_time(mut self, unix_time: u64) -> Self {
        self.unix_time = Some(unix_time);
        self
    }

    /// Set how the code is rendered.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Generate the code for the configured time, or for the system clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSecret`] if no secret is configured and [`Error::Decode`] if the
    /// secret is not valid base64.
    pub fn generate(&mut self) -> Result<String> {
        self.generate_with(&SystemClock)
    }

    /// Generate the code, reading `clock` if no fixed time is configured.
    pub fn generate_with<C: Clock>(&mut self, clock: &C) -> Result<String> {
        if self.secret.is_empty() {
            return Err(Error::MissingSecret);
        }
        if self.digits == 0 {
            self.digits = DEFAULT_DIGITS;
        }
        let algorithm = *self.algorithm.get_or_insert_with(Algorithm::default);
        if self.period == 0 {
            self.period = DEFAULT_PERIOD;
        }
        let unix_time = match self.unix_time {
            Some(unix_time) if unix_time != 0 => unix_time,
            _ => {
                let now = clock.unix_time();
                trace!("read clock: {}", now);
                now
            }
        };
        let counter = unix_time / self.period;
        debug!(
            "generating TOTP: algorithm={} digits={} period={} counter={}",
            algorithm, self.digits, self.period, counter
        );
        let code = derive(&self.secret, counter, self.digits, algorithm)?;
        Ok(code.format(self.format))
    }

    /// The time-step counter at `unix_time`.
    pub fn counter_at(&self, unix_time: u64) -> u64 {
        unix_time / self.period_or_default()
    }

    /// Seconds left in the time step containing `unix_time`.
    pub fn seconds_remaining_at(&self, unix_time: u64) -> u64 {
        let period = self.period_or_default();
        period - unix_time % period
    }

    fn period_or_default(&self) -> u64 {
        match self.period {
            0 => DEFAULT_PERIOD,
            period => period,
        }
    }
}
