//! Time-based and counter-based one-time passwords.
//!
//! This crate implements [RFC 4226][4226] (HOTP) and [RFC 6238][6238] (TOTP). Secrets are
//! supplied as standard base64 text and decoded on every generation call. HMAC-SHA1,
//! HMAC-SHA256 and HMAC-SHA512 are supported.
//!
//! ```rust
//! use rfc_6238::{Algorithm, Totp};
//!
//! let mut totp = Totp::new("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=")
//!     .with_digits(8)
//!     .with_period(30)
//!     .with_unix_time(59);
//! assert_eq!(totp.generate().unwrap(), "94287082");
//! assert_eq!(totp.algorithm, Some(Algorithm::Sha1));
//! ```
//!
//! # Zero-padding
//!
//! Codes are rendered without leading zeros by default, so a 6-digit code of `042156` comes out
//! as `"42156"`. Set [`Format::ZeroPadded`] on the generator, or use
//! [`Code::to_padded_string`], to get RFC-conformant fixed-width codes.
//!
//! [4226]: https://datatracker.ietf.org/doc/html/rfc4226
//! [6238]: https://datatracker.ietf.org/doc/html/rfc6238

pub mod algorithm;
pub mod clock;
pub mod code;
pub mod digest;
pub mod error;
pub mod hotp;
mod otp;
pub mod totp;

pub use algorithm::Algorithm;
pub use clock::{Clock, FixedClock, SystemClock};
pub use code::{Code, Format};
pub use error::{Error, Result};
pub use hotp::Hotp;
pub use otp::{derive, derive_raw};
pub use totp::{Totp, DEFAULT_DIGITS, DEFAULT_PERIOD};
