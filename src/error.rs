//! Error type for OTP generation.

use thiserror::Error;

/// OTP generation error type.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// No shared secret was configured.
    #[error("no secret key provided")]
    MissingSecret,
    /// The shared secret was not valid standard base64.
    #[error("failed to decode secret {input:?}: {source}")]
    Decode {
        /// The secret exactly as it was supplied.
        input: String,
        /// The underlying decoder failure.
        #[source]
        source: base64::DecodeError,
    },
    /// The algorithm name was not one of SHA1, SHA256 or SHA512.
    #[error("invalid algorithm provided: {0:?}")]
    InvalidAlgorithm(String),
}

/// Result alias for OTP generation.
pub type Result<T> = std::result::Result<T, Error>;
