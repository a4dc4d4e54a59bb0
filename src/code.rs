//! Numeric OTP codes and their textual forms.

use core::fmt;

/// How a [`Code`] is rendered as text.
///
/// [`Format::Unpadded`] prints the bare decimal value, so a 6-digit code of `42156` is rendered
/// as `"42156"`. RFC 4226 expects `"042156"`, which [`Format::ZeroPadded`] produces. The default
/// is unpadded to stay compatible with existing consumers of this output.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// The bare decimal value.
    Unpadded,
    /// The value left-padded with zeros to the digit count.
    ZeroPadded,
}

impl Default for Format {
    fn default() -> Self {
        Self::Unpadded
    }
}

/// A truncated OTP value together with the digit count it was reduced to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Code {
    value: u32,
    digits: u32,
}

impl Code {
    /// Reduce a dynamically truncated value modulo `10^digits`.
    ///
    /// A 31-bit value is never reduced by a modulus of ten digits or more, so such digit counts
    /// leave the value untouched instead of overflowing.
    pub fn new(truncated: u32, digits: u32) -> Self {
        let value = match 10_u64.checked_pow(digits) {
            Some(modulus) => (u64::from(truncated) % modulus) as u32,
            None => truncated,
        };
        Self { value, digits }
    }

    /// The numeric code.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The digit count the code was reduced to.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// The code left-padded with zeros to `digits` characters.
    pub fn to_padded_string(&self) -> String {
        let value = self.value.to_string();
        let width = self.digits as usize;
        let mut padded = "0".repeat(width.saturating_sub(value.len()));
        padded.push_str(&value);
        padded
    }

    /// Render the code according to `format`.
    pub fn format(&self, format: Format) -> String {
        match format {
            Format::Unpadded => self.to_string(),
            Format::ZeroPadded => self.to_padded_string(),
        }
    }
}

/// Prints the bare decimal value without zero-padding.
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.value
    }
}
