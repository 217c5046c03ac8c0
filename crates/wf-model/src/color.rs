//! Color type and prefixed hex parsing.
//!
//! The settings page reports each hand color as an 8-character string
//! like `"0x1A2B3C"`: a two-character prefix followed by six hex digits.

use thiserror::Error;

/// One parsed color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Error parsing a prefixed color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string is shorter than the 8 characters the format requires
    #[error("color string too short: expected at least 8 characters, got {0}")]
    TooShort(usize),
    /// A channel region did not contain two hex digits
    #[error("invalid hex digits {digits:?} in {channel} channel")]
    InvalidHex {
        channel: &'static str,
        digits: String,
    },
}

impl Rgb {
    /// Parse an 8-character hex-prefixed color string.
    ///
    /// The first two characters are a prefix (`0x`, `##`, ...) and are
    /// ignored unconditionally. The red, green and blue channels are
    /// parsed base-16 from byte offsets 2-4, 4-6 and 6-8; anything past
    /// offset 8 is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use wf_model::Rgb;
    ///
    /// let color = Rgb::parse_prefixed("0x1A2B3C").unwrap();
    /// assert_eq!(color, Rgb { r: 26, g: 43, b: 60 });
    /// ```
    pub fn parse_prefixed(s: &str) -> Result<Self, ColorParseError> {
        if s.len() < 8 {
            return Err(ColorParseError::TooShort(s.len()));
        }

        Ok(Self {
            r: parse_channel(s, 2, "red")?,
            g: parse_channel(s, 4, "green")?,
            b: parse_channel(s, 6, "blue")?,
        })
    }
}

/// Parse one two-digit channel starting at `offset`
fn parse_channel(s: &str, offset: usize, channel: &'static str) -> Result<u8, ColorParseError> {
    // `get` returns None when the range splits a multi-byte character;
    // that is just another way of not being two hex digits.
    let digits = s.get(offset..offset + 2).ok_or(ColorParseError::InvalidHex {
        channel,
        digits: String::new(),
    })?;

    u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidHex {
        channel,
        digits: digits.to_string(),
    })
}
