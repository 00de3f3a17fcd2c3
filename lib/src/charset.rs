//! Brightness-to-character lookup
//!
//! A charset is ordered from the lightest rendering weight to the darkest.
//! Brightness picks a position proportionally along that order.

use crate::error::AsciiError;

/// Standard charset, 82 characters, lightest first
pub const STANDARD_CHARSET: &str =
    "^_`abcdefghijklmnopqrstuvwxyz~*+-.:<=>{}0123456789?@ABCDEFGHIJKLMNOPQRSTUVWXYZ#$%&";

/// Average of the red, green and blue channels, in [0.0, 255.0]
pub fn brightness(rgb: [u8; 3]) -> f64 {
    (rgb[0] as f64 + rgb[1] as f64 + rgb[2] as f64) / 3.0
}

/// Ordered, non-empty lookup table of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Box<[char]>,
}

impl Charset {
    /// Builds a charset from the characters of `chars`, in order
    ///
    /// # Errors
    /// Returns `AsciiError::EmptyCharset` if `chars` is empty.
    pub fn new(chars: &str) -> Result<Self, AsciiError> {
        let chars: Box<[char]> = chars.chars().collect();
        if chars.is_empty() {
            return Err(AsciiError::EmptyCharset);
        }
        Ok(Self { chars })
    }

    /// The standard 82-character charset
    pub fn standard() -> Self {
        Self {
            chars: STANDARD_CHARSET.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Position in the charset for a brightness in [0.0, 255.0]
    ///
    /// `floor(brightness / 255 * (len - 1))`, clamped into `[0, len - 1]`.
    pub fn index_for(&self, brightness: f64) -> usize {
        let last = self.chars.len() - 1;
        let n = brightness / 255.0;
        let index = (n * last as f64).floor();

        // Clamp to 0..=last, NaN lands on 0
        if index > 0.0 {
            (index as usize).min(last)
        } else {
            0
        }
    }

    /// Character for a pixel's RGB channels
    pub fn select(&self, rgb: [u8; 3]) -> char {
        self.chars[self.index_for(brightness(rgb))]
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::standard()
    }
}
