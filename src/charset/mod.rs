//! # Character Encoding Service
//!
//! The encoder never turns strings into bytes itself. It asks a [`Charset`]
//! whether a name is a real encoding and for the bytes of a string in a
//! named encoding.
//!
//! [`StandardCharsets`] is the stock implementation. Tests and embedders with
//! their own tables can plug in anything implementing the trait.
//!
//! ## Name Normalization
//!
//! Encoding names are matched after [`normalize`]: lower case, with every
//! character that is not an ASCII letter or digit removed.
//!
//! ```
//! use escpos_encoder::charset::normalize;
//!
//! assert_eq!(normalize("Windows-1252"), "windows1252");
//! assert_eq!(normalize("Shift_JIS"), "shiftjis");
//! ```

mod standard;

pub use standard::StandardCharsets;

use crate::error::EncoderError;

/// Plain 7-bit encoding, used for barcode payloads.
pub const ASCII: &str = "ascii";

/// Single-byte Latin-1 encoding, used for QR payloads.
pub const LATIN1: &str = "iso88591";

/// A character-encoding backend.
pub trait Charset {
    /// Canonical name for `name`, or `None` if the encoding is unknown.
    fn canonical(&self, name: &str) -> Option<&'static str>;

    /// Whether `name` is a recognized encoding.
    fn exists(&self, name: &str) -> bool {
        self.canonical(name).is_some()
    }

    /// Encode `text` with the named encoding.
    ///
    /// Characters the encoding cannot represent are replaced, not rejected.
    fn encode(&self, name: &str, text: &str) -> Result<Vec<u8>, EncoderError>;
}

/// Normalize an encoding name for lookup.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
