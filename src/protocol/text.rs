//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Italic | ESC 4 n | Slanted text |
//! | Underline | ESC - n | Underlined text |
//! | Size | ESC M n | Normal or reduced font |
//! | Alignment | ESC a n | Left, center, right |
//!
//! Every attribute command carries its value explicitly (`n = 0` off,
//! `n = 1` on), so the same command shape both enables and disables.
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use std::fmt;
use std::str::FromStr;

use super::commands::{ESC, FS};
use crate::error::EncoderError;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl FromStr for Alignment {
    type Err = EncoderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(EncoderError::UnknownAlignment(other.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        })
    }
}

/// # Set Text Alignment (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::text::{align, Alignment};
///
/// let center = align(Alignment::Center);
/// assert_eq!(center, vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character size selection
///
/// The printer only distinguishes the normal font from the reduced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    #[default]
    Normal = 0,
    Small = 1,
}

impl From<&str> for TextSize {
    /// Only `"small"` selects the reduced font; any other value is normal.
    fn from(value: &str) -> Self {
        if value == "small" {
            TextSize::Small
        } else {
            TextSize::Normal
        }
    }
}

/// # Select Character Font (ESC M n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
/// | Decimal | 27 77 n |
///
/// ## Parameters
///
/// - `n = 0`: Normal font
/// - `n = 1`: Small (reduced) font
pub fn size(size: TextSize) -> Vec<u8> {
    vec![ESC, b'M', size as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Set Bold/Emphasis (ESC E n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
/// | Decimal | 27 69 n |
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::text::bold;
///
/// assert_eq!(bold(true), vec![0x1B, 0x45, 0x01]);
/// assert_eq!(bold(false), vec![0x1B, 0x45, 0x00]);
/// ```
#[inline]
pub fn bold(enabled: bool) -> Vec<u8> {
    vec![ESC, b'E', enabled as u8]
}

/// # Set Italic (ESC 4 n)
///
/// Not every printer renders italics; those that don't ignore the command.
#[inline]
pub fn italic(enabled: bool) -> Vec<u8> {
    vec![ESC, b'4', enabled as u8]
}

/// # Set Underline Mode (ESC - n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
/// | Decimal | 27 45 n |
///
/// Underline does not affect spaces or horizontal tabs.
#[inline]
pub fn underline(enabled: bool) -> Vec<u8> {
    vec![ESC, b'-', enabled as u8]
}

// ============================================================================
// DOUBLE-BYTE CHARACTER MODE
// ============================================================================

/// Enter double-byte character mode (FS &)
pub const KANJI_ON: [u8; 2] = [FS, b'&'];

/// Leave double-byte character mode (FS .)
pub const KANJI_OFF: [u8; 2] = [FS, b'.'];

/// # Wrap Text in the Double-Byte Envelope (FS & ... FS .)
///
/// Text encoded with a double-byte code page (Shift JIS, GBK, Big5, EUC-KR)
/// must be framed so the printer reads it as two-byte characters.
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::text::wide_envelope;
///
/// let framed = wide_envelope(&[0x82, 0xA0]);
/// assert_eq!(framed, vec![0x1C, 0x26, 0x82, 0xA0, 0x1C, 0x2E]);
/// ```
pub fn wide_envelope(encoded: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(encoded.len() + 4);
    cmd.extend_from_slice(&KANJI_ON);
    cmd.extend_from_slice(encoded);
    cmd.extend_from_slice(&KANJI_OFF);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
