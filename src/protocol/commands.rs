//! # ESC/POS Printer Commands
//!
//! Printer control commands that carry no text state: initialization,
//! line feeds and the paper cutter.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `CR`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC t n`, `GS V n`, `GS ( k pL pH ...`
//!
//! ## Byte Order
//!
//! The only multi-byte length fields in this crate live in the QR data
//! block, which has its own split (see [`crate::protocol::barcode::qr`]).

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for barcodes, QR codes and the cutter.
pub const GS: u8 = 0x1D;

/// FS (File Separator) - Double-byte character mode prefix
pub const FS: u8 = 0x1C;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// CR (Carriage Return)
pub const CR: u8 = 0x0D;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Newline (LF CR)
///
/// Prints the line buffer and returns the carriage. The pair is emitted in
/// this order regardless of code page or double-byte mode.
#[inline]
pub fn newline() -> Vec<u8> {
    vec![LF, CR]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// Cutter mode for [`cut`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutMode {
    /// Cut through the paper
    #[default]
    Full = 0,
    /// Leave a small hinge so the receipt stays attached
    Partial = 1,
}

impl From<&str> for CutMode {
    /// Only `"partial"` selects a partial cut; anything else is a full cut.
    fn from(value: &str) -> Self {
        if value == "partial" {
            CutMode::Partial
        } else {
            CutMode::Full
        }
    }
}

/// # Cut Paper (GS V n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS V n |
/// | Hex     | 1D 56 n |
/// | Decimal | 29 86 n |
///
/// ## Parameters
///
/// - `n = 0`: Full cut
/// - `n = 1`: Partial cut
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::commands::{cut, CutMode};
///
/// assert_eq!(cut(CutMode::Full), vec![0x1D, 0x56, 0x00]);
/// assert_eq!(cut(CutMode::Partial), vec![0x1D, 0x56, 0x01]);
/// ```
#[inline]
pub fn cut(mode: CutMode) -> Vec<u8> {
    vec![GS, b'V', mode as u8]
}

// ============================================================================
// TESTS
// ============================================================================
