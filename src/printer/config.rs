//! # Printer Profiles
//!
//! This module defines the per-printer settings the encoder needs.
//!
//! ## Built-in Profiles
//!
//! | Key | Paper | Columns (normal) | Columns (small) | Default code page |
//! |-----|-------|------------------|-----------------|-------------------|
//! | `80mm` | 80mm | 48 | 64 | windows1250 |
//! | `58mm` | 58mm | 32 | 42 | windows1250 |
//!
//! ## Usage
//!
//! ```
//! use escpos_encoder::printer::PrinterProfile;
//!
//! let profile = PrinterProfile::GENERIC_80MM;
//! println!("{}: {} columns", profile.name, profile.columns);
//! ```

use crate::protocol::codepage::{self, CodePage};

/// # Printer Profile
///
/// Hardware characteristics that change what the encoder emits.
///
/// - **default_codepage**: code page assumed after power-on and after every
///   finalize. No select command is sent for it.
/// - **columns** / **small_columns**: characters per line in the normal and
///   small font. Text wrapped "to the paper width" uses the one matching the
///   active font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterProfile {
    /// Short key used on the command line
    pub key: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// Characters per line in the normal font
    pub columns: usize,

    /// Characters per line in the small font
    pub small_columns: usize,

    /// Code page assumed at reset
    pub default_codepage: CodePage,
}

impl PrinterProfile {
    /// Generic 80mm receipt printer (72mm printable, 576 dots).
    pub const GENERIC_80MM: Self = Self {
        key: "80mm",
        name: "Generic 80mm",
        columns: 48,
        small_columns: 64,
        default_codepage: codepage::WINDOWS1250,
    };

    /// Generic 58mm receipt printer (48mm printable, 384 dots).
    pub const GENERIC_58MM: Self = Self {
        key: "58mm",
        name: "Generic 58mm",
        columns: 32,
        small_columns: 42,
        default_codepage: codepage::WINDOWS1250,
    };

    /// List all built-in profiles.
    pub fn built_in() -> [Self; 2] {
        [Self::GENERIC_80MM, Self::GENERIC_58MM]
    }

    /// Parse a profile key (`"80mm"`, `"58mm"`) or display name.
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::built_in()
            .into_iter()
            .find(|p| p.key.eq_ignore_ascii_case(s) || p.name == s)
            .ok_or_else(|| format!("Unknown profile '{}'. Use '80mm' or '58mm'", s))
    }
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self::GENERIC_80MM
    }
}

// ============================================================================
// TESTS
// ============================================================================
