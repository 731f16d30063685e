//! # Code Page Table
//!
//! Maps canonical encoding names to the printer's code page selector
//! (`ESC t n`). Double-byte code pages are flagged `wide`: text printed with
//! them has to be framed by [`crate::protocol::text::wide_envelope`].
//!
//! Names are matched against the canonical names of [`crate::charset`], so
//! the same string both selects the printer table and drives the byte
//! transform. A row whose name is only an alias there is never selected by
//! name.

use super::commands::ESC;

/// One printer-supported code page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePage {
    /// Canonical encoding name
    pub name: &'static str,
    /// Selector byte for `ESC t n`
    pub id: u8,
    /// Double-byte character set
    pub wide: bool,
}

impl CodePage {
    const fn new(name: &'static str, id: u8, wide: bool) -> Self {
        Self { name, id, wide }
    }
}

/// All code pages the printer accepts.
pub const CODEPAGES: [CodePage; 32] = [
    CodePage::new("cp437", 0x00, false),
    CodePage::new("cp737", 0x40, false),
    CodePage::new("cp850", 0x02, false),
    CodePage::new("cp775", 0x5f, false),
    CodePage::new("cp852", 0x12, false),
    CodePage::new("cp855", 0x3c, false),
    CodePage::new("cp857", 0x3d, false),
    CodePage::new("cp858", 0x13, false),
    CodePage::new("cp860", 0x03, false),
    CodePage::new("cp861", 0x38, false),
    CodePage::new("cp862", 0x3e, false),
    CodePage::new("cp863", 0x04, false),
    CodePage::new("cp864", 0x1c, false),
    CodePage::new("cp865", 0x05, false),
    CodePage::new("cp866", 0x11, false),
    CodePage::new("cp869", 0x42, false),
    CodePage::new("cp936", 0xff, true),
    CodePage::new("cp949", 0xfd, true),
    CodePage::new("cp950", 0xfe, true),
    // "cp1252" resolves to windows1252 before this table is consulted
    CodePage::new("cp1252", 0x10, false),
    CodePage::new("iso88596", 0x16, false),
    CodePage::new("shiftjis", 0xfc, true),
    CodePage::new("windows874", 0x1e, false),
    CodePage::new("windows1250", 0x48, false),
    CodePage::new("windows1251", 0x49, false),
    CodePage::new("windows1252", 0x47, false),
    CodePage::new("windows1253", 0x5a, false),
    CodePage::new("windows1254", 0x5b, false),
    CodePage::new("windows1255", 0x20, false),
    CodePage::new("windows1256", 0x5c, false),
    CodePage::new("windows1257", 0x19, false),
    CodePage::new("windows1258", 0x5e, false),
];

/// Code Page 437 (US English)
pub const CP437: CodePage = CODEPAGES[0];

/// Windows-1250 (Central European), the power-on default of the stock profiles
pub const WINDOWS1250: CodePage = CODEPAGES[23];

/// Look up a code page by canonical name.
pub fn lookup(name: &str) -> Option<CodePage> {
    CODEPAGES.iter().find(|cp| cp.name == name).copied()
}

/// # Select Character Code Table (ESC t n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
/// | Decimal | 27 116 n |
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::codepage::{select, CP437};
///
/// assert_eq!(select(CP437), vec![0x1B, 0x74, 0x00]);
/// ```
pub fn select(cp: CodePage) -> Vec<u8> {
    vec![ESC, b't', cp.id]
}
