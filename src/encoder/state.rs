//! Encoder state: active code page and text attributes.

use crate::protocol::codepage::CodePage;
use crate::protocol::text::TextSize;

/// State tracked between commands.
///
/// Attributes are remembered so that calling a toggle without a value can
/// flip the last value sent. Nothing here is ever compared to suppress a
/// command; every toggle is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderState {
    /// Code page text is currently encoded with
    pub codepage: CodePage,
    /// Text must be framed in the double-byte envelope
    pub wide: bool,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font selected by the last size command
    pub size: TextSize,
}

impl EncoderState {
    /// Fresh state for a printer whose power-on code page is `codepage`.
    pub fn new(codepage: CodePage) -> Self {
        Self {
            codepage,
            wide: codepage.wide,
            bold: false,
            italic: false,
            underline: false,
            size: TextSize::Normal,
        }
    }

    /// Switch the active code page.
    pub fn set_codepage(&mut self, codepage: CodePage) {
        self.codepage = codepage;
        self.wide = codepage.wide;
    }
}

/// Value for an attribute toggle: the requested value, or the negation of
/// the current one when none was given.
#[inline]
pub fn toggle(current: &mut bool, requested: Option<bool>) -> bool {
    *current = requested.unwrap_or(!*current);
    *current
}
