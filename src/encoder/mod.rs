//! # Command Encoder
//!
//! [`Encoder`] turns a chain of formatting calls into one ESC/POS byte
//! stream. Each call updates the tracked state and queues its command;
//! [`Encoder::finalize`] hands back the bytes and resets the encoder for the
//! next job.
//!
//! ## Example
//!
//! ```
//! use escpos_encoder::Encoder;
//! use escpos_encoder::protocol::commands::CutMode;
//! use escpos_encoder::protocol::text::Alignment;
//!
//! let mut encoder = Encoder::new();
//! encoder
//!     .initialize()
//!     .codepage("cp437")?
//!     .align(Alignment::Center)
//!     .bold(None)
//!     .line("RECEIPT", None)?
//!     .bold(None)
//!     .cut(CutMode::Partial);
//!
//! let bytes = encoder.finalize();
//! assert_eq!(&bytes[..5], &[0x1B, 0x40, 0x1B, 0x74, 0x00]);
//! # Ok::<(), escpos_encoder::EncoderError>(())
//! ```
//!
//! ## Failure Behavior
//!
//! Barcodes and QR codes are built in full before anything is queued. A
//! rejected parameter leaves the queue exactly as it was before the call.

mod state;
mod stream;

pub use state::EncoderState;
pub use stream::CommandStream;

use tracing::debug;

use crate::charset::{self, Charset, StandardCharsets};
use crate::error::EncoderError;
use crate::printer::PrinterProfile;
use crate::protocol::barcode::barcode1d::{self, Symbology};
use crate::protocol::barcode::qr::{self, QrOptions};
use crate::protocol::codepage;
use crate::protocol::commands::{self, CutMode};
use crate::protocol::text::{self, Alignment, TextSize};
use crate::reflow::{Reflow, TextwrapReflow};

/// Chainable ESC/POS command encoder.
///
/// Generic over the character-encoding and reflow services so either can be
/// replaced; [`Encoder::new`] uses the stock ones.
#[derive(Debug, Clone)]
pub struct Encoder<C = StandardCharsets, R = TextwrapReflow> {
    charset: C,
    reflow: R,
    profile: PrinterProfile,
    state: EncoderState,
    stream: CommandStream,
}

impl Encoder {
    /// Encoder for the default (80mm) profile with the stock services.
    pub fn new() -> Self {
        Self::with_profile(PrinterProfile::default())
    }

    /// Encoder for `profile` with the stock services.
    pub fn with_profile(profile: PrinterProfile) -> Self {
        Self::with_services(StandardCharsets, TextwrapReflow, profile)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Charset, R: Reflow> Encoder<C, R> {
    /// Encoder with explicit encoding and reflow services.
    pub fn with_services(charset: C, reflow: R, profile: PrinterProfile) -> Self {
        Self {
            charset,
            reflow,
            profile,
            state: EncoderState::new(profile.default_codepage),
            stream: CommandStream::new(),
        }
    }

    pub fn profile(&self) -> &PrinterProfile {
        &self.profile
    }

    pub fn state(&self) -> &EncoderState {
        &self.state
    }

    /// Characters per line in the active font.
    pub fn columns(&self) -> usize {
        match self.state.size {
            TextSize::Normal => self.profile.columns,
            TextSize::Small => self.profile.small_columns,
        }
    }

    /// Bytes queued since the last finalize.
    pub fn pending_len(&self) -> usize {
        self.stream.byte_len()
    }

    #[inline]
    fn queue(&mut self, unit: Vec<u8>) {
        self.stream.push(unit);
    }

    // ========================================================================
    // PRINTER CONTROL
    // ========================================================================

    /// Queue the initialize-printer command (`ESC @`).
    pub fn initialize(&mut self) -> &mut Self {
        self.queue(commands::init());
        self
    }

    /// Select the code page used for subsequent text.
    ///
    /// `name` is first resolved to its canonical encoding name; only that
    /// name is looked up in the printer's table.
    ///
    /// Fails with [`EncoderError::UnsupportedEncoding`] when `name` is not a
    /// character encoding at all, and with
    /// [`EncoderError::UnsupportedByPrinter`] when it is one the printer has
    /// no code page for.
    pub fn codepage(&mut self, name: &str) -> Result<&mut Self, EncoderError> {
        let canonical = self
            .charset
            .canonical(name)
            .ok_or_else(|| EncoderError::UnsupportedEncoding(name.to_string()))?;

        let cp = codepage::lookup(canonical)
            .ok_or_else(|| EncoderError::UnsupportedByPrinter(name.to_string()))?;

        debug!(codepage = cp.name, id = cp.id, wide = cp.wide, "selecting code page");
        self.state.set_codepage(cp);
        self.queue(codepage::select(cp));
        Ok(self)
    }

    /// Cut the paper.
    pub fn cut(&mut self, mode: CutMode) -> &mut Self {
        self.queue(commands::cut(mode));
        self
    }

    /// Queue bytes as-is. State is not touched.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.queue(bytes.to_vec());
        self
    }

    // ========================================================================
    // TEXT
    // ========================================================================

    /// Print text in the active code page.
    ///
    /// With `wrap`, the text is first reflowed to that many columns.
    pub fn text(&mut self, value: &str, wrap: Option<usize>) -> Result<&mut Self, EncoderError> {
        let encoded = match wrap {
            Some(width) => {
                let reflowed = self.reflow.reflow(value, width);
                self.charset.encode(self.state.codepage.name, &reflowed)?
            }
            None => self.charset.encode(self.state.codepage.name, value)?,
        };

        if self.state.wide {
            self.queue(text::wide_envelope(&encoded));
        } else {
            self.queue(encoded);
        }
        Ok(self)
    }

    /// Print a line feed and carriage return.
    pub fn newline(&mut self) -> &mut Self {
        self.queue(commands::newline());
        self
    }

    /// [`text`](Self::text) followed by [`newline`](Self::newline).
    pub fn line(&mut self, value: &str, wrap: Option<usize>) -> Result<&mut Self, EncoderError> {
        self.text(value, wrap)?;
        Ok(self.newline())
    }

    /// Set bold, or flip it when `value` is `None`.
    pub fn bold(&mut self, value: Option<bool>) -> &mut Self {
        let enabled = state::toggle(&mut self.state.bold, value);
        self.queue(text::bold(enabled));
        self
    }

    /// Set italic, or flip it when `value` is `None`.
    pub fn italic(&mut self, value: Option<bool>) -> &mut Self {
        let enabled = state::toggle(&mut self.state.italic, value);
        self.queue(text::italic(enabled));
        self
    }

    /// Set underline, or flip it when `value` is `None`.
    pub fn underline(&mut self, value: Option<bool>) -> &mut Self {
        let enabled = state::toggle(&mut self.state.underline, value);
        self.queue(text::underline(enabled));
        self
    }

    pub fn size(&mut self, size: TextSize) -> &mut Self {
        self.state.size = size;
        self.queue(text::size(size));
        self
    }

    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.queue(text::align(alignment));
        self
    }

    // ========================================================================
    // BARCODES
    // ========================================================================

    /// Print a 1D barcode.
    ///
    /// The value is always sent as 7-bit ASCII, whatever the active code
    /// page.
    pub fn barcode(
        &mut self,
        value: &str,
        symbology: Symbology,
        height: u8,
    ) -> Result<&mut Self, EncoderError> {
        let payload = self.charset.encode(charset::ASCII, value)?;
        self.queue(barcode1d::barcode(symbology, &payload, height));
        Ok(self)
    }

    /// Print a QR code.
    ///
    /// The value is sent as ISO-8859-1. Nothing is queued if any option is
    /// out of range.
    pub fn qrcode(&mut self, value: &str, options: &QrOptions) -> Result<&mut Self, EncoderError> {
        let payload = self.charset.encode(charset::LATIN1, value)?;
        let cmd = qr::generate(&payload, options)?;
        self.queue(cmd);
        Ok(self)
    }

    // ========================================================================
    // OUTPUT
    // ========================================================================

    /// Return every queued byte and reset the encoder.
    ///
    /// A second call right after returns an empty buffer.
    pub fn finalize(&mut self) -> Vec<u8> {
        let bytes = self.stream.finalize();
        self.state = EncoderState::new(self.profile.default_codepage);
        debug!(bytes = bytes.len(), "finalized command stream");
        bytes
    }
}

// ============================================================================
// TESTS
// ============================================================================
