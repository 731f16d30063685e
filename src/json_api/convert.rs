//! Application of JSON jobs to an [`Encoder`].

use thiserror::Error;

use crate::charset::Charset;
use crate::encoder::Encoder;
use crate::error::EncoderError;
use crate::printer::PrinterProfile;
use crate::protocol::barcode::barcode1d::Symbology;
use crate::protocol::barcode::qr::{QrErrorLevel, QrOptions};
use crate::protocol::commands::CutMode;
use crate::protocol::text::{Alignment, TextSize};
use crate::reflow::Reflow;

use super::schema::*;

/// Errors from reading or applying a JSON job.
#[derive(Debug, Error)]
pub enum JsonApiError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid job: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command was rejected by the encoder.
    #[error("command {index} ({command}): {source}")]
    Command {
        index: usize,
        command: &'static str,
        #[source]
        source: EncoderError,
    },
}

impl JsonJob {
    /// Parse a job document.
    pub fn from_json(json: &str) -> Result<Self, JsonApiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Queue every command of the job on `encoder`.
    ///
    /// Stops at the first rejected command. Commands before it stay queued,
    /// so on error the encoder output should be discarded.
    pub fn apply<C: Charset, R: Reflow>(
        &self,
        encoder: &mut Encoder<C, R>,
    ) -> Result<(), JsonApiError> {
        if self.initialize {
            encoder.initialize();
        }
        for (index, command) in self.commands.iter().enumerate() {
            command
                .apply(encoder)
                .map_err(|source| JsonApiError::Command {
                    index,
                    command: command.name(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Encode the job on a fresh encoder for `profile`.
    pub fn encode(&self, profile: PrinterProfile) -> Result<Vec<u8>, JsonApiError> {
        let mut encoder = Encoder::with_profile(profile);
        self.apply(&mut encoder)?;
        Ok(encoder.finalize())
    }
}

impl JsonCommand {
    /// The `type` tag of this command.
    pub fn name(&self) -> &'static str {
        match self {
            JsonCommand::Initialize => "initialize",
            JsonCommand::Codepage(_) => "codepage",
            JsonCommand::Text(_) => "text",
            JsonCommand::Line(_) => "line",
            JsonCommand::Newline => "newline",
            JsonCommand::Bold(_) => "bold",
            JsonCommand::Italic(_) => "italic",
            JsonCommand::Underline(_) => "underline",
            JsonCommand::Size(_) => "size",
            JsonCommand::Align(_) => "align",
            JsonCommand::Barcode(_) => "barcode",
            JsonCommand::Qrcode(_) => "qrcode",
            JsonCommand::Cut(_) => "cut",
            JsonCommand::Raw(_) => "raw",
        }
    }

    fn apply<C: Charset, R: Reflow>(&self, encoder: &mut Encoder<C, R>) -> Result<(), EncoderError> {
        match self {
            JsonCommand::Initialize => {
                encoder.initialize();
            }
            JsonCommand::Codepage(cp) => {
                encoder.codepage(&cp.name)?;
            }
            JsonCommand::Text(text) => {
                let wrap = text.wrap_width(encoder.columns());
                encoder.text(&text.value, wrap)?;
            }
            JsonCommand::Line(text) => {
                let wrap = text.wrap_width(encoder.columns());
                encoder.line(&text.value, wrap)?;
            }
            JsonCommand::Newline => {
                encoder.newline();
            }
            JsonCommand::Bold(t) => {
                encoder.bold(t.enabled);
            }
            JsonCommand::Italic(t) => {
                encoder.italic(t.enabled);
            }
            JsonCommand::Underline(t) => {
                encoder.underline(t.enabled);
            }
            JsonCommand::Size(choice) => {
                encoder.size(TextSize::from(choice.value.as_deref().unwrap_or_default()));
            }
            JsonCommand::Align(align) => {
                encoder.align(align.value.parse::<Alignment>()?);
            }
            JsonCommand::Barcode(barcode) => {
                let symbology: Symbology = barcode.symbology.parse()?;
                encoder.barcode(&barcode.value, symbology, barcode.height)?;
            }
            JsonCommand::Qrcode(qr) => {
                let options = QrOptions {
                    model: qr.model,
                    size: qr.size,
                    error_level: qr.error_level.parse::<QrErrorLevel>()?,
                };
                encoder.qrcode(&qr.value, &options)?;
            }
            JsonCommand::Cut(choice) => {
                encoder.cut(CutMode::from(choice.value.as_deref().unwrap_or_default()));
            }
            JsonCommand::Raw(raw) => {
                encoder.raw(&raw.bytes);
            }
        }
        Ok(())
    }
}

impl JsonText {
    /// `columns` is the line width of the font currently selected.
    fn wrap_width(&self, columns: usize) -> Option<usize> {
        match self.wrap {
            Some(JsonWrap::Columns(n)) => Some(n),
            Some(JsonWrap::Paper(true)) => Some(columns),
            Some(JsonWrap::Paper(false)) | None => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
