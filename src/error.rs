//! # Error Types
//!
//! This module defines error types used throughout the escpos-encoder library.
//!
//! Every variant is raised synchronously by the call that received the bad
//! input. Nothing is retried internally.

use thiserror::Error;

/// Main error type for encoder operations
///
/// The library performs no I/O, so every variant is plain data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderError {
    /// The name is not a character encoding at all
    #[error("Unknown codepage: {0}")]
    UnsupportedEncoding(String),

    /// The encoding exists but the printer has no code page for it
    #[error("Codepage not supported by printer: {0}")]
    UnsupportedByPrinter(String),

    /// Alignment other than left, center or right
    #[error("Unknown alignment: {0}")]
    UnknownAlignment(String),

    /// Barcode symbology missing from the symbology table
    #[error("Symbology not supported by printer: {0}")]
    UnsupportedSymbology(String),

    /// QR model outside {1, 2}
    #[error("QR model must be 1 or 2, got {0}")]
    InvalidQrModel(u8),

    /// QR module size outside [1, 8]
    #[error("QR size must be between 1 and 8, got {0}")]
    InvalidQrSize(u8),

    /// QR error level outside {l, m, q, h}
    #[error("QR error level must be l, m, q or h, got {0:?}")]
    InvalidQrErrorLevel(String),
}
