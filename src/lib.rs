//! # escpos-encoder - ESC/POS Command Encoder
//!
//! escpos-encoder turns a chain of formatting calls into the raw byte stream
//! understood by ESC/POS thermal receipt printers. It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders
//! - **Code pages**: the printer's code page table and a pluggable
//!   character-encoding service
//! - **Barcodes**: 1D symbologies and QR codes
//! - **JSON jobs**: a declarative command list for external tools
//!
//! Sending the bytes to a printer is left to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use escpos_encoder::Encoder;
//! use escpos_encoder::protocol::barcode::barcode1d::Symbology;
//! use escpos_encoder::protocol::commands::CutMode;
//!
//! let mut encoder = Encoder::new();
//! encoder
//!     .initialize()
//!     .codepage("cp437")?
//!     .bold(Some(true))
//!     .line("TOTAL  12.00", None)?
//!     .bold(Some(false))
//!     .barcode("0123456789", Symbology::Code128, 60)?
//!     .cut(CutMode::Partial);
//!
//! let bytes = encoder.finalize();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! # Ok::<(), escpos_encoder::EncoderError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`encoder`] | Chainable encoder and its state |
//! | [`protocol`] | ESC/POS command builders |
//! | [`charset`] | Character-encoding service |
//! | [`reflow`] | Word wrapping service |
//! | [`printer`] | Printer profiles |
//! | [`json_api`] | JSON job format |
//! | [`error`] | Error types |

pub mod charset;
pub mod encoder;
pub mod error;
pub mod json_api;
pub mod printer;
pub mod protocol;
pub mod reflow;

// Re-exports for convenience
pub use encoder::Encoder;
pub use error::EncoderError;
pub use printer::PrinterProfile;
