//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! used by Epson-compatible thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, newline, cut)
//! - [`text`]: Text styling (alignment, size, bold, italic, underline)
//! - [`codepage`]: Code page table and the select-code-page command
//! - [`barcode`]: 1D barcodes and QR codes
//!
//! ## Usage Example
//!
//! ```
//! use escpos_encoder::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//!
//! data.extend(commands::init());
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT");
//! data.extend(commands::newline());
//! data.extend(text::bold(false));
//! data.extend(commands::cut(commands::CutMode::Full));
//!
//! assert_eq!(&data[..2], &[0x1B, 0x40]);
//! ```
//!
//! Every builder returns an owned `Vec<u8>`, so the encoder can queue the
//! result as one unit.

pub mod barcode;
pub mod codepage;
pub mod commands;
pub mod text;
