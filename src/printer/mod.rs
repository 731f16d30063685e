//! # Printer Module
//!
//! This module provides printer-specific configuration.
//!
//! ## Modules
//!
//! - [`config`]: Printer profiles (paper width, columns, default code page)

pub mod config;

pub use config::PrinterProfile;
