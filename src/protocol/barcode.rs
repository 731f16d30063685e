//! # ESC/POS Barcode Commands
//!
//! This module implements barcode commands for ESC/POS printers.
//!
//! ## Supported Barcode Types
//!
//! | Type | Description |
//! |------|-------------|
//! | 1D | UPC, EAN, Code39, ITF, Codabar, Code93, Code128, GS1 |
//! | QR Code | 2D matrix barcode (models 1 and 2) |
//!
//! ## 1D Barcode Usage
//!
//! ```
//! use escpos_encoder::protocol::barcode::barcode1d::{self, Symbology};
//!
//! let cmd = barcode1d::barcode(Symbology::Ean13, b"5901234123457", 80);
//! assert_eq!(&cmd[..3], &[0x1D, 0x68, 80]);
//! ```
//!
//! ## QR Code Usage
//!
//! QR codes are generated in a multi-step process:
//!
//! 1. Flush the line buffer
//! 2. Configure QR settings (model, module size, error correction)
//! 3. Store the data in the symbol storage area
//! 4. Print the stored symbol
//!
//! ```
//! use escpos_encoder::protocol::barcode::qr::{self, QrOptions};
//!
//! let cmd = qr::generate(b"https://example.com", &QrOptions::default()).unwrap();
//! assert!(cmd.ends_with(&[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]));
//! ```

use super::commands::GS;

// ============================================================================
// 1D BARCODE COMMANDS (GS k)
// ============================================================================

/// 1D Barcode command builders
///
/// Two command layouts exist for `GS k`:
///
/// - **Function A** (`m` < 0x40): data terminated by NUL
/// - **Function B** (`m` > 0x40): data preceded by a length byte
pub mod barcode1d {
    use std::fmt;
    use std::str::FromStr;

    use super::GS;
    use crate::error::EncoderError;

    /// Function B symbologies start above this code.
    pub const FUNCTION_B_THRESHOLD: u8 = 0x40;

    /// First byte of an explicit Code128 code set selector (`{`).
    pub const CODE128_SET_PREFIX: u8 = 0x7B;

    /// Code set B selector (`{B`), prepended to raw Code128 data.
    pub const CODE128_SET_B: [u8; 2] = [CODE128_SET_PREFIX, b'B'];

    /// Barcode symbologies and their `GS k m` codes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    pub enum Symbology {
        /// UPC-A (11-12 digits)
        UpcA = 0x00,
        /// UPC-E (compressed UPC-A)
        UpcE = 0x01,
        /// EAN-13 / JAN-13 (12-13 digits)
        Ean13 = 0x02,
        /// EAN-8 / JAN-8 (7-8 digits)
        Ean8 = 0x03,
        /// Code39 (A-Z, 0-9, space, -.$/%+)
        Code39 = 0x04,
        /// ITF (Interleaved 2 of 5, numeric pairs)
        Itf = 0x05,
        /// Codabar / NW-7
        Codabar = 0x06,
        /// Code93 (full ASCII)
        Code93 = 0x48,
        /// Code128 (full ASCII, explicit code sets)
        Code128 = 0x49,
        /// GS1-128
        Gs1_128 = 0x50,
        /// GS1 DataBar Omnidirectional
        Gs1DatabarOmni = 0x51,
        /// GS1 DataBar Truncated
        Gs1DatabarTruncated = 0x52,
        /// GS1 DataBar Limited
        Gs1DatabarLimited = 0x53,
        /// GS1 DataBar Expanded
        Gs1DatabarExpanded = 0x54,
        /// Code128 with automatic code set selection by the printer
        Code128Auto = 0x55,
    }

    /// Symbology names accepted by [`Symbology::from_str`].
    ///
    /// `coda39` is a misspelling kept so older job files keep working.
    pub const SYMBOLOGIES: [(&str, Symbology); 16] = [
        ("upca", Symbology::UpcA),
        ("upce", Symbology::UpcE),
        ("ean13", Symbology::Ean13),
        ("ean8", Symbology::Ean8),
        ("code39", Symbology::Code39),
        ("coda39", Symbology::Code39),
        ("itf", Symbology::Itf),
        ("codabar", Symbology::Codabar),
        ("code93", Symbology::Code93),
        ("code128", Symbology::Code128),
        ("gs1-128", Symbology::Gs1_128),
        ("gs1-databar-omni", Symbology::Gs1DatabarOmni),
        ("gs1-databar-truncated", Symbology::Gs1DatabarTruncated),
        ("gs1-databar-limited", Symbology::Gs1DatabarLimited),
        ("gs1-databar-expanded", Symbology::Gs1DatabarExpanded),
        ("code128-auto", Symbology::Code128Auto),
    ];

    impl Symbology {
        /// The `m` byte of `GS k m`.
        #[inline]
        pub fn code(self) -> u8 {
            self as u8
        }

        /// Canonical name (the first table entry for this symbology).
        pub fn name(self) -> &'static str {
            SYMBOLOGIES
                .iter()
                .find(|(_, s)| *s == self)
                .map(|(name, _)| *name)
                .unwrap_or("unknown")
        }
    }

    impl FromStr for Symbology {
        type Err = EncoderError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            SYMBOLOGIES
                .iter()
                .find(|(name, _)| *name == s)
                .map(|(_, sym)| *sym)
                .ok_or_else(|| EncoderError::UnsupportedSymbology(s.to_string()))
        }
    }

    impl fmt::Display for Symbology {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    /// # Set Barcode Height (GS h n)
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | Hex     | 1D 68 n |
    #[inline]
    pub fn set_height(height: u8) -> Vec<u8> {
        vec![GS, b'h', height]
    }

    /// # Set Barcode Module Width (GS w n)
    ///
    /// Code39 prints with the narrow module (2), everything else with 3.
    #[inline]
    pub fn set_module_width(symbology: Symbology) -> Vec<u8> {
        let n = if symbology == Symbology::Code39 { 0x02 } else { 0x03 };
        vec![GS, b'w', n]
    }

    /// # Print Barcode Data (GS k m ...)
    ///
    /// Picks the framing for the symbology and payload:
    ///
    /// | Case | Bytes |
    /// |------|-------|
    /// | Code128 without `{` prefix | `1D 6B 49 (len+2) 7B 42 data` |
    /// | Function B (`m` > 0x40) | `1D 6B m len data` |
    /// | Function A | `1D 6B m data 00` |
    ///
    /// Length bytes are truncated to 8 bits.
    pub fn data(symbology: Symbology, payload: &[u8]) -> Vec<u8> {
        let m = symbology.code();
        let mut cmd = Vec::with_capacity(payload.len() + 6);
        cmd.extend_from_slice(&[GS, b'k', m]);

        if symbology == Symbology::Code128 && payload.first() != Some(&CODE128_SET_PREFIX) {
            // Raw data: assume code set B, which covers printable ASCII
            cmd.push((payload.len() + CODE128_SET_B.len()) as u8);
            cmd.extend_from_slice(&CODE128_SET_B);
            cmd.extend_from_slice(payload);
        } else if m > FUNCTION_B_THRESHOLD {
            cmd.push(payload.len() as u8);
            cmd.extend_from_slice(payload);
        } else {
            cmd.extend_from_slice(payload);
            cmd.push(0x00);
        }
        cmd
    }

    /// # Print 1D Barcode
    ///
    /// Height, module width and data commands in the order the printer
    /// expects them.
    ///
    /// ## Example
    ///
    /// ```
    /// use escpos_encoder::protocol::barcode::barcode1d::{barcode, Symbology};
    ///
    /// let cmd = barcode(Symbology::Code39, b"HELLO", 60);
    /// assert_eq!(
    ///     cmd,
    ///     vec![0x1D, 0x68, 60, 0x1D, 0x77, 0x02, 0x1D, 0x6B, 0x04, b'H', b'E', b'L', b'L', b'O', 0x00]
    /// );
    /// ```
    pub fn barcode(symbology: Symbology, payload: &[u8], height: u8) -> Vec<u8> {
        let mut cmd = set_height(height);
        cmd.extend(set_module_width(symbology));
        cmd.extend(data(symbology, payload));
        cmd
    }
}

// ============================================================================
// QR CODE COMMANDS (GS ( k)
// ============================================================================

/// QR Code command builders
///
/// All QR commands share the `GS ( k pL pH cn fn [params]` shape with
/// `cn = 0x31` (QR symbol).
pub mod qr {
    use std::fmt;
    use std::str::FromStr;

    use super::GS;
    use crate::error::EncoderError;
    use crate::protocol::commands::LF;

    /// QR Code error correction level
    ///
    /// | Level | Recovery |
    /// |-------|----------|
    /// | L | ~7% |
    /// | M | ~15% |
    /// | Q | ~25% |
    /// | H | ~30% |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum QrErrorLevel {
        L = 0x30,
        #[default]
        M = 0x31,
        Q = 0x32,
        H = 0x33,
    }

    impl FromStr for QrErrorLevel {
        type Err = EncoderError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "l" => Ok(QrErrorLevel::L),
                "m" => Ok(QrErrorLevel::M),
                "q" => Ok(QrErrorLevel::Q),
                "h" => Ok(QrErrorLevel::H),
                other => Err(EncoderError::InvalidQrErrorLevel(other.to_string())),
            }
        }
    }

    impl fmt::Display for QrErrorLevel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                QrErrorLevel::L => "l",
                QrErrorLevel::M => "m",
                QrErrorLevel::Q => "q",
                QrErrorLevel::H => "h",
            })
        }
    }

    /// Settings for a QR symbol.
    ///
    /// `model` and `size` are plain numbers so that out-of-range values
    /// coming from job files are reported, not silently clamped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct QrOptions {
        /// QR model, 1 or 2
        pub model: u8,
        /// Module size in dots, 1 to 8
        pub size: u8,
        /// Error correction level
        pub error_level: QrErrorLevel,
    }

    impl Default for QrOptions {
        fn default() -> Self {
            Self {
                model: 2,
                size: 6,
                error_level: QrErrorLevel::M,
            }
        }
    }

    /// Line feed sent ahead of the QR commands so pending text is printed
    /// and not mixed into the symbol parameters.
    #[inline]
    pub fn flush() -> Vec<u8> {
        vec![LF]
    }

    /// # Select QR Model (GS ( k 04 00 31 41 n 00)
    ///
    /// - `n = 0x31`: Model 1
    /// - `n = 0x32`: Model 2
    pub fn set_model(model: u8) -> Result<Vec<u8>, EncoderError> {
        let n = match model {
            1 => 0x31,
            2 => 0x32,
            other => return Err(EncoderError::InvalidQrModel(other)),
        };
        Ok(vec![GS, b'(', b'k', 0x04, 0x00, 0x31, 0x41, n, 0x00])
    }

    /// # Set QR Module Size (GS ( k 03 00 31 43 n)
    ///
    /// `n` is the module size in dots (1-8).
    pub fn set_size(size: u8) -> Result<Vec<u8>, EncoderError> {
        if !(1..=8).contains(&size) {
            return Err(EncoderError::InvalidQrSize(size));
        }
        Ok(vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x43, size])
    }

    /// # Set QR Error Correction Level (GS ( k 03 00 31 45 n)
    #[inline]
    pub fn set_error_level(level: QrErrorLevel) -> Vec<u8> {
        vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x45, level as u8]
    }

    /// # Store QR Data (GS ( k pL pH 31 50 30 data)
    ///
    /// `pL pH` count the payload plus the three `31 50 30` bytes. They are
    /// computed as `len % 255` and `len / 255`, which matches the 16-bit
    /// little-endian split only for `len < 255`.
    pub fn set_data(payload: &[u8]) -> Vec<u8> {
        let len = payload.len() + 3;
        let pl = (len % 255) as u8;
        let ph = (len / 255) as u8;

        let mut cmd = Vec::with_capacity(payload.len() + 8);
        cmd.extend_from_slice(&[GS, b'(', b'k', pl, ph, 0x31, 0x50, 0x30]);
        cmd.extend_from_slice(payload);
        cmd
    }

    /// # Print Stored QR Symbol (GS ( k 03 00 31 51 30)
    #[inline]
    pub fn print() -> Vec<u8> {
        vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x51, 0x30]
    }

    /// Generate a complete QR code command sequence.
    ///
    /// Parameters are validated step by step; on failure nothing is
    /// returned, so callers never see a half-built symbol.
    pub fn generate(payload: &[u8], options: &QrOptions) -> Result<Vec<u8>, EncoderError> {
        let mut cmd = flush();
        cmd.extend(set_model(options.model)?);
        cmd.extend(set_size(options.size)?);
        cmd.extend(set_error_level(options.error_level));
        cmd.extend(set_data(payload));
        cmd.extend(print());
        Ok(cmd)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncoderError;

    mod barcode1d_tests {
        use super::barcode1d::*;
        use super::EncoderError;

        #[test]
        fn test_symbology_codes() {
            assert_eq!(Symbology::UpcA.code(), 0x00);
            assert_eq!(Symbology::Codabar.code(), 0x06);
            assert_eq!(Symbology::Code93.code(), 0x48);
            assert_eq!(Symbology::Code128.code(), 0x49);
            assert_eq!(Symbology::Code128Auto.code(), 0x55);
        }

        #[test]
        fn test_symbology_from_str() {
            assert_eq!("ean13".parse::<Symbology>().unwrap(), Symbology::Ean13);
            assert_eq!("gs1-128".parse::<Symbology>().unwrap(), Symbology::Gs1_128);
            // Legacy misspelling
            assert_eq!("coda39".parse::<Symbology>().unwrap(), Symbology::Code39);
        }

        #[test]
        fn test_symbology_unknown() {
            let err = "pdf417".parse::<Symbology>().unwrap_err();
            assert!(matches!(err, EncoderError::UnsupportedSymbology(ref s) if s == "pdf417"));
        }

        #[test]
        fn test_symbology_name() {
            assert_eq!(Symbology::Code39.name(), "code39");
            assert_eq!(Symbology::Gs1DatabarLimited.to_string(), "gs1-databar-limited");
        }

        #[test]
        fn test_module_width() {
            assert_eq!(set_module_width(Symbology::Code39), vec![0x1D, 0x77, 0x02]);
            assert_eq!(set_module_width(Symbology::Ean13), vec![0x1D, 0x77, 0x03]);
            assert_eq!(set_module_width(Symbology::Code128), vec![0x1D, 0x77, 0x03]);
        }

        #[test]
        fn test_code128_adds_code_set_b() {
            let cmd = data(Symbology::Code128, b"123456789012");
            assert_eq!(&cmd[..3], &[0x1D, 0x6B, 0x49]);
            assert_eq!(cmd[3], 14); // 12 + 2
            assert_eq!(&cmd[4..6], &[0x7B, 0x42]);
            assert_eq!(&cmd[6..], b"123456789012");
        }

        #[test]
        fn test_code128_with_explicit_code_set() {
            let cmd = data(Symbology::Code128, b"{C1234");
            assert_eq!(cmd, vec![0x1D, 0x6B, 0x49, 6, b'{', b'C', b'1', b'2', b'3', b'4']);
        }

        #[test]
        fn test_code128_empty_payload_gets_code_set_b() {
            let cmd = data(Symbology::Code128, b"");
            assert_eq!(cmd, vec![0x1D, 0x6B, 0x49, 2, 0x7B, 0x42]);
        }

        #[test]
        fn test_function_b_framing() {
            let cmd = data(Symbology::Code93, b"ABC");
            assert_eq!(cmd, vec![0x1D, 0x6B, 0x48, 3, b'A', b'B', b'C']);

            // code128-auto never gets the code set marker
            let cmd = data(Symbology::Code128Auto, b"ABC");
            assert_eq!(cmd, vec![0x1D, 0x6B, 0x55, 3, b'A', b'B', b'C']);
        }

        #[test]
        fn test_function_a_framing() {
            let cmd = data(Symbology::Ean8, b"1234567");
            assert_eq!(cmd.len(), 3 + 7 + 1);
            assert_eq!(&cmd[..3], &[0x1D, 0x6B, 0x03]);
            assert_eq!(*cmd.last().unwrap(), 0x00);
        }

        #[test]
        fn test_barcode_order() {
            let cmd = barcode(Symbology::Itf, b"1234", 50);
            assert_eq!(
                cmd,
                vec![
                    0x1D, 0x68, 50, // height
                    0x1D, 0x77, 0x03, // module width
                    0x1D, 0x6B, 0x05, b'1', b'2', b'3', b'4', 0x00,
                ]
            );
        }
    }

    mod qr_tests {
        use super::qr::*;
        use super::EncoderError;

        #[test]
        fn test_set_model() {
            assert_eq!(
                set_model(1).unwrap(),
                vec![0x1D, 0x28, 0x6B, 0x04, 0x00, 0x31, 0x41, 0x31, 0x00]
            );
            assert_eq!(
                set_model(2).unwrap(),
                vec![0x1D, 0x28, 0x6B, 0x04, 0x00, 0x31, 0x41, 0x32, 0x00]
            );
            assert!(matches!(set_model(3), Err(EncoderError::InvalidQrModel(3))));
            assert!(matches!(set_model(0), Err(EncoderError::InvalidQrModel(0))));
        }

        #[test]
        fn test_set_size() {
            assert_eq!(
                set_size(6).unwrap(),
                vec![0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x43, 0x06]
            );
            assert!(set_size(1).is_ok());
            assert!(set_size(8).is_ok());
            assert!(matches!(set_size(0), Err(EncoderError::InvalidQrSize(0))));
            assert!(matches!(set_size(9), Err(EncoderError::InvalidQrSize(9))));
        }

        #[test]
        fn test_set_error_level() {
            assert_eq!(
                set_error_level(QrErrorLevel::L),
                vec![0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x45, 0x30]
            );
            assert_eq!(
                set_error_level(QrErrorLevel::H),
                vec![0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x45, 0x33]
            );
        }

        #[test]
        fn test_error_level_from_str() {
            assert_eq!("q".parse::<QrErrorLevel>().unwrap(), QrErrorLevel::Q);
            let err = "x".parse::<QrErrorLevel>().unwrap_err();
            assert!(matches!(err, EncoderError::InvalidQrErrorLevel(ref s) if s == "x"));
            assert!("M".parse::<QrErrorLevel>().is_err());
        }

        #[test]
        fn test_set_data_small_payload() {
            let cmd = set_data(b"hello");
            assert_eq!(&cmd[..8], &[0x1D, 0x28, 0x6B, 8, 0, 0x31, 0x50, 0x30]);
            assert_eq!(&cmd[8..], b"hello");
        }

        #[test]
        fn test_set_data_length_split() {
            // 252 + 3 = 255 -> 255 % 255 = 0, 255 / 255 = 1
            let cmd = set_data(&[b'a'; 252]);
            assert_eq!(cmd[3], 0);
            assert_eq!(cmd[4], 1);

            // 251 + 3 = 254 stays in the low byte
            let cmd = set_data(&[b'a'; 251]);
            assert_eq!(cmd[3], 254);
            assert_eq!(cmd[4], 0);
        }

        #[test]
        fn test_print() {
            assert_eq!(print(), vec![0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]);
        }

        #[test]
        fn test_generate_defaults() {
            let cmd = generate(b"hi", &QrOptions::default()).unwrap();
            let expected: Vec<u8> = [
                &[0x0A][..],
                &[0x1D, 0x28, 0x6B, 0x04, 0x00, 0x31, 0x41, 0x32, 0x00],
                &[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x43, 0x06],
                &[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x45, 0x31],
                &[0x1D, 0x28, 0x6B, 5, 0, 0x31, 0x50, 0x30, b'h', b'i'],
                &[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30],
            ]
            .concat();
            assert_eq!(cmd, expected);
        }

        #[test]
        fn test_generate_rejects_bad_size() {
            let options = QrOptions {
                size: 12,
                ..QrOptions::default()
            };
            assert!(matches!(
                generate(b"hi", &options),
                Err(EncoderError::InvalidQrSize(12))
            ));
        }
    }
}
