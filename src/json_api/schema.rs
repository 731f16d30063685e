//! JSON schema types for the job API.

use serde::Deserialize;

fn default_true() -> bool {
    true
}

fn default_barcode_height() -> u8 {
    60
}

fn default_qr_model() -> u8 {
    2
}

fn default_qr_size() -> u8 {
    6
}

fn default_qr_error_level() -> String {
    "m".to_string()
}

/// Top-level JSON job.
#[derive(Debug, Deserialize)]
pub struct JsonJob {
    /// Prefix the job with the initialize command (default: true).
    #[serde(default = "default_true")]
    pub initialize: bool,
    /// Commands, applied in order.
    pub commands: Vec<JsonCommand>,
}

/// A single encoder call.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonCommand {
    Initialize,
    Codepage(JsonCodepage),
    Text(JsonText),
    Line(JsonText),
    Newline,
    Bold(JsonToggle),
    Italic(JsonToggle),
    Underline(JsonToggle),
    Size(JsonChoice),
    Align(JsonAlign),
    Barcode(JsonBarcode),
    Qrcode(JsonQrCode),
    Cut(JsonChoice),
    Raw(JsonRaw),
}

#[derive(Debug, Deserialize)]
pub struct JsonCodepage {
    pub name: String,
}

/// Text run, with or without a trailing newline.
#[derive(Debug, Deserialize)]
pub struct JsonText {
    pub value: String,
    #[serde(default)]
    pub wrap: Option<JsonWrap>,
}

/// Wrap width: a column count, or `true` for the profile's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum JsonWrap {
    Columns(usize),
    Paper(bool),
}

/// Attribute toggle. A missing `enabled` flips the current value.
#[derive(Debug, Deserialize)]
pub struct JsonToggle {
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Two-way choice such as size ("small") or cut ("partial").
#[derive(Debug, Deserialize)]
pub struct JsonChoice {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JsonAlign {
    /// "left", "center", "right".
    pub value: String,
}

/// 1D barcode.
#[derive(Debug, Deserialize)]
pub struct JsonBarcode {
    pub value: String,
    /// "ean13", "code39", "code128", ...
    pub symbology: String,
    #[serde(default = "default_barcode_height")]
    pub height: u8,
}

/// QR code.
#[derive(Debug, Deserialize)]
pub struct JsonQrCode {
    pub value: String,
    /// 1 or 2 (default).
    #[serde(default = "default_qr_model")]
    pub model: u8,
    /// Module size 1-8 (default 6).
    #[serde(default = "default_qr_size")]
    pub size: u8,
    /// "l", "m" (default), "q", "h".
    #[serde(default = "default_qr_error_level")]
    pub error_level: String,
}

#[derive(Debug, Deserialize)]
pub struct JsonRaw {
    pub bytes: Vec<u8>,
}
