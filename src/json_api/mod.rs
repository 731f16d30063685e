//! # JSON API
//!
//! Deserialize JSON jobs into encoder calls.
//!
//! A job is an ordered list of commands, each naming one encoder method by
//! its `type` tag. This lets external tools produce printer output without
//! linking against the library.
//!
//! ## Example
//!
//! ```
//! use escpos_encoder::json_api::JsonJob;
//! use escpos_encoder::PrinterProfile;
//!
//! let json = r#"{
//!     "commands": [
//!         {"type": "align", "value": "center"},
//!         {"type": "bold"},
//!         {"type": "line", "value": "HELLO"},
//!         {"type": "cut", "value": "partial"}
//!     ]
//! }"#;
//!
//! let job = JsonJob::from_json(json)?;
//! let bytes = job.encode(PrinterProfile::default())?;
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! # Ok::<(), escpos_encoder::json_api::JsonApiError>(())
//! ```

mod convert;
mod schema;

pub use convert::JsonApiError;
pub use schema::{JsonCommand, JsonJob, JsonWrap};
