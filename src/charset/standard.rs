//! Stock [`Charset`] backed by `encoding_rs` and `oem_cp`.

use encoding_rs::{Encoding, EncoderResult};
use oem_cp::code_table::ENCODING_TABLE_CP_MAP;
use tracing::warn;

use super::{Charset, normalize};
use crate::error::EncoderError;

/// Replacement byte for characters the target encoding cannot represent.
const REPLACEMENT: u8 = b'?';

#[derive(Debug, Clone, Copy)]
enum Backend {
    /// 7-bit ASCII, everything above U+007F replaced
    Ascii,
    /// ISO-8859-1, everything above U+00FF replaced
    Latin1,
    /// WHATWG encoding label understood by `encoding_rs`
    Whatwg(&'static str),
    /// DOS OEM code page number understood by `oem_cp`
    Oem(u16),
}

struct Entry {
    name: &'static str,
    aliases: &'static [&'static str],
    backend: Backend,
}

const fn entry(name: &'static str, aliases: &'static [&'static str], backend: Backend) -> Entry {
    Entry {
        name,
        aliases,
        backend,
    }
}

use Backend::{Ascii, Latin1, Oem, Whatwg};

#[rustfmt::skip]
const REGISTRY: &[Entry] = &[
    entry("ascii", &["usascii", "ansix341968"], Ascii),
    entry("iso88591", &["latin1", "l1", "cp28591"], Latin1),
    entry("utf8", &["unicode11utf8"], Whatwg("utf-8")),

    // DOS / OEM
    entry("cp437", &["ibm437"], Oem(437)),
    entry("cp737", &["ibm737"], Oem(737)),
    entry("cp775", &["ibm775"], Oem(775)),
    entry("cp850", &["ibm850"], Oem(850)),
    entry("cp852", &["ibm852"], Oem(852)),
    entry("cp855", &["ibm855"], Oem(855)),
    entry("cp857", &["ibm857"], Oem(857)),
    entry("cp858", &["ibm858"], Oem(858)),
    entry("cp860", &["ibm860"], Oem(860)),
    entry("cp861", &["ibm861"], Oem(861)),
    entry("cp862", &["ibm862"], Oem(862)),
    entry("cp863", &["ibm863"], Oem(863)),
    entry("cp864", &["ibm864"], Oem(864)),
    entry("cp865", &["ibm865"], Oem(865)),
    entry("cp866", &["ibm866"], Oem(866)),
    entry("cp869", &["ibm869"], Oem(869)),

    // Windows
    entry("windows874", &["win874", "cp874"], Whatwg("windows-874")),
    entry("windows1250", &["win1250", "cp1250"], Whatwg("windows-1250")),
    entry("windows1251", &["win1251", "cp1251"], Whatwg("windows-1251")),
    entry("windows1252", &["win1252", "cp1252"], Whatwg("windows-1252")),
    entry("windows1253", &["win1253", "cp1253"], Whatwg("windows-1253")),
    entry("windows1254", &["win1254", "cp1254"], Whatwg("windows-1254")),
    entry("windows1255", &["win1255", "cp1255"], Whatwg("windows-1255")),
    entry("windows1256", &["win1256", "cp1256"], Whatwg("windows-1256")),
    entry("windows1257", &["win1257", "cp1257"], Whatwg("windows-1257")),
    entry("windows1258", &["win1258", "cp1258"], Whatwg("windows-1258")),

    // ISO-8859
    entry("iso88592", &["latin2", "l2", "cp28592"], Whatwg("iso-8859-2")),
    entry("iso88593", &["latin3", "l3", "cp28593"], Whatwg("iso-8859-3")),
    entry("iso88594", &["latin4", "l4", "cp28594"], Whatwg("iso-8859-4")),
    entry("iso88595", &["cyrillic", "cp28595"], Whatwg("iso-8859-5")),
    entry("iso88596", &["arabic", "cp28596"], Whatwg("iso-8859-6")),
    entry("iso88597", &["greek", "cp28597"], Whatwg("iso-8859-7")),
    entry("iso88598", &["hebrew", "cp28598"], Whatwg("iso-8859-8")),
    entry("iso885910", &["latin6", "l6", "cp28600"], Whatwg("iso-8859-10")),
    entry("iso885913", &["latin7", "l7", "cp28603"], Whatwg("iso-8859-13")),
    entry("iso885914", &["latin8", "l8", "cp28604"], Whatwg("iso-8859-14")),
    entry("iso885915", &["latin9", "l9", "cp28605"], Whatwg("iso-8859-15")),
    entry("iso885916", &["latin10", "l10", "cp28606"], Whatwg("iso-8859-16")),

    // Other single-byte
    entry("koi8r", &["cp20866"], Whatwg("koi8-r")),
    entry("koi8u", &["cp21866"], Whatwg("koi8-u")),
    entry("macintosh", &["mac", "macroman"], Whatwg("macintosh")),

    // Double-byte
    entry("shiftjis", &["sjis", "mskanji", "csshiftjis", "windows31j", "cp932"], Whatwg("shift_jis")),
    entry("eucjp", &[], Whatwg("euc-jp")),
    entry("cp936", &["gb2312", "euccn", "windows936", "ms936"], Whatwg("gbk")),
    entry("gbk", &["xgbk", "isoir58"], Whatwg("gbk")),
    entry("gb18030", &[], Whatwg("gb18030")),
    entry("cp949", &["euckr", "windows949", "ksc56011987"], Whatwg("euc-kr")),
    entry("cp950", &["windows950", "ms950"], Whatwg("big5")),
    entry("big5hkscs", &["big5", "cnbig5", "csbig5", "xxbig5"], Whatwg("big5")),
];

/// Encodings known to the stock backends.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCharsets;

impl StandardCharsets {
    pub fn new() -> Self {
        Self
    }

    /// Canonical names of every registered encoding.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|e| e.name)
    }

    fn find(name: &str) -> Option<&'static Entry> {
        let key = normalize(name);
        REGISTRY
            .iter()
            .find(|e| e.name == key || e.aliases.contains(&key.as_str()))
    }
}

impl Charset for StandardCharsets {
    fn canonical(&self, name: &str) -> Option<&'static str> {
        Self::find(name).map(|e| e.name)
    }

    fn encode(&self, name: &str, text: &str) -> Result<Vec<u8>, EncoderError> {
        let entry =
            Self::find(name).ok_or_else(|| EncoderError::UnsupportedEncoding(name.to_string()))?;

        match entry.backend {
            Ascii => Ok(encode_below(entry.name, text, 0x80)),
            Latin1 => Ok(encode_below(entry.name, text, 0x100)),
            Whatwg(label) => {
                let encoding = Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| EncoderError::UnsupportedEncoding(name.to_string()))?;
                Ok(encode_whatwg(entry.name, encoding, text))
            }
            Oem(page) => {
                let table = ENCODING_TABLE_CP_MAP
                    .get(&page)
                    .ok_or_else(|| EncoderError::UnsupportedEncoding(name.to_string()))?;
                let low = low_half(page);
                let mut out = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    if let Some(&(byte, _)) = low.iter().find(|(_, c)| *c == ch) {
                        out.push(byte);
                    } else if let Some(byte) = table.get(&ch) {
                        out.push(*byte);
                    } else if ch.is_ascii() && !low.iter().any(|(b, _)| *b == ch as u8) {
                        out.push(ch as u8);
                    } else {
                        unmappable(entry.name, ch);
                        out.push(REPLACEMENT);
                    }
                }
                Ok(out)
            }
        }
    }
}

/// Bytes below 0x80 that an OEM page does not map to ASCII.
///
/// `oem_cp` tables only cover 0x80-0xFF; these entries complete the low half.
const OEM_LOW_HALF: &[(u16, &[(u8, char)])] = &[
    // ARABIC PERCENT SIGN replaces '%'
    (864, &[(0x25, '\u{066A}')]),
];

fn low_half(page: u16) -> &'static [(u8, char)] {
    OEM_LOW_HALF
        .iter()
        .find(|(p, _)| *p == page)
        .map(|(_, entries)| *entries)
        .unwrap_or(&[])
}

/// Identity mapping for code points below `limit`.
fn encode_below(encoding: &str, text: &str, limit: u32) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            if (ch as u32) < limit {
                ch as u32 as u8
            } else {
                unmappable(encoding, ch);
                REPLACEMENT
            }
        })
        .collect()
}

fn encode_whatwg(name: &str, encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(text.len() + 16);
    let mut rest = text;

    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut out, true);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => out.reserve(rest.len() + 16),
            EncoderResult::Unmappable(ch) => {
                unmappable(name, ch);
                out.push(REPLACEMENT);
            }
        }
    }
    out
}

fn unmappable(encoding: &str, ch: char) {
    warn!(
        encoding,
        character = %ch,
        codepoint = ch as u32,
        "unmappable character replaced with '?'"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::codepage::CODEPAGES;

    #[test]
    fn test_every_printer_codepage_is_registered() {
        let charsets = StandardCharsets::new();
        for cp in CODEPAGES.iter() {
            assert!(charsets.exists(cp.name), "{}", cp.name);
        }
    }

    #[test]
    fn test_cp1252_is_windows1252() {
        let charsets = StandardCharsets::new();
        assert_eq!(charsets.canonical("cp1252"), Some("windows1252"));
        assert_eq!(charsets.canonical("CP-1252"), Some("windows1252"));
    }

    #[test]
    fn test_aliases_resolve_to_canonical() {
        let charsets = StandardCharsets::new();
        assert_eq!(charsets.canonical("Shift_JIS"), Some("shiftjis"));
        assert_eq!(charsets.canonical("sjis"), Some("shiftjis"));
        assert_eq!(charsets.canonical("cp1250"), Some("windows1250"));
        assert_eq!(charsets.canonical("IBM437"), Some("cp437"));
        assert_eq!(charsets.canonical("big5"), Some("big5hkscs"));
        assert_eq!(charsets.canonical("gbk"), Some("gbk"));
        assert_eq!(charsets.canonical("gb2312"), Some("cp936"));
        assert_eq!(charsets.canonical("klingon"), None);
        assert!(!charsets.exists(""));
    }

    #[test]
    fn test_ascii_replaces_high_characters() {
        let charsets = StandardCharsets::new();
        assert_eq!(charsets.encode("ascii", "A-é").unwrap(), b"A-?");
    }

    #[test]
    fn test_latin1() {
        let charsets = StandardCharsets::new();
        assert_eq!(charsets.encode("iso88591", "café").unwrap(), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(charsets.encode("latin1", "€").unwrap(), b"?");
    }

    #[test]
    fn test_oem_codepage() {
        let charsets = StandardCharsets::new();
        assert_eq!(charsets.encode("cp437", "é°").unwrap(), vec![0x82, 0xF8]);
        assert_eq!(charsets.encode("cp437", "Hello").unwrap(), b"Hello");
    }

    #[test]
    fn test_oem_low_half_follows_codepage() {
        let charsets = StandardCharsets::new();
        // cp864 puts the Arabic percent sign at 0x25, so ASCII '%' has no slot
        assert_eq!(charsets.encode("cp864", "5%").unwrap(), vec![b'5', b'?']);
        assert_eq!(charsets.encode("cp864", "5\u{066A}").unwrap(), vec![b'5', 0x25]);
        // Other DOS pages keep '%' as is
        assert_eq!(charsets.encode("cp437", "5%").unwrap(), b"5%");
    }

    #[test]
    fn test_oem_unmappable() {
        let charsets = StandardCharsets::new();
        assert_eq!(charsets.encode("cp437", "a€b").unwrap(), b"a?b");
    }

    #[test]
    fn test_windows_codepages() {
        let charsets = StandardCharsets::new();
        // Central European: č is 0xE8 in windows-1250
        assert_eq!(charsets.encode("windows1250", "č").unwrap(), vec![0xE8]);
        // Cyrillic
        assert_eq!(charsets.encode("windows1251", "Ж").unwrap(), vec![0xC6]);
        assert_eq!(charsets.encode("windows1252", "€").unwrap(), vec![0x80]);
    }

    #[test]
    fn test_whatwg_unmappable_is_replaced_not_escaped() {
        let charsets = StandardCharsets::new();
        // encoding_rs would emit "&#8364;" with replacement enabled
        assert_eq!(charsets.encode("windows1251", "a€").unwrap(), vec![b'a', 0x88]);
        assert_eq!(charsets.encode("windows1250", "日").unwrap(), b"?");
    }

    #[test]
    fn test_shift_jis() {
        let charsets = StandardCharsets::new();
        assert_eq!(charsets.encode("shiftjis", "あ").unwrap(), vec![0x82, 0xA0]);
    }

    #[test]
    fn test_unknown_encoding() {
        let charsets = StandardCharsets::new();
        let err = charsets.encode("klingon", "x").unwrap_err();
        assert!(matches!(err, EncoderError::UnsupportedEncoding(ref s) if s == "klingon"));
    }
}
