//! Best-effort text decoding for disassembly listings.
//!
//! Listings arrive from assorted toolchains and editors, so their encoding is
//! unknown a priori. Decoding tries a fixed, ordered list of candidates and
//! returns the first success together with the encoding that accepted the
//! bytes. No file I/O happens here; this is a pure bytes-to-text function.

/// A candidate text encoding, in the order it is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8 with a byte-order mark, which is stripped.
    Utf8Sig,
    /// Plain UTF-8.
    Utf8,
    /// UTF-16, BOM-aware, little-endian when no BOM is present.
    Utf16,
    /// ISO-8859-1 single-byte fallback. Accepts any byte sequence, so
    /// decoding only fails on inputs rejected by every earlier candidate
    /// in a list that omits this one.
    Latin1,
}

impl Encoding {
    /// Display label, matching the conventional codec names.
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8Sig => "utf-8-sig",
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16 => "utf-16",
            Encoding::Latin1 => "latin1",
        }
    }
}

/// The fixed candidate order.
pub const CANDIDATES: [Encoding; 4] = [
    Encoding::Utf8Sig,
    Encoding::Utf8,
    Encoding::Utf16,
    Encoding::Latin1,
];

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decode listing bytes with the candidate fallback chain.
///
/// Returns the decoded text and the encoding that accepted it, or `None`
/// if every candidate rejected the input.
pub fn decode_listing(bytes: &[u8]) -> Option<(String, Encoding)> {
    for encoding in CANDIDATES {
        if let Some(text) = try_decode(bytes, encoding) {
            return Some((text, encoding));
        }
    }
    None
}

/// Attempt a single candidate encoding.
fn try_decode(bytes: &[u8], encoding: Encoding) -> Option<String> {
    match encoding {
        Encoding::Utf8Sig => {
            let rest = bytes.strip_prefix(&UTF8_BOM)?;
            std::str::from_utf8(rest).ok().map(str::to_owned)
        }
        Encoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
        Encoding::Utf16 => decode_utf16(bytes),
        Encoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// BOM-aware UTF-16 decoding. Without a BOM the byte order is assumed
/// little-endian, matching the toolchains the listings come from.
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (body, big_endian) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };
    if body.len() % 2 != 0 {
        return None;
    }
    let units = body.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8() {
        let (text, enc) = decode_listing(b"80000000: 30401073 csrw mie,zero").unwrap();
        assert_eq!(enc, Encoding::Utf8);
        assert!(text.starts_with("80000000:"));
    }

    #[test]
    fn utf8_with_bom_strips_marker() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"addi x1,x1,0");
        let (text, enc) = decode_listing(&bytes).unwrap();
        assert_eq!(enc, Encoding::Utf8Sig);
        assert_eq!(text, "addi x1,x1,0");
    }

    #[test]
    fn utf16_le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "80000000: 00008093 addi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (text, enc) = decode_listing(&bytes).unwrap();
        assert_eq!(enc, Encoding::Utf16);
        assert_eq!(text, "80000000: 00008093 addi");
    }

    #[test]
    fn utf16_be_with_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "nop".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        let (text, enc) = decode_listing(&bytes).unwrap();
        assert_eq!(enc, Encoding::Utf16);
        assert_eq!(text, "nop");
    }

    #[test]
    fn invalid_utf8_falls_back_to_latin1() {
        // 0xA9 is not valid UTF-8 on its own but is '©' in latin1.
        let (text, enc) = decode_listing(&[0x61, 0xA9, 0x62]).unwrap();
        assert_eq!(enc, Encoding::Latin1);
        assert_eq!(text, "a\u{a9}b");
    }

    #[test]
    fn empty_input_decodes_as_utf8() {
        let (text, enc) = decode_listing(b"").unwrap();
        assert_eq!(enc, Encoding::Utf8);
        assert!(text.is_empty());
    }

    #[test]
    fn candidate_order_is_documented() {
        assert_eq!(CANDIDATES[0].label(), "utf-8-sig");
        assert_eq!(CANDIDATES[3].label(), "latin1");
    }
}
