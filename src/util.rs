//! Byte-to-text helpers for HTML input.

use std::borrow::Cow;

/// How far into a document to look for a `charset` declaration.
const CHARSET_SNIFF_LEN: usize = 1024;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (usually from [`extract_charset`])
/// 3. Falls back to Windows-1252
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Decode an HTML document, using its own `charset` declaration as the hint.
pub fn decode_html(bytes: &[u8]) -> Cow<'_, str> {
    decode_text(bytes, extract_charset(bytes))
}

/// Extract the declared character set from the head of an HTML document.
///
/// Recognizes both `<meta charset="...">` and the
/// `content="text/html; charset=..."` form. Only the first kilobyte is
/// inspected.
pub fn extract_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(CHARSET_SNIFF_LEN)];

    let pos = prefix
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let mut rest = &prefix[pos + 8..];

    if let Some(&quote) = rest.first()
        && (quote == b'"' || quote == b'\'')
    {
        rest = &rest[1..];
    }

    let end = rest
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    std::str::from_utf8(&rest[..end]).ok()
}
