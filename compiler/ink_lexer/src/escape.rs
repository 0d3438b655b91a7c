//! String literal decoding.

/// Decode the body of a string literal (without quotes) into bytes.
///
/// A backslash escapes the byte after it: `\n`, `\t` and `\r` decode to
/// their control characters, anything else (including `\\` and `\'`) decodes
/// to the escaped byte itself.
pub(crate) fn unescape(body: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len());
    let mut bytes = body.bytes();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b'n') => out.push(b'\n'),
            Some(b't') => out.push(b'\t'),
            Some(b'r') => out.push(b'\r'),
            Some(other) => out.push(other),
            None => out.push(b'\\'),
        }
    }
    out
}
