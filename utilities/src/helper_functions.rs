use std::borrow::Cow;

/// Length of a NUL-terminated byte buffer (the whole buffer if it has no NUL).
pub fn nul_terminated_len(buf: &[u8]) -> usize {
    buf.iter().position(|&x| x == 0).unwrap_or(buf.len())
}

/// conversion of a C string buffer to string (rust), stopping at the first 0,
/// invalid UTF-8 sequences are replaced with U+FFFD
pub fn buf_u8_to_string(buf: &[u8]) -> String {
    match String::from_utf8_lossy(&buf[..nul_terminated_len(buf)]) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
