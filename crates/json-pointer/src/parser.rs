use std::borrow::Cow;

use crate::ParseJsonPointerError;

pub(crate) fn parse_json_pointer(input: &str) -> Result<Vec<String>, ParseJsonPointerError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    if !input.starts_with('/') {
        return Err(ParseJsonPointerError);
    }

    Ok(input[1..]
        .split('/')
        .map(|segment| unescape_segment(segment).into_owned())
        .collect())
}

#[inline]
fn is_escape_char(ch: u8) -> bool {
    ch == b'0' || ch == b'1'
}

/// Rewrites `~0` to `~` and `~1` to `/`. A `~` not followed by `0` or
/// `1` is kept as-is rather than rejected.
fn unescape_segment(segment: &str) -> Cow<'_, str> {
    let bytes = segment.as_bytes();

    let mut start = 0;
    loop {
        match memchr::memchr(b'~', &bytes[start..]) {
            Some(idx) if start + idx + 1 < bytes.len() && is_escape_char(bytes[start + idx + 1]) => {
                start += idx;
                break;
            }
            Some(idx) => start += idx + 1,
            None => return Cow::Borrowed(segment),
        }
    }

    let mut out = Vec::with_capacity(bytes.len());
    out.extend_from_slice(&bytes[..start]);

    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'~' if i + 1 < bytes.len() && is_escape_char(bytes[i + 1]) => {
                out.push(if bytes[i + 1] == b'0' { b'~' } else { b'/' });
                i += 2;
            }
            ch => {
                out.push(ch);
                i += 1;
            }
        }
    }

    // Escapes only touch ascii bytes; multi-byte sequences are copied
    // through intact, so the result is still valid utf-8.
    Cow::Owned(unsafe { String::from_utf8_unchecked(out) })
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! segments {
        ($($value:literal),*) => {
            &[$($value.to_string()),*]
        }
    }

    fn check(input: &str, segments: &[String]) {
        assert_eq!(parse_json_pointer(input).unwrap(), segments);
    }

    #[test]
    fn test_parser() {
        check("", segments!());
        check("/foo", segments!("foo"));
        check("/foo/0", segments!("foo", "0"));
        check("/", segments!(""));
        check("/a~1b", segments!("a/b"));
        check("/c%d", segments!("c%d"));
        check("/e^f", segments!("e^f"));
        check("/g|h", segments!("g|h"));
        check("/ ", segments!(" "));
        check("/m~0n", segments!("m~n"));
        check("/a~c/~1bc/~2d", segments!("a~c", "/bc", "~2d"));
    }

    #[test]
    fn test_missing_slash() {
        assert_eq!(parse_json_pointer("foo"), Err(ParseJsonPointerError));
    }
}
