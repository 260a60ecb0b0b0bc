use memchr::memchr2;

pub fn skip_bom(input: &mut &str) {
    if let Some(rest) = input.strip_prefix('\u{FEFF}') {
        *input = rest;
    }
}

/// Number of leading ASCII whitespace bytes.
#[inline]
pub fn ws_len(s: &str) -> usize {
    s.as_bytes()
        .iter()
        .take_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        .count()
}

#[inline]
pub fn skip_ws(input: &mut &str) {
    let n = ws_len(input);
    *input = &input[n..];
}

pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

pub fn take_ident(s: &str) -> (&str, &str) {
    let mut end = 0usize;
    for (i, ch) in s.char_indices() {
        if i == 0 {
            if !(ch.is_ascii_alphabetic() || ch == '_' || ch == '$') {
                break;
            }
        } else if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '$') {
            break;
        }
        end = i + ch.len_utf8();
    }
    (&s[..end], &s[end..])
}

/// Byte length of the string literal at the start of `s`, closing quote included.
/// `s` must start with `"`. Returns `None` when the literal is unterminated.
pub fn string_literal_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    debug_assert_eq!(bytes.first(), Some(&b'"'));
    let mut i = 1usize;
    while let Some(p) = memchr2(b'"', b'\\', &bytes[i..]) {
        let idx = i + p;
        if bytes[idx] == b'"' {
            return Some(idx + 1);
        }
        // backslash: skip it and the escaped byte
        i = idx + 2;
        if i > bytes.len() {
            return None;
        }
    }
    None
}

/// Byte length of the balanced container starting at `s[0]` (one of `{ [ (`),
/// skipping over string literals. Returns `None` when the input ends first.
pub fn balanced_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i += string_literal_len(&s[i..])?;
                continue;
            }
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
