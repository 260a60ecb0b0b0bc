use crate::emit::{Emitter, FixResult};

/// Emit `s` as a JSON string literal, escaping quotes, backslashes and control characters.
pub fn emit_json_string_from_lit<E: Emitter>(out: &mut E, s: &str) -> FixResult<()> {
    // Fast path: nothing to escape, write as one slice.
    if !s.bytes().any(|b| b == b'"' || b == b'\\' || b <= 0x1F) {
        out.emit_char('"')?;
        out.emit_str(s)?;
        return out.emit_char('"');
    }

    out.emit_char('"')?;
    let mut start = 0usize; // start of current safe run
    for (i, ch) in s.char_indices() {
        let code = ch as u32;
        if !(ch == '"' || ch == '\\' || code <= 0x1F) {
            continue;
        }
        if i > start {
            out.emit_str(&s[start..i])?;
        }
        match ch {
            '"' => out.emit_str("\\\"")?,
            '\\' => out.emit_str("\\\\")?,
            '\u{08}' => out.emit_str("\\b")?,
            '\u{0C}' => out.emit_str("\\f")?,
            '\n' => out.emit_str("\\n")?,
            '\r' => out.emit_str("\\r")?,
            '\t' => out.emit_str("\\t")?,
            _ => out.emit_str(&format!("\\u{:04X}", code))?,
        }
        start = i + ch.len_utf8();
    }
    if start < s.len() {
        out.emit_str(&s[start..])?;
    }
    out.emit_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::StringEmitter;

    fn quoted(s: &str) -> String {
        let mut out = String::new();
        emit_json_string_from_lit(&mut StringEmitter::new(&mut out), s).unwrap();
        out
    }

    #[test]
    fn plain_text_is_wrapped() {
        assert_eq!(quoted("new Arc(1,2,3,0,6.28)"), "\"new Arc(1,2,3,0,6.28)\"");
    }

    #[test]
    fn specials_are_escaped_and_round_trip() {
        let raw = "a\"b\\c\nd\u{1}é";
        let out = quoted(raw);
        assert_eq!(out, "\"a\\\"b\\\\c\\nd\\u0001é\"");
        let back: String = serde_json::from_str(&out).unwrap();
        assert_eq!(back, raw);
    }
}
