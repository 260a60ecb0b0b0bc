use super::lex::{balanced_len, is_ident_byte, string_literal_len, take_ident, ws_len};
use super::strings::emit_json_string_from_lit;
use super::to_err;
use crate::emit::{Emitter, FixResult};
use crate::error::FixErrorKind;
use crate::repair::Logger;

/// Rewrite `src` into JSON text: bare `new Name(...)` tokens become string
/// literals and dangling commas before `]`/`}` are dropped. Everything else,
/// string literals included, is copied through untouched.
pub fn quote_constructor_tokens<E: Emitter>(
    src: &str,
    out: &mut E,
    logger: &mut Logger,
) -> FixResult<()> {
    let bytes = src.as_bytes();
    let mut i = 0usize;
    let mut run = 0usize; // start of the pending verbatim run
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let len = string_literal_len(&src[i..])
                    .ok_or_else(|| to_err(src.len(), FixErrorKind::UnexpectedEnd))?;
                i += len;
            }
            b',' => {
                let after = &src[i + 1..];
                let ws = ws_len(after);
                if matches!(after.as_bytes().get(ws), Some(b']') | Some(b'}')) {
                    out.emit_str(&src[run..i])?;
                    logger.log_with_context(src, i, "dropped trailing comma");
                    i += 1;
                    run = i;
                } else {
                    i += 1;
                }
            }
            b if b.is_ascii_alphabetic() && (i == 0 || !is_ident_byte(bytes[i - 1])) => {
                match constructor_token_len(&src[i..], i)? {
                    Some(len) => {
                        out.emit_str(&src[run..i])?;
                        logger.log_with_context(src, i, "quoted bare constructor token");
                        emit_json_string_from_lit(out, &src[i..i + len])?;
                        i += len;
                        run = i;
                    }
                    None => {
                        let (ident, _) = take_ident(&src[i..]);
                        i += ident.len();
                    }
                }
            }
            _ => i += 1,
        }
    }
    out.emit_str(&src[run..])
}

/// Length of a bare constructor token at the start of `s`: `new`, whitespace,
/// an identifier, optional whitespace, a balanced argument list and any
/// trailing unquoted characters up to the next `,` `]` `}` or line break.
/// Trailing whitespace is not part of the token.
///
/// `Ok(None)` means `s` does not start with a constructor; an argument list
/// that never closes is an error located at `offset`.
fn constructor_token_len(s: &str, offset: usize) -> FixResult<Option<usize>> {
    let (kw, rest) = take_ident(s);
    if kw != "new" {
        return Ok(None);
    }
    let gap = ws_len(rest);
    if gap == 0 {
        return Ok(None);
    }
    let (name, rest) = take_ident(&rest[gap..]);
    if name.is_empty() {
        return Ok(None);
    }
    let rest = &rest[ws_len(rest)..];
    if !rest.starts_with('(') {
        return Ok(None);
    }
    let args_at = s.len() - rest.len();
    let args_len = balanced_len(rest)
        .ok_or_else(|| to_err(offset + args_at, FixErrorKind::UnexpectedEnd))?;
    let mut end = args_at + args_len;
    let tail = &s.as_bytes()[end..];
    end += tail
        .iter()
        .take_while(|b| !matches!(b, b',' | b']' | b'}' | b'\n' | b'\r'))
        .count();
    let token = s[..end].trim_end_matches([' ', '\t']);
    Ok(Some(token.len()))
}
