use super::lex::{balanced_len, skip_bom, skip_ws};
use super::to_err;
use crate::emit::{Emitter, FixResult};
use crate::error::FixErrorKind;
use crate::repair::Logger;

/// Wrap a run of adjacent top-level objects into `{"<key>":[...]}`.
///
/// Objects may touch (`}{`), be separated by whitespace, or by a single comma.
/// Returns the number of objects found. Inner object text is copied verbatim;
/// validating it is left to the JSON parser that consumes the output.
pub fn join_adjacent_objects<E: Emitter>(
    src: &str,
    key: &str,
    out: &mut E,
    logger: &mut Logger,
) -> FixResult<usize> {
    let mut input = src;
    skip_bom(&mut input);
    out.emit_str("{\"")?;
    out.emit_str(key)?;
    out.emit_str("\":[")?;

    let mut count = 0usize;
    let mut separated = false; // whitespace or comma seen since the last object
    let mut comma = false;
    loop {
        let before = input.len();
        skip_ws(&mut input);
        separated |= input.len() != before;
        let pos = src.len() - input.len();
        match input.as_bytes().first() {
            None => break,
            Some(b'{') => {
                let len = balanced_len(input)
                    .ok_or_else(|| to_err(src.len(), FixErrorKind::UnexpectedEnd))?;
                if count > 0 {
                    if !separated {
                        logger.log_with_context(src, pos, "inserted comma between adjacent objects");
                    }
                    out.emit_char(',')?;
                }
                out.emit_str(&input[..len])?;
                input = &input[len..];
                count += 1;
                separated = false;
                comma = false;
            }
            Some(b',') if count > 0 && !comma => {
                input = &input[1..];
                separated = true;
                comma = true;
            }
            Some(_) => {
                let c = input.chars().next().unwrap_or_default();
                return Err(to_err(pos, FixErrorKind::UnexpectedChar(c)));
            }
        }
    }
    out.emit_str("]}")?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::StringEmitter;

    fn join(src: &str) -> FixResult<(String, usize)> {
        let mut out = String::new();
        let mut logger = Logger::new(false, 0);
        let n = join_adjacent_objects(src, "features", &mut StringEmitter::new(&mut out), &mut logger)?;
        Ok((out, n))
    }

    #[test]
    fn adjacent_objects_get_commas() {
        let (out, n) = join(r#"{"id":1}{"id":2}{"id":3}"#).unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, r#"{"features":[{"id":1},{"id":2},{"id":3}]}"#);
    }

    #[test]
    fn empty_and_blank_input_yield_empty_array() {
        assert_eq!(join("").unwrap(), ("{\"features\":[]}".to_string(), 0));
        assert_eq!(join(" \n\t").unwrap(), ("{\"features\":[]}".to_string(), 0));
    }

    #[test]
    fn brace_pairs_inside_strings_are_not_boundaries() {
        let (out, n) = join(r#"{"s":"}{"}{"t":{"u":[1]}}"#).unwrap();
        assert_eq!(n, 2);
        assert_eq!(out, r#"{"features":[{"s":"}{"},{"t":{"u":[1]}}]}"#);
    }

    #[test]
    fn newline_and_comma_separators_are_accepted() {
        let (out, n) = join("{\"a\":1}\n{\"b\":2},\n{\"c\":3},").unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, r#"{"features":[{"a":1},{"b":2},{"c":3}]}"#);
    }

    #[test]
    fn stray_text_is_rejected_with_position() {
        let err = join("{\"a\":1} x").unwrap_err();
        assert_eq!(err.kind, FixErrorKind::UnexpectedChar('x'));
        assert_eq!(err.position, 8);

        let err = join("{\"a\":1},,{\"b\":2}").unwrap_err();
        assert_eq!(err.kind, FixErrorKind::UnexpectedChar(','));
        assert_eq!(err.position, 8);

        let err = join("[1,2]").unwrap_err();
        assert_eq!(err.kind, FixErrorKind::UnexpectedChar('['));
    }

    #[test]
    fn unterminated_object_is_unexpected_end() {
        let err = join("{\"a\":1}{\"b\":").unwrap_err();
        assert_eq!(err.kind, FixErrorKind::UnexpectedEnd);
        assert_eq!(err.position, 12);
    }
}
