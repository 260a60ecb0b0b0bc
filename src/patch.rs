//! Legacy repair engine: ordered literal substitutions over the whole document.
//!
//! Output is byte-compatible with the scripts that first produced these files,
//! including their failure modes (a `),` inside an argument list closes the
//! string early, a `}{` inside a string splits an object).

use crate::repair::Logger;
use memchr::memmem;

/// `new Arc` -> `"new Arc`, then `),` -> `)",`, then `,]}` -> `]}`.
pub(crate) fn patch_arc_tokens(input: &str, logger: &mut Logger) -> String {
    let s = replace_logged(input, "new Arc", "\"new Arc", "opened quote before constructor token", logger);
    let s = replace_logged(&s, "),", ")\",", "closed quote after constructor token", logger);
    replace_logged(&s, ",]}", "]}", "dropped trailing comma", logger)
}

/// `}{` -> `},{`, wrapped into `{"<key>":[...]}`.
pub(crate) fn patch_adjacent_objects(input: &str, key: &str, logger: &mut Logger) -> String {
    let body = replace_logged(input, "}{", "},{", "inserted comma between adjacent objects", logger);
    let mut out = String::with_capacity(body.len() + key.len() + 8);
    out.push_str("{\"");
    out.push_str(key);
    out.push_str("\":[");
    out.push_str(&body);
    out.push_str("]}");
    out
}

// Positions in log entries are offsets into the text as it stood before this
// substitution step.
fn replace_logged(text: &str, from: &str, to: &str, message: &'static str, logger: &mut Logger) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0usize;
    for pos in memmem::find_iter(text.as_bytes(), from.as_bytes()) {
        out.push_str(&text[last..pos]);
        out.push_str(to);
        logger.log_with_context(text, pos, message);
        last = pos + from.len();
    }
    out.push_str(&text[last..]);
    out
}
