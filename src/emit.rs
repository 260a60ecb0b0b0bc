use crate::error::FixError;
use crate::options::Options;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::io::{self, Write};

pub type FixResult<T> = Result<T, FixError>;

pub trait Emitter {
    fn emit_str(&mut self, s: &str) -> FixResult<()>;
    fn emit_char(&mut self, c: char) -> FixResult<()> {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.emit_str(s)
    }
}

pub struct StringEmitter<'a> {
    out: &'a mut String,
}

impl<'a> StringEmitter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }
}

impl<'a> Emitter for StringEmitter<'a> {
    fn emit_str(&mut self, s: &str) -> FixResult<()> {
        self.out.push_str(s);
        Ok(())
    }
}

/// Serialize `value` into `writer`, honoring `opts.pretty` and `opts.ensure_ascii`.
pub fn write_json<W: Write>(writer: W, value: &Value, opts: &Options) -> FixResult<()> {
    let res = match (opts.pretty, opts.ensure_ascii) {
        (false, false) => serde_json::to_writer(writer, value),
        (true, false) => serde_json::to_writer_pretty(writer, value),
        (false, true) => {
            let mut ser =
                serde_json::Serializer::with_formatter(writer, AsciiEscaper::new(CompactFormatter));
            value.serialize(&mut ser)
        }
        (true, true) => {
            let mut ser = serde_json::Serializer::with_formatter(
                writer,
                AsciiEscaper::new(PrettyFormatter::new()),
            );
            value.serialize(&mut ser)
        }
    };
    res.map_err(|e| FixError::from_serde("serialize", e))
}

/// Serialize `value` into a `String` using the same rules as [`write_json`].
pub fn to_json_string(value: &Value, opts: &Options) -> FixResult<String> {
    let mut buf: Vec<u8> = Vec::with_capacity(128);
    write_json(&mut buf, value, opts)?;
    String::from_utf8(buf).map_err(|e| FixError::from_io("utf8", io::Error::new(io::ErrorKind::InvalidData, e)))
}

// Escapes every non-ASCII character as \uXXXX (surrogate pairs when needed)
// and delegates layout to the wrapped formatter.
struct AsciiEscaper<F> {
    inner: F,
}

impl<F: Formatter> AsciiEscaper<F> {
    fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for AsciiEscaper<F> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0usize;
        let fragment_bytes = fragment.as_bytes();
        for (i, ch) in fragment.char_indices() {
            if ch <= '\u{7F}' {
                continue;
            }
            if i > start {
                writer.write_all(&fragment_bytes[start..i])?;
            }
            let cp = ch as u32;
            if cp <= 0xFFFF {
                write!(writer, "\\u{:04X}", cp)?;
            } else {
                let v = cp - 0x10000;
                let high = 0xD800 + ((v >> 10) & 0x3FF);
                let low = 0xDC00 + (v & 0x3FF);
                write!(writer, "\\u{:04X}\\u{:04X}", high, low)?;
            }
            start = i + ch.len_utf8();
        }
        if start < fragment.len() {
            writer.write_all(&fragment_bytes[start..])?;
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }
    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }
    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }
    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }
    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }
    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }
    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_key(writer)
    }
    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }
    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}
