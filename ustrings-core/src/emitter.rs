//! Output of qualifying runs

use crate::error::Result;
use std::io::Write;

/// Receives every run that qualifies for output
pub trait Emitter {
    /// Output one run; `offset` is the byte cursor at the time of emission
    fn emit(&mut self, text: &str, offset: u64) -> Result<()>;
}

/// Format a run as a single output line, terminator included
pub fn format_line(text: &str, offset: u64, emit_offsets: bool) -> String {
    if emit_offsets {
        format!("{offset}: {text}\n")
    } else {
        format!("{text}\n")
    }
}

/// Writes one line per run to a sink, optionally prefixed with the offset
///
/// No buffering or flushing happens here; the sink owner decides that.
pub struct LineEmitter<W: Write> {
    writer: W,
    emit_offsets: bool,
}

impl<W: Write> LineEmitter<W> {
    /// Create a new line emitter
    pub fn new(writer: W, emit_offsets: bool) -> Self {
        Self {
            writer,
            emit_offsets,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for LineEmitter<W> {
    fn emit(&mut self, text: &str, offset: u64) -> Result<()> {
        if self.emit_offsets {
            writeln!(self.writer, "{offset}: {text}")?;
        } else {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }
}

/// A run as it was handed to an [`Emitter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedRun {
    pub text: String,
    pub offset: u64,
}

impl EmittedRun {
    pub fn new(text: impl Into<String>, offset: u64) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// Collects emitted runs in memory
#[derive(Debug, Default)]
pub struct CollectingEmitter {
    pub runs: Vec<EmittedRun>,
}

impl Emitter for CollectingEmitter {
    fn emit(&mut self, text: &str, offset: u64) -> Result<()> {
        self.runs.push(EmittedRun::new(text, offset));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::io;

    #[test]
    fn test_format_line_plain() {
        assert_eq!(format_line("hello", 9, false), "hello\n");
    }

    #[test]
    fn test_format_line_with_offset() {
        assert_eq!(format_line("hello", 9, true), "9: hello\n");
    }

    #[test]
    fn test_line_emitter_matches_format_line() {
        let mut emitter = LineEmitter::new(Vec::new(), true);
        emitter.emit("日本語テキスト", 42).unwrap();
        emitter.emit("plain", 50).unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(
            out,
            format_line("日本語テキスト", 42, true) + &format_line("plain", 50, true)
        );
    }

    #[test]
    fn test_no_escaping() {
        let mut emitter = LineEmitter::new(Vec::new(), false);
        emitter.emit("tab\there \"quoted\"", 0).unwrap();
        assert_eq!(emitter.into_inner(), b"tab\there \"quoted\"\n");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_surfaces() {
        let mut emitter = LineEmitter::new(BrokenSink, false);
        let result = emitter.emit("hello", 6);
        assert!(matches!(result, Err(CoreError::Output(_))));
    }

    #[test]
    fn test_collecting_emitter() {
        let mut emitter = CollectingEmitter::default();
        emitter.emit("first", 6).unwrap();
        emitter.emit("second", 13).unwrap();
        assert_eq!(
            emitter.runs,
            vec![EmittedRun::new("first", 6), EmittedRun::new("second", 13)]
        );
    }
}
