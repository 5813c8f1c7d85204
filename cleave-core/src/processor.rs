//! Line-by-line orchestration
//!
//! [`LineProcessor`] owns a [`Segmenter`] and hands every line a fresh
//! [`StreamReceiver`], so no receiver state leaks from one line to the next.

use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::{
    error::Result,
    receiver::{Delimiters, Receiver, StreamReceiver},
    segment::{Segmenter, Strategy},
};

/// Totals for a processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunStatistics {
    /// Lines seen
    pub lines: u64,
    /// Lines that produced output
    pub lines_changed: u64,
    /// Words emitted
    pub words: u64,
    /// Graphemes emitted
    pub characters: u64,
}

/// Segments lines and writes their encoding
#[derive(Debug, Clone, Default)]
pub struct LineProcessor {
    segmenter: Segmenter,
    delimiters: Delimiters,
    lines: u64,
    lines_changed: u64,
}

impl LineProcessor {
    /// Create a processor using the newline encoding
    pub fn new(strategy: Strategy) -> Self {
        Self::with_delimiters(strategy, Delimiters::default())
    }

    /// Create a processor with a specific delimiter set
    pub fn with_delimiters(strategy: Strategy, delimiters: Delimiters) -> Self {
        Self {
            segmenter: Segmenter::new(strategy),
            delimiters,
            lines: 0,
            lines_changed: 0,
        }
    }

    /// Strategy in use
    pub fn strategy(&self) -> Strategy {
        self.segmenter.strategy()
    }

    /// The underlying segmenter and its counters
    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Totals so far
    pub fn stats(&self) -> RunStatistics {
        let segments = self.segmenter.stats();
        RunStatistics {
            lines: self.lines,
            lines_changed: self.lines_changed,
            words: segments.words,
            characters: segments.characters,
        }
    }

    /// Encode one line, without its terminator, into `out`
    ///
    /// A literally empty line is written as a blank line and counts as
    /// output. Any other line counts only if it held at least one word.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn process_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        self.lines += 1;

        let mut receiver = StreamReceiver::with_delimiters(&mut *out, &self.delimiters);
        let produced = if line.is_empty() {
            receiver.empty_line()?;
            true
        } else {
            self.segmenter.split(line, &mut receiver)?
        };

        if produced {
            self.lines_changed += 1;
        } else {
            trace!("line {} produced no output", self.lines);
        }
        Ok(produced)
    }

    /// Encode every line of `reader` into `out`
    ///
    /// Returns the number of lines that produced output.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn process_reader<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> Result<u64> {
        self.process_reader_with(reader, out, |_| {})
    }

    /// Like [`process_reader`](Self::process_reader), calling `on_line` with
    /// the running totals after each line
    ///
    /// Lines end at `\r\n`, `\n`, `\r`, NEL (U+0085), LINE SEPARATOR
    /// (U+2028) or PARAGRAPH SEPARATOR (U+2029). A final line needs no
    /// terminator. Bytes that are not valid UTF-8 are replaced with U+FFFD
    /// rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn process_reader_with<R, W, F>(
        &mut self,
        mut reader: R,
        out: &mut W,
        mut on_line: F,
    ) -> Result<u64>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&RunStatistics),
    {
        let mut buf = Vec::new();
        let mut changed = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let terminated = strip_terminator(&mut buf);

            let chunk = String::from_utf8_lossy(&buf);
            let mut lines = chunk.split(is_line_terminator).peekable();
            while let Some(line) = lines.next() {
                // a terminator right before end of input does not open a line
                if !terminated && line.is_empty() && lines.peek().is_none() {
                    break;
                }
                if self.process_line(line, out)? {
                    changed += 1;
                }
                on_line(&self.stats());
            }
        }

        debug!(
            "processed {} lines, {} with output",
            self.lines, self.lines_changed
        );
        Ok(changed)
    }
}

/// Line terminators other than `\n`, which ends each chunk read
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Drop a trailing `\n` or `\r\n`, reporting whether one was there
fn strip_terminator(buf: &mut Vec<u8>) -> bool {
    if buf.last() != Some(&b'\n') {
        return false;
    }
    buf.pop();
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    true
}
