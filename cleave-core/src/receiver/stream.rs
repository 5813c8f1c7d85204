//! Receiver writing the delimited encoding to an `io::Write`

use std::io::Write;

use log::trace;

use super::delimiters::{Delimiters, Placement, NEWLINE};
use super::{Receiver, ReceiverState};
use crate::error::Result;

/// Writes graphemes, words and lines to a byte sink
///
/// Encoding a line with the default delimiters: each grapheme is followed by
/// `"\n"`, each non-empty word by `" \n"`, and each line with content by a
/// final `"\n"`. A line that emitted nothing writes nothing.
#[derive(Debug)]
pub struct StreamReceiver<'d, W: Write> {
    out: W,
    delimiters: &'d Delimiters,
    state: ReceiverState,
}

impl<W: Write> StreamReceiver<'static, W> {
    /// Create a receiver using the newline encoding
    pub fn new(out: W) -> Self {
        Self::with_delimiters(out, &NEWLINE)
    }
}

impl<'d, W: Write> StreamReceiver<'d, W> {
    /// Create a receiver using a specific delimiter set
    pub fn with_delimiters(out: W, delimiters: &'d Delimiters) -> Self {
        Self {
            out,
            delimiters,
            state: ReceiverState::Start,
        }
    }

    /// Current position within the line
    pub fn state(&self) -> ReceiverState {
        self.state
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}

impl<W: Write> Receiver for StreamReceiver<'_, W> {
    fn add_char(&mut self, grapheme: &str) -> Result<()> {
        let delimiters = self.delimiters;
        match delimiters.placement {
            Placement::After => {
                self.write(grapheme)?;
                self.write(&delimiters.character)?;
            }
            Placement::Between => {
                if self.state == ReceiverState::AfterCharacter {
                    self.write(&delimiters.character)?;
                }
                self.write(grapheme)?;
            }
        }
        self.state = ReceiverState::AfterCharacter;
        Ok(())
    }

    fn end_word(&mut self) -> Result<()> {
        // a word with no graphemes leaves no trace
        if self.state == ReceiverState::AfterCharacter {
            let delimiters = self.delimiters;
            self.write(&delimiters.word)?;
        }
        self.state = ReceiverState::AfterWord;
        Ok(())
    }

    fn end_line(&mut self) -> Result<bool> {
        if self.state == ReceiverState::Start {
            trace!("line produced no output");
            return Ok(false);
        }

        let delimiters = self.delimiters;
        self.write(&delimiters.line)?;
        self.state = ReceiverState::Start;
        Ok(true)
    }

    fn empty_line(&mut self) -> Result<()> {
        assert_eq!(
            self.state,
            ReceiverState::Start,
            "empty_line called in the middle of a line"
        );
        let delimiters = self.delimiters;
        self.write(&delimiters.line)
    }
}
