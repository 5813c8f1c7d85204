//! Receivers turn segmentation events into output
//!
//! A segmenter drives a [`Receiver`] with four events: one `add_char` per
//! grapheme, `end_word` after each word, and `end_line` once the line is
//! exhausted. Literally blank input lines bypass segmentation and go through
//! `empty_line` instead.

mod delimiters;
mod stream;

pub use delimiters::{Delimiters, Placement, ASCII_SEPARATORS, NEWLINE};
pub use stream::StreamReceiver;

use crate::error::Result;

/// Where a receiver is within the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReceiverState {
    /// Nothing emitted since the last line ended
    #[default]
    Start,
    /// The last event emitted a character
    AfterCharacter,
    /// The last event closed a word
    AfterWord,
}

/// Consumer of segmentation events, one character at a time
pub trait Receiver {
    /// Emit a single grapheme
    fn add_char(&mut self, grapheme: &str) -> Result<()>;

    /// Mark the end of a word
    fn end_word(&mut self) -> Result<()>;

    /// Mark the end of a line
    ///
    /// Returns `true` if anything was emitted for the line.
    fn end_line(&mut self) -> Result<bool>;

    /// Emit a blank line
    ///
    /// # Panics
    ///
    /// Implementations panic if called while a line is in progress.
    fn empty_line(&mut self) -> Result<()>;
}
