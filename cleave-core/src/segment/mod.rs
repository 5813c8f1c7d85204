//! Word and grapheme segmentation
//!
//! Two strategies decide where words begin and end:
//!
//! - [`Strategy::Unicode`] follows the UAX #29 word boundary rules and keeps
//!   only spans holding at least one letter or digit, so punctuation and
//!   whitespace runs disappear.
//! - [`Strategy::Whitespace`] keeps every maximal run of non-whitespace,
//!   punctuation included (`#hashtag` stays one word).
//!
//! Either way each word is then broken into extended grapheme clusters and
//! fed to a [`Receiver`] one grapheme at a time.

pub mod unicode;
pub mod whitespace;

use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{CoreError, Result};
use crate::receiver::Receiver;

/// Rule set used to find word boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Unicode word boundaries, letter-or-digit spans only
    #[default]
    Unicode,
    /// Maximal non-whitespace runs
    Whitespace,
}

impl Strategy {
    /// All strategies, default first
    pub const ALL: [Strategy; 2] = [Strategy::Unicode, Strategy::Whitespace];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Unicode => "unicode",
            Strategy::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Strategy::Unicode),
            "whitespace" => Ok(Strategy::Whitespace),
            _ => Err(CoreError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Running totals of what a segmenter has emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentStats {
    /// Words emitted
    pub words: u64,
    /// Graphemes emitted
    pub characters: u64,
}

impl SegmentStats {
    /// Counts accumulated since an earlier snapshot
    pub fn since(&self, earlier: &SegmentStats) -> SegmentStats {
        SegmentStats {
            words: self.words - earlier.words,
            characters: self.characters - earlier.characters,
        }
    }
}

/// Splits lines into words and words into graphemes
///
/// A segmenter owns its counters; two segmenters never share totals.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    strategy: Strategy,
    stats: SegmentStats,
}

impl Segmenter {
    /// Create a segmenter for the given strategy
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            stats: SegmentStats::default(),
        }
    }

    /// Strategy in use
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> SegmentStats {
        self.stats
    }

    /// Words emitted so far
    pub fn words(&self) -> u64 {
        self.stats.words
    }

    /// Graphemes emitted so far
    pub fn characters(&self) -> u64 {
        self.stats.characters
    }

    /// Split `line` and feed the pieces to `receiver`
    ///
    /// Always finishes with exactly one `end_line` and returns its result,
    /// i.e. whether the line produced any output. Blank lines should go
    /// through [`Receiver::empty_line`] instead.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the receiver.
    pub fn split<R: Receiver>(&mut self, line: &str, receiver: &mut R) -> Result<bool> {
        match self.strategy {
            Strategy::Unicode => {
                for word in unicode::words(line) {
                    self.split_word(word, receiver)?;
                }
            }
            Strategy::Whitespace => {
                for word in whitespace::words(line) {
                    self.split_word(word, receiver)?;
                }
            }
        }

        receiver.end_line()
    }

    fn split_word<R: Receiver>(&mut self, word: &str, receiver: &mut R) -> Result<()> {
        for grapheme in word.graphemes(true) {
            receiver.add_char(grapheme)?;
            self.stats.characters += 1;
        }
        receiver.end_word()?;
        self.stats.words += 1;
        Ok(())
    }
}
