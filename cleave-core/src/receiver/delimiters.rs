//! Delimiter sets for the encoded output

use std::borrow::Cow;

use crate::error::{CoreError, Result};

/// How the character delimiter is placed relative to graphemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// After every grapheme, including the last one of a word
    After,
    /// Only between two graphemes of the same word
    Between,
}

/// The three delimiters written by a [`StreamReceiver`](super::StreamReceiver)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Written for each grapheme, see [`Placement`]
    pub character: Cow<'static, str>,
    /// Written once after a word that emitted at least one grapheme
    pub word: Cow<'static, str>,
    /// Written once per line that produced output
    pub line: Cow<'static, str>,
    /// Placement of the character delimiter
    pub placement: Placement,
}

/// Newline-based encoding: one grapheme per line, `" \n"` closing each word
pub static NEWLINE: Delimiters = Delimiters::newline();

/// ASCII separator encoding: unit separator between graphemes, record
/// separator after words, newline after lines
pub static ASCII_SEPARATORS: Delimiters = Delimiters::ascii_separators();

impl Delimiters {
    /// The default newline-based encoding
    pub const fn newline() -> Self {
        Self {
            character: Cow::Borrowed("\n"),
            word: Cow::Borrowed(" \n"),
            line: Cow::Borrowed("\n"),
            placement: Placement::After,
        }
    }

    /// Encoding using U+001F between graphemes and U+001E after words
    pub const fn ascii_separators() -> Self {
        Self {
            character: Cow::Borrowed("\u{1f}"),
            word: Cow::Borrowed("\u{1e}"),
            line: Cow::Borrowed("\n"),
            placement: Placement::Between,
        }
    }

    /// Build a custom delimiter set
    pub fn custom(
        character: impl Into<String>,
        word: impl Into<String>,
        line: impl Into<String>,
        placement: Placement,
    ) -> Self {
        Self {
            character: Cow::Owned(character.into()),
            word: Cow::Owned(word.into()),
            line: Cow::Owned(line.into()),
            placement,
        }
    }

    /// Reject delimiter sets that would make the encoding ambiguous
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if any delimiter is empty.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("character", &self.character),
            ("word", &self.word),
            ("line", &self.line),
        ] {
            if value.is_empty() {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} delimiter must not be empty"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::newline()
    }
}
