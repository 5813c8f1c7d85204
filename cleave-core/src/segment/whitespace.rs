//! Word spans separated by whitespace

/// Iterator over maximal runs of non-separator codepoints
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

/// Split `line` on runs of whitespace
pub fn words(line: &str) -> Words<'_> {
    Words { rest: line }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(|c: char| !is_separator(c))?;
        let rest = &self.rest[start..];
        let end = rest.find(is_separator).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        self.rest = tail;
        Some(word)
    }
}

/// Whitespace in the sense used for splitting
///
/// Unicode whitespace, except the no-break spaces and NEL which glue text
/// together, plus the ASCII information separators U+001C..=U+001F.
pub fn is_separator(c: char) -> bool {
    match c {
        '\u{a0}' | '\u{2007}' | '\u{202f}' | '\u{85}' => false,
        '\u{1c}'..='\u{1f}' => true,
        _ => c.is_whitespace(),
    }
}
